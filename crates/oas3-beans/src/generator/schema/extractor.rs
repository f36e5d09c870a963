//! Walks `components/schemas` of an OpenAPI document and flattens it into a [`SchemaModel`].
//!
//! Every schema node becomes a [`Property`] keyed by its JSON-Pointer path. Object and enum nodes
//! additionally become a [`SchemaType`]. Problems with individual nodes are collected as
//! [`SchemaError`]s and the affected type is pruned, so later stages only see complete types.

use std::collections::BTreeSet;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::model::{
  Cardinality, Property, REF_PREFIX, SCHEMAS_ROOT, SchemaModel, SchemaType, is_within, schema_segments,
};
use crate::{
  generator::{
    errors::{GeneratorError, SchemaError, SchemaErrors},
    metrics::GenerationWarning,
  },
  naming::case::to_pascal_case,
};

const OBJECT_TYPE: &str = "object";
const ARRAY_TYPE: &str = "array";
const REJECTED_COMPOSITIONS: [&str; 2] = ["allOf", "oneOf"];

/// Output of a successful extraction.
#[derive(Debug, Default)]
pub struct Extraction {
  pub model: SchemaModel,
  pub errors: SchemaErrors,
  pub warnings: Vec<GenerationWarning>,
  pub schema_count: usize,
}

#[derive(Debug, Default)]
pub struct SchemaExtractor {
  model: SchemaModel,
  errors: SchemaErrors,
  warnings: Vec<GenerationWarning>,
}

impl SchemaExtractor {
  /// Parses `yaml` and extracts its component schemas.
  ///
  /// Fails only when the document is not YAML or lacks `components/schemas`. Errors in individual
  /// schemas are returned in [`Extraction::errors`].
  pub fn extract(yaml: &str) -> Result<Extraction, GeneratorError> {
    let mut document: Value = serde_yaml::from_str(yaml)?;
    document.apply_merge()?;
    let schemas = schemas_mapping(&document)?;

    let mut extractor = Self::default();
    if let Some(schemas) = schemas {
      extractor.extract_properties(schemas, SCHEMAS_ROOT);
    }

    debug!(
      types = extractor.model.types.len(),
      properties = extractor.model.properties.len(),
      errors = extractor.errors.len(),
      "extracted component schemas"
    );

    Ok(Extraction {
      model: extractor.model,
      errors: extractor.errors,
      warnings: extractor.warnings,
      schema_count: schemas.map_or(0, Mapping::len),
    })
  }

  fn extract_properties(&mut self, properties: &Mapping, parent_path: &str) {
    for (key, node) in properties {
      let Some(name) = scalar_to_string(key) else {
        continue;
      };
      let path = format!("{parent_path}/{name}");
      if let Err(error) = self.extract_property(node, &path) {
        self.errors.record(error);
      }
    }
  }

  fn extract_property(&mut self, node: &Value, path: &str) -> Result<(), SchemaError> {
    let Some(node) = node.as_mapping() else {
      return Err(SchemaError::InvalidNode { path: path.to_string() });
    };

    let (type_name, dimensions, element) = self.resolve_type(node, path, 0)?;
    let description = description(node).or_else(|| description(element)).unwrap_or_default();

    let mut property = Property::new(path);
    property.description.clone_from(&description);
    property.type_name = type_name;
    property.cardinality = Cardinality::array(dimensions);
    property.possible_values = self.possible_values(element, path);

    let is_object = property.type_name == OBJECT_TYPE;
    let is_type = is_object || property.is_enum();
    if is_type {
      property.resolved_type = Some(path.to_string());
    }
    self.model.insert_property(property);

    if !is_type {
      return Ok(());
    }

    let name = schema_segments(path).map(to_pascal_case).collect::<String>();
    debug!(path, %name, "found schema type");
    self.model.insert_type(
      path,
      SchemaType {
        name,
        description,
        own_property: path.to_string(),
        properties: Default::default(),
      },
    );

    if is_object {
      if let Some(properties) = element.get("properties").and_then(Value::as_mapping) {
        self.extract_properties(properties, path);
      }
      self.apply_required(element, path);
    }

    if self.errors.paths().any(|error_path| is_within(error_path, path)) {
      let removed = self.model.prune(path);
      debug!(path, removed, "pruned schema type with errors");
    }

    Ok(())
  }

  /// Finds the type of a node, descending through nested arrays.
  ///
  /// Returns the type name, the number of array levels walked and the innermost node, which carries
  /// the `properties`, `required` and `enum` keywords of the element type.
  fn resolve_type<'a>(
    &mut self,
    node: &'a Mapping,
    path: &str,
    dimensions: u32,
  ) -> Result<(String, u32, &'a Mapping), SchemaError> {
    if let Some(type_value) = node.get("type") {
      let Some(type_name) = scalar_to_string(type_value) else {
        return Err(SchemaError::InvalidNode { path: path.to_string() });
      };
      if type_name != ARRAY_TYPE {
        return Ok((type_name, dimensions, node));
      }

      let items = node
        .get("items")
        .ok_or_else(|| SchemaError::MissingItems { path: path.to_string() })?;
      let Some(items) = items.as_mapping() else {
        return Err(SchemaError::InvalidNode { path: path.to_string() });
      };
      return self.resolve_type(items, path, dimensions + 1);
    }

    if let Some(reference) = node.get("$ref").and_then(Value::as_str) {
      return Ok((format!("{REF_PREFIX}{reference}"), dimensions, node));
    }

    if let Some(keyword) = REJECTED_COMPOSITIONS
      .into_iter()
      .find(|keyword| node.contains_key(*keyword))
    {
      return Err(SchemaError::IllegalComposition {
        path: path.to_string(),
        keyword,
      });
    }

    if node.contains_key("anyOf") {
      self
        .warnings
        .push(GenerationWarning::UntypedProperty { path: path.to_string() });
      return Ok((String::new(), dimensions, node));
    }

    Err(SchemaError::MissingType { path: path.to_string() })
  }

  fn possible_values(&mut self, node: &Mapping, path: &str) -> BTreeSet<String> {
    let Some(values) = node.get("enum").and_then(Value::as_sequence) else {
      return Default::default();
    };

    let mut possible_values = BTreeSet::new();
    for value in values {
      match scalar_to_string(value) {
        Some(value) => {
          possible_values.insert(value);
        }
        None => self
          .warnings
          .push(GenerationWarning::UnsupportedEnumValue { path: path.to_string() }),
      }
    }
    possible_values
  }

  fn apply_required(&mut self, node: &Mapping, path: &str) {
    let Some(required) = node.get("required").and_then(Value::as_sequence) else {
      return;
    };

    for name in required.iter().filter_map(scalar_to_string) {
      match self.model.property_mut(&format!("{path}/{name}")) {
        Some(property) => property.cardinality.min = 1,
        None => self.warnings.push(GenerationWarning::UnknownRequiredProperty {
          path: path.to_string(),
          name,
        }),
      }
    }
  }
}

/// Locates `components/schemas`. A present but empty `schemas` key yields `None`.
fn schemas_mapping(document: &Value) -> Result<Option<&Mapping>, GeneratorError> {
  let components = document.get("components").ok_or(GeneratorError::MissingComponents)?;
  let components = components.as_mapping().ok_or(GeneratorError::ComponentsNotMapping)?;
  let schemas = components.get("schemas").ok_or(GeneratorError::MissingSchemas)?;
  match schemas {
    Value::Null => Ok(None),
    Value::Mapping(schemas) => Ok(Some(schemas)),
    _ => Err(GeneratorError::SchemasNotMapping),
  }
}

fn description(node: &Mapping) -> Option<String> {
  node.get("description").and_then(Value::as_str).map(str::to_string)
}

fn scalar_to_string(value: &Value) -> Option<String> {
  match value {
    Value::String(value) => Some(value.clone()),
    Value::Number(value) => Some(value.to_string()),
    Value::Bool(value) => Some(value.to_string()),
    _ => None,
  }
}
