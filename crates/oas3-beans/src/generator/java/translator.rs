//! Converts a resolved [`SchemaModel`] into a [`JavaPackage`].

use tracing::debug;

use super::model::{DataMember, JavaClass, JavaEnum, JavaPackage, java_string_literal, split_description};
use crate::{
  generator::{
    metrics::GenerationWarning,
    schema::model::{DIMENSION_SCALE, Property, SchemaModel, SchemaType},
  },
  naming::case::{Case, to_camel_case, to_pascal_case, to_screaming_snake_case},
};

const OBJECT_TYPE: &str = "Object";

pub struct JavaTranslator<'a> {
  model: &'a SchemaModel,
}

impl<'a> JavaTranslator<'a> {
  pub fn new(model: &'a SchemaModel) -> Self {
    Self { model }
  }

  /// Produces one class or enum per schema type.
  pub fn translate(&self, package_name: &str) -> (JavaPackage, Vec<GenerationWarning>) {
    let mut package = JavaPackage::new(package_name);
    let mut warnings = Vec::new();

    for (path, schema_type) in &self.model.types {
      let is_enum = self.model.own_property(schema_type).is_some_and(Property::is_enum);
      let name = self.type_name(schema_type);

      if package.contains_type(&name) {
        warnings.push(GenerationWarning::DuplicateTypeName {
          path: path.clone(),
          name: name.clone(),
        });
      }

      if is_enum {
        let java_enum = self.translate_enum(name, schema_type);
        debug!(name = %java_enum.name, values = java_enum.enum_values.len(), "translated enum");
        package.add_enum(java_enum);
      } else {
        let class = self.translate_class(name, schema_type);
        debug!(
          name = %class.name,
          members = class.data_members.len(),
          constants = class.constant_data_members.len(),
          "translated class"
        );
        package.add_class(class);
      }
    }

    (package, warnings)
  }

  fn translate_enum(&self, name: String, schema_type: &SchemaType) -> JavaEnum {
    let values = self
      .model
      .own_property(schema_type)
      .map(|property| property.possible_values.iter().map(String::as_str).collect::<Vec<_>>())
      .unwrap_or_default();
    JavaEnum::new(name, &schema_type.description, values)
  }

  fn translate_class(&self, name: String, schema_type: &SchemaType) -> JavaClass {
    let (constants, members): (Vec<&Property>, Vec<&Property>) =
      self.model.members(schema_type).partition(|property| property.is_constant());

    let constant_data_members = constants.into_iter().map(|property| self.constant_member(property)).collect();
    let data_members = members.into_iter().map(|property| self.data_member(property)).collect();

    JavaClass::new(name, &schema_type.description, data_members, constant_data_members)
  }

  fn constant_member(&self, property: &Property) -> DataMember {
    let value = property.possible_values.first().cloned().unwrap_or_default();
    let constant_val = if property.type_name == "string" {
      java_string_literal(&value)
    } else {
      value
    };

    DataMember {
      name: to_screaming_snake_case(&property.name),
      pascal_case_name: to_pascal_case(&property.name),
      member_type: self.member_type(property),
      description: split_description(&property.description),
      constant_val,
      ..Default::default()
    }
  }

  fn data_member(&self, property: &Property) -> DataMember {
    let normalized = property.name.replace('-', "_");
    let name = to_camel_case(&normalized);
    let serialized_name_override = if name == property.name {
      String::new()
    } else {
      debug!(
        property = %property.name,
        case = %Case::detect(&property.name),
        field = %name,
        "renamed member"
      );
      property.name.clone()
    };

    DataMember {
      pascal_case_name: to_pascal_case(&normalized),
      name,
      member_type: self.member_type(property),
      description: split_description(&property.description),
      constant_val: String::new(),
      serialized_name_override,
      is_required: property.is_set_in_constructor(),
    }
  }

  /// The Java spelling of a property's type, including one `[]` per array dimension.
  pub fn member_type(&self, property: &Property) -> String {
    let base = match property.resolved_type.as_deref() {
      Some(path) => self
        .model
        .schema_type(path)
        .map_or_else(|| OBJECT_TYPE.to_string(), |schema_type| self.type_name(schema_type)),
      None => match property.type_name.as_str() {
        "string" => "String".to_string(),
        "integer" => "int".to_string(),
        "number" => "double".to_string(),
        "boolean" => "boolean".to_string(),
        "object" | "" => OBJECT_TYPE.to_string(),
        other => other.to_string(),
      },
    };
    let dimensions = property.cardinality.max() / DIMENSION_SCALE;
    format!("{base}{}", "[]".repeat(dimensions as usize))
  }

  fn type_name(&self, schema_type: &SchemaType) -> String {
    if self.model.own_property(schema_type).is_some_and(Property::is_enum) {
      to_pascal_case(&schema_type.name)
    } else {
      schema_type.name.clone()
    }
  }
}
