use std::collections::{BTreeMap, BTreeSet};

pub const SCHEMAS_ROOT: &str = "#/components/schemas";
pub const REF_PREFIX: &str = "$ref:";
pub const NIL_VALUE: &str = "nil";

/// Array dimensions are carried through `max` as multiples of this value.
pub const DIMENSION_SCALE: u32 = 128;

/// Occurrence bounds of a property.
///
/// `min` of `1` marks a required property. Collections are described by their dimension count; the
/// classic `max` encoding (`1` for scalars, `128 × dimensions` for arrays) is derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cardinality {
  pub min: u32,
  pub dimensions: u32,
}

impl Cardinality {
  pub fn array(dimensions: u32) -> Self {
    Self { min: 0, dimensions }
  }

  pub fn max(&self) -> u32 {
    if self.dimensions == 0 {
      1
    } else {
      DIMENSION_SCALE * self.dimensions
    }
  }

  pub fn is_required(&self) -> bool {
    self.min > 0
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
  pub name: String,
  pub path: String,
  pub description: String,
  pub type_name: String,
  pub possible_values: BTreeSet<String>,
  /// Path of the schema type this property is an instance of.
  pub resolved_type: Option<String>,
  pub cardinality: Cardinality,
}

impl Property {
  pub fn new(path: impl Into<String>) -> Self {
    let path = path.into();
    Self {
      name: last_segment(&path).to_string(),
      path,
      ..Default::default()
    }
  }

  pub fn is_enum(&self) -> bool {
    self.possible_values.len() > 1
  }

  /// A single allowed value on a scalar. Arrays restricted to one value stay typed arrays.
  pub fn is_constant(&self) -> bool {
    self.possible_values.len() == 1 && !self.is_collection()
  }

  pub fn is_referencing(&self) -> bool {
    self.type_name.starts_with(REF_PREFIX)
  }

  /// The target path of a `$ref` property.
  pub fn reference(&self) -> Option<&str> {
    self.type_name.strip_prefix(REF_PREFIX)
  }

  pub fn is_collection(&self) -> bool {
    self.cardinality.dimensions > 0
  }

  pub fn is_set_in_constructor(&self) -> bool {
    if self.is_enum() {
      !self.possible_values.contains(NIL_VALUE)
    } else if self.is_constant() {
      false
    } else {
      self.cardinality.is_required()
    }
  }

  /// Copies the semantic fields of `referent` into this property.
  ///
  /// Collections keep their own dimensions and add the referent's, so an array of a referenced array
  /// gains both.
  pub fn resolve(&mut self, referent: &Property) {
    if self.description.is_empty() {
      self.description.clone_from(&referent.description);
    }
    self.type_name.clone_from(&referent.type_name);
    self.possible_values.clone_from(&referent.possible_values);
    self.resolved_type.clone_from(&referent.resolved_type);

    if self.is_collection() {
      self.cardinality.min += referent.cardinality.min;
      self.cardinality.dimensions += referent.cardinality.dimensions;
    } else {
      self.cardinality = referent.cardinality;
    }
  }
}

/// An object or enum schema that becomes one generated Java type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaType {
  pub name: String,
  pub description: String,
  /// Path of the property that introduced this type.
  pub own_property: String,
  /// Paths of the direct child properties.
  pub properties: BTreeSet<String>,
}

/// Flat view of `components/schemas`, keyed by JSON-Pointer path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
  pub types: BTreeMap<String, SchemaType>,
  pub properties: BTreeMap<String, Property>,
}

impl SchemaModel {
  pub fn is_empty(&self) -> bool {
    self.types.is_empty() && self.properties.is_empty()
  }

  pub fn property(&self, path: &str) -> Option<&Property> {
    self.properties.get(path)
  }

  pub(crate) fn property_mut(&mut self, path: &str) -> Option<&mut Property> {
    self.properties.get_mut(path)
  }

  pub fn schema_type(&self, path: &str) -> Option<&SchemaType> {
    self.types.get(path)
  }

  /// The own property of a schema type.
  pub fn own_property(&self, schema_type: &SchemaType) -> Option<&Property> {
    self.properties.get(&schema_type.own_property)
  }

  /// The child properties of a schema type in path order.
  pub fn members<'a>(&'a self, schema_type: &'a SchemaType) -> impl Iterator<Item = &'a Property> + 'a {
    schema_type
      .properties
      .iter()
      .filter_map(|path| self.properties.get(path))
  }

  pub(crate) fn insert_property(&mut self, property: Property) {
    if let Some(parent) = parent_path(&property.path)
      && let Some(schema_type) = self.types.get_mut(parent)
    {
      schema_type.properties.insert(property.path.clone());
    }
    self.properties.insert(property.path.clone(), property);
  }

  pub(crate) fn insert_type(&mut self, path: impl Into<String>, schema_type: SchemaType) {
    self.types.insert(path.into(), schema_type);
  }

  /// Removes every type and property at or below `root`.
  pub(crate) fn prune(&mut self, root: &str) -> usize {
    let before = self.types.len() + self.properties.len();
    self.types.retain(|path, _| !is_within(path, root));
    self.properties.retain(|path, _| !is_within(path, root));
    if let Some(parent) = parent_path(root)
      && let Some(schema_type) = self.types.get_mut(parent)
    {
      schema_type.properties.remove(root);
    }
    before - (self.types.len() + self.properties.len())
  }
}

pub fn parent_path(path: &str) -> Option<&str> {
  path.rsplit_once('/').map(|(parent, _)| parent)
}

pub fn last_segment(path: &str) -> &str {
  path.rsplit_once('/').map_or(path, |(_, last)| last)
}

/// Whether `path` is `root` or lies below it.
pub fn is_within(path: &str, root: &str) -> bool {
  path
    .strip_prefix(root)
    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// The path of the top-level schema that contains `path`.
pub fn schema_root(path: &str) -> &str {
  let Some(rest) = path.strip_prefix(SCHEMAS_ROOT).and_then(|rest| rest.strip_prefix('/')) else {
    return path;
  };
  match rest.find('/') {
    Some(end) => &path[..SCHEMAS_ROOT.len() + 1 + end],
    None => path,
  }
}

/// The segments of `path` below `#/components/schemas`.
pub fn schema_segments(path: &str) -> impl Iterator<Item = &str> {
  path
    .strip_prefix(SCHEMAS_ROOT)
    .unwrap_or(path)
    .split('/')
    .filter(|segment| !segment.is_empty())
}
