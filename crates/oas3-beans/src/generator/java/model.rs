use std::collections::BTreeMap;

use crate::generator::schema::model::NIL_VALUE;
use crate::naming::case::to_screaming_snake_case;

/// A set of Java types that share one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaPackage {
  pub name: String,
  pub classes: BTreeMap<String, JavaClass>,
  pub enums: BTreeMap<String, JavaEnum>,
}

impl JavaPackage {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Default::default()
    }
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty() && self.enums.is_empty()
  }

  pub fn type_count(&self) -> usize {
    self.classes.len() + self.enums.len()
  }

  pub fn contains_type(&self, name: &str) -> bool {
    self.classes.contains_key(name) || self.enums.contains_key(name)
  }

  pub fn add_class(&mut self, class: JavaClass) {
    self.classes.insert(class.name.clone(), class);
  }

  pub fn add_enum(&mut self, java_enum: JavaEnum) {
    self.enums.insert(java_enum.name.clone(), java_enum);
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaClass {
  pub name: String,
  pub description: Vec<String>,
  pub data_members: Vec<DataMember>,
  /// Constructor parameters, as indices into `data_members`.
  pub required_members: Vec<RequiredMember>,
  pub constant_data_members: Vec<DataMember>,
  pub has_serialized_name_member: bool,
}

impl JavaClass {
  /// Builds a class with its members sorted by name and its constructor parameters selected from the
  /// members flagged as required.
  pub fn new(
    name: impl Into<String>,
    description: &str,
    mut data_members: Vec<DataMember>,
    mut constant_data_members: Vec<DataMember>,
  ) -> Self {
    data_members.sort_by(|a, b| a.name.cmp(&b.name));
    constant_data_members.sort_by(|a, b| a.name.cmp(&b.name));

    let mut required_members = data_members
      .iter()
      .enumerate()
      .filter(|(_, member)| member.is_required)
      .map(|(index, _)| RequiredMember {
        is_first: false,
        data_member: index,
      })
      .collect::<Vec<_>>();
    if let Some(first) = required_members.first_mut() {
      first.is_first = true;
    }

    let has_serialized_name_member = data_members.iter().any(DataMember::has_serialized_name_override);

    Self {
      name: name.into(),
      description: split_description(description),
      data_members,
      required_members,
      constant_data_members,
      has_serialized_name_member,
    }
  }

  /// The data members set by the constructor, in parameter order.
  pub fn required(&self) -> impl Iterator<Item = &DataMember> {
    self
      .required_members
      .iter()
      .filter_map(|required| self.data_members.get(required.data_member))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredMember {
  pub is_first: bool,
  pub data_member: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataMember {
  pub name: String,
  pub pascal_case_name: String,
  pub member_type: String,
  pub description: Vec<String>,
  /// Java literal assigned to a constant. Empty for regular members.
  pub constant_val: String,
  /// Wire name of a member whose Java name differs from it.
  pub serialized_name_override: String,
  pub is_required: bool,
}

impl DataMember {
  pub fn has_serialized_name_override(&self) -> bool {
    !self.serialized_name_override.is_empty()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaEnum {
  pub name: String,
  pub description: Vec<String>,
  pub enum_values: Vec<EnumValue>,
}

impl JavaEnum {
  /// Builds an enum from its wire values. The `nil` sentinel is dropped and constants are sorted by
  /// their Java name.
  pub fn new<'a>(name: impl Into<String>, description: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
    let mut enum_values = values
      .into_iter()
      .filter(|value| *value != NIL_VALUE)
      .map(EnumValue::new)
      .collect::<Vec<_>>();
    enum_values.sort_by(|a, b| a.const_format_name.cmp(&b.const_format_name));

    Self {
      name: name.into(),
      description: split_description(description),
      enum_values,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
  pub const_format_name: String,
  pub string_format: String,
}

impl EnumValue {
  pub fn new(value: &str) -> Self {
    Self {
      const_format_name: to_screaming_snake_case(value),
      string_format: value.to_string(),
    }
  }
}

/// Splits a schema description into comment lines.
///
/// Multi-line descriptions lose their final two entries, which drops the blank tail a YAML block
/// scalar leaves behind.
pub fn split_description(description: &str) -> Vec<String> {
  let lines = description.split('\n').collect::<Vec<_>>();
  match lines.as_slice() {
    [""] => Vec::new(),
    [_] => lines.iter().map(ToString::to_string).collect(),
    _ => lines[..lines.len() - 2].iter().map(ToString::to_string).collect(),
  }
}

/// Quotes `value` as a Java string literal.
pub fn java_string_literal(value: &str) -> String {
  format!("\"{}\"", escape_java_string(value))
}

pub fn escape_java_string(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '\\' => escaped.push_str("\\\\"),
      '"' => escaped.push_str("\\\""),
      '\n' => escaped.push_str("\\n"),
      '\r' => escaped.push_str("\\r"),
      '\t' => escaped.push_str("\\t"),
      _ => escaped.push(c),
    }
  }
  escaped
}
