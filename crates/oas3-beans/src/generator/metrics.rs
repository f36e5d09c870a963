use strum::Display;

use crate::generator::java::model::{JavaClass, JavaEnum};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub schemas_found: usize,
  pub types_generated: usize,
  pub classes_generated: usize,
  pub enums_generated: usize,
  pub enum_values_generated: usize,
  pub data_members_generated: usize,
  pub constants_generated: usize,
  pub files_written: usize,
  pub files_removed: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_schemas(&mut self, count: usize) {
    self.schemas_found += count;
  }

  pub fn record_class(&mut self, class: &JavaClass) {
    self.classes_generated += 1;
    self.types_generated += 1;
    self.data_members_generated += class.data_members.len();
    self.constants_generated += class.constant_data_members.len();
  }

  pub fn record_enum(&mut self, java_enum: &JavaEnum) {
    self.enums_generated += 1;
    self.types_generated += 1;
    self.enum_values_generated += java_enum.enum_values.len();
  }

  pub fn record_file_written(&mut self) {
    self.files_written += 1;
  }

  pub fn record_files_removed(&mut self, count: usize) {
    self.files_removed += count;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    tracing::warn!("{warning}");
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    for warning in warnings {
      self.record_warning(warning);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{path}' uses 'anyOf'; its type falls back to Object")]
  UntypedProperty { path: String },
  #[strum(to_string = "Schema '{path}' lists '{name}' as required, but has no such property")]
  UnknownRequiredProperty { path: String, name: String },
  #[strum(to_string = "Schema '{path}' has an enum entry that is not a string, number or boolean; it was ignored")]
  UnsupportedEnumValue { path: String },
  #[strum(to_string = "Schema '{path}' maps to the Java type '{name}', which already exists; the later one wins")]
  DuplicateTypeName { path: String, name: String },
}
