use std::{collections::BTreeMap, fmt, path::PathBuf};

use itertools::Itertools;
use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GeneratorError {
  #[error("failed to read '{path}': {source}")]
  ReadInput {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse YAML document: {0}")]
  InvalidYaml(#[from] serde_yaml::Error),
  #[error("the document has no 'components' section")]
  MissingComponents,
  #[error("the 'components' section is not a mapping")]
  ComponentsNotMapping,
  #[error("the 'components' section has no 'schemas' section")]
  MissingSchemas,
  #[error("the 'components/schemas' section is not a mapping")]
  SchemasNotMapping,
  #[error("found {count} schema error(s)\n{0}", count = .0.len())]
  Schema(SchemaErrors),
  #[error(
    "refusing to delete existing .java files in '{}'; re-run with --force to replace them",
    .0.display()
  )]
  OverwriteRefused(PathBuf),
  #[error("failed to {action} '{path}': {source}")]
  Io {
    action: &'static str,
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to compile the {name} template: {source}")]
  TemplateCompile {
    name: &'static str,
    #[source]
    source: mustache::Error,
  },
  #[error("failed to render '{name}': {source}")]
  TemplateRender {
    name: String,
    #[source]
    source: mustache::Error,
  },
  #[error("rendered '{name}' is not valid UTF-8")]
  TemplateOutput { name: String },
}

impl GeneratorError {
  pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      action,
      path: path.into(),
      source,
    }
  }
}

/// A problem with a single schema node. Processing of sibling schemas continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
  #[error("schema '{path}' has neither a 'type' nor a '$ref'")]
  MissingType { path: String },
  #[error("schema '{path}' is an array but has no 'items'")]
  MissingItems { path: String },
  #[error("schema '{path}' uses '{keyword}', which is not supported")]
  IllegalComposition { path: String, keyword: &'static str },
  #[error("schema '{path}' is not a mapping")]
  InvalidNode { path: String },
  #[error("schema '{path}' references '{reference}', which does not exist")]
  UnresolvedReference { path: String, reference: String },
  #[error("schema '{path}' references '{reference}', which is itself a reference")]
  ReferenceChain { path: String, reference: String },
  #[error("schema '{path}' references '{reference}', which has no type")]
  UntypedReference { path: String, reference: String },
}

impl SchemaError {
  pub fn path(&self) -> &str {
    match self {
      Self::MissingType { path }
      | Self::MissingItems { path }
      | Self::IllegalComposition { path, .. }
      | Self::InvalidNode { path }
      | Self::UnresolvedReference { path, .. }
      | Self::ReferenceChain { path, .. }
      | Self::UntypedReference { path, .. } => path,
    }
  }
}

/// Non-fatal schema errors keyed by the path they were raised against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaErrors(BTreeMap<String, SchemaError>);

impl SchemaErrors {
  pub fn record(&mut self, error: SchemaError) {
    tracing::warn!(path = error.path(), "{error}");
    self.0.insert(error.path().to_string(), error);
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn paths(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
    self.0.values()
  }

  pub fn into_result(self) -> Result<(), GeneratorError> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(GeneratorError::Schema(self))
    }
  }
}

impl fmt::Display for SchemaErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.iter().map(|error| format!("Error: {error}")).join("\n"))
  }
}
