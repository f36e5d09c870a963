use std::path::{Path, PathBuf};

use tracing::debug;

use crate::generator::errors::GeneratorError;

/// An OpenAPI document read from disk.
pub struct SpecLoader {
  path: PathBuf,
  content: String,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> Result<Self, GeneratorError> {
    let content = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| GeneratorError::ReadInput {
        path: path.to_path_buf(),
        source,
      })?;
    debug!(path = %path.display(), bytes = content.len(), "read input document");
    Ok(Self {
      path: path.to_path_buf(),
      content,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn content(&self) -> &str {
    &self.content
  }
}
