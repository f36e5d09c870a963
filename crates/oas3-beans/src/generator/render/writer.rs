//! Writes a rendered [`JavaPackage`] into its package directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::templates::JavaTemplates;
use crate::generator::{errors::GeneratorError, java::model::JavaPackage, metrics::GenerationStats};

const JAVA_EXTENSION: &str = "java";

/// The directory holding the sources of `package_name` below `output`.
pub fn store_dir(output: &Path, package_name: &str) -> PathBuf {
  package_name
    .split('.')
    .filter(|segment| !segment.is_empty())
    .fold(output.to_path_buf(), |path, segment| path.join(segment))
}

#[derive(Debug, Clone)]
pub struct JavaWriter {
  store_dir: PathBuf,
  force: bool,
}

impl JavaWriter {
  pub fn new(output: &Path, package_name: &str, force: bool) -> Self {
    Self {
      store_dir: store_dir(output, package_name),
      force,
    }
  }

  pub fn store_dir(&self) -> &Path {
    &self.store_dir
  }

  /// Renders every class and enum of `package` and writes one `.java` file per type.
  ///
  /// All sources are rendered before the store directory is cleaned. Existing `.java` files are only
  /// deleted when the writer was created with `force`.
  pub async fn write_package(
    &self,
    package: &JavaPackage,
    stats: &mut GenerationStats,
  ) -> Result<Vec<PathBuf>, GeneratorError> {
    if package.is_empty() {
      debug!(package = %package.name, "package has no types");
    }
    let templates = JavaTemplates::get()?;
    let mut sources = Vec::with_capacity(package.type_count());
    for class in package.classes.values() {
      sources.push((class.name.as_str(), templates.render_class(class, &package.name)?));
    }
    for java_enum in package.enums.values() {
      sources.push((java_enum.name.as_str(), templates.render_enum(java_enum, &package.name)?));
    }

    let removed = self.prepare_store_dir().await?;
    stats.record_files_removed(removed);

    let mut written = Vec::with_capacity(sources.len());
    for (type_name, contents) in sources {
      written.push(self.write_source(type_name, contents).await?);
      stats.record_file_written();
    }
    Ok(written)
  }

  /// Empties the store directory of `.java` files, or creates it. Returns the number of files removed.
  pub async fn prepare_store_dir(&self) -> Result<usize, GeneratorError> {
    let dir = &self.store_dir;
    match tokio::fs::metadata(dir).await {
      Ok(metadata) if metadata.is_dir() => {}
      Ok(_) => {
        return Err(GeneratorError::io(
          "use as a directory",
          dir,
          std::io::Error::from(std::io::ErrorKind::AlreadyExists),
        ));
      }
      Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
        tokio::fs::create_dir_all(dir)
          .await
          .map_err(|source| GeneratorError::io("create directory", dir, source))?;
        info!(path = %dir.display(), "created package directory");
        return Ok(0);
      }
      Err(source) => return Err(GeneratorError::io("inspect", dir, source)),
    }

    let existing = self.existing_sources().await?;
    if existing.is_empty() {
      debug!(path = %dir.display(), "package directory has no java files");
      return Ok(0);
    }
    if !self.force {
      return Err(GeneratorError::OverwriteRefused(dir.clone()));
    }

    for path in &existing {
      tokio::fs::remove_file(path)
        .await
        .map_err(|source| GeneratorError::io("delete", path, source))?;
      info!(path = %path.display(), "deleted file");
    }
    info!(path = %dir.display(), removed = existing.len(), "cleaned package directory");
    Ok(existing.len())
  }

  async fn existing_sources(&self) -> Result<Vec<PathBuf>, GeneratorError> {
    let dir = &self.store_dir;
    let mut entries = tokio::fs::read_dir(dir)
      .await
      .map_err(|source| GeneratorError::io("list", dir, source))?;

    let mut sources = Vec::new();
    while let Some(entry) = entries
      .next_entry()
      .await
      .map_err(|source| GeneratorError::io("list", dir, source))?
    {
      let path = entry.path();
      let is_file = entry.file_type().await.is_ok_and(|file_type| file_type.is_file());
      if is_file && path.extension().is_some_and(|extension| extension == JAVA_EXTENSION) {
        sources.push(path);
      }
    }
    sources.sort();
    Ok(sources)
  }

  async fn write_source(&self, type_name: &str, contents: String) -> Result<PathBuf, GeneratorError> {
    let path = self.store_dir.join(format!("{type_name}.{JAVA_EXTENSION}"));
    tokio::fs::write(&path, contents)
      .await
      .map_err(|source| GeneratorError::io("write", &path, source))?;
    info!(path = %path.display(), "wrote file");
    Ok(path)
  }
}
