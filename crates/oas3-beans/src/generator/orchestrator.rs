//! Orchestration for the OpenAPI to Java bean generation pipeline.
//!
//! The pipeline runs in four stages:
//! 1. [`SchemaExtractor`] flattens `components/schemas` into a schema model
//! 2. [`ReferenceResolver`] replaces `$ref` properties with what they point at
//! 3. [`JavaTranslator`] turns schema types into Java classes and enums
//! 4. [`JavaWriter`] renders and writes one `.java` file per type
//!
//! Schema errors from stages 1 and 2 are collected and reported together. When any exist, nothing is
//! written and the output directory is left untouched.

use std::path::Path;

use tracing::info;

use crate::generator::{
  errors::GeneratorError,
  java::{model::JavaPackage, translator::JavaTranslator},
  metrics::GenerationStats,
  render::writer::JavaWriter,
  schema::{
    extractor::{Extraction, SchemaExtractor},
    resolver::ReferenceResolver,
  },
};

pub struct Orchestrator {
  package_name: String,
}

impl Orchestrator {
  pub fn new(package_name: impl Into<String>) -> Self {
    Self {
      package_name: package_name.into(),
    }
  }

  /// Runs extraction, resolution and translation over an OpenAPI document.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::Schema`] with every collected schema error when any schema could not be
  /// extracted or resolved, or the fatal error that stopped extraction.
  pub fn translate(&self, yaml: &str) -> Result<(JavaPackage, GenerationStats), GeneratorError> {
    let Extraction {
      mut model,
      mut errors,
      warnings,
      schema_count,
    } = SchemaExtractor::extract(yaml)?;
    ReferenceResolver::resolve(&mut model, &mut errors);
    errors.into_result()?;
    if model.is_empty() {
      info!("no component schemas found");
    }

    let mut stats = GenerationStats::default();
    stats.record_schemas(schema_count);
    stats.record_warnings(warnings);

    let (package, translation_warnings) = JavaTranslator::new(&model).translate(&self.package_name);
    stats.record_warnings(translation_warnings);
    for class in package.classes.values() {
      stats.record_class(class);
    }
    for java_enum in package.enums.values() {
      stats.record_enum(java_enum);
    }

    info!(
      package = %self.package_name,
      classes = stats.classes_generated,
      enums = stats.enums_generated,
      "translated schemas"
    );
    Ok((package, stats))
  }

  /// Translates `yaml` and writes the resulting sources below `output`.
  pub async fn generate_files(&self, yaml: &str, output: &Path, force: bool) -> Result<GenerationStats, GeneratorError> {
    let (package, mut stats) = self.translate(yaml)?;
    let writer = JavaWriter::new(output, &self.package_name, force);
    info!(path = %writer.store_dir().display(), types = package.type_count(), "writing package");
    writer.write_package(&package, &mut stats).await?;
    Ok(stats)
  }
}
