use std::io::Write;

use tempfile::NamedTempFile;

use crate::{generator::errors::GeneratorError, utils::spec::SpecLoader};

#[tokio::test]
async fn test_open_reads_document() {
  let mut file = NamedTempFile::new().unwrap();
  writeln!(file, "openapi: 3.0.3").unwrap();

  let loader = SpecLoader::open(file.path()).await.unwrap();
  assert_eq!(loader.content(), "openapi: 3.0.3\n");
  assert_eq!(loader.path(), file.path());
}

#[tokio::test]
async fn test_open_missing_file() {
  let dir = tempfile::tempdir().unwrap();
  let missing = dir.path().join("missing.yaml");

  let result = SpecLoader::open(&missing).await;
  assert!(matches!(result, Err(GeneratorError::ReadInput { path, .. }) if path == missing));
}
