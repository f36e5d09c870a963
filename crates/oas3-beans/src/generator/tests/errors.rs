use crate::generator::errors::{GeneratorError, SchemaError, SchemaErrors};

#[test]
fn test_schema_errors_display_one_line_per_error() {
  let mut errors = SchemaErrors::default();
  errors.record(SchemaError::MissingType {
    path: "#/components/schemas/B".to_string(),
  });
  errors.record(SchemaError::IllegalComposition {
    path: "#/components/schemas/A".to_string(),
    keyword: "allOf",
  });

  assert_eq!(
    errors.to_string(),
    "Error: schema '#/components/schemas/A' uses 'allOf', which is not supported\n\
     Error: schema '#/components/schemas/B' has neither a 'type' nor a '$ref'"
  );
}

#[test]
fn test_schema_errors_into_result() {
  assert!(SchemaErrors::default().into_result().is_ok());

  let mut errors = SchemaErrors::default();
  errors.record(SchemaError::MissingItems {
    path: "#/components/schemas/A/list".to_string(),
  });
  let error = errors.into_result().unwrap_err();
  assert!(matches!(&error, GeneratorError::Schema(errors) if errors.len() == 1));
  assert!(error.to_string().contains("#/components/schemas/A/list"));
}

#[test]
fn test_schema_error_paths() {
  let error = SchemaError::ReferenceChain {
    path: "#/components/schemas/A/b".to_string(),
    reference: "#/components/schemas/C".to_string(),
  };
  assert_eq!(error.path(), "#/components/schemas/A/b");
  assert!(error.to_string().contains("#/components/schemas/C"));
}

#[test]
fn test_overwrite_refusal_mentions_force() {
  let error = GeneratorError::OverwriteRefused("out/generated".into());
  assert!(error.to_string().contains("--force"));
  assert!(error.to_string().contains("out/generated"));
}
