//! Replaces `$ref` properties with the semantics of the property they point at.

use tracing::debug;

use super::model::{SchemaModel, schema_root};
use crate::generator::errors::{SchemaError, SchemaErrors};

pub struct ReferenceResolver;

impl ReferenceResolver {
  /// Resolves every referencing property in `model`.
  ///
  /// References to missing properties, to properties that are references themselves, or to untyped
  /// (`anyOf`) properties are recorded in `errors` and the top-level schema holding them is pruned.
  /// Pruning can orphan other references, so validation repeats until the model is stable.
  pub fn resolve(model: &mut SchemaModel, errors: &mut SchemaErrors) {
    loop {
      let broken = Self::broken_references(model);
      if broken.is_empty() {
        break;
      }
      for error in broken {
        let root = schema_root(error.path()).to_string();
        errors.record(error);
        let removed = model.prune(&root);
        debug!(path = %root, removed, "pruned schema with unresolvable reference");
      }
    }

    let references = model
      .properties
      .values()
      .filter_map(|property| Some((property.path.clone(), property.reference()?.to_string())))
      .collect::<Vec<_>>();

    for (path, reference) in references {
      let Some(referent) = model.property(&reference).cloned() else {
        continue;
      };
      if let Some(property) = model.property_mut(&path) {
        property.resolve(&referent);
        debug!(%path, %reference, type_name = %property.type_name, "resolved reference");
      }
    }
  }

  fn broken_references(model: &SchemaModel) -> Vec<SchemaError> {
    model
      .properties
      .values()
      .filter_map(|property| {
        let reference = property.reference()?;
        match model.property(reference) {
          None => Some(SchemaError::UnresolvedReference {
            path: property.path.clone(),
            reference: reference.to_string(),
          }),
          Some(target) if target.is_referencing() => Some(SchemaError::ReferenceChain {
            path: property.path.clone(),
            reference: reference.to_string(),
          }),
          Some(target) if target.type_name.is_empty() => Some(SchemaError::UntypedReference {
            path: property.path.clone(),
            reference: reference.to_string(),
          }),
          Some(_) => None,
        }
      })
      .collect()
  }
}
