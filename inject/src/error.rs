use thiserror::Error;

use crate::key::TypeKey;

/// Recoverable errors reported by the injector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
  /// No binding exists for the type, neither locally nor in any parent.
  #[error("value not found for type {type_name}")]
  NotFound { type_name: &'static str },

  #[error("the injector already has a parent")]
  ParentAlreadySet,

  #[error("an injector cannot be its own parent")]
  SelfParent,
}

impl InjectError {
  pub(crate) fn not_found(key: &TypeKey) -> Self {
    InjectError::NotFound {
      type_name: key.name(),
    }
  }
}

/// A specialized `Result` type for `fibre_inject` operations.
pub type Result<T, E = InjectError> = std::result::Result<T, E>;
