//! Error types reported by the singleton accessors.

use thiserror::Error;

/// Errors that can occur while resolving a singleton instance.
///
/// `get` turns these into panics; `try_get` hands them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SingletonError {
  /// The value's constructor requested the very instance it is building,
  /// on the same thread.
  #[error("cyclic initialization of singleton {type_name}[{index}]: its constructor requested itself")]
  CyclicInitialization { type_name: &'static str, index: i32 },

  /// The slot for this type and tag held a value of another type.
  ///
  /// Slots are keyed by `TypeId`, so the public accessors never return this;
  /// it stands in for a downcast that cannot fail rather than a panic.
  #[doc(hidden)]
  #[error("singleton slot {type_name}[{index}] holds a value of a different type")]
  TypeMismatch { type_name: &'static str, index: i32 },
}
