//! Core, non-public data structures shared by the accessors.

use crate::error::SingletonError;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

thread_local! {
  // Keys whose constructor is currently running on this thread.
  static CONSTRUCTING: RefCell<HashSet<StorageKey>> = RefCell::new(HashSet::new());
}

/// Which family of slots a key belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Scope {
  Process,
  #[cfg_attr(not(feature = "local"), allow(dead_code))]
  Thread,
}

impl fmt::Display for Scope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Scope::Process => f.write_str("process"),
      Scope::Thread => f.write_str("thread"),
    }
  }
}

/// Identifies one storage cell: a value type paired with an integer tag.
///
/// `type_name` rides along for diagnostics only; identity is
/// `(scope, type_id, index)`.
#[derive(Clone, Copy)]
pub(crate) struct StorageKey {
  pub(crate) scope: Scope,
  pub(crate) type_id: TypeId,
  pub(crate) type_name: &'static str,
  pub(crate) index: i32,
}

impl StorageKey {
  pub(crate) fn of<T: Any>(scope: Scope, index: i32) -> Self {
    Self {
      scope,
      type_id: TypeId::of::<T>(),
      type_name: std::any::type_name::<T>(),
      index,
    }
  }

  pub(crate) fn cyclic(&self) -> SingletonError {
    SingletonError::CyclicInitialization {
      type_name: self.type_name,
      index: self.index,
    }
  }

  pub(crate) fn mismatch(&self) -> SingletonError {
    SingletonError::TypeMismatch {
      type_name: self.type_name,
      index: self.index,
    }
  }
}

impl PartialEq for StorageKey {
  fn eq(&self, other: &Self) -> bool {
    self.scope == other.scope && self.type_id == other.type_id && self.index == other.index
  }
}

impl Eq for StorageKey {}

impl Hash for StorageKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.scope.hash(state);
    self.type_id.hash(state);
    self.index.hash(state);
  }
}

impl fmt::Debug for StorageKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({}, {}[{}])", self.scope, self.type_name, self.index)
  }
}

/// An RAII guard marking a key as under construction on the current thread.
///
/// Entering a key that is already marked means the value's constructor asked
/// for itself. The key is unmarked when the guard drops, including while
/// unwinding out of a panicking constructor.
///
/// During thread teardown the marker set may already be destroyed. The guard
/// then tracks nothing and construction proceeds without cycle detection.
pub(crate) struct InitGuard {
  key: StorageKey,
  tracked: bool,
}

impl InitGuard {
  pub(crate) fn enter(key: StorageKey) -> Result<Self, SingletonError> {
    match CONSTRUCTING.try_with(|set| set.borrow_mut().insert(key)) {
      Ok(true) => Ok(Self { key, tracked: true }),
      Ok(false) => {
        tracing::warn!(?key, "singleton constructor re-entered its own slot");
        Err(key.cyclic())
      }
      Err(_) => Ok(Self {
        key,
        tracked: false,
      }),
    }
  }
}

impl Drop for InitGuard {
  fn drop(&mut self) {
    if !self.tracked {
      return;
    }
    let _ = CONSTRUCTING.try_with(|set| {
      set.borrow_mut().remove(&self.key);
    });
  }
}
