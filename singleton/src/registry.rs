//! The process-wide slot table.
//!
//! Rust statics cannot be generic over a type and an integer, so every
//! `(type, tag)` pair gets its cell from this one map instead. Slots are
//! leaked on creation and never removed, which is what lets accessors hand
//! out `&'static` references.

use crate::core::{InitGuard, StorageKey};
use crate::error::SingletonError;
use once_cell::sync::{Lazy, OnceCell};
use papaya::HashMap;
use std::any::Any;

/// A storage cell holding one type-erased instance.
pub(crate) type Slot = OnceCell<Box<dyn Any + Send + Sync>>;

// Created on first access, lives until the process exits.
static SLOTS: Lazy<HashMap<StorageKey, &'static Slot>> = Lazy::new(HashMap::new);

fn leak_slot() -> &'static Slot {
  Box::leak(Box::new(Slot::new()))
}

/// Returns the slot for `key`, allocating it on first request.
pub(crate) fn slot(key: StorageKey) -> &'static Slot {
  let slots = SLOTS.pin();
  if let Some(&slot) = slots.get(&key) {
    return slot;
  }
  tracing::trace!(?key, "allocating singleton slot");
  // A losing racer's fresh slot is dropped by reference only and stays leaked.
  *slots.get_or_insert_with(key, leak_slot)
}

/// Returns the slot for `key` only if some access already allocated it.
pub(crate) fn existing_slot(key: &StorageKey) -> Option<&'static Slot> {
  SLOTS.pin().get(key).copied()
}

/// Resolves the instance stored under `key`, building it with `init` on
/// first access.
pub(crate) fn get_or_init<T, F>(key: StorageKey, init: F) -> Result<&'static T, SingletonError>
where
  T: Any + Send + Sync,
  F: FnOnce() -> T,
{
  let slot = slot(key);

  let value = match slot.get() {
    Some(value) => value,
    None => {
      let _guard = InitGuard::enter(key)?;
      slot.get_or_init(|| {
        tracing::debug!(
          type_name = key.type_name,
          index = key.index,
          scope = %key.scope,
          "constructing singleton instance"
        );
        Box::new(init())
      })
    }
  };

  value.downcast_ref::<T>().ok_or_else(|| key.mismatch())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::Scope;

  #[test]
  fn same_key_yields_same_slot() {
    struct Marker;
    let key = StorageKey::of::<Marker>(Scope::Process, 0);
    assert!(existing_slot(&key).is_none());

    let a = slot(key);
    let b = slot(key);
    assert!(std::ptr::eq(a, b));
    assert!(existing_slot(&key).is_some_and(|s| std::ptr::eq(s, a)));
  }

  #[test]
  fn distinct_tags_yield_distinct_slots() {
    struct Marker;
    let a = slot(StorageKey::of::<Marker>(Scope::Process, 1));
    let b = slot(StorageKey::of::<Marker>(Scope::Process, 2));
    assert!(!std::ptr::eq(a, b));
  }

  #[test]
  fn init_runs_once_per_key() {
    struct Value(u32);
    let key = StorageKey::of::<Value>(Scope::Process, 0);

    let first = get_or_init(key, || Value(7)).unwrap();
    let second = get_or_init(key, || Value(8)).unwrap();
    assert_eq!(first.0, 7);
    assert!(std::ptr::eq(first, second));
  }

  #[test]
  fn mismatched_slot_is_reported() {
    struct Stored;
    struct Requested;
    // Forge a key that routes `Requested` into the slot of `Stored`.
    let stored_key = StorageKey::of::<Stored>(Scope::Process, 0);
    get_or_init(stored_key, || Stored).unwrap();

    let err = get_or_init(stored_key, || Requested).err();
    assert_eq!(err, Some(stored_key.mismatch()));
  }
}
