//! The process-wide, tag-indexed singleton accessor.

use crate::core::{Scope, StorageKey};
use crate::error::SingletonError;
use crate::registry;
use std::any::Any;
use std::marker::PhantomData;

/// Accessor for the process-wide instance of `T` stored under tag `I`.
///
/// Each distinct `(T, I)` pair owns exactly one instance, built with
/// `T::default()` on first access and shared by every caller for the rest of
/// the process. Concurrent first accesses are serialized so the constructor
/// runs once. The instance is never dropped.
///
/// The accessor hands out shared references only. Mutating the instance
/// needs interior mutability (atomics, `Mutex`, ...) chosen by the caller.
///
/// # Examples
///
/// ```
/// use fibre_singleton::Singleton;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// #[derive(Default)]
/// struct Hits(AtomicU32);
///
/// Singleton::<Hits>::get().0.fetch_add(1, Ordering::Relaxed);
/// Singleton::<Hits, 1>::get().0.fetch_add(10, Ordering::Relaxed);
///
/// assert_eq!(Singleton::<Hits, 0>::get().0.load(Ordering::Relaxed), 1);
/// assert_eq!(Singleton::<Hits, 1>::get().0.load(Ordering::Relaxed), 10);
/// assert_eq!(Singleton::<Hits, 1>::index(), 1);
/// ```
pub struct Singleton<T, const I: i32 = 0> {
  _marker: PhantomData<fn() -> T>,
}

/// Alias of [`Singleton`].
pub type IndexedSingleton<T, const I: i32 = 0> = Singleton<T, I>;

impl<T, const I: i32> Singleton<T, I>
where
  T: Default + Any + Send + Sync,
{
  fn key() -> StorageKey {
    StorageKey::of::<T>(Scope::Process, I)
  }

  /// Returns the instance for this type and tag, constructing it on first
  /// access.
  ///
  /// # Panics
  ///
  /// Panics if `T::default()` asks for this same instance on the same thread.
  /// Use [`try_get`](Self::try_get) to receive that as an error instead.
  pub fn get() -> &'static T {
    match Self::try_get() {
      Ok(instance) => instance,
      Err(err) => panic!("{}", err),
    }
  }

  /// Returns the instance for this type and tag, constructing it on first
  /// access.
  pub fn try_get() -> Result<&'static T, SingletonError> {
    registry::get_or_init(Self::key(), T::default)
  }

  /// Whether the instance has already been constructed. Never constructs it.
  pub fn is_initialized() -> bool {
    registry::existing_slot(&Self::key()).is_some_and(|slot| slot.get().is_some())
  }
}

impl<T, const I: i32> Singleton<T, I> {
  /// Returns the tag this accessor is indexed by.
  pub const fn index() -> i32 {
    I
  }

  /// Name of the value type, for diagnostics.
  pub fn type_name() -> &'static str {
    std::any::type_name::<T>()
  }
}
