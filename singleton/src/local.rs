//! A per-thread, non-thread-safe counterpart of [`Singleton`](crate::Singleton).

use crate::core::{InitGuard, Scope, StorageKey};
use crate::error::SingletonError;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

thread_local! {
  static LOCAL_SLOTS: RefCell<HashMap<StorageKey, Rc<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Accessor for the current thread's instance of `T` stored under tag `I`.
///
/// Every thread gets its own instance per `(T, I)` pair, built with
/// `T::default()` on that thread's first access and dropped when the thread
/// exits. Because instances never cross threads, `T` need not be `Send` or
/// `Sync`, and instances are shared through `Rc`.
///
/// # Examples
///
/// ```
/// use fibre_singleton::LocalSingleton;
/// use std::cell::Cell;
///
/// LocalSingleton::<Cell<u32>>::get().set(3);
/// assert_eq!(LocalSingleton::<Cell<u32>>::get().get(), 3);
/// assert_eq!(LocalSingleton::<Cell<u32>, 1>::get().get(), 0);
/// ```
pub struct LocalSingleton<T, const I: i32 = 0> {
  _marker: PhantomData<fn() -> T>,
}

impl<T, const I: i32> LocalSingleton<T, I>
where
  T: Default + Any,
{
  fn key() -> StorageKey {
    StorageKey::of::<T>(Scope::Thread, I)
  }

  /// Returns this thread's instance, constructing it on first access.
  ///
  /// # Panics
  ///
  /// Panics if `T::default()` asks for this same instance.
  pub fn get() -> Rc<T> {
    match Self::try_get() {
      Ok(instance) => instance,
      Err(err) => panic!("{}", err),
    }
  }

  /// Returns this thread's instance, constructing it on first access.
  pub fn try_get() -> Result<Rc<T>, SingletonError> {
    let key = Self::key();

    // The map borrow must end before `T::default()` runs, since the
    // constructor may resolve other local singletons.
    let existing = LOCAL_SLOTS.with(|slots| slots.borrow().get(&key).cloned());
    if let Some(instance) = existing {
      return instance.downcast::<T>().map_err(|_| key.mismatch());
    }

    let _guard = InitGuard::enter(key)?;
    tracing::debug!(
      type_name = key.type_name,
      index = key.index,
      scope = %key.scope,
      "constructing singleton instance"
    );
    let instance = Rc::new(T::default());
    LOCAL_SLOTS.with(|slots| {
      slots
        .borrow_mut()
        .insert(key, Rc::clone(&instance) as Rc<dyn Any>);
    });
    Ok(instance)
  }

  /// Whether this thread has already constructed its instance.
  pub fn is_initialized() -> bool {
    let key = Self::key();
    LOCAL_SLOTS.with(|slots| slots.borrow().contains_key(&key))
  }
}

impl<T, const I: i32> LocalSingleton<T, I> {
  /// Returns the tag this accessor is indexed by.
  pub const fn index() -> i32 {
    I
  }
}
