//! Public macros for terse singleton access.

/// Returns the process-wide instance of a type, optionally at a tag.
///
/// `singleton!(T)` is `Singleton::<T, 0>::get()` and `singleton!(T, I)` is
/// `Singleton::<T, I>::get()`.
///
/// # Panics
///
/// Panics under the same conditions as [`Singleton::get`](crate::Singleton::get).
///
/// # Examples
///
/// ```
/// use fibre_singleton::singleton;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Journal(Mutex<Vec<String>>);
///
/// singleton!(Journal).0.lock().unwrap().push("boot".into());
/// singleton!(Journal, 2).0.lock().unwrap().push("audit".into());
///
/// assert_eq!(*singleton!(Journal).0.lock().unwrap(), ["boot"]);
/// assert_eq!(*singleton!(Journal, 2).0.lock().unwrap(), ["audit"]);
/// ```
#[macro_export]
macro_rules! singleton {
  ($type:ty) => {
    $crate::Singleton::<$type, 0>::get()
  };

  ($type:ty, $index:expr) => {
    $crate::Singleton::<$type, { $index }>::get()
  };
}

/// Non-panicking form of [`singleton!`], returning
/// `Result<&'static T, SingletonError>`.
///
/// # Examples
///
/// ```
/// use fibre_singleton::try_singleton;
///
/// let names = try_singleton!(Vec<String>, 5).unwrap();
/// assert!(names.is_empty());
/// ```
#[macro_export]
macro_rules! try_singleton {
  ($type:ty) => {
    $crate::Singleton::<$type, 0>::try_get()
  };

  ($type:ty, $index:expr) => {
    $crate::Singleton::<$type, { $index }>::try_get()
  };
}

/// Returns the current thread's instance of a type, optionally at a tag.
///
/// `local_singleton!(T, I)` is `LocalSingleton::<T, I>::get()`.
///
/// # Examples
///
/// ```
/// use fibre_singleton::local_singleton;
/// use std::cell::RefCell;
///
/// local_singleton!(RefCell<Vec<u8>>).borrow_mut().push(1);
/// assert_eq!(*local_singleton!(RefCell<Vec<u8>>).borrow(), [1]);
/// assert!(local_singleton!(RefCell<Vec<u8>>, 1).borrow().is_empty());
/// ```
#[cfg(feature = "local")]
#[macro_export]
macro_rules! local_singleton {
  ($type:ty) => {
    $crate::LocalSingleton::<$type, 0>::get()
  };

  ($type:ty, $index:expr) => {
    $crate::LocalSingleton::<$type, { $index }>::get()
  };
}
