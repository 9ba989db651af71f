use fibre_singleton::{IndexedSingleton, Singleton};
use std::sync::atomic::{AtomicUsize, Ordering};

// --- Test Fixtures ---

// Every test uses its own types: the registry is process-wide and cannot be reset.

static COUNTER_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

struct Counter {
  field: AtomicUsize,
}

impl Default for Counter {
  fn default() -> Self {
    COUNTER_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
    Counter {
      field: AtomicUsize::new(0),
    }
  }
}

// --- Basic Tests ---

#[test]
fn test_tagged_instances_are_independent() {
  // Arrange
  assert_eq!(COUNTER_CONSTRUCTIONS.load(Ordering::SeqCst), 0);

  // Act
  Singleton::<Counter, 0>::get().field.store(5, Ordering::SeqCst);
  let again = Singleton::<Counter, 0>::get();
  let other = Singleton::<Counter, 1>::get();

  // Assert
  assert_eq!(again.field.load(Ordering::SeqCst), 5);
  assert_eq!(other.field.load(Ordering::SeqCst), 0);
  assert_eq!(COUNTER_CONSTRUCTIONS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_repeated_access_returns_same_storage() {
  #[derive(Default)]
  struct Settings {
    _level: u8,
  }

  let first = Singleton::<Settings>::get();
  for _ in 0..100 {
    assert!(std::ptr::eq(first, Singleton::<Settings>::get()));
  }
  // The omitted tag is tag 0.
  assert!(std::ptr::eq(first, Singleton::<Settings, 0>::get()));
  assert!(std::ptr::eq(first, IndexedSingleton::<Settings>::get()));
}

#[test]
fn test_distinct_tags_have_distinct_storage() {
  #[derive(Default)]
  struct Buffer {
    _bytes: Vec<u8>,
  }

  let a = Singleton::<Buffer, 1>::get();
  let b = Singleton::<Buffer, 2>::get();
  let c = Singleton::<Buffer, -1>::get();
  assert!(!std::ptr::eq(a, b));
  assert!(!std::ptr::eq(a, c));
  assert!(!std::ptr::eq(b, c));
}

#[test]
fn test_distinct_types_at_same_tag_are_independent() {
  #[derive(Default)]
  struct Left(AtomicUsize);
  #[derive(Default)]
  struct Right(AtomicUsize);

  Singleton::<Left, 3>::get().0.store(11, Ordering::SeqCst);
  assert_eq!(Singleton::<Right, 3>::get().0.load(Ordering::SeqCst), 0);
  assert_eq!(Singleton::<Left, 3>::get().0.load(Ordering::SeqCst), 11);
}

#[test]
fn test_index_reports_tag_regardless_of_access() {
  #[derive(Default)]
  struct Tagged;

  assert_eq!(Singleton::<Tagged, 7>::index(), 7);
  for _ in 0..3 {
    let _ = Singleton::<Tagged, 7>::get();
    assert_eq!(Singleton::<Tagged, 7>::index(), 7);
  }
  assert_eq!(Singleton::<Tagged>::index(), 0);
  assert_eq!(Singleton::<Tagged, { i32::MIN }>::index(), i32::MIN);
}

#[test]
fn test_is_initialized_tracks_first_access() {
  #[derive(Default)]
  struct Lazy;

  assert!(!Singleton::<Lazy, 4>::is_initialized());
  let _ = Singleton::<Lazy, 4>::get();
  assert!(Singleton::<Lazy, 4>::is_initialized());
  assert!(!Singleton::<Lazy, 5>::is_initialized());
}

#[test]
fn test_std_types_work_as_values() {
  let names = Singleton::<std::sync::Mutex<Vec<String>>, 9>::get();
  names.lock().unwrap().push("first".to_string());

  let again = Singleton::<std::sync::Mutex<Vec<String>>, 9>::get();
  assert_eq!(*again.lock().unwrap(), vec!["first".to_string()]);
}
