//! # Fibre Singleton
//!
//! Lazily-initialized, thread-safe singletons for Rust, with any number of
//! independent instances of the same type told apart by a compile-time
//! integer tag.
//!
//! ## Core Concepts
//!
//! - **Singleton**: `Singleton::<T, I>::get()` returns the process-wide
//!   instance of `T` stored under tag `I` (default `0`), building it with
//!   `T::default()` the first time it is asked for.
//! - **Tags**: `Singleton::<T, 0>` and `Singleton::<T, 1>` are independent
//!   instances of the same type. `Singleton::<T, I>::index()` reports `I`.
//! - **Lifetime**: instances live until the process exits and are never reset
//!   or dropped. This is deliberate, bounded global state.
//! - **Thread safety**: concurrent first accesses construct exactly once;
//!   later reads are lock-free. Mutating an instance is up to its own
//!   interior mutability.
//! - **Local singletons** (feature `local`): `LocalSingleton` keeps one
//!   instance per thread and accepts types that are not `Send` or `Sync`.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_singleton::{singleton, Singleton};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Default)]
//! struct Connections {
//!   open: AtomicUsize,
//! }
//!
//! // Two independent pools of the same type.
//! Singleton::<Connections, 0>::get().open.fetch_add(3, Ordering::SeqCst);
//! Singleton::<Connections, 1>::get().open.fetch_add(1, Ordering::SeqCst);
//!
//! assert_eq!(singleton!(Connections).open.load(Ordering::SeqCst), 3);
//! assert_eq!(singleton!(Connections, 1).open.load(Ordering::SeqCst), 1);
//! ```

mod core;
mod error;
#[cfg(feature = "local")]
mod local;
mod macros;
mod registry;
mod singleton;

pub use error::SingletonError;
#[cfg(feature = "local")]
pub use local::LocalSingleton;
pub use singleton::{IndexedSingleton, Singleton};
