//! # functors
//!
//! Function objects and composition adapters for Rust.
//!
//! ## Overview
//!
//! Closures cover one-off callbacks well, but their types cannot be named,
//! defaulted or reused as type parameters. This library provides small,
//! nameable function objects that can be stored in structs, passed as
//! comparators or predicates, and combined with each other:
//!
//! - **Calling convention**: the [`Callable`](callable::Callable) trait, with
//!   blanket impls for closures, and the [`invoke!`] macro
//! - **Basic functors**: no-op, constants, identity, unreachable marker
//! - **Comparisons**: `Greater`, `Less`, ... and key-based comparators
//! - **Boolean operators**: `Not`, `And`, `Or`, `Xor`
//! - **Adapters**: sequences, sinks, borrowed handles, cursors, scaling
//! - **Composition**: binary-operator lifts and logical combinators
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events when a functor marking an
//!   unreachable path, or an unbound handle, is called
//!
//! ## Example
//!
//! ```rust
//! use functors::prelude::*;
//!
//! let by_first = make_functor_to_comparator_with(|pair: &(i32, char)| pair.0, Greater);
//! let mut pairs = vec![(1, 'a'), (3, 'c'), (2, 'b')];
//! sort_by_comparator(&mut pairs, &by_first);
//! assert_eq!(pairs, vec![(3, 'c'), (2, 'b'), (1, 'a')]);
//!
//! let positive_and_even = make_and_functor(
//!     |value: i32| invoke!(Greater, value, 0),
//!     make_not_functor(|value: i32| value % 2 != 0),
//! );
//! assert!(invoke!(positive_and_even, 4));
//! assert!(!invoke!(positive_and_even, -4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every functor, adapter and factory function.
///
/// # Usage
///
/// ```rust
/// use functors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::*;
    pub use crate::basic::*;
    pub use crate::boolean::*;
    pub use crate::callable::*;
    pub use crate::comparison::*;
    pub use crate::composition::*;
    pub use crate::error::*;
}

pub mod adapter;
pub mod basic;
pub mod boolean;
pub mod callable;
pub mod comparison;
pub mod composition;
pub mod error;
