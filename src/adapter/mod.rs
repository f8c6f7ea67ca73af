//! Adapters exposing other objects through the functor calling convention.
//!
//! - [`ArrayToFunctor`]: an indexable sequence as `index -> &element`
//! - [`FunctorToOutputIterator`]: a functor as a write-only sequence sink
//! - [`AssignableFunctor`]: a borrowed functor made `Copy`, `Default` and
//!   reassignable
//! - [`LiftIteratorFunctor`]: a functor applied through a cursor
//! - [`ScaleFunctor`]: a functor whose result is multiplied by a factor
//!
//! Each adapter has a `make_*` function that infers its type parameters.

mod array;
mod assignable;
mod lift_iterator;
mod output;
mod scale;

pub use array::{ArrayToFunctor, make_array_to_functor, make_array_to_functor_with_offset};
pub use assignable::{AssignableFunctor, make_assignable_functor};
pub use lift_iterator::{LiftIteratorFunctor, make_lift_iterator_functor};
pub use output::{FunctorToOutputIterator, make_functor_to_output_iterator};
pub use scale::{ScaleFunctor, make_scale_functor};

static_assertions::assert_impl_all!(ArrayToFunctor<'static, [i32]>: Send, Sync, Copy);
static_assertions::assert_impl_all!(AssignableFunctor<'static, fn(i32) -> i32>: Send, Sync, Copy, Default);
static_assertions::assert_not_impl_any!(AssignableFunctor<'static, std::cell::Cell<i32>>: Sync);
