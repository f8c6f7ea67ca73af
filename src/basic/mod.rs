//! Constant, identity, no-op and unreachable functors.
//!
//! These are the leaves every composition in this crate is built from:
//!
//! - [`SkipFunctor`]: accepts anything, does nothing
//! - [`ReturnSomethingFunctor`]: returns a compile-time constant, with the
//!   [`ReturnTrueFunctor`], [`ReturnFalseFunctor`] and [`ReturnZeroFunctor`]
//!   shorthands
//! - [`DynamicReturnSomethingFunctor`]: returns a value captured at run time
//! - [`IdentityFunctor`]: returns its argument
//! - [`RemoveReference`]: clones a borrowed value into an owned one
//! - [`AssertFunctor`]: panics, marking a branch that must never run
//!
//! All of them except [`DynamicReturnSomethingFunctor`] are zero-sized.

mod constant;
mod identity;
mod skip;

pub use constant::{
    ConstBool, ConstChar, ConstI8, ConstI16, ConstI32, ConstI64, ConstI128, ConstIsize, ConstU8,
    ConstU16, ConstU32, ConstU64, ConstU128, ConstUsize, ConstValue, DynamicReturnSomethingFunctor,
    ReturnFalseFunctor, ReturnSomethingFunctor, ReturnTrueFunctor, ReturnZeroFunctor,
    make_dynamic_return_something_functor,
};
pub use identity::{IdentityFunctor, RemoveReference};
pub use skip::{AssertFunctor, SkipFunctor};

static_assertions::assert_impl_all!(SkipFunctor: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(IdentityFunctor: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(ReturnTrueFunctor: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(AssertFunctor<String>: Send, Sync, Copy, Default);
static_assertions::assert_eq_size!(ReturnZeroFunctor, ());
