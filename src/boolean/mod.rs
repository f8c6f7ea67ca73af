//! Logical operators as functors.
//!
//! [`Not`], [`And`], [`Or`] and [`Xor`] model `!`, `&&`, `||` and `^` on
//! booleans. They are ordinary functions of already-evaluated arguments, so
//! there is no short-circuiting: by the time `And` is called both operands
//! exist.
//!
//! # Examples
//!
//! ```rust
//! use functors::boolean::{And, Not, Or, Xor};
//! use functors::invoke;
//!
//! assert!(!invoke!(Not, true));
//! assert!(!invoke!(And, true, false));
//! assert!(invoke!(Or, false, true));
//! assert!(!invoke!(Xor, true, true));
//! ```

use crate::callable::Callable;

/// Logical negation, `!value`.
///
/// Generic over [`std::ops::Not`], so it also negates integers bitwise and
/// works on any user type implementing the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Not;

impl<T> Callable<(T,)> for Not
where
    T: std::ops::Not,
{
    type Output = T::Output;

    #[inline]
    fn call(&self, (value,): (T,)) -> T::Output {
        !value
    }
}

/// Logical conjunction, `left && right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct And;

impl<T> Callable<(T, T)> for And
where
    T: Into<bool>,
{
    type Output = bool;

    #[inline]
    fn call(&self, (left, right): (T, T)) -> bool {
        left.into() && right.into()
    }
}

/// Logical disjunction, `left || right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Or;

impl<T> Callable<(T, T)> for Or
where
    T: Into<bool>,
{
    type Output = bool;

    #[inline]
    fn call(&self, (left, right): (T, T)) -> bool {
        left.into() || right.into()
    }
}

/// Exclusive or, true when exactly one operand is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Xor;

impl<T> Callable<(T, T)> for Xor
where
    T: Into<bool>,
{
    type Output = bool;

    #[inline]
    fn call(&self, (left, right): (T, T)) -> bool {
        left.into() != right.into()
    }
}

static_assertions::assert_impl_all!(Not: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(And: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(Or: Send, Sync, Copy, Default);
static_assertions::assert_impl_all!(Xor: Send, Sync, Copy, Default);
