//! Composing functors through operators.
//!
//! [`LiftBinaryOperatorFunctor`] is the general combinator: it runs two
//! functors on the same arguments and merges their results with a binary
//! operator. The logical combinators are that lift with the operator fixed:
//!
//! | Functor          | Operator                       |
//! |------------------|--------------------------------|
//! | [`OrFunctor`]    | [`Or`](crate::boolean::Or)     |
//! | [`AndFunctor`]   | [`And`](crate::boolean::And)   |
//! | [`XorFunctor`]   | [`Xor`](crate::boolean::Xor)   |
//!
//! [`NotFunctor`] negates a single functor.
//!
//! None of the combinators short-circuit: both branches are evaluated on
//! every call.
//!
//! # Laws
//!
//! - `make_lift_binary_operator_functor(l, r, op)(args) == op(l(args), r(args))`
//! - `make_not_functor(make_not_functor(f))(args) == f(args)` for boolean `f`
//! - `make_xor_functor(f, g)(args) == (f(args) != g(args))`
//!
//! # Examples
//!
//! ```rust
//! use functors::basic::{ReturnFalseFunctor, ReturnTrueFunctor};
//! use functors::composition::{make_and_functor, make_or_functor, make_xor_functor};
//! use functors::invoke;
//!
//! let always = ReturnTrueFunctor::new();
//! let never = ReturnFalseFunctor::new();
//!
//! assert!(invoke!(make_or_functor(always, never), 1));
//! assert!(!invoke!(make_and_functor(always, never), 1));
//! assert!(invoke!(make_xor_functor(always, never), 1));
//! ```

mod lift;
mod not;

pub use lift::{
    AndFunctor, LiftBinaryOperatorFunctor, OrFunctor, XorFunctor, make_and_functor,
    make_lift_binary_operator_functor, make_or_functor, make_xor_functor,
};
pub use not::{NotFunctor, make_not_functor};
