//! The calling convention shared by every functor in this crate.
//!
//! Rust has neither variadic generics nor a stable way to implement the `Fn`
//! traits for user types. Functors therefore implement [`Callable`], whose
//! type parameter is the *tuple* of arguments:
//!
//! ```text
//! f.call(())            // nullary
//! f.call((a,))          // unary
//! f.call((a, b))        // binary
//! ```
//!
//! The result type is the associated [`Callable::Output`], so composite
//! functors compute their result type from the result types of their parts
//! at compile time.
//!
//! Every closure and `fn` item of arity 0 through 8 is a [`Callable`] through
//! a blanket impl, which lets ordinary closures be mixed freely with the
//! functor types of this crate.
//!
//! # Examples
//!
//! ```rust
//! use functors::callable::Callable;
//! use functors::invoke;
//!
//! let add = |first: i32, second: i32| first + second;
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!(invoke!(add, 1, 2), 3);
//! ```

mod invoke_macro;

pub use crate::invoke;

/// A value that can be called with the argument tuple `Args`.
///
/// # Examples
///
/// ```rust
/// use functors::callable::Callable;
///
/// struct Twice;
///
/// impl Callable<(i32,)> for Twice {
///     type Output = i32;
///
///     fn call(&self, (value,): (i32,)) -> i32 {
///         value * 2
///     }
/// }
///
/// assert_eq!(Twice.call((21,)), 42);
/// ```
pub trait Callable<Args> {
    /// The type produced by a call.
    type Output;

    /// Calls the functor with the given argument tuple.
    fn call(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_callable_for_fn {
    ($($argument:ident),*) => {
        paste::paste! {
            impl<Function, Return, $($argument),*> Callable<($($argument,)*)> for Function
            where
                Function: Fn($($argument),*) -> Return,
            {
                type Output = Return;

                #[inline]
                fn call(&self, ($([<$argument:lower>],)*): ($($argument,)*)) -> Return {
                    (self)($([<$argument:lower>]),*)
                }
            }
        }
    };
}

impl_callable_for_fn!();
impl_callable_for_fn!(A1);
impl_callable_for_fn!(A1, A2);
impl_callable_for_fn!(A1, A2, A3);
impl_callable_for_fn!(A1, A2, A3, A4);
impl_callable_for_fn!(A1, A2, A3, A4, A5);
impl_callable_for_fn!(A1, A2, A3, A4, A5, A6);
impl_callable_for_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_callable_for_fn!(A1, A2, A3, A4, A5, A6, A7, A8);

/// Turns a one-argument [`Callable`] into an ordinary closure.
///
/// Useful when a std algorithm expects `Fn(A) -> B`.
///
/// # Examples
///
/// ```rust
/// use functors::basic::IdentityFunctor;
/// use functors::callable::unary;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(unary(IdentityFunctor)).collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
#[inline]
pub fn unary<F, A>(functor: F) -> impl Fn(A) -> F::Output
where
    F: Callable<(A,)>,
{
    move |argument| functor.call((argument,))
}

/// Turns a two-argument [`Callable`] into an ordinary closure.
///
/// # Examples
///
/// ```rust
/// use functors::callable::binary;
/// use functors::comparison::Less;
///
/// let less = binary(Less);
/// assert!(less(1, 2));
/// ```
#[inline]
pub fn binary<F, A, B>(functor: F) -> impl Fn(A, B) -> F::Output
where
    F: Callable<(A, B)>,
{
    move |first, second| functor.call((first, second))
}
