//! Negating the result of a functor.

use crate::callable::Callable;

/// Negates whatever the wrapped functor returns.
///
/// The result type is the [`std::ops::Not`] output of the inner result, so
/// a predicate stays a predicate.
///
/// # Examples
///
/// ```rust
/// use functors::basic::ReturnFalseFunctor;
/// use functors::composition::make_not_functor;
/// use functors::invoke;
///
/// let is_odd = make_not_functor(|value: i32| value % 2 == 0);
/// assert!(invoke!(is_odd, 3));
///
/// let always_true = make_not_functor(ReturnFalseFunctor::new());
/// assert!(invoke!(always_true, "anything", 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotFunctor<F> {
    functor: F,
}

impl<F> NotFunctor<F> {
    /// Creates the negated functor.
    #[inline]
    pub const fn new(functor: F) -> Self {
        Self { functor }
    }

    /// Consumes the wrapper and returns the inner functor.
    #[inline]
    pub fn into_inner(self) -> F {
        self.functor
    }
}

impl<F, Args> Callable<Args> for NotFunctor<F>
where
    F: Callable<Args>,
    F::Output: std::ops::Not,
{
    type Output = <F::Output as std::ops::Not>::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        !self.functor.call(arguments)
    }
}

/// Creates a [`NotFunctor`].
#[inline]
pub const fn make_not_functor<F>(functor: F) -> NotFunctor<F> {
    NotFunctor::new(functor)
}
