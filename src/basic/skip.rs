//! Functors that produce no useful value: the no-op and the unreachable marker.

use std::marker::PhantomData;

use crate::callable::Callable;

/// Accepts any arguments and does nothing.
///
/// # Examples
///
/// ```rust
/// use functors::basic::SkipFunctor;
/// use functors::invoke;
///
/// invoke!(SkipFunctor, 2, 2.1, "asda");
/// invoke!(SkipFunctor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SkipFunctor;

impl<Args> Callable<Args> for SkipFunctor {
    type Output = ();

    #[inline]
    fn call(&self, _arguments: Args) {}
}

/// Marks a branch that must never execute.
///
/// Calling it always panics through [`unreachable!`], in debug and release
/// builds alike. The output type `R` only exists so the functor fits any
/// slot whose result type is fixed by the surrounding code; no value of it
/// is ever produced.
///
/// # Panics
///
/// Always, when called.
///
/// # Examples
///
/// ```rust,should_panic
/// use functors::basic::AssertFunctor;
/// use functors::invoke;
///
/// let unreachable = AssertFunctor::<i32>::new();
/// let _: i32 = invoke!(unreachable, "this branch is a bug");
/// ```
pub struct AssertFunctor<R = ()>(PhantomData<fn() -> R>);

impl<R> AssertFunctor<R> {
    /// Creates the functor.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Clone for AssertFunctor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for AssertFunctor<R> {}

impl<R> Default for AssertFunctor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for AssertFunctor<R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("AssertFunctor")
    }
}

impl<R, Args> Callable<Args> for AssertFunctor<R> {
    type Output = R;

    #[cold]
    #[track_caller]
    fn call(&self, _arguments: Args) -> R {
        #[cfg(feature = "tracing")]
        tracing::error!(
            arguments = std::any::type_name::<Args>(),
            "AssertFunctor invoked on a branch marked unreachable"
        );
        unreachable!("AssertFunctor invoked on a branch marked unreachable")
    }
}
