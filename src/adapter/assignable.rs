//! A copyable, reassignable handle to a borrowed functor.

use crate::callable::Callable;
use crate::error::UnboundFunctorError;

/// Borrows a functor and adds default construction and reassignment.
///
/// Some functors (closures in particular) cannot be default-constructed,
/// copied or assigned, which rules them out of containers and structs that
/// need those capabilities. `AssignableFunctor` holds a reference instead:
/// it is always `Copy` and `Default`, and [`assign`](Self::assign) rebinds
/// it. The borrow checker guarantees the referent outlives the handle.
///
/// A default-constructed handle is *unbound*. Calling it is a logic error;
/// [`try_call`](Self::try_call) reports it as [`UnboundFunctorError`].
///
/// # Panics
///
/// [`Callable::call`] panics when the handle is unbound.
///
/// # Examples
///
/// ```rust
/// use functors::adapter::AssignableFunctor;
/// use functors::callable::Callable;
/// use functors::invoke;
///
/// let double = |value: i32| value * 2;
/// let triple = |value: i32| value * 3;
///
/// let mut handles: [AssignableFunctor<'_, dyn Callable<(i32,), Output = i32>>; 2] =
///     [AssignableFunctor::default(); 2];
/// handles[0].assign(&double);
/// handles[1].assign(&triple);
/// assert_eq!(invoke!(handles[0], 5), 10);
/// assert_eq!(invoke!(handles[1], 5), 15);
///
/// let unbound: AssignableFunctor<'_, fn(i32) -> i32> = AssignableFunctor::default();
/// assert!(unbound.try_call((5,)).is_err());
/// ```
pub struct AssignableFunctor<'a, F: ?Sized> {
    target: Option<&'a F>,
}

impl<'a, F: ?Sized> AssignableFunctor<'a, F> {
    /// Creates a handle bound to `functor`.
    #[inline]
    pub const fn new(functor: &'a F) -> Self {
        Self {
            target: Some(functor),
        }
    }

    /// Creates an unbound handle.
    #[inline]
    pub const fn unbound() -> Self {
        Self { target: None }
    }

    /// Rebinds the handle to `functor`.
    #[inline]
    pub const fn assign(&mut self, functor: &'a F) -> &mut Self {
        self.target = Some(functor);
        self
    }

    /// Returns `true` if the handle refers to a functor.
    #[inline]
    pub const fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Returns the referenced functor, if any.
    #[inline]
    pub const fn get(&self) -> Option<&'a F> {
        self.target
    }

    /// Calls the referenced functor.
    ///
    /// # Errors
    ///
    /// Returns [`UnboundFunctorError`] if no functor is bound.
    pub fn try_call<Args>(&self, arguments: Args) -> Result<F::Output, UnboundFunctorError>
    where
        F: Callable<Args>,
    {
        self.target
            .map(|functor| functor.call(arguments))
            .ok_or(UnboundFunctorError {
                adapter_name: "AssignableFunctor",
                method_name: "try_call",
            })
    }
}

impl<F: ?Sized> Clone for AssignableFunctor<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for AssignableFunctor<'_, F> {}

impl<F: ?Sized> Default for AssignableFunctor<'_, F> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<F: ?Sized> std::fmt::Debug for AssignableFunctor<'_, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AssignableFunctor")
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<'a, F: ?Sized> From<&'a F> for AssignableFunctor<'a, F> {
    fn from(functor: &'a F) -> Self {
        Self::new(functor)
    }
}

impl<F, Args> Callable<Args> for AssignableFunctor<'_, F>
where
    F: Callable<Args> + ?Sized,
{
    type Output = F::Output;

    #[track_caller]
    fn call(&self, arguments: Args) -> F::Output {
        match self.target {
            Some(functor) => functor.call(arguments),
            None => {
                let error = UnboundFunctorError {
                    adapter_name: "AssignableFunctor",
                    method_name: "call",
                };
                #[cfg(feature = "tracing")]
                tracing::error!(%error, "called an unbound functor handle");
                panic!("{error}")
            }
        }
    }
}

/// Creates an [`AssignableFunctor`] bound to `functor`.
#[inline]
pub const fn make_assignable_functor<F: ?Sized>(functor: &F) -> AssignableFunctor<'_, F> {
    AssignableFunctor::new(functor)
}
