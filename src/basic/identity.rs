//! Functors that hand their argument back.

use crate::callable::Callable;

/// Returns its single argument unchanged.
///
/// The argument is moved through, so an owned value stays owned and a
/// reference stays a reference with the same lifetime.
///
/// # Examples
///
/// ```rust
/// use functors::basic::IdentityFunctor;
/// use functors::callable::Callable;
///
/// assert_eq!(IdentityFunctor.call((7,)), 7);
/// assert_eq!(IdentityFunctor.call((String::from("asd"),)), "asd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IdentityFunctor;

impl<A> Callable<(A,)> for IdentityFunctor {
    type Output = A;

    #[inline]
    fn call(&self, (argument,): (A,)) -> A {
        argument
    }
}

/// Turns a borrowed value into an owned clone.
///
/// # Examples
///
/// ```rust
/// use functors::basic::RemoveReference;
/// use functors::callable::Callable;
///
/// let borrowed = String::from("kept");
/// let owned: String = RemoveReference.call((&borrowed,));
/// assert_eq!(owned, borrowed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RemoveReference;

impl<'a, T> Callable<(&'a T,)> for RemoveReference
where
    T: Clone,
{
    type Output = T;

    #[inline]
    fn call(&self, (reference,): (&'a T,)) -> T {
        reference.clone()
    }
}
