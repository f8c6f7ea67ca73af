//! The `invoke!` macro.

/// Calls a [`Callable`](crate::callable::Callable) with a plain argument list.
///
/// `invoke!(f, a, b)` expands to `Callable::call(&f, (a, b))`, so the
/// functor is borrowed, never moved. `invoke!(f)` calls with `()`.
///
/// # Examples
///
/// ```rust
/// use functors::basic::{IdentityFunctor, ReturnTrueFunctor};
/// use functors::comparison::Greater;
/// use functors::invoke;
///
/// assert_eq!(invoke!(IdentityFunctor, 7), 7);
/// assert!(invoke!(Greater, 2, 1));
///
/// let always = ReturnTrueFunctor::new();
/// assert!(invoke!(always));
/// assert!(invoke!(always, 1, "ignored", 2.5));
/// ```
#[macro_export]
macro_rules! invoke {
    ($functor:expr $(, $argument:expr)* $(,)?) => {
        $crate::callable::Callable::call(&$functor, ($($argument,)*))
    };
}
