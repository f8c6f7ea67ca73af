//! Error types for the functor adapters.
//!
//! Almost nothing in this crate can fail: functors are pure evaluation rules
//! and contract violations panic. The one recoverable case is calling an
//! [`AssignableFunctor`](crate::adapter::AssignableFunctor) that has not been
//! bound to a functor yet.

/// Represents a call through an [`AssignableFunctor`](crate::adapter::AssignableFunctor)
/// that was default-constructed and never bound.
///
/// # Examples
///
/// ```rust
/// use functors::error::UnboundFunctorError;
///
/// let error = UnboundFunctorError {
///     adapter_name: "AssignableFunctor",
///     method_name: "try_call",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "AssignableFunctor::try_call: no functor is bound. Assign one before calling."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnboundFunctorError {
    /// The name of the adapter where the error occurred.
    pub adapter_name: &'static str,
    /// The name of the method where the error occurred.
    pub method_name: &'static str,
}

impl std::fmt::Display for UnboundFunctorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: no functor is bound. Assign one before calling.",
            self.adapter_name, self.method_name
        )
    }
}

impl std::error::Error for UnboundFunctorError {}
