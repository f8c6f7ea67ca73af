//! Combining two functors with a binary operator.

use crate::boolean::{And, Or, Xor};
use crate::callable::Callable;

/// Evaluates two functors on the same arguments and combines the results.
///
/// `call(args)` returns `operator(left(args), right(args))`. Both sides are
/// always evaluated, left first. The argument tuple is cloned once for the
/// left side, so it must be [`Clone`]; tuples of references and `Copy`
/// values are.
///
/// The result type is whatever the operator produces for the two inner
/// results, resolved at compile time.
///
/// # Examples
///
/// ```rust
/// use functors::basic::{ConstI32, ReturnSomethingFunctor, ReturnZeroFunctor};
/// use functors::composition::make_lift_binary_operator_functor;
/// use functors::invoke;
///
/// let sum_is_positive = |left: i32, right: i32| left + right > 0;
/// let five = ReturnSomethingFunctor::<ConstI32<5>>::new();
///
/// let lifted = make_lift_binary_operator_functor(ReturnZeroFunctor::new(), five, sum_is_positive);
/// assert!(invoke!(lifted));
/// assert!(invoke!(lifted, 2, 2.3, "abc"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LiftBinaryOperatorFunctor<L, R, Op> {
    left: L,
    right: R,
    operator: Op,
}

impl<L, R, Op> LiftBinaryOperatorFunctor<L, R, Op> {
    /// Creates the combined functor.
    #[inline]
    pub const fn new(left: L, right: R, operator: Op) -> Self {
        Self {
            left,
            right,
            operator,
        }
    }

    /// Creates the combined functor with a default-constructed operator.
    #[inline]
    pub fn with_default_operator(left: L, right: R) -> Self
    where
        Op: Default,
    {
        Self::new(left, right, Op::default())
    }

    /// Returns the left functor.
    #[inline]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns the right functor.
    #[inline]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Returns the combining operator.
    #[inline]
    pub const fn operator(&self) -> &Op {
        &self.operator
    }
}

impl<L, R, Op, Args> Callable<Args> for LiftBinaryOperatorFunctor<L, R, Op>
where
    Args: Clone,
    L: Callable<Args>,
    R: Callable<Args>,
    Op: Callable<(L::Output, R::Output)>,
{
    type Output = Op::Output;

    #[inline]
    fn call(&self, arguments: Args) -> Op::Output {
        let left = self.left.call(arguments.clone());
        let right = self.right.call(arguments);
        self.operator.call((left, right))
    }
}

/// Creates a [`LiftBinaryOperatorFunctor`].
#[inline]
pub const fn make_lift_binary_operator_functor<L, R, Op>(
    left: L,
    right: R,
    operator: Op,
) -> LiftBinaryOperatorFunctor<L, R, Op> {
    LiftBinaryOperatorFunctor::new(left, right, operator)
}

/// `left(args) || right(args)`, both sides evaluated.
pub type OrFunctor<L, R> = LiftBinaryOperatorFunctor<L, R, Or>;

/// `left(args) && right(args)`, both sides evaluated.
pub type AndFunctor<L, R> = LiftBinaryOperatorFunctor<L, R, And>;

/// True when exactly one of `left(args)` and `right(args)` is true.
pub type XorFunctor<L, R> = LiftBinaryOperatorFunctor<L, R, Xor>;

/// Creates an [`OrFunctor`].
#[inline]
pub const fn make_or_functor<L, R>(left: L, right: R) -> OrFunctor<L, R> {
    LiftBinaryOperatorFunctor::new(left, right, Or)
}

/// Creates an [`AndFunctor`].
#[inline]
pub const fn make_and_functor<L, R>(left: L, right: R) -> AndFunctor<L, R> {
    LiftBinaryOperatorFunctor::new(left, right, And)
}

/// Creates a [`XorFunctor`].
#[inline]
pub const fn make_xor_functor<L, R>(left: L, right: R) -> XorFunctor<L, R> {
    LiftBinaryOperatorFunctor::new(left, right, Xor)
}
