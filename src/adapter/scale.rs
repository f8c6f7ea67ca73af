//! Scaling the result of a functor.

use std::marker::PhantomData;
use std::ops::Mul;

use crate::callable::Callable;

/// Multiplies the result of a functor by a fixed factor.
///
/// `call((x,))` returns `scale * functor(x)`, computed in the result type
/// `R`: both operands are converted into `R` before the multiplication, so a
/// wider `R` holds products that would overflow `S`. `R` defaults to the
/// scale type; pick another one with
/// [`with_return_type`](Self::with_return_type).
///
/// # Examples
///
/// ```rust
/// use functors::adapter::{ScaleFunctor, make_scale_functor};
/// use functors::invoke;
///
/// let doubled_length = make_scale_functor(|text: &str| text.len(), 2_usize);
/// assert_eq!(invoke!(doubled_length, "abc"), 6);
///
/// let widened = ScaleFunctor::<_, u8, u32>::with_return_type(|value: u8| value, 3);
/// assert_eq!(invoke!(widened, 100), 300_u32);
/// ```
pub struct ScaleFunctor<F, S, R = S> {
    functor: F,
    scale: S,
    result: PhantomData<fn() -> R>,
}

impl<F, S> ScaleFunctor<F, S> {
    /// Creates a functor whose result type is the scale type.
    #[inline]
    pub const fn new(functor: F, scale: S) -> Self {
        Self::with_return_type(functor, scale)
    }
}

impl<F, S, R> ScaleFunctor<F, S, R> {
    /// Creates a functor that multiplies in `R`.
    #[inline]
    pub const fn with_return_type(functor: F, scale: S) -> Self {
        Self {
            functor,
            scale,
            result: PhantomData,
        }
    }

    /// Returns the scale factor.
    #[inline]
    pub const fn scale(&self) -> &S {
        &self.scale
    }
}

impl<F: Clone, S: Clone, R> Clone for ScaleFunctor<F, S, R> {
    fn clone(&self) -> Self {
        Self::with_return_type(self.functor.clone(), self.scale.clone())
    }
}

impl<F: Copy, S: Copy, R> Copy for ScaleFunctor<F, S, R> {}

impl<F: std::fmt::Debug, S: std::fmt::Debug, R> std::fmt::Debug for ScaleFunctor<F, S, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ScaleFunctor")
            .field("functor", &self.functor)
            .field("scale", &self.scale)
            .finish()
    }
}

impl<F, S, R, A> Callable<(A,)> for ScaleFunctor<F, S, R>
where
    F: Callable<(A,)>,
    F::Output: Into<R>,
    S: Clone + Into<R>,
    R: Mul<Output = R>,
{
    type Output = R;

    #[inline]
    fn call(&self, (argument,): (A,)) -> R {
        let scale: R = self.scale.clone().into();
        let value: R = self.functor.call((argument,)).into();
        scale * value
    }
}

/// Creates a [`ScaleFunctor`] returning the scale type.
#[inline]
pub const fn make_scale_functor<F, S>(functor: F, scale: S) -> ScaleFunctor<F, S> {
    ScaleFunctor::new(functor, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.5, 3.0)]
    #[case(-2.0, -4.0)]
    fn scales_floating_point_results(#[case] input: f64, #[case] expected: f64) {
        let scaled = make_scale_functor(|value: f64| value, 2.0_f64);
        assert!((scaled.call((input,)) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn scale_is_applied_on_the_left() {
        let scaled = make_scale_functor(|value: i32| value + 1, 10_i32);
        assert_eq!(scaled.call((4,)), 50);
        assert_eq!(*scaled.scale(), 10);
    }

    #[rstest]
    fn product_converts_into_return_type() {
        let widened = ScaleFunctor::<_, i32, i64>::with_return_type(|value: i32| value, 1_000);
        let result: i64 = widened.call((3_000,));
        assert_eq!(result, 3_000_000);
    }

    #[rstest]
    #[case::fits_in_u8(50, 150)]
    #[case::exceeds_u8(100, 300)]
    #[case::largest(255, 765)]
    fn narrow_operands_multiply_in_the_wide_type(#[case] input: u8, #[case] expected: u32) {
        let widened = ScaleFunctor::<_, u8, u32>::with_return_type(|value: u8| value, 3);
        assert_eq!(widened.call((input,)), expected);
    }
}
