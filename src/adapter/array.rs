//! Indexable sequences as functors.

use std::ops::Index;

use crate::callable::Callable;

/// Exposes an indexable sequence as a function from index to element.
///
/// `call((index,))` returns `&sequence[index + offset]`. The offset is
/// signed, so `-1` maps 1-based indices onto a 0-based sequence. The
/// sequence is borrowed, so it cannot change or go away while the adapter
/// exists.
///
/// # Panics
///
/// Calling with an index whose shifted position is out of bounds panics
/// with the sequence's own `Index` error. A shifted position below zero or
/// past `usize::MAX` is treated as `usize::MAX`, so it is out of bounds too.
/// Keeping the position in range is the caller's job.
///
/// # Examples
///
/// ```rust
/// use functors::adapter::{make_array_to_functor, make_array_to_functor_with_offset};
/// use functors::invoke;
///
/// let values = vec![1, 2, 3];
///
/// let plain = make_array_to_functor(&values);
/// assert_eq!(*invoke!(plain, 1), 2);
///
/// let shifted = make_array_to_functor_with_offset(&values, 1);
/// assert_eq!(*invoke!(shifted, 1), 3);
///
/// let one_based = make_array_to_functor_with_offset(&values, -1);
/// assert_eq!(*invoke!(one_based, 1), 1);
/// ```
#[derive(Debug)]
pub struct ArrayToFunctor<'a, A: ?Sized> {
    sequence: &'a A,
    offset: isize,
}

impl<'a, A: ?Sized> ArrayToFunctor<'a, A> {
    /// Creates an adapter over `sequence` with no offset.
    #[inline]
    pub const fn new(sequence: &'a A) -> Self {
        Self::with_offset(sequence, 0)
    }

    /// Creates an adapter that shifts every index by `offset`.
    #[inline]
    pub const fn with_offset(sequence: &'a A, offset: isize) -> Self {
        Self { sequence, offset }
    }

    /// Returns the offset added to every index.
    #[inline]
    pub const fn offset(&self) -> isize {
        self.offset
    }

    /// Returns the wrapped sequence.
    #[inline]
    pub const fn sequence(&self) -> &'a A {
        self.sequence
    }
}

impl<A: ?Sized> Clone for ArrayToFunctor<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for ArrayToFunctor<'_, A> {}

impl<'a, A> Callable<(usize,)> for ArrayToFunctor<'a, A>
where
    A: Index<usize> + ?Sized,
{
    type Output = &'a A::Output;

    #[inline]
    fn call(&self, (index,): (usize,)) -> &'a A::Output {
        let sequence = self.sequence;
        let position = index.checked_add_signed(self.offset).unwrap_or(usize::MAX);
        &sequence[position]
    }
}

/// Creates an [`ArrayToFunctor`] with no offset.
#[inline]
pub const fn make_array_to_functor<A: ?Sized>(sequence: &A) -> ArrayToFunctor<'_, A> {
    ArrayToFunctor::new(sequence)
}

/// Creates an [`ArrayToFunctor`] shifting every index by `offset`.
#[inline]
pub const fn make_array_to_functor_with_offset<A: ?Sized>(
    sequence: &A,
    offset: isize,
) -> ArrayToFunctor<'_, A> {
    ArrayToFunctor::with_offset(sequence, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first(0, 0, 10)]
    #[case::last(2, 0, 30)]
    #[case::shifted(0, 2, 30)]
    #[case::shifted_middle(1, 1, 30)]
    #[case::one_based(1, -1, 10)]
    #[case::one_based_last(3, -1, 30)]
    fn reads_element_at_shifted_index(
        #[case] index: usize,
        #[case] offset: isize,
        #[case] expected: i32,
    ) {
        let values = [10, 20, 30];
        let functor = make_array_to_functor_with_offset(&values[..], offset);
        assert_eq!(*functor.call((index,)), expected);
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn position_below_zero_panics() {
        let values = vec![1, 2, 3];
        let functor = make_array_to_functor_with_offset(&values, -1);
        let _ = functor.call((0,));
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn position_past_usize_max_panics() {
        let values = vec![1, 2, 3];
        let functor = make_array_to_functor_with_offset(&values, isize::MAX);
        let _ = functor.call((usize::MAX,));
    }

    #[rstest]
    fn works_over_any_index_impl() {
        let text = String::from("hello");
        let bytes = make_array_to_functor(text.as_bytes());
        assert_eq!(*bytes.call((1,)), b'e');
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_range_position_panics() {
        let values = vec![1, 2, 3];
        let functor = make_array_to_functor_with_offset(&values, 2);
        let _ = functor.call((1,));
    }

    #[rstest]
    fn output_outlives_the_adapter() {
        let values = vec![String::from("a"), String::from("b")];
        let element = {
            let functor = make_array_to_functor(&values);
            functor.call((1,))
        };
        assert_eq!(element, "b");
        assert_eq!(make_array_to_functor(&values).offset(), 0);
    }
}
