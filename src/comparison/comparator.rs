//! Comparing values by a derived key.

use std::cmp::Ordering;

use super::Less;
use crate::callable::Callable;

/// Compares two values by the key a projection functor extracts from them.
///
/// `FunctorToComparator::with_compare(f, c).call((left, right))` returns
/// `c(f(left), f(right))`. The comparator defaults to [`Less`].
///
/// # Examples
///
/// ```rust
/// use functors::comparison::{Greater, make_functor_to_comparator, make_functor_to_comparator_with};
/// use functors::invoke;
///
/// let get_first = |pair: (i32, i32)| pair.0;
///
/// let ascending = make_functor_to_comparator(get_first);
/// assert!(!invoke!(ascending, (1, 2), (0, 1)));
///
/// let descending = make_functor_to_comparator_with(get_first, Greater);
/// assert!(invoke!(descending, (1, 2), (0, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FunctorToComparator<F, C = Less> {
    projection: F,
    compare: C,
}

impl<F> FunctorToComparator<F, Less> {
    /// Creates a comparator ordering values by `projection` in ascending order.
    #[inline]
    pub const fn new(projection: F) -> Self {
        Self {
            projection,
            compare: Less,
        }
    }
}

impl<F, C> FunctorToComparator<F, C> {
    /// Creates a comparator applying `compare` to the projected keys.
    #[inline]
    pub const fn with_compare(projection: F, compare: C) -> Self {
        Self {
            projection,
            compare,
        }
    }

    /// Returns the projection functor.
    #[inline]
    pub const fn projection(&self) -> &F {
        &self.projection
    }

    /// Returns the key comparator.
    #[inline]
    pub const fn compare(&self) -> &C {
        &self.compare
    }
}

impl<F, C, T> Callable<(T, T)> for FunctorToComparator<F, C>
where
    F: Callable<(T,)>,
    C: Callable<(F::Output, F::Output)>,
{
    type Output = C::Output;

    #[inline]
    fn call(&self, (left, right): (T, T)) -> C::Output {
        self.compare
            .call((self.projection.call((left,)), self.projection.call((right,))))
    }
}

/// Creates a [`FunctorToComparator`] ordering by `projection` ascending.
#[inline]
pub const fn make_functor_to_comparator<F>(projection: F) -> FunctorToComparator<F> {
    FunctorToComparator::new(projection)
}

/// Creates a [`FunctorToComparator`] with an explicit key comparator.
#[inline]
pub const fn make_functor_to_comparator_with<F, C>(
    projection: F,
    compare: C,
) -> FunctorToComparator<F, C> {
    FunctorToComparator::with_compare(projection, compare)
}

/// A boolean "comes before" comparator viewed as a total [`Ordering`].
///
/// Implemented for every comparator callable on `(&T, &T)` that returns
/// `bool`. The comparator is expected to be a strict weak ordering: `a` is
/// [`Ordering::Less`] than `b` when `c(a, b)`, [`Ordering::Greater`] when
/// `c(b, a)`, and [`Ordering::Equal`] otherwise.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use functors::comparison::{Greater, StrictWeakOrdering};
///
/// assert_eq!(Greater.ordering(&3, &1), Ordering::Less);
/// assert_eq!(Greater.ordering(&1, &1), Ordering::Equal);
/// ```
pub trait StrictWeakOrdering<T: ?Sized> {
    /// Returns the ordering of `left` relative to `right`.
    fn ordering(&self, left: &T, right: &T) -> Ordering;
}

impl<C, T> StrictWeakOrdering<T> for C
where
    T: ?Sized,
    C: for<'a> Callable<(&'a T, &'a T), Output = bool>,
{
    fn ordering(&self, left: &T, right: &T) -> Ordering {
        if self.call((left, right)) {
            Ordering::Less
        } else if self.call((right, left)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Stably sorts `slice` with a boolean comparator.
///
/// # Examples
///
/// ```rust
/// use functors::comparison::{make_functor_to_comparator, sort_by_comparator};
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_by_comparator(&mut words, &make_functor_to_comparator(|word: &&str| word.len()));
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by_comparator<T, C>(slice: &mut [T], comparator: &C)
where
    C: StrictWeakOrdering<T>,
{
    slice.sort_by(|left, right| comparator.ordering(left, right));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{EqualTo, Greater};
    use rstest::rstest;

    #[rstest]
    fn default_comparator_is_ascending_by_key() {
        let by_length = make_functor_to_comparator(|word: &str| word.len());
        assert!(by_length.call(("a", "bb")));
        assert!(!by_length.call(("bb", "a")));
        assert!(!by_length.call(("aa", "bb")));
    }

    #[rstest]
    fn explicit_comparator_sees_projected_keys() {
        let same_parity = make_functor_to_comparator_with(|value: i32| value % 2, EqualTo);
        assert!(same_parity.call((3, 7)));
        assert!(!same_parity.call((3, 4)));
    }

    #[rstest]
    fn accessors_expose_the_parts() {
        let comparator = FunctorToComparator::with_compare(|value: i32| -value, Greater);
        assert_eq!(comparator.projection().call((4,)), -4);
        assert!(comparator.compare().call((2, 1)));
    }

    #[rstest]
    fn sort_by_comparator_sorts_descending_with_greater() {
        let mut values = vec![3, 1, 2];
        sort_by_comparator(&mut values, &Greater);
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[rstest]
    fn sort_by_comparator_is_stable_for_equal_keys() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let by_first = make_functor_to_comparator(|pair: &(i32, char)| pair.0);
        sort_by_comparator(&mut pairs, &by_first);
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }
}
