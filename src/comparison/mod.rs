//! Comparison predicates and key-based comparators.
//!
//! The six comparison functors are stateless binary predicates with the same
//! meaning as the corresponding operators of the argument type. Unlike a
//! closure they are nameable types, so they can be stored in structs and
//! used as type parameters (for example `FunctorToComparator<F, Greater>`).
//!
//! | Functor          | Operator | Bound        |
//! |------------------|----------|--------------|
//! | [`Greater`]      | `>`      | `PartialOrd` |
//! | [`Less`]         | `<`      | `PartialOrd` |
//! | [`GreaterEqual`] | `>=`     | `PartialOrd` |
//! | [`LessEqual`]    | `<=`     | `PartialOrd` |
//! | [`EqualTo`]      | `==`     | `PartialEq`  |
//! | [`NotEqualTo`]   | `!=`     | `PartialEq`  |
//!
//! [`FunctorToComparator`] compares two values by a derived key, and
//! [`StrictWeakOrdering`] turns any boolean "less than" comparator into a
//! [`std::cmp::Ordering`] so it can drive `slice::sort_by`.
//!
//! # Examples
//!
//! ```rust
//! use functors::comparison::{Greater, Less};
//! use functors::invoke;
//!
//! assert!(invoke!(Less, 1, 2));
//! assert!(!invoke!(Greater, 1, 1));
//! assert!(invoke!(Greater, "b", "a"));
//! ```

mod comparator;

pub use comparator::{
    FunctorToComparator, StrictWeakOrdering, make_functor_to_comparator,
    make_functor_to_comparator_with, sort_by_comparator,
};

use crate::callable::Callable;

macro_rules! define_comparison {
    ($(#[$meta:meta])* $name:ident, $bound:ident, $operator:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name;

        impl<T> Callable<(T, T)> for $name
        where
            T: $bound,
        {
            type Output = bool;

            #[inline]
            fn call(&self, (left, right): (T, T)) -> bool {
                left $operator right
            }
        }

        static_assertions::assert_impl_all!($name: Send, Sync, Copy, Default);
    };
}

define_comparison!(
    /// `left > right`.
    Greater, PartialOrd, >
);

define_comparison!(
    /// `left < right`. The default comparator of [`FunctorToComparator`].
    Less, PartialOrd, <
);

define_comparison!(
    /// `left >= right`.
    GreaterEqual, PartialOrd, >=
);

define_comparison!(
    /// `left <= right`.
    LessEqual, PartialOrd, <=
);

define_comparison!(
    /// `left == right`.
    EqualTo, PartialEq, ==
);

define_comparison!(
    /// `left != right`.
    NotEqualTo, PartialEq, !=
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::smaller(1, 2, false, false, true, true, false, true)]
    #[case::equal(1, 1, false, true, false, true, true, false)]
    #[case::larger(2, 1, true, true, false, false, false, true)]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    fn comparisons_match_operators(
        #[case] left: i32,
        #[case] right: i32,
        #[case] greater: bool,
        #[case] greater_equal: bool,
        #[case] less: bool,
        #[case] less_equal: bool,
        #[case] equal: bool,
        #[case] not_equal: bool,
    ) {
        assert_eq!(Greater.call((left, right)), greater);
        assert_eq!(GreaterEqual.call((left, right)), greater_equal);
        assert_eq!(Less.call((left, right)), less);
        assert_eq!(LessEqual.call((left, right)), less_equal);
        assert_eq!(EqualTo.call((left, right)), equal);
        assert_eq!(NotEqualTo.call((left, right)), not_equal);
    }

    #[rstest]
    fn comparisons_work_on_references() {
        let first = String::from("apple");
        let second = String::from("banana");
        assert!(Less.call((&first, &second)));
        assert!(NotEqualTo.call((&first, &second)));
    }

    #[rstest]
    fn partial_order_follows_the_type() {
        assert!(!Less.call((f64::NAN, 1.0)));
        assert!(!GreaterEqual.call((f64::NAN, 1.0)));
        assert!(NotEqualTo.call((f64::NAN, f64::NAN)));
    }
}
