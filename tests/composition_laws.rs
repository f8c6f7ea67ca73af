//! Property-based tests for the composition functors and adapters.
//!
//! This module verifies the defining equations of each composite:
//!
//! ## Composition Laws
//! - **Lift Definition**: `Lift(l, r, op)(args) == op(l(args), r(args))`
//! - **Double Negation**: `NotFunctor(NotFunctor(f))(args) == f(args)`
//! - **De Morgan**: `NotFunctor(AndFunctor(f, g)) == OrFunctor(NotFunctor(f), NotFunctor(g))`
//! - **Xor Definition**: `XorFunctor(f, g)(args) == (f(args) != g(args))`
//!
//! ## Basic Functor Laws
//! - **Identity**: `IdentityFunctor(x) == x`
//! - **Constant**: `ReturnSomethingFunctor<K>(args) == K::VALUE`
//!
//! ## Adapter Laws
//! - **Array Offset**: `ArrayToFunctor(seq, offset)(i) == seq[i + offset]`, for signed offsets
//! - **Sink Count**: writing N values calls the functor N times, in order
//! - **Scale**: `ScaleFunctor(f, s)(x) == s * f(x)`
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use std::cell::RefCell;

use functors::adapter::{
    make_array_to_functor_with_offset, make_functor_to_output_iterator, make_scale_functor,
};
use functors::basic::{ConstI64, ConstValue, IdentityFunctor, ReturnSomethingFunctor};
use functors::callable::Callable;
use functors::composition::{
    make_and_functor, make_lift_binary_operator_functor, make_not_functor, make_or_functor,
    make_xor_functor,
};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Lift definition on a binary argument list
    #[test]
    fn prop_lift_definition(x in any::<i32>(), y in any::<i32>()) {
        let left = |a: i32, b: i32| a.wrapping_add(b);
        let right = |a: i32, b: i32| a.wrapping_mul(b);
        let operator = |p: i32, q: i32| p.wrapping_sub(q);

        let lifted = make_lift_binary_operator_functor(left, right, operator);

        prop_assert_eq!(lifted.call((x, y)), operator(left(x, y), right(x, y)));
    }

    /// Lift definition on a single owned argument that must be cloned
    #[test]
    fn prop_lift_definition_owned(text in ".{0,32}") {
        let lifted = make_lift_binary_operator_functor(
            |value: String| value.len(),
            |value: String| value.chars().count(),
            |bytes: usize, characters: usize| bytes >= characters,
        );

        prop_assert!(lifted.call((text,)));
    }

    /// Double negation gives back the predicate
    #[test]
    fn prop_double_negation(x in any::<i32>()) {
        let is_even = |value: i32| value % 2 == 0;
        let twice = make_not_functor(make_not_functor(is_even));

        prop_assert_eq!(twice.call((x,)), is_even(x));
    }

    /// De Morgan's law holds for the logical combinators
    #[test]
    fn prop_de_morgan(x in any::<i32>()) {
        let is_even = |value: i32| value % 2 == 0;
        let is_positive = |value: i32| value > 0;

        let negated_and = make_not_functor(make_and_functor(is_even, is_positive));
        let or_of_negations = make_or_functor(make_not_functor(is_even), make_not_functor(is_positive));

        prop_assert_eq!(negated_and.call((x,)), or_of_negations.call((x,)));
    }

    /// XorFunctor is true exactly when the two predicates disagree
    #[test]
    fn prop_xor_definition(x in any::<i32>()) {
        let is_even = |value: i32| value % 2 == 0;
        let is_small = |value: i32| value.unsigned_abs() < 1_000;

        let either = make_xor_functor(is_even, is_small);

        prop_assert_eq!(either.call((x,)), is_even(x) != is_small(x));
    }
}

// =============================================================================
// Basic Functor Laws
// =============================================================================

proptest! {
    /// IdentityFunctor returns its argument
    #[test]
    fn prop_identity(x in any::<i64>(), text in ".*") {
        prop_assert_eq!(IdentityFunctor.call((x,)), x);
        prop_assert_eq!(IdentityFunctor.call((text.clone(),)), text);
    }

    /// A constant functor returns its constant whatever the arguments
    #[test]
    fn prop_constant(x in any::<i32>(), text in ".*") {
        let constant = ReturnSomethingFunctor::<ConstI64<42>>::new();
        let expected = <ConstI64<42> as ConstValue>::VALUE;

        prop_assert_eq!(constant.call(()), expected);
        prop_assert_eq!(constant.call((x,)), expected);
        prop_assert_eq!(constant.call((x, text)), expected);
    }
}

// =============================================================================
// Adapter Laws
// =============================================================================

proptest! {
    /// ArrayToFunctor reads at index + offset
    #[test]
    fn prop_array_offset(
        (values, offset, index) in prop::collection::vec(any::<i32>(), 1..32)
            .prop_flat_map(|values| {
                let length = values.len();
                (Just(values), 0..length)
            })
            .prop_flat_map(|(values, offset)| {
                let remaining = values.len() - offset;
                (Just(values), Just(offset), 0..remaining)
            })
    ) {
        let functor = make_array_to_functor_with_offset(&values, offset as isize);
        prop_assert_eq!(*functor.call((index,)), values[index + offset]);
    }

    /// A signed offset reads at index + offset, including negative shifts
    #[test]
    fn prop_array_signed_offset(
        (values, index, position) in prop::collection::vec(any::<i32>(), 1..32)
            .prop_flat_map(|values| {
                let length = values.len();
                (Just(values), 0..length, 0..length)
            })
    ) {
        let offset = position as isize - index as isize;
        let functor = make_array_to_functor_with_offset(&values, offset);
        prop_assert_eq!(*functor.call((index,)), values[position]);
    }

    /// Writing N values into the sink calls the functor N times, in order
    #[test]
    fn prop_sink_calls_in_order(values in prop::collection::vec(any::<u16>(), 0..64)) {
        let received = RefCell::new(Vec::new());
        let mut sink = make_functor_to_output_iterator(|value: u16| received.borrow_mut().push(value));

        sink.extend(values.iter().copied());

        prop_assert_eq!(received.into_inner(), values);
    }

    /// ScaleFunctor multiplies the inner result by the factor
    #[test]
    fn prop_scale(x in -1_000_i64..1_000, factor in -1_000_i64..1_000) {
        let square = |value: i64| value * value;
        let scaled = make_scale_functor(square, factor);

        prop_assert_eq!(scaled.call((x,)), factor * square(x));
    }
}
