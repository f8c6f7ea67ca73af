//! Applying a functor to the value behind a cursor.

use std::ops::Deref;

use crate::callable::Callable;

/// Lifts a functor from values to cursors pointing at values.
///
/// `call((cursor,))` dereferences `cursor` and hands the functor a reference
/// to the target, so it accepts `&T`, `Box<T>`, `Rc<T>` or any other
/// [`Deref`] type and never copies the value. The functor must take `&T`.
/// [`apply_next`](Self::apply_next) is the Rust iterator form: it advances an
/// iterator by one and applies the functor to the item.
///
/// # Examples
///
/// ```rust
/// use functors::adapter::make_lift_iterator_functor;
/// use functors::invoke;
///
/// let length = make_lift_iterator_functor(|text: &String| text.len());
/// let owned = Box::new(String::from("four"));
/// assert_eq!(invoke!(length, &String::from("abc")), 3);
/// assert_eq!(invoke!(length, owned), 4);
///
/// let words = vec![String::from("x")];
/// let mut cursor = words.iter();
/// assert_eq!(length.apply_next(&mut cursor), Some(1));
/// assert_eq!(length.apply_next(&mut cursor), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LiftIteratorFunctor<F> {
    functor: F,
}

impl<F> LiftIteratorFunctor<F> {
    /// Creates the lifted functor.
    #[inline]
    pub const fn new(functor: F) -> Self {
        Self { functor }
    }

    /// Takes the next item of `iterator` and applies the functor to it.
    ///
    /// Returns `None` once the iterator is exhausted.
    pub fn apply_next<I>(&self, iterator: &mut I) -> Option<F::Output>
    where
        I: Iterator,
        F: Callable<(I::Item,)>,
    {
        iterator.next().map(|item| self.functor.call((item,)))
    }
}

impl<F, P, Return> Callable<(P,)> for LiftIteratorFunctor<F>
where
    P: Deref,
    F: for<'x> Callable<(&'x P::Target,), Output = Return>,
{
    type Output = Return;

    #[inline]
    fn call(&self, (cursor,): (P,)) -> Return {
        self.functor.call((&*cursor,))
    }
}

/// Creates a [`LiftIteratorFunctor`] around `functor`.
#[inline]
pub const fn make_lift_iterator_functor<F>(functor: F) -> LiftIteratorFunctor<F> {
    LiftIteratorFunctor::new(functor)
}
