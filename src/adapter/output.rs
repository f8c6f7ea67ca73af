//! A write-only sequence sink that calls a functor for every value written.

use crate::callable::Callable;

/// A sink whose every write calls the wrapped functor once.
///
/// It stands in wherever an algorithm writes a sequence of results but the
/// real intent is "call this function once per produced value". Writes go
/// through [`assign`](Self::assign) or through [`Extend`], and happen in
/// order. [`advance`](Self::advance) exists for cursor-shaped code and does
/// nothing: the sink never changes position.
///
/// Functors are called through `&self`, so a callback that counts or
/// collects keeps its state in a [`Cell`](std::cell::Cell) or
/// [`RefCell`](std::cell::RefCell).
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use functors::adapter::make_functor_to_output_iterator;
///
/// let written = Cell::new(0);
/// let mut counting_sink = make_functor_to_output_iterator(|_: i32| written.set(written.get() + 1));
///
/// counting_sink.extend(vec![0; 10]);
/// assert_eq!(written.get(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FunctorToOutputIterator<F> {
    functor: F,
}

impl<F> FunctorToOutputIterator<F> {
    /// Creates a sink calling `functor` for every value written.
    #[inline]
    pub const fn new(functor: F) -> Self {
        Self { functor }
    }

    /// Writes one value, calling the functor with it.
    #[inline]
    pub fn assign<T>(&mut self, value: T) -> &mut Self
    where
        F: Callable<(T,)>,
    {
        self.functor.call((value,));
        self
    }

    /// Moves to the next slot. A no-op.
    #[inline]
    pub const fn advance(&mut self) -> &mut Self {
        self
    }

    /// Consumes the sink and returns the wrapped functor.
    #[inline]
    pub fn into_inner(self) -> F {
        self.functor
    }
}

impl<F, T> Extend<T> for FunctorToOutputIterator<F>
where
    F: Callable<(T,)>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.assign(value).advance();
        }
    }
}

/// Creates a [`FunctorToOutputIterator`] around `functor`.
#[inline]
pub const fn make_functor_to_output_iterator<F>(functor: F) -> FunctorToOutputIterator<F> {
    FunctorToOutputIterator::new(functor)
}
