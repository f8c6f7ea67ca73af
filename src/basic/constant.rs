//! Functors that ignore their arguments and return a fixed value.

use std::marker::PhantomData;

use crate::callable::Callable;

/// A type that carries a compile-time constant.
///
/// Rust const generics admit integers, `bool` and `char`, so the marker
/// types below cover exactly those. Implement this trait on your own unit
/// type to make any other `const`-constructible value available to
/// [`ReturnSomethingFunctor`].
///
/// # Examples
///
/// ```rust
/// use functors::basic::{ConstValue, ReturnSomethingFunctor};
/// use functors::invoke;
///
/// struct Greeting;
///
/// impl ConstValue for Greeting {
///     type Value = &'static str;
///     const VALUE: &'static str = "hello";
/// }
///
/// let greet = ReturnSomethingFunctor::<Greeting>::new();
/// assert_eq!(invoke!(greet, 1, 2), "hello");
/// ```
pub trait ConstValue {
    /// The type of the constant.
    type Value;

    /// The constant itself.
    const VALUE: Self::Value;
}

macro_rules! define_const_markers {
    ($($name:ident => $value_type:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Marker carrying a compile-time `" $value_type "` constant."]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
                pub struct [<Const $name>]<const V: $value_type>;

                impl<const V: $value_type> ConstValue for [<Const $name>]<V> {
                    type Value = $value_type;
                    const VALUE: $value_type = V;
                }
            )*
        }
    };
}

define_const_markers! {
    Bool => bool,
    Char => char,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    I128 => i128,
    Isize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    U128 => u128,
    Usize => usize,
}

/// Returns the compile-time constant carried by `K`, whatever it is called with.
///
/// # Examples
///
/// ```rust
/// use functors::basic::{ConstI32, ReturnSomethingFunctor};
/// use functors::callable::Callable;
///
/// let five = ReturnSomethingFunctor::<ConstI32<5>>::new();
/// assert_eq!(five.call(()), 5);
/// assert_eq!(five.call((1, "two", 3.0)), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReturnSomethingFunctor<K>(PhantomData<K>);

impl<K> ReturnSomethingFunctor<K> {
    /// Creates the functor.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K, Args> Callable<Args> for ReturnSomethingFunctor<K>
where
    K: ConstValue,
{
    type Output = K::Value;

    #[inline]
    fn call(&self, _arguments: Args) -> K::Value {
        K::VALUE
    }
}

/// Always returns `true`.
pub type ReturnTrueFunctor = ReturnSomethingFunctor<ConstBool<true>>;

/// Always returns `false`.
pub type ReturnFalseFunctor = ReturnSomethingFunctor<ConstBool<false>>;

/// Always returns `0i32`.
pub type ReturnZeroFunctor = ReturnSomethingFunctor<ConstI32<0>>;

/// Returns a value chosen at run time, whatever it is called with.
///
/// Each call returns a clone of the captured value.
///
/// # Examples
///
/// ```rust
/// use functors::basic::make_dynamic_return_something_functor;
/// use functors::invoke;
///
/// let name = make_dynamic_return_something_functor(String::from("functors"));
/// assert_eq!(invoke!(name), "functors");
/// assert_eq!(invoke!(name, 42), "functors");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DynamicReturnSomethingFunctor<T> {
    value: T,
}

impl<T> DynamicReturnSomethingFunctor<T> {
    /// Creates a functor returning `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the captured value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T, Args> Callable<Args> for DynamicReturnSomethingFunctor<T>
where
    T: Clone,
{
    type Output = T;

    #[inline]
    fn call(&self, _arguments: Args) -> T {
        self.value.clone()
    }
}

/// Creates a [`DynamicReturnSomethingFunctor`] returning `value`.
#[inline]
pub const fn make_dynamic_return_something_functor<T>(value: T) -> DynamicReturnSomethingFunctor<T> {
    DynamicReturnSomethingFunctor::new(value)
}
