use std::convert::Infallible;

/// A total preorder test: `le(a, b)` is true when `a` must not come after `b`.
///
/// Merges take the left element whenever `le(left, right)` holds, so equal
/// elements keep their input order.
pub trait Comparator<T: ?Sized> {
    type Error;

    fn le(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

/// `a <= b` under [`PartialOrd`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Comparator<T> for Natural {
    type Error = Infallible;

    #[inline]
    fn le(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a <= b)
    }
}

/// Wraps an `FnMut(&T, &T) -> bool`.
#[derive(Clone, Copy, Debug)]
pub struct ByLe<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for ByLe<F>
where
    F: FnMut(&T, &T) -> bool,
{
    type Error = Infallible;

    #[inline]
    fn le(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.0)(a, b))
    }
}

/// Wraps an `FnMut(&T, &T) -> Result<bool, E>` for comparators that can fail.
#[derive(Clone, Copy, Debug)]
pub struct TryByLe<F>(pub F);

impl<T: ?Sized, E, F> Comparator<T> for TryByLe<F>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    #[inline]
    fn le(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.0)(a, b)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &mut C {
    type Error = C::Error;

    #[inline]
    fn le(&mut self, a: &T, b: &T) -> Result<bool, C::Error> {
        (**self).le(a, b)
    }
}
