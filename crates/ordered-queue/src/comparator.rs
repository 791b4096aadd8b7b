use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::Sub;

/// A three-way ordering over `T` used to position queue elements.
///
/// `Less` means `a` is ordered before `b` and leaves the queue first.
/// Implementations must be pure: the same pair always yields the same
/// `Ordering` for as long as the queue holds them.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders by `T: Ord`. Smallest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders by the sign of `a - b`.
///
/// Works for any subtractable type with a zero (`T::default()`), including
/// floats. A difference that does not order against zero (NaN) counts as
/// equal. Integer subtraction can overflow for operands far apart; use
/// [`Natural`] for full-range integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Difference;

impl<T> Comparator<T> for Difference
where
    T: Sub<Output = T> + Copy + Default + PartialOrd,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (*a - *b)
            .partial_cmp(&T::default())
            .unwrap_or(Ordering::Equal)
    }
}

/// Inverts the wrapped comparator, turning a min-first queue into a
/// max-first one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders elements by a key extracted from each one.
pub struct ByKey<F, K> {
    key: F,
    _marker: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new<T>(key: F) -> Self
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<T, F, K> Comparator<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, K> std::fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}
