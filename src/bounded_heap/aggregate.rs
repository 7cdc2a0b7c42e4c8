//! Scoring of raw item data.
//!
//! An aggregator turns whatever a caller inserts into a single orderable
//! score. `BoundedHeap::new` falls back to [`Aggregate::aggregate`] when no
//! aggregator is given: collections sum their elements and plain numbers
//! score as themselves, so pre-aggregated data needs no extra step.

use std::iter::Sum;

/// Boxed scoring function bound to a heap at construction.
pub type Aggregator<D, S> = Box<dyn Fn(&D) -> S>;

/// Default scoring for data inserted without an explicit aggregator.
pub trait Aggregate<S> {
    fn aggregate(&self) -> S;
}

impl<T, S> Aggregate<S> for Vec<T>
where
    T: Clone,
    S: Sum<T>,
{
    #[inline]
    fn aggregate(&self) -> S {
        self.iter().cloned().sum()
    }
}

impl<T, S> Aggregate<S> for Box<[T]>
where
    T: Clone,
    S: Sum<T>,
{
    #[inline]
    fn aggregate(&self) -> S {
        self.iter().cloned().sum()
    }
}

impl<T, S, const N: usize> Aggregate<S> for [T; N]
where
    T: Clone,
    S: Sum<T>,
{
    #[inline]
    fn aggregate(&self) -> S {
        self.iter().cloned().sum()
    }
}

macro_rules! impl_aggregate_identity {
    ($($t:ty),*) => {
        $(
            impl Aggregate<$t> for $t {
                #[inline]
                fn aggregate(&self) -> $t {
                    *self
                }
            }
        )*
    };
}
impl_aggregate_identity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Boxes [`Aggregate::aggregate`] for `D`.
pub fn by_default<D, S>() -> Aggregator<D, S>
where
    D: Aggregate<S> + 'static,
    S: 'static,
{
    Box::new(|data: &D| data.aggregate())
}

/// Sum of all elements.
pub fn sum<T, S>() -> Aggregator<Vec<T>, S>
where
    T: Clone + 'static,
    S: Sum<T> + 'static,
{
    Box::new(|data: &Vec<T>| data.iter().cloned().sum())
}

/// Arithmetic mean. An empty collection scores NaN and is rejected on insert.
pub fn mean<T>() -> Aggregator<Vec<T>, f64>
where
    T: Clone + Into<f64> + 'static,
{
    Box::new(|data: &Vec<T>| {
        let total: f64 = data.iter().cloned().map(Into::into).sum();
        total / data.len() as f64
    })
}

/// Data that is already a score.
pub fn identity<S>() -> Aggregator<S, S>
where
    S: Clone + 'static,
{
    Box::new(|data: &S| data.clone())
}
