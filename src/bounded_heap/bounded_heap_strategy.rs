use std::cmp::Ordering;

use super::min_max_heap::MinMaxHeap;

/// Which end of a min-max heap a ranked policy keeps, and which end it gives up on overflow.
///
/// "first" is the most favoured element (the head of the drain order), "last"
/// is the least favoured one (the eviction target).
pub trait BoundedHeapStrategy<T>
where
    T: Ord,
{
    const ORDERING: Ordering;

    fn peek_last(heap: &MinMaxHeap<T>) -> Option<&T>;

    fn pop_first(heap: &mut MinMaxHeap<T>) -> Option<T>;
    fn push_pop_last(heap: &mut MinMaxHeap<T>, value: T) -> T;
}

pub struct MinStrategy;
impl<T> BoundedHeapStrategy<T> for MinStrategy
where
    T: Ord,
{
    // For a min strategy, we want to keep smaller elements and discard larger ones
    // When comparing last.cmp(&value), if last is smaller than value, value is rejected
    // Therefore ORDERING should be Less
    const ORDERING: Ordering = Ordering::Less;

    #[inline]
    fn peek_last(heap: &MinMaxHeap<T>) -> Option<&T> {
        heap.peek_max()
    }

    #[inline]
    fn pop_first(heap: &mut MinMaxHeap<T>) -> Option<T> {
        heap.pop_min()
    }

    #[inline]
    fn push_pop_last(heap: &mut MinMaxHeap<T>, value: T) -> T {
        heap.push_pop_max(value)
    }
}

pub struct MaxStrategy;
impl<T> BoundedHeapStrategy<T> for MaxStrategy
where
    T: Ord,
{
    // For a max strategy, we want to keep larger elements and discard smaller ones
    // When comparing last.cmp(&value), if last is greater than value, value is rejected
    // Therefore ORDERING should be Greater
    const ORDERING: Ordering = Ordering::Greater;

    #[inline]
    fn peek_last(heap: &MinMaxHeap<T>) -> Option<&T> {
        heap.peek_min()
    }

    #[inline]
    fn pop_first(heap: &mut MinMaxHeap<T>) -> Option<T> {
        heap.pop_max()
    }

    #[inline]
    fn push_pop_last(heap: &mut MinMaxHeap<T>, value: T) -> T {
        heap.push_pop_min(value)
    }
}
