use std::marker::PhantomData;

use log::trace;

use super::min_max_heap::MinMaxHeap;
use super::BoundedHeapStrategy;

/// Score-ordered storage for the min- and max-retaining policies.
///
/// Both ends of the min-max heap are reachable in O(1), so the eviction
/// target and the drain head are always cheap whichever end the strategy keeps.
pub struct RankedNodes<T, S>
where
    T: Ord,
    S: BoundedHeapStrategy<T>,
{
    mimxheap: MinMaxHeap<T>,
    capacity: usize,
    _phantom: PhantomData<S>,
}

impl<T, S> RankedNodes<T, S>
where
    T: Ord,
    S: BoundedHeapStrategy<T>,
{
    super::delegate! {
        to self.mimxheap {
            #[inline] pub fn is_empty(&self) -> bool;
            #[inline] pub fn len(&self) -> usize;
            #[inline] pub fn peek_max(&self) -> Option<&T>;
            #[inline] pub fn peek_min(&self) -> Option<&T>;
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mimxheap: MinMaxHeap::with_capacity(capacity),
            capacity,
            _phantom: PhantomData,
        }
    }

    /// Adds `value`, giving up the least favoured element if the heap would overflow.
    /// Returns whatever was dropped: the evicted element or `value` itself.
    ///
    /// `HeapNode` ranks a newer node above an older one with the same score, so
    /// on a score tie at capacity Min rejects the newcomer and keeps the older
    /// node, while Max evicts the older tied minimum.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.mimxheap.len() < self.capacity {
            self.mimxheap.push(value);
            return None;
        }

        // if the element would be lower priority than the last element, dont push
        if let Some(last) = S::peek_last(&self.mimxheap) {
            if last.cmp(&value) == S::ORDERING {
                trace!("rejected incoming node at capacity {}", self.capacity);
                return Some(value);
            }
        }

        trace!("evicting last node at capacity {}", self.capacity);
        Some(S::push_pop_last(&mut self.mimxheap, value))
    }

    /// Pops from the favoured end first. Dropping the iterator clears the heap.
    pub fn drain(&mut self) -> RankedDrain<'_, T, S> {
        RankedDrain {
            mimxheap: &mut self.mimxheap,
            _phantom: PhantomData,
        }
    }
}

pub struct RankedDrain<'a, T, S>
where
    T: Ord,
    S: BoundedHeapStrategy<T>,
{
    mimxheap: &'a mut MinMaxHeap<T>,
    _phantom: PhantomData<S>,
}

impl<T, S> Iterator for RankedDrain<'_, T, S>
where
    T: Ord,
    S: BoundedHeapStrategy<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        S::pop_first(self.mimxheap)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.mimxheap.len();
        (len, Some(len))
    }
}

impl<T, S> ExactSizeIterator for RankedDrain<'_, T, S>
where
    T: Ord,
    S: BoundedHeapStrategy<T>,
{
}

impl<T, S> Drop for RankedDrain<'_, T, S>
where
    T: Ord,
    S: BoundedHeapStrategy<T>,
{
    fn drop(&mut self) {
        self.mimxheap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::{MaxStrategy, MinStrategy};
    use super::*;

    #[test]
    fn test_min_keeps_smallest() {
        let mut heap = RankedNodes::<u32, MinStrategy>::with_capacity(3);
        for v in [5, 1, 9, 2, 7] {
            heap.push(v);
            assert!(heap.len() <= heap.capacity());
        }
        assert_eq!(heap.peek_max(), Some(&5));
        assert_eq!(heap.drain().collect::<Vec<_>>(), vec![1, 2, 5]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_max_keeps_largest() {
        let mut heap = RankedNodes::<u32, MaxStrategy>::with_capacity(3);
        assert_eq!(heap.push(5), None);
        heap.push(1);
        heap.push(9);
        assert_eq!(heap.push(2), Some(1));
        assert_eq!(heap.push(7), Some(2));
        assert_eq!(heap.push(0), Some(0));
        assert_eq!(heap.peek_min(), Some(&5));
        assert_eq!(heap.drain().collect::<Vec<_>>(), vec![9, 7, 5]);
    }

    #[test]
    fn test_score_ties_at_capacity() {
        use super::super::HeapNode;

        let mut min = RankedNodes::<HeapNode<char, u32>, MinStrategy>::with_capacity(2);
        let mut max = RankedNodes::<HeapNode<char, u32>, MaxStrategy>::with_capacity(2);
        for (seq, key) in ['a', 'b', 'c'].into_iter().enumerate() {
            let min_dropped = min.push(HeapNode::new(key, 1, seq as u64));
            let max_dropped = max.push(HeapNode::new(key, 1, seq as u64));
            if key == 'c' {
                assert_eq!(min_dropped.map(HeapNode::into_key), Some('c'));
                assert_eq!(max_dropped.map(HeapNode::into_key), Some('a'));
            }
        }
        assert_eq!(min.drain().map(HeapNode::into_key).collect::<String>(), "ab");
        assert_eq!(max.drain().map(HeapNode::into_key).collect::<String>(), "cb");
    }

    #[test]
    fn test_dropped_drain_clears() {
        let mut heap = RankedNodes::<u32, MaxStrategy>::with_capacity(4);
        for v in 0..4 {
            heap.push(v);
        }
        let mut drain = heap.drain();
        assert_eq!(drain.len(), 4);
        assert_eq!(drain.next(), Some(3));
        drop(drain);
        assert!(heap.is_empty());
    }
}
