use std::fmt;

use log::debug;

use super::aggregate::{self, Aggregate, Aggregator};
use super::node::HeapNode;
use super::policy::{Policy, Retention, RetentionDrain};
use crate::runtime::{HeapConfig, HeapError};

/// Keeps the `limit` most favoured of an unbounded stream of keyed items.
///
/// Every inserted item is scored by the heap's aggregator; the bound
/// [`Policy`] decides which node gives way once more than `limit` are held
/// and in which order [`BoundedHeap::drain`] hands the keys back.
pub struct BoundedHeap<K, D, S = f64>
where
    S: PartialOrd,
{
    retention: Retention<HeapNode<K, S>>,
    limit: usize,
    aggregator: Aggregator<D, S>,
    next_seq: u64,
}

impl<K, D, S> BoundedHeap<K, D, S>
where
    D: Aggregate<S> + 'static,
    S: PartialOrd + 'static,
{
    /// Builds a heap scoring with `aggregator`, or with `D::aggregate` when none is given.
    pub fn new(
        policy: Policy,
        limit: usize,
        aggregator: Option<Aggregator<D, S>>,
    ) -> Result<Self, HeapError> {
        let aggregator = aggregator.unwrap_or_else(aggregate::by_default);
        Self::from_parts(&HeapConfig::new(policy, limit), aggregator)
    }
}

impl<K, D, S> BoundedHeap<K, D, S>
where
    S: PartialOrd,
{
    pub fn with_aggregator<F>(policy: Policy, limit: usize, aggregator: F) -> Result<Self, HeapError>
    where
        F: Fn(&D) -> S + 'static,
    {
        Self::from_parts(&HeapConfig::new(policy, limit), Box::new(aggregator))
    }

    pub fn from_parts(config: &HeapConfig, aggregator: Aggregator<D, S>) -> Result<Self, HeapError> {
        config.validate()?;
        debug!(
            "creating {} heap with limit {}",
            config.policy.name(),
            config.limit
        );

        Ok(Self {
            retention: Retention::new(config.policy, config.limit, config.seed),
            limit: config.limit,
            aggregator,
            next_seq: 0,
        })
    }

    /// Scores `data` and offers the node to the policy.
    ///
    /// Fails without touching the heap if the score does not compare with itself (e.g. NaN).
    pub fn insert(&mut self, key: K, data: D) -> Result<(), HeapError> {
        let score = (self.aggregator)(&data);
        if score.partial_cmp(&score).is_none() {
            return Err(HeapError::contract_violation(Some(
                "aggregator returned a score without a total order",
            )));
        }

        let node = HeapNode::new(key, score, self.next_seq);
        self.next_seq += 1;
        self.retention.push(node);

        debug_assert!(self.len() <= self.limit);
        Ok(())
    }

    /// Runs the bound aggregator on `data` without inserting anything.
    #[inline]
    pub fn score(&self, data: &D) -> S {
        (self.aggregator)(data)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.retention.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.retention.policy()
    }

    /// Removes every retained key in policy order.
    ///
    /// The heap is empty once the iterator is exhausted or dropped; draining
    /// again yields nothing.
    pub fn drain(&mut self) -> Drain<'_, K, S> {
        Drain {
            inner: self.drain_nodes(),
        }
    }

    /// Like [`BoundedHeap::drain`], keeping the scores.
    pub fn drain_nodes(&mut self) -> DrainNodes<'_, K, S> {
        debug!("draining {} nodes from {}", self.len(), self);
        DrainNodes {
            inner: self.retention.drain(),
        }
    }
}

impl<K, D, S> fmt::Display for BoundedHeap<K, D, S>
where
    S: PartialOrd,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heap-{}: [{}/{}]", self.policy(), self.len(), self.limit)
    }
}

impl<K, D, S> fmt::Debug for BoundedHeap<K, D, S>
where
    S: PartialOrd,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedHeap")
            .field("policy", &self.policy())
            .field("len", &self.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl<K, D, S> IntoIterator for BoundedHeap<K, D, S>
where
    S: PartialOrd,
{
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.drain().collect::<Vec<_>>().into_iter()
    }
}

pub struct DrainNodes<'a, K, S>
where
    S: PartialOrd,
{
    inner: RetentionDrain<'a, HeapNode<K, S>>,
}

impl<K, S> Iterator for DrainNodes<'_, K, S>
where
    S: PartialOrd,
{
    type Item = HeapNode<K, S>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, S> ExactSizeIterator for DrainNodes<'_, K, S> where S: PartialOrd {}

pub struct Drain<'a, K, S>
where
    S: PartialOrd,
{
    inner: DrainNodes<'a, K, S>,
}

impl<K, S> Iterator for Drain<'_, K, S>
where
    S: PartialOrd,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.inner.next().map(HeapNode::into_key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, S> ExactSizeIterator for Drain<'_, K, S> where S: PartialOrd {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_of(policy: Policy, limit: usize, input: &[i64]) -> Vec<i64> {
        let mut heap = BoundedHeap::<usize, i64, i64>::new(policy, limit, None).unwrap();
        for (key, score) in input.iter().enumerate() {
            heap.insert(key, *score).unwrap();
        }
        heap.drain_nodes().map(|node| *node.score()).collect()
    }

    #[test]
    fn test_max_scenario() {
        assert_eq!(scores_of(Policy::Max, 3, &[5, 1, 9, 2, 7]), vec![9, 7, 5]);
    }

    #[test]
    fn test_min_scenario() {
        assert_eq!(scores_of(Policy::Min, 3, &[5, 1, 9, 2, 7]), vec![1, 2, 5]);
    }

    #[test]
    fn test_zero_limit_rejected() {
        for policy in Policy::ALL {
            let heap = BoundedHeap::<u8, i64, i64>::new(policy, 0, None);
            assert!(matches!(
                heap,
                Err(HeapError::InvalidConfiguration { limit: 0, .. })
            ));
        }
    }

    #[test]
    fn test_nan_rejected() {
        let mut heap = BoundedHeap::<&str, Vec<f64>>::new(Policy::Max, 2, None).unwrap();
        heap.insert("ok", vec![1.0, 2.0]).unwrap();

        let err = heap.insert("nan", vec![f64::NAN]).unwrap_err();
        assert!(matches!(err, HeapError::ContractViolation { .. }));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.drain().collect::<Vec<_>>(), vec!["ok"]);
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        let mut min = BoundedHeap::<char, i64, i64>::new(Policy::Min, 2, None).unwrap();
        let mut max = BoundedHeap::<char, i64, i64>::new(Policy::Max, 2, None).unwrap();
        for key in ['a', 'b', 'c'] {
            min.insert(key, 1).unwrap();
            max.insert(key, 1).unwrap();
        }
        assert_eq!(min.drain().collect::<String>(), "ab");
        assert_eq!(max.drain().collect::<String>(), "cb");
    }

    #[test]
    fn test_display_and_accessors() {
        let mut heap = BoundedHeap::with_aggregator(Policy::Random, 4, |d: &u32| *d as f64).unwrap();
        heap.insert("x", 3).unwrap();
        assert_eq!(heap.to_string(), "Heap-Random: [1/4]");
        assert_eq!(heap.limit(), 4);
        assert_eq!(heap.policy(), Policy::Random);
        assert_eq!(heap.score(&8), 8.0);
    }

    #[test]
    fn test_into_iter_consumes() {
        let mut heap = BoundedHeap::<u32, f64>::new(Policy::Max, 2, None).unwrap();
        heap.insert(1, 0.5).unwrap();
        heap.insert(2, 2.5).unwrap();
        heap.insert(3, 1.5).unwrap();
        assert_eq!(heap.into_iter().collect::<Vec<_>>(), vec![2, 3]);
    }
}
