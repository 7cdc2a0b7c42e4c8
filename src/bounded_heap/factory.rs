use super::aggregate::{self, Aggregate, Aggregator};
use super::{BoundedHeap, Policy};
use crate::runtime::{HeapConfig, HeapError};

/// Picks a heap policy by name, so callers can choose eviction through configuration.
pub struct HeapFactory;

impl HeapFactory {
    /// Returns a constructor `(limit, aggregator) -> BoundedHeap` for the named policy.
    ///
    /// Names are case-insensitive. Anything but `min`, `max`, `random` (or the
    /// `min_heap`/`max_heap` aliases) fails with [`HeapError::UnknownPolicy`].
    pub fn get<K, D, S>(
        name: &str,
    ) -> Result<
        impl Fn(usize, Option<Aggregator<D, S>>) -> Result<BoundedHeap<K, D, S>, HeapError>,
        HeapError,
    >
    where
        D: Aggregate<S> + 'static,
        S: PartialOrd + 'static,
    {
        let policy: Policy = name.parse()?;
        Ok(move |limit: usize, aggregator: Option<Aggregator<D, S>>| {
            BoundedHeap::new(policy, limit, aggregator)
        })
    }

    /// Builds a heap from a full config, honouring its random seed.
    pub fn from_config<K, D, S>(
        config: &HeapConfig,
        aggregator: Option<Aggregator<D, S>>,
    ) -> Result<BoundedHeap<K, D, S>, HeapError>
    where
        D: Aggregate<S> + 'static,
        S: PartialOrd + 'static,
    {
        let aggregator = aggregator.unwrap_or_else(aggregate::by_default);
        BoundedHeap::from_parts(config, aggregator)
    }
}
