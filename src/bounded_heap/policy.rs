use std::fmt;
use std::str::FromStr;

use super::random::RandomPool;
use super::ranked::{RankedDrain, RankedNodes};
use super::{MaxStrategy, MinStrategy};
use crate::runtime::HeapError;

/// Eviction policy of a bounded heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Keep the `limit` lowest scores, drain ascending
    Min,
    /// Keep the `limit` highest scores, drain descending
    Max,
    /// Keep a random subset, drain shuffled
    Random,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Min, Policy::Max, Policy::Random];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Min => "min",
            Policy::Max => "max",
            Policy::Random => "random",
        }
    }
}

impl FromStr for Policy {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let policy = match s.trim().to_lowercase().as_str() {
            "min" | "min_heap" => Policy::Min,
            "max" | "max_heap" => Policy::Max,
            "random" => Policy::Random,
            _ => return Err(HeapError::unknown_policy(s)),
        };
        Ok(policy)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Min => "Min",
            Policy::Max => "Max",
            Policy::Random => "Random",
        };
        f.write_str(name)
    }
}

/// Storage chosen by a [`Policy`].
pub(crate) enum Retention<T>
where
    T: Ord,
{
    Min(RankedNodes<T, MinStrategy>),
    Max(RankedNodes<T, MaxStrategy>),
    Random(RandomPool<T>),
}

impl<T> Retention<T>
where
    T: Ord,
{
    pub fn new(policy: Policy, capacity: usize, seed: Option<u64>) -> Self {
        match policy {
            Policy::Min => Retention::Min(RankedNodes::with_capacity(capacity)),
            Policy::Max => Retention::Max(RankedNodes::with_capacity(capacity)),
            Policy::Random => Retention::Random(RandomPool::with_capacity(capacity, seed)),
        }
    }

    pub fn policy(&self) -> Policy {
        match self {
            Retention::Min(_) => Policy::Min,
            Retention::Max(_) => Policy::Max,
            Retention::Random(_) => Policy::Random,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Retention::Min(nodes) => nodes.len(),
            Retention::Max(nodes) => nodes.len(),
            Retention::Random(pool) => pool.len(),
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        match self {
            Retention::Min(nodes) => nodes.push(value),
            Retention::Max(nodes) => nodes.push(value),
            Retention::Random(pool) => pool.push(value),
        }
    }

    pub fn drain(&mut self) -> RetentionDrain<'_, T> {
        match self {
            Retention::Min(nodes) => RetentionDrain::Asc(nodes.drain()),
            Retention::Max(nodes) => RetentionDrain::Desc(nodes.drain()),
            Retention::Random(pool) => RetentionDrain::Shuffled(pool.drain()),
        }
    }
}

pub(crate) enum RetentionDrain<'a, T>
where
    T: Ord,
{
    Asc(RankedDrain<'a, T, MinStrategy>),
    Desc(RankedDrain<'a, T, MaxStrategy>),
    Shuffled(std::vec::Drain<'a, T>),
}

impl<T> Iterator for RetentionDrain<'_, T>
where
    T: Ord,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self {
            RetentionDrain::Asc(drain) => drain.next(),
            RetentionDrain::Desc(drain) => drain.next(),
            RetentionDrain::Shuffled(drain) => drain.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            RetentionDrain::Asc(drain) => drain.size_hint(),
            RetentionDrain::Desc(drain) => drain.size_hint(),
            RetentionDrain::Shuffled(drain) => drain.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for RetentionDrain<'_, T> where T: Ord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("MIN".parse::<Policy>(), Ok(Policy::Min));
        assert_eq!("Max".parse::<Policy>(), Ok(Policy::Max));
        assert_eq!(" random ".parse::<Policy>(), Ok(Policy::Random));
        assert_eq!("max_heap".parse::<Policy>(), Ok(Policy::Max));
        assert_eq!("MIN_HEAP".parse::<Policy>(), Ok(Policy::Min));
    }

    #[test]
    fn test_parse_unknown_fails() {
        assert_eq!(
            "median".parse::<Policy>(),
            Err(HeapError::UnknownPolicy {
                name: "median".to_string()
            })
        );
        assert!("".parse::<Policy>().is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for policy in Policy::ALL {
            assert_eq!(policy.name().parse::<Policy>(), Ok(policy));
            assert_eq!(Retention::<u8>::new(policy, 1, Some(0)).policy(), policy);
        }
    }
}
