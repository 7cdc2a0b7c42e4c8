use log::trace;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Storage for the random-retaining policy.
///
/// Every insert is accepted; on overflow one element of the over-full set,
/// the newcomer included, is dropped uniformly at random. This is NOT
/// reservoir sampling: an element's survival odds shrink with every later
/// overflow, so late arrivals are more likely to remain than early ones.
pub struct RandomPool<T> {
    nodes: Vec<T>,
    capacity: usize,
    rng: SmallRng,
}

impl<T> RandomPool<T> {
    pub fn with_capacity(capacity: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            nodes: Vec::with_capacity(capacity + 1),
            capacity,
            rng,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element dropped on overflow, if any.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.nodes.push(value);
        if self.nodes.len() <= self.capacity {
            return None;
        }

        let victim = self.rng.gen_range(0..self.nodes.len());
        trace!("evicting node {} of {}", victim, self.nodes.len());
        Some(self.nodes.swap_remove(victim))
    }

    /// Shuffles, then hands out every element. Dropping the iterator clears the pool.
    pub fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.nodes.shuffle(&mut self.rng);
        self.nodes.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_and_distinct() {
        let mut pool = RandomPool::with_capacity(4, Some(7));
        for v in 0..100u32 {
            pool.push(v);
            assert!(pool.len() <= pool.capacity());
        }

        let mut out: Vec<u32> = pool.drain().collect();
        assert_eq!(out.len(), 4);
        out.sort_unstable();
        out.dedup();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|v| *v < 100));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_seed_reproducible() {
        let run = |seed| {
            let mut pool = RandomPool::with_capacity(3, Some(seed));
            for v in 0..50u32 {
                pool.push(v);
            }
            pool.drain().collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_under_capacity_keeps_all() {
        let mut pool = RandomPool::with_capacity(5, None);
        assert_eq!(pool.push('a'), None);
        assert_eq!(pool.push('b'), None);

        let mut out: Vec<char> = pool.drain().collect();
        out.sort_unstable();
        assert_eq!(out, vec!['a', 'b']);
    }
}
