use std::cmp::Ordering;
use std::fmt;

/// A retained entry: the caller's key and the score its data aggregated to.
///
/// Nodes compare by score first and by insertion sequence second, so the
/// ordering used inside the heap is total even when scores tie. Keys never
/// take part in comparisons.
#[derive(Clone)]
pub struct HeapNode<K, S> {
    key: K,
    score: S,
    seq: u64,
}

impl<K, S> HeapNode<K, S>
where
    S: PartialOrd,
{
    pub(crate) fn new(key: K, score: S, seq: u64) -> Self {
        Self { key, score, seq }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn score(&self) -> &S {
        &self.score
    }

    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub fn into_parts(self) -> (K, S) {
        (self.key, self.score)
    }

    /// Compares scores only. Nodes with different keys may be `Equal` here.
    #[inline]
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        //NOTE: scores are checked for self-comparability on insert, so None never occurs
        //      for nodes built by BoundedHeap
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
    }
}

impl<K, S> PartialEq for HeapNode<K, S>
where
    S: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K, S> Eq for HeapNode<K, S> where S: PartialOrd {}

impl<K, S> PartialOrd for HeapNode<K, S>
where
    S: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, S> Ord for HeapNode<K, S>
where
    S: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_score(other).then(self.seq.cmp(&other.seq))
    }
}

impl<K, S> fmt::Debug for HeapNode<K, S>
where
    K: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key={:?}: Value={:?}", self.key, self.score)
    }
}
