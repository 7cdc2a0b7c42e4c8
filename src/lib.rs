//! Fixed-capacity heaps that keep the top-N of an unbounded stream of keyed items.
//!
//! Items are scored by an aggregator when inserted; a [`Policy`] decides
//! which node is evicted once the heap holds more than its limit and in
//! which order the survivors are drained.
//!
//! ```
//! use fixedheap::{HeapFactory, HeapError};
//!
//! # fn main() -> Result<(), HeapError> {
//! let ctor = HeapFactory::get::<&str, Vec<u32>, u32>("max")?;
//! let mut heap = ctor(2, None)?;
//! heap.insert("a", vec![1, 2])?;
//! heap.insert("b", vec![9])?;
//! heap.insert("c", vec![4, 4])?;
//! assert_eq!(heap.drain().collect::<Vec<_>>(), vec!["b", "c"]);
//! # Ok(())
//! # }
//! ```

pub mod bounded_heap;
pub mod runtime;

pub use bounded_heap::{aggregate, Aggregate, Aggregator, BoundedHeap, HeapFactory, HeapNode, Policy};
pub use runtime::{HeapConfig, HeapError};
