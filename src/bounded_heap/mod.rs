pub mod aggregate;
mod bounded_heap;
mod bounded_heap_strategy;
mod factory;
mod node;
mod policy;
mod random;
mod ranked;

pub(crate) use delegate::delegate;
pub(crate) use min_max_heap;

pub use aggregate::{Aggregate, Aggregator};
pub use bounded_heap::{BoundedHeap, Drain, DrainNodes};
pub use bounded_heap_strategy::{BoundedHeapStrategy, MaxStrategy, MinStrategy};
pub use factory::HeapFactory;
pub use node::HeapNode;
pub use policy::Policy;
pub use random::RandomPool;
pub use ranked::{RankedDrain, RankedNodes};
