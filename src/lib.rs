//! Growable FIFO ring queue.
//!
//! [`RingQueue`] keeps its elements in a circular backing store and enlarges
//! it in place when an enqueue finds no free slot, so appends stay amortized
//! O(1) and removals never shift data. [`SentinelQueue`] layers a
//! marker-value dequeue contract on top for callers that need one.
//!
//! The queue is single-threaded by design. Share one across threads only
//! behind a single external mutex covering every operation.

mod queue;
mod sentinel;

pub use queue::{Iter, RingQueue};
pub use sentinel::SentinelQueue;
