use crate::queue::RingQueue;

/// Marker-mode FIFO queue. Dequeueing from an empty queue hands back a
/// caller-supplied marker value instead of `None`.
///
/// The marker must never be enqueued as real content, since the receiver
/// cannot tell a stored marker apart from the empty signal. Prefer
/// [`RingQueue`] unless this exact contract is required.
#[derive(Debug)]
pub struct SentinelQueue<T> {
    inner: RingQueue<T>,
    empty_marker: T,
}

impl<T: Clone> SentinelQueue<T> {
    /// Create a queue with `initial_capacity` free slots and the marker
    /// value that [`dequeue`](Self::dequeue) returns when empty.
    ///
    /// # Panics
    /// Panics if `initial_capacity` is zero.
    pub fn new(initial_capacity: usize, empty_marker: T) -> Self {
        Self {
            inner: RingQueue::with_capacity(initial_capacity),
            empty_marker,
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Append `value` behind the newest element, growing when full.
    pub fn enqueue(&mut self, value: T) {
        self.inner.enqueue(value);
    }

    /// Remove and return the oldest element, or a clone of the empty marker
    /// when there is nothing queued. Callers that cannot rule out marker
    /// collisions should check [`is_empty`](Self::is_empty) first.
    pub fn dequeue(&mut self) -> T {
        self.inner
            .dequeue()
            .unwrap_or_else(|| self.empty_marker.clone())
    }

    /// Grow the backing store so at least `required_size` elements fit.
    pub fn ensure_capacity(&mut self, required_size: usize) {
        self.inner.ensure_capacity(required_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dequeue_returns_marker() {
        let mut q = SentinelQueue::new(4, -1);
        assert_eq!(q.dequeue(), -1);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_marker_only_after_drain() {
        let mut q = SentinelQueue::new(4, -1);
        for v in 1..=5 {
            q.enqueue(v); // fifth enqueue forces growth
        }
        for v in 1..=5 {
            assert_eq!(q.dequeue(), v);
        }
        assert_eq!(q.dequeue(), -1);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_delegates_capacity_and_growth() {
        let mut q = SentinelQueue::new(2, 0u32);
        q.ensure_capacity(10);
        assert!(q.capacity() >= 10);
        assert!(q.is_empty());
    }

    #[test]
    fn test_marker_is_cloned_each_time() {
        let mut q = SentinelQueue::new(2, String::from("<none>"));
        assert_eq!(q.dequeue(), "<none>");
        assert_eq!(q.dequeue(), "<none>");
        q.enqueue(String::from("x"));
        assert_eq!(q.dequeue(), "x");
    }
}
