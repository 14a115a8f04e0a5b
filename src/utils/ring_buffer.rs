//! Bounded scrollback storage with O(1) push.

// ============================================================================
// RingBuffer
// ============================================================================

/// Fixed-capacity buffer; once full, each push overwrites the oldest element.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    items: Vec<T>,
    /// Index of the oldest element once `items` is full.
    start: usize,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be greater than 0");
        Self {
            items: Vec::with_capacity(capacity),
            start: 0,
            capacity,
        }
    }

    /// Append `item`, returning a reference to it in its slot.
    pub fn push(&mut self, item: T) -> &T {
        let slot = if self.items.len() < self.capacity {
            self.items.push(item);
            self.items.len() - 1
        } else {
            let slot = self.start;
            self.items[slot] = item;
            self.start = (slot + 1) % self.capacity;
            slot
        };
        &self.items[slot]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.start = 0;
    }

    /// Oldest to newest. Reverse it for newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        let (newer, older) = self.items.split_at(self.start);
        older.iter().chain(newer)
    }
}

// ============================================================================
// Tests
// ============================================================================
