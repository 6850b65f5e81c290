use crate::util::human;
use std::fmt;
use tracing::trace;

/// Fixed-capacity ring buffer. Writes are rejected when full; nothing is ever overwritten.
///
/// `read_pos` and `write_pos` only ever grow. Slot indexing uses `pos % capacity`,
/// and `write_pos - read_pos` is the number of live elements, so no separate
/// "full" flag is needed.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots:     Vec<Option<T>>,
    read_pos:  usize,
    write_pos: usize,
}

impl<T> RingBuffer<T> {
    /// A buffer with `capacity` empty slots. Capacity 0 is legal: it is always
    /// both empty and full, so every write is rejected.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, read_pos: 0, write_pos: 0 }
    }

    /// Store `value` at the write position. Returns `false` and drops nothing
    /// from the buffer when full.
    pub fn write(&mut self, value: T) -> bool {
        self.try_write(value).is_ok()
    }

    /// Like [`write`](Self::write), but hands the value back on overflow.
    pub fn try_write(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "ring buffer full, write rejected");
            return Err(value);
        }
        let idx = self.write_pos % self.slots.len();
        self.slots[idx] = Some(value);
        self.write_pos += 1;
        Ok(())
    }

    /// Take the oldest value out, leaving its slot empty.
    pub fn read(&mut self) -> Option<T> {
        if self.is_empty() {
            trace!(capacity = self.capacity(), "ring buffer empty, nothing to read");
            return None;
        }
        let idx = self.read_pos % self.slots.len();
        let value = self.slots[idx].take();
        self.read_pos += 1;
        value
    }

    /// Whatever occupies physical slot 0 of the backing storage.
    ///
    /// This is not the next value `read` will return: the two only agree while
    /// `read_pos % capacity == 0`. Use [`front`](Self::front) for the logical head.
    pub fn first(&self) -> Option<&T> {
        self.slots.first().and_then(Option::as_ref)
    }

    /// The value the next `read` will return, without consuming it.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() { return None; }
        self.slots[self.read_pos % self.slots.len()].as_ref()
    }

    pub fn len(&self) -> usize { self.write_pos - self.read_pos }
    pub fn capacity(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }
    pub fn is_full(&self) -> bool { self.available_for_writing() == 0 }

    pub fn available_for_writing(&self) -> usize {
        self.capacity() - self.len()
    }

    pub fn read_pos(&self) -> usize { self.read_pos }
    pub fn write_pos(&self) -> usize { self.write_pos }

    /// All slots in physical order, occupied or not.
    pub fn slots(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Live elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.slots.len();
        (self.read_pos..self.write_pos).filter_map(move |pos| self.slots[pos % cap].as_ref())
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&human::fmt_slots(self.slots(), human::NIL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(cap: usize, values: &[i32]) -> RingBuffer<i32> {
        let mut rb = RingBuffer::new(cap);
        for &v in values {
            assert!(rb.write(v));
        }
        rb
    }

    #[test]
    fn fresh_buffer_is_empty() {
        let mut rb: RingBuffer<i32> = RingBuffer::new(4);
        assert!(rb.is_empty());
        assert!(!rb.is_full());
        assert_eq!(rb.read(), None);
        assert_eq!((rb.read_pos(), rb.write_pos()), (0, 0));
    }

    #[test]
    fn fills_then_rejects() {
        let mut rb = filled(3, &[1, 2, 3]);
        assert!(rb.is_full());
        assert!(!rb.write(4));
        assert_eq!(rb.len(), 3);
        assert_eq!(rb.write_pos(), 3);
        assert_eq!(rb.try_write(5), Err(5));
    }

    #[test]
    fn wraps_around_in_fifo_order() {
        let mut rb = filled(3, &['A', 'B', 'C'].map(|c| c as i32));
        assert_eq!(rb.read(), Some('A' as i32));
        assert!(rb.write('D' as i32));
        assert!(rb.is_full());
        let drained: Vec<i32> = std::iter::from_fn(|| rb.read()).collect();
        assert_eq!(drained, vec!['B' as i32, 'C' as i32, 'D' as i32]);
        assert!(rb.is_empty());
        assert_eq!((rb.read_pos(), rb.write_pos()), (4, 4));
    }

    #[test]
    fn zero_capacity_is_empty_and_full() {
        let mut rb: RingBuffer<String> = RingBuffer::new(0);
        assert!(rb.is_empty());
        assert!(rb.is_full());
        assert!(!rb.write("x".into()));
        assert_eq!(rb.read(), None);
        assert_eq!(rb.first(), None);
        assert_eq!(rb.front(), None);
        assert_eq!(rb.to_string(), "[ ]");
    }

    #[test]
    fn read_clears_slot() {
        let mut rb = filled(2, &[7, 8]);
        rb.read();
        let slots: Vec<Option<&i32>> = rb.slots().collect();
        assert_eq!(slots, vec![None, Some(&8)]);
    }

    #[test]
    fn first_is_raw_slot_zero() {
        let mut rb = filled(3, &[1, 2, 3]);
        assert_eq!(rb.first(), Some(&1));
        rb.read();
        assert_eq!(rb.first(), None);
        assert_eq!(rb.front(), Some(&2));
        rb.read();
        rb.write(4);
        // 4 landed in slot 0 but 3 is still next out
        assert_eq!(rb.first(), Some(&4));
        assert_eq!(rb.front(), Some(&3));
    }

    #[test]
    fn iter_follows_read_order_across_wrap() {
        let mut rb = filled(3, &[1, 2, 3]);
        rb.read();
        rb.read();
        rb.write(4);
        rb.write(5);
        assert_eq!(rb.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn queries_are_stable() {
        let rb = filled(2, &[1]);
        for _ in 0..3 {
            assert!(!rb.is_empty());
            assert!(!rb.is_full());
            assert_eq!(rb.available_for_writing(), 1);
        }
    }

    #[test]
    fn display_shows_every_slot() {
        let mut rb = filled(4, &[1, 2, 3]);
        rb.read();
        assert_eq!(rb.to_string(), "[ nil, 2, 3, nil ]");
    }
}
