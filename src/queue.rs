use crate::util::human;
use crate::util::ring_buffer::RingBuffer;
use std::fmt;

/// A FIFO queue that signals overflow and underflow through return values.
pub trait Queue {
    type Element;

    /// Returns `false` if the element could not be stored.
    fn enqueue(&mut self, element: Self::Element) -> bool;
    fn dequeue(&mut self) -> Option<Self::Element>;
    fn is_empty(&self) -> bool;
    fn peek(&self) -> Option<&Self::Element>;
}

/// Queue-shaped view over a [`RingBuffer`]. Holds no state of its own.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    buffer: RingBuffer<T>,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self { buffer: RingBuffer::new(capacity) }
    }

    /// Enqueue, handing the element back when the queue is full.
    pub fn try_enqueue(&mut self, element: T) -> Result<(), T> {
        self.buffer.try_write(element)
    }

    /// The element the next `dequeue` returns. Unlike [`Queue::peek`], this
    /// follows the read position.
    pub fn front(&self) -> Option<&T> {
        self.buffer.front()
    }

    pub fn len(&self) -> usize { self.buffer.len() }
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
    pub fn capacity(&self) -> usize { self.buffer.capacity() }
    pub fn is_full(&self) -> bool { self.buffer.is_full() }

    pub fn buffer(&self) -> &RingBuffer<T> { &self.buffer }
}

impl<T> Queue for BoundedQueue<T> {
    type Element = T;

    fn enqueue(&mut self, element: T) -> bool {
        self.buffer.write(element)
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() { None } else { self.buffer.read() }
    }

    fn is_empty(&self) -> bool {
        BoundedQueue::is_empty(self)
    }

    /// Physical slot 0 of the backing buffer (see [`RingBuffer::first`]).
    fn peek(&self) -> Option<&T> {
        self.buffer.first()
    }
}

impl<T: fmt::Display> BoundedQueue<T> {
    /// Slot dump with a caller-chosen marker for empty slots.
    pub fn render(&self, empty: &str) -> String {
        human::fmt_slots(self.buffer.slots(), empty)
    }
}

impl<T: fmt::Display> fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.buffer, f)
    }
}
