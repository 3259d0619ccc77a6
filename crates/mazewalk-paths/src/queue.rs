//! FIFO queue used as the breadth-first frontier.

use std::collections::VecDeque;
use std::fmt;

/// A first-in first-out queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Whether the queue has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add `item` at the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// The element that was enqueued first.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn head(&self) -> &T {
        self.items.front().expect("head of an empty queue")
    }

    /// Remove and return the element that was enqueued first.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        self.items.pop_front().expect("dequeue from an empty queue")
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Front-to-back copy of the contents.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// The first yielded item ends up at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}
