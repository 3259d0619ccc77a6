//! Stable priority queue used as the Dijkstra / A* frontier.

use std::collections::VecDeque;
use std::fmt;

/// A priority queue that serves the *lowest* priority value first.
///
/// Entries are kept sorted in a flat deque. Equal priorities are served in
/// arrival order, and [`update_priority`](Self::update_priority) never moves
/// an entry past another one with the same priority. Operations are linear,
/// which is fine for grid-sized frontiers and makes tie-breaking exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioQueue<P, T> {
    // Sorted by priority, best (smallest) first.
    entries: VecDeque<(P, T)>,
}

impl<P: Ord, T> Default for PrioQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> PrioQueue<P, T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert `item` behind every entry whose priority is not worse.
    pub fn enqueue(&mut self, priority: P, item: T) {
        self.entries.push_back((priority, item));
        self.sift_front(self.entries.len() - 1);
    }

    /// The item served next.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn head(&self) -> &T {
        &self.entries.front().expect("head of an empty priority queue").1
    }

    /// Remove and return the item served next.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        self.entries
            .pop_front()
            .expect("dequeue from an empty priority queue")
            .1
    }

    /// Iterator over `(priority, item)` in service order.
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> {
        self.entries.iter().map(|(p, t)| (p, t))
    }

    /// Items in service order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.iter().map(|(_, t)| t.clone()).collect()
    }

    fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.entries.iter().position(|(_, t)| t == item)
    }

    /// Whether `item` is queued.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(item).is_some()
    }

    /// Current priority of `item`, if queued.
    pub fn priority_of(&self, item: &T) -> Option<&P>
    where
        T: PartialEq,
    {
        self.position(item).map(|i| &self.entries[i].0)
    }

    /// Change the priority of the first entry equal to `item` and move it to
    /// its new place. Returns `false` (and does nothing) if `item` is not
    /// queued.
    pub fn update_priority(&mut self, item: &T, priority: P) -> bool
    where
        T: PartialEq,
    {
        let Some(i) = self.position(item) else {
            return false;
        };
        self.entries[i].0 = priority;
        let i = self.sift_front(i);
        self.sift_back(i);
        true
    }

    /// Move entry `i` towards the front while its predecessor is strictly
    /// worse. Returns the final index.
    fn sift_front(&mut self, mut i: usize) -> usize {
        while i > 0 && self.entries[i - 1].0 > self.entries[i].0 {
            self.entries.swap(i - 1, i);
            i -= 1;
        }
        i
    }

    /// Move entry `i` towards the back while its successor is strictly
    /// better.
    fn sift_back(&mut self, mut i: usize) {
        while i + 1 < self.entries.len() && self.entries[i + 1].0 < self.entries[i].0 {
            self.entries.swap(i, i + 1);
            i += 1;
        }
    }
}

impl<P: Ord, T> FromIterator<(P, T)> for PrioQueue<P, T> {
    /// Enqueue every pair in iteration order.
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut q = Self::new();
        for (p, t) in iter {
            q.enqueue(p, t);
        }
        q
    }
}

impl<P: fmt::Display, T: fmt::Display> fmt::Display for PrioQueue<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue(")?;
        for (i, (p, t)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{p}, {t}]")?;
        }
        write!(f, ")")
    }
}
