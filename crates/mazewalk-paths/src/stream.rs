//! The step protocol: immutable [`Snapshot`]s pulled one at a time from a
//! [`Stream`].

use crate::Node;

/// The observable state of a search after one step.
///
/// A fresh snapshot is produced on every step and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Frontier contents in the order they will be served.
    pub in_queue: Vec<Node>,
    /// Fully processed nodes in processing order.
    pub visited_nodes: Vec<Node>,
    /// The node processed by this step. `None` before the first step and on
    /// the "no path" outcome.
    pub current_node: Option<Node>,
    /// Path from the start to `current_node`, or to the goal once done.
    /// Empty when no such path exists.
    pub path_so_far: Vec<Node>,
    /// Set on the final snapshot only.
    pub is_done: bool,
}

impl Snapshot {
    /// Whether the search finished and found a path to the goal.
    pub fn found_path(&self) -> bool {
        self.is_done && !self.path_so_far.is_empty()
    }
}

/// An incremental search over a graph.
///
/// Implementors own all per-run state and advance by exactly one frontier
/// pop per [`step`](Self::step).
pub trait Search {
    /// Snapshot of the just-constructed search, before any work happened.
    fn initial(&self) -> Snapshot;

    /// Perform one unit of work and describe the resulting state.
    ///
    /// # Panics
    ///
    /// Implementations panic when called after a snapshot with
    /// `is_done == true` was returned.
    fn step(&mut self) -> Snapshot;

    /// Whether the search has produced its final snapshot.
    fn is_done(&self) -> bool;
}

impl<S: Search + ?Sized> Search for Box<S> {
    fn initial(&self) -> Snapshot {
        (**self).initial()
    }

    fn step(&mut self) -> Snapshot {
        (**self).step()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

/// A lazily advanced, non-restartable sequence of [`Snapshot`]s for one
/// search run.
///
/// The stream always holds a current snapshot ([`head`](Self::head)). No work
/// happens until the consumer pulls the next one with
/// [`advance`](Self::advance) or through the [`Iterator`] impl, which yields
/// the current snapshot first and stops after the first finished one.
#[derive(Debug, Clone)]
pub struct Stream<S> {
    search: S,
    head: Snapshot,
    steps: usize,
    // Whether `head` was already handed out by `Iterator::next`.
    yielded: bool,
}

impl<S: Search> Stream<S> {
    /// Wrap a freshly constructed search.
    pub fn new(search: S) -> Self {
        let head = search.initial();
        Self {
            search,
            head,
            steps: 0,
            yielded: false,
        }
    }

    /// The current snapshot. Reading it never advances the search.
    #[inline]
    pub fn head(&self) -> &Snapshot {
        &self.head
    }

    /// Whether the current snapshot is the final one.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.head.is_done
    }

    /// Number of steps performed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The underlying search.
    pub fn search(&self) -> &S {
        &self.search
    }

    /// Perform one step and return the new current snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the stream is already done.
    pub fn advance(&mut self) -> &Snapshot {
        assert!(!self.head.is_done, "advanced a finished search stream");
        self.head = self.search.step();
        self.steps += 1;
        self.yielded = false;
        log::trace!(
            "step {}: current {:?}, {} queued, {} visited",
            self.steps,
            self.head.current_node,
            self.head.in_queue.len(),
            self.head.visited_nodes.len()
        );
        &self.head
    }

    /// Like [`advance`](Self::advance), but returns `None` instead of
    /// panicking once the stream is done.
    pub fn try_advance(&mut self) -> Option<&Snapshot> {
        if self.head.is_done {
            None
        } else {
            Some(self.advance())
        }
    }

    /// Advance up to `n` steps, stopping early when done.
    pub fn fast_forward(&mut self, n: usize) -> &Snapshot {
        for _ in 0..n {
            if self.try_advance().is_none() {
                break;
            }
        }
        &self.head
    }

    /// Advance until done and return the final snapshot.
    pub fn run_to_end(&mut self) -> &Snapshot {
        while !self.head.is_done {
            self.advance();
        }
        &self.head
    }
}

impl<S: Search> Iterator for Stream<S> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        if self.yielded {
            self.try_advance()?;
        }
        self.yielded = true;
        Some(self.head.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down to zero, one node per step.
    struct Countdown {
        left: usize,
        visited: Vec<Node>,
        pulls: usize,
    }

    impl Search for Countdown {
        fn initial(&self) -> Snapshot {
            Snapshot::default()
        }

        fn step(&mut self) -> Snapshot {
            assert!(self.left > 0);
            self.pulls += 1;
            self.left -= 1;
            self.visited.push(self.left);
            Snapshot {
                in_queue: (0..self.left).rev().collect(),
                visited_nodes: self.visited.clone(),
                current_node: Some(self.left),
                path_so_far: vec![self.left],
                is_done: self.left == 0,
            }
        }

        fn is_done(&self) -> bool {
            self.left == 0
        }
    }

    fn countdown(n: usize) -> Stream<Countdown> {
        Stream::new(Countdown {
            left: n,
            visited: Vec::new(),
            pulls: 0,
        })
    }

    #[test]
    fn head_is_idempotent_and_lazy() {
        let s = countdown(3);
        assert_eq!(s.head(), s.head());
        assert_eq!(s.head().current_node, None);
        assert_eq!(s.search().pulls, 0);
    }

    #[test]
    fn advance_one_step_at_a_time() {
        let mut s = countdown(3);
        assert_eq!(s.advance().current_node, Some(2));
        assert_eq!(s.search().pulls, 1);
        assert_eq!(s.head().current_node, Some(2));
        assert_eq!(s.steps(), 1);
        s.run_to_end();
        assert!(s.is_done());
        assert_eq!(s.steps(), 3);
        assert!(s.try_advance().is_none());
    }

    #[test]
    fn fast_forward_stops_at_done() {
        let mut s = countdown(2);
        assert_eq!(s.fast_forward(10).current_node, Some(0));
        assert_eq!(s.steps(), 2);
    }

    #[test]
    fn iterator_yields_initial_then_each_step() {
        let all: Vec<_> = countdown(3).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].current_node, None);
        assert!(all[3].is_done);
        assert!(all[..3].iter().all(|r| !r.is_done));
    }

    #[test]
    fn iterator_resumes_after_manual_advance() {
        let mut s = countdown(3);
        s.advance();
        let rest: Vec<_> = s.map(|r| r.current_node).collect();
        assert_eq!(rest, vec![Some(2), Some(1), Some(0)]);
    }

    #[test]
    #[should_panic(expected = "finished search stream")]
    fn advancing_past_done_panics() {
        let mut s = countdown(1);
        s.advance();
        s.advance();
    }

    #[test]
    fn boxed_search_streams() {
        let boxed: Box<dyn Search> = Box::new(Countdown {
            left: 2,
            visited: Vec::new(),
            pulls: 0,
        });
        let mut s = Stream::new(boxed);
        assert!(!s.search().is_done());
        assert!(s.run_to_end().found_path());
    }
}
