//! Indexed binary-heap priority queue with decrease-key.
//!
//! Entries are `(value, priority)` pairs stored in a dense heap array. A
//! `value → heap position` index makes [`contains`](PriorityQueue::contains)
//! O(1) and [`update_priority`](PriorityQueue::update_priority) O(log n).
//!
//! The ordering is a comparator `precedes(a, b)` returning `true` when an
//! entry with priority `a` must leave the queue before one with priority
//! `b`.

use std::collections::HashMap;
use std::hash::Hash;

/// Comparator type used by [`PriorityQueue::min`] and
/// [`PriorityQueue::max`].
pub type OrderFn<P> = fn(&P, &P) -> bool;

fn min_first<P: Ord>(a: &P, b: &P) -> bool {
    a < b
}

fn max_first<P: Ord>(a: &P, b: &P) -> bool {
    a > b
}

#[derive(Debug, Clone)]
struct Entry<T, P> {
    value: T,
    priority: P,
}

/// A priority queue keyed by value identity.
///
/// Each value is present at most once; pushing a value that is already
/// queued replaces its priority.
pub struct PriorityQueue<T, P, C = OrderFn<P>> {
    heap: Vec<Entry<T, P>>,
    index: HashMap<T, usize>,
    precedes: C,
}

impl<T, P> PriorityQueue<T, P, OrderFn<P>>
where
    T: Eq + Hash + Clone,
    P: Ord,
{
    /// Smallest priority first.
    pub fn min() -> Self {
        Self::with_comparator(min_first::<P>)
    }

    /// Largest priority first.
    pub fn max() -> Self {
        Self::with_comparator(max_first::<P>)
    }
}

impl<T, P, C> PriorityQueue<T, P, C>
where
    T: Eq + Hash + Clone,
    C: Fn(&P, &P) -> bool,
{
    /// Create an empty queue ordered by `precedes`.
    pub fn with_comparator(precedes: C) -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
            precedes,
        }
    }

    /// Number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `value` is currently queued, regardless of its priority.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// The priority `value` is queued with.
    pub fn priority(&self, value: &T) -> Option<&P> {
        self.index.get(value).map(|&i| &self.heap[i].priority)
    }

    /// The entry that [`pop`](Self::pop) would return next.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.first().map(|e| (&e.value, &e.priority))
    }

    /// Insert `value` with `priority`. If `value` is already queued its
    /// priority is replaced instead.
    pub fn push(&mut self, value: T, priority: P) {
        if let Some(&i) = self.index.get(&value) {
            self.reprioritize(i, priority);
            return;
        }
        let i = self.heap.len();
        self.index.insert(value.clone(), i);
        self.heap.push(Entry { value, priority });
        self.sift_up(i);
    }

    /// Remove and return the extremal entry.
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.index.remove(&entry.value);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.value, entry.priority))
    }

    /// Change the priority of a queued value, moving it up or down as
    /// needed.
    ///
    /// Returns `false` and does nothing if `value` is not queued.
    pub fn update_priority(&mut self, value: &T, priority: P) -> bool {
        match self.index.get(value) {
            Some(&i) => {
                self.reprioritize(i, priority);
                true
            }
            None => false,
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    fn reprioritize(&mut self, i: usize, priority: P) {
        self.heap[i].priority = priority;
        let i = self.sift_up(i);
        self.sift_down(i);
    }

    #[inline]
    fn before(&self, a: usize, b: usize) -> bool {
        (self.precedes)(&self.heap[a].priority, &self.heap[b].priority)
    }

    /// Swap two heap slots and keep the position index in sync.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(slot) = self.index.get_mut(&self.heap[a].value) {
            *slot = a;
        }
        if let Some(slot) = self.index.get_mut(&self.heap[b].value) {
            *slot = b;
        }
    }

    /// Returns the final position of the moved entry.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.before(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && self.before(left, best) {
                best = left;
            }
            if right < len && self.before(right, best) {
                best = right;
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}
