struct Entry<V, P> {
    value: V,
    priority: P,
}

/// A binary-heap priority queue with an injected ordering function.
///
/// The comparator is fixed at construction: `better(a, b)` returns `true`
/// when priority `a` should be popped before priority `b`. Use
/// [`PriorityHeap::new_min`] or [`PriorityHeap::new_max`] for the common
/// orderings, or [`PriorityHeap::with_comparator`] for anything else.
pub struct PriorityHeap<V, P, C = fn(&P, &P) -> bool> {
    entries: Vec<Entry<V, P>>,
    better: C,
}

impl<V, P, C> PriorityHeap<V, P, C>
where
    C: Fn(&P, &P) -> bool,
{
    pub fn with_comparator(better: C) -> Self {
        Self {
            entries: Vec::new(),
            better,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry and restores the heap invariant. O(log n).
    pub fn push(&mut self, value: V, priority: P) {
        self.entries.push(Entry { value, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry the comparator prefers over all others,
    /// or `None` if the heap is empty. O(log n).
    pub fn pop(&mut self) -> Option<(V, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.value, entry.priority))
    }

    /// Borrows the entry that the next `pop` would return.
    pub fn peek(&self) -> Option<(&V, &P)> {
        self.entries.first().map(|e| (&e.value, &e.priority))
    }

    /// Linear scan for an entry whose value equals `value`, ignoring
    /// priorities. O(n).
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|e| e.value == *value)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !(self.better)(&self.entries[idx].priority, &self.entries[parent].priority) {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            if left >= self.entries.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.entries.len()
                && (self.better)(&self.entries[right].priority, &self.entries[left].priority)
            {
                child = right;
            }
            if !(self.better)(&self.entries[child].priority, &self.entries[idx].priority) {
                break;
            }
            self.entries.swap(idx, child);
            idx = child;
        }
    }
}

impl<V, P> PriorityHeap<V, P>
where
    P: Ord,
{
    /// An empty heap that pops the lowest priority first.
    pub fn new_min() -> Self {
        Self::with_comparator(|a, b| a < b)
    }

    /// An empty heap that pops the highest priority first.
    pub fn new_max() -> Self {
        Self::with_comparator(|a, b| a > b)
    }
}
