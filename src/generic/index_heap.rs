//! A max-heap over a fixed set of indices.
//!
//! The heap stores a value for every index it has been grown to cover, while only a subset of
//! indices is *active* (on the heap) at any time.
//! A location vector tracks where each active index sits in the heap, so the value of an index
//! may be revised, and its position repaired, without search.
//!
//! Within the solver the heap covers atoms keyed by activity: an atom leaves the heap when
//! popped for a decision and re-enters when a backjump clears its value, while bumps revise
//! values in place.
//!
//! ```rust
//! # use aurochs_sat::generic::index_heap::IndexHeap;
//! let mut heap = IndexHeap::default();
//!
//! heap.ensure(2);
//! heap.set_value(0, 7.0);
//! heap.set_value(2, 9.0);
//!
//! heap.enter(0);
//! heap.enter(2);
//!
//! assert_eq!(heap.pop_max(), Some(2));
//! assert_eq!(heap.pop_max(), Some(0));
//! assert_eq!(heap.pop_max(), None);
//! ```

/// A max-heap over indices `0..limit` for some growable limit.
pub struct IndexHeap<V> {
    /// The value of each covered index, active or not.
    values: Vec<V>,

    /// The heap slot of each covered index, `None` when the index is not active.
    location: Vec<Option<usize>>,

    /// Active indices, in heap order.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            location: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Grows the heap to cover `index`, with default values for fresh indices.
    ///
    /// Fresh indices are not active.
    pub fn ensure(&mut self, index: usize) {
        while self.values.len() <= index {
            self.values.push(V::default());
            self.location.push(None);
        }
    }

    /// A count of indices covered by the heap.
    pub fn limit(&self) -> usize {
        self.values.len()
    }

    /// True if `index` is active on the heap.
    pub fn active(&self, index: usize) -> bool {
        self.location[index].is_some()
    }

    /// The value of `index`, active or not.
    pub fn value_of(&self, index: usize) -> &V {
        // Safety: ensure is called for every index used with the heap.
        unsafe { self.values.get_unchecked(index) }
    }

    /// Sets the value of `index` without repairing the heap.
    ///
    /// To repair the heap after a revision, see [resift](IndexHeap::resift).
    pub fn set_value(&mut self, index: usize, value: V) {
        // Safety: as with value_of.
        unsafe { *self.values.get_unchecked_mut(index) = value }
    }

    /// Applies `f` to the value of every covered index and rebuilds the heap.
    pub fn revalue_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value);
        }
        self.rebuild();
    }

    /// Activates `index` on the heap, or repairs its position if already active.
    pub fn enter(&mut self, index: usize) {
        match self.location[index] {
            None => {
                let slot = self.heap.len();
                self.heap.push(index);
                self.location[index] = Some(slot);
                self.sift_up(slot);
            }
            Some(slot) => {
                let slot = self.sift_up(slot);
                self.sift_down(slot);
            }
        }
    }

    /// Repairs the position of `index`, if active.
    ///
    /// A no-op for inactive indices, whose position is fixed on (re)entry.
    pub fn resift(&mut self, index: usize) {
        if let Some(slot) = self.location[index] {
            let slot = self.sift_up(slot);
            self.sift_down(slot);
        }
    }

    /// The active index with the greatest value, if any index is active.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the active index with the greatest value.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max_index = *self.heap.first()?;

        // The heap is non-empty, by the line above.
        let last = self.heap.pop()?;
        self.location[max_index] = None;

        if max_index != last {
            self.location[last] = Some(0);
            self.heap[0] = last;
            self.sift_down(0);
        }

        Some(max_index)
    }

    /// Rebuilds the heap from the active indices.
    pub fn rebuild(&mut self) {
        for slot in (0..self.heap.len() / 2).rev() {
            self.sift_down(slot);
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Swaps the heap entries at `a` and `b`, repairing locations.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.location[self.heap[a]] = Some(b);
        self.location[self.heap[b]] = Some(a);
        self.heap.swap(a, b);
    }

    /// True if the value at slot `a` exceeds the value at slot `b`.
    fn exceeds(&self, a: usize, b: usize) -> bool {
        // Safety: slots hold indices previously passed through ensure.
        let a_value = unsafe { self.values.get_unchecked(self.heap[a]) };
        let b_value = unsafe { self.values.get_unchecked(self.heap[b]) };
        a_value > b_value
    }

    /// Moves the entry at `slot` rootwards to a position where it is not greater than its
    /// parent, returning the position.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.exceeds(slot, parent) {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
        slot
    }

    /// Moves the entry at `slot` leafwards to a position where neither child is greater.
    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }

            let mut largest = slot;
            if self.exceeds(left, largest) {
                largest = left;
            }

            let right = left + 1;
            if right < self.heap.len() && self.exceeds(right, largest) {
                largest = right;
            }

            if largest == slot {
                break;
            }
            self.swap_slots(slot, largest);
            slot = largest;
        }
    }
}

#[cfg(test)]
mod heap_tests {
    use super::*;

    fn filled(values: &[(usize, f64)]) -> IndexHeap<f64> {
        let mut heap = IndexHeap::default();
        for (index, value) in values {
            heap.ensure(*index);
            heap.set_value(*index, *value);
            heap.enter(*index);
        }
        heap
    }

    #[test]
    fn pop_order() {
        let mut heap = filled(&[(0, 70.0), (1, 60.0), (4, 30.0), (5, 20.0), (6, 10.0)]);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn sparse_cover() {
        let mut heap = filled(&[(600, 10.0), (0, 70.0)]);

        assert_eq!(heap.limit(), 601);
        assert_eq!(heap.value_of(5), &f64::default());

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(600));
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn revision() {
        let mut heap = filled(&[(0, 70.0), (1, 60.0), (4, 30.0), (6, 10.0)]);

        heap.set_value(6, 65.0);
        heap.resift(6);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
    }

    #[test]
    fn reentry() {
        let mut heap = filled(&[(0, 1.0), (1, 2.0), (2, 3.0)]);

        assert_eq!(heap.pop_max(), Some(2));
        assert!(!heap.active(2));

        heap.enter(2);
        heap.enter(2);

        assert!(heap.active(2));
        assert_eq!(heap.pop_max(), Some(2));
        assert_eq!(heap.pop_max(), Some(1));
    }

    #[test]
    fn revalue_all() {
        let mut heap = filled(&[(0, 2.0), (1, 4.0), (2, 8.0)]);

        // Inverting values inverts the pop order.
        heap.revalue_all(|value| 1.0 / value);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(2));
    }
}
