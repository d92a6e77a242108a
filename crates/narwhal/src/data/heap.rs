//! Addressable binary min-heap over dense vertex ids.
//!
//! A position table alongside the entry array keeps membership checks O(1)
//! and lets [`MinHeap::decrease_key`] reposition an entry in place, which is
//! what Prim's relaxation step needs instead of remove-and-reinsert.

use narwhal_graphlib::VertexId;

/// Min-heap of `(key, id)` entries. Ids must be dense and below the capacity
/// given at construction; each id is queued at most once.
#[derive(Debug, Clone)]
pub struct MinHeap {
    entries: Vec<(u64, VertexId)>,
    pos: Vec<Option<usize>>,
}

impl MinHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            pos: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` is currently queued.
    pub fn contains(&self, id: VertexId) -> bool {
        self.pos.get(id).copied().flatten().is_some()
    }

    /// Queue `id` with `key`. `id` must not already be queued.
    pub fn push(&mut self, id: VertexId, key: u64) {
        debug_assert!(!self.contains(id), "vertex {id} queued twice");
        let i = self.entries.len();
        self.entries.push((key, id));
        self.pos[id] = Some(i);
        self.sift_up(i);
    }

    /// Extract the entry with the smallest key. Ties between equal keys are
    /// broken arbitrarily.
    pub fn pop(&mut self) -> Option<(VertexId, u64)> {
        let &(key, id) = self.entries.first()?;
        let last = self.entries.len() - 1;
        self.swap(0, last);
        self.entries.pop();
        self.pos[id] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((id, key))
    }

    /// Lower the key of a queued `id`. A key that is not strictly smaller
    /// than the current one is ignored, as is an id that is no longer
    /// queued.
    pub fn decrease_key(&mut self, id: VertexId, key: u64) {
        let Some(i) = self.pos.get(id).copied().flatten() else {
            return;
        };
        if key >= self.entries[i].0 {
            return;
        }
        self.entries[i].0 = key;
        self.sift_up(i);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.pos[self.entries[a].1] = Some(a);
        self.pos[self.entries[b].1] = Some(b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].0 <= self.entries[i].0 {
                break;
            }
            self.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= self.entries.len() {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < self.entries.len() && self.entries[right].0 < self.entries[left].0 {
                smallest = right;
            }
            if self.entries[i].0 <= self.entries[smallest].0 {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
