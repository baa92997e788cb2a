//! Binary min-heap with in-place key decrease.
//!
//! Items and keys live in parallel arrays. A hash index from item to slot is
//! kept in sync on every swap, so [`Heap::decrease_key`] can find an item in
//! constant time before bubbling it up.

use std::fmt;
use std::hash::Hash;

type FxHashMap<K, V> = fxhash::FxHashMap<K, V>;

/// `less(a, b)` is true if `a` should sit above `b`.
pub struct Heap<T, K, F = fn(&K, &K) -> bool> {
    items: Vec<T>,
    keys: Vec<K>,
    slots: FxHashMap<T, usize>,
    less: F,
}

fn ascending<K: Ord>(a: &K, b: &K) -> bool {
    a < b
}

impl<T: Hash + Eq + Clone, K: Ord> Heap<T, K> {
    /// Min-heap on the natural ordering of keys.
    pub fn new() -> Self {
        Self::with_less(ascending::<K>)
    }
}

impl<T: Hash + Eq + Clone, K: Ord> Default for Heap<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, F: Fn(&T, &T) -> bool> Heap<T, T, F> {
    /// Insert an item keyed by itself.
    pub fn push(&mut self, item: T) {
        let key = item.clone();
        self.insert(item, key);
    }
}

impl<T: Hash + Eq + Clone, K, F: Fn(&K, &K) -> bool> Heap<T, K, F> {
    pub fn with_less(less: F) -> Self {
        Self {
            items: Vec::new(),
            keys: Vec::new(),
            slots: FxHashMap::default(),
            less,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<(&T, &K)> {
        Some((self.items.first()?, self.keys.first()?))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    pub fn key(&self, item: &T) -> Option<&K> {
        self.slots.get(item).map(|&slot| &self.keys[slot])
    }

    /// Inserting an item that is already present corrupts the slot index.
    pub fn insert(&mut self, item: T, key: K) {
        debug_assert!(!self.contains(&item), "Duplicate heap item");
        let slot = self.items.len();
        self.slots.insert(item.clone(), slot);
        self.items.push(item);
        self.keys.push(key);
        self.bubble_up(slot);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.swap_remove(0);
        self.keys.swap_remove(0);
        self.slots.remove(&item);
        if let Some(top) = self.items.first() {
            self.slots.insert(top.clone(), 0);
            self.bubble_down(0);
        }
        Some(item)
    }

    /// Lower the key of an item already in the heap.
    ///
    /// # Panics
    /// If `item` is not in the heap. The new key must not order after the
    /// current one; this is only checked in debug builds.
    pub fn decrease_key(&mut self, item: &T, key: K) {
        let slot = self.slots[item];
        debug_assert!(
            !(self.less)(&self.keys[slot], &key),
            "Key increased in decrease_key"
        );
        self.keys[slot] = key;
        self.bubble_up(slot);
    }

    fn bubble_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !(self.less)(&self.keys[slot], &self.keys[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn bubble_down(&mut self, mut slot: usize) {
        loop {
            let top = self.smallest(slot);
            if top == slot {
                break;
            }
            self.swap(slot, top);
            slot = top;
        }
    }

    /// Whichever of `slot` and its children should be on top.
    fn smallest(&self, slot: usize) -> usize {
        let mut top = slot;
        for child in [slot * 2 + 1, slot * 2 + 2] {
            if child < self.items.len() && (self.less)(&self.keys[child], &self.keys[top]) {
                top = child;
            }
        }
        top
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
        self.keys.swap(i, j);
        self.slots.insert(self.items[i].clone(), i);
        self.slots.insert(self.items[j].clone(), j);
    }
}

impl<T: fmt::Debug, K: fmt::Debug, F> fmt::Debug for Heap<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.items.iter().zip(&self.keys))
            .finish()
    }
}
