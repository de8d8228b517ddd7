//! Draw-order sorted list of renderable entries
//!
//! Entries are kept sorted ascending by draw order at all times. Insertion is a
//! positional insert before the first entry with a strictly greater order, so
//! entries sharing an order render in the order they were registered.
//! The list holds lightweight keys only; resolving a key to something drawable
//! is the caller's job.

/// One registered renderable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawEntry<K> {
    /// Identity of the renderable
    pub key: K,

    /// Lower orders draw first (further back)
    pub draw_order: i32,
}

/// Renderables sorted back to front
#[derive(Debug, Clone)]
pub struct DrawOrderList<K> {
    entries: Vec<DrawEntry<K>>,
}

impl<K: Copy + PartialEq> DrawOrderList<K> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert `key` before the first entry whose order is greater than `draw_order`
    pub fn register(&mut self, key: K, draw_order: i32) {
        let index = self
            .entries
            .iter()
            .position(|entry| draw_order < entry.draw_order)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, DrawEntry { key, draw_order });
    }

    /// Remove `key` if present; returns whether anything was removed
    pub fn unregister(&mut self, key: &K) -> bool {
        match self.entries.iter().position(|entry| entry.key == *key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Visit every key front to back (lowest draw order first)
    pub fn render_all<F>(&self, mut draw: F)
    where
        F: FnMut(&K),
    {
        for entry in &self.entries {
            draw(&entry.key);
        }
    }

    /// Iterate entries in draw order
    pub fn iter(&self) -> impl Iterator<Item = &DrawEntry<K>> {
        self.entries.iter()
    }

    /// Position of `key` in draw order
    pub fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == *key)
    }

    /// Whether `key` is registered
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Copy + PartialEq> Default for DrawOrderList<K> {
    fn default() -> Self {
        Self::new()
    }
}
