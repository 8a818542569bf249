//! Insertion-ordered record collection with an id index.
//!
//! Rows keep the order they were inserted in; the index maps each id to its
//! current position so lookups are O(1) while full reads stay ordered.

use std::collections::HashMap;

use uuid::Uuid;

/// A record that can be stored in a [Collection]
pub trait Record: Clone {
    fn id(&self) -> Uuid;
}

/// Ordered rows plus an id -> position index
#[derive(Debug, Clone)]
pub struct Collection<T> {
    rows: Vec<T>,
    index: HashMap<Uuid, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row. A row whose id is already present is handed back
    /// untouched instead of being inserted.
    pub fn insert(&mut self, row: T) -> Result<(), T> {
        let id = row.id();
        if self.index.contains_key(&id) {
            return Err(row);
        }
        self.index.insert(id, self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.rows[pos])
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.index.contains_key(&id)
    }

    /// Swap the row with the same id in place, returning the previous version.
    /// Returns `None` (and stores nothing) if no row has that id.
    pub fn replace(&mut self, row: T) -> Option<T> {
        let pos = *self.index.get(&row.id())?;
        Some(std::mem::replace(&mut self.rows[pos], row))
    }

    /// Hard-remove a row by id
    pub fn remove(&mut self, id: Uuid) -> Option<T> {
        let pos = self.index.remove(&id)?;
        let removed = self.rows.remove(pos);
        for (offset, row) in self.rows[pos..].iter().enumerate() {
            self.index.insert(row.id(), pos + offset);
        }
        Some(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// Clone every row in insertion order
    pub fn to_vec(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
