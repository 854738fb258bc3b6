//=========================================================================
// Id Set
//=========================================================================
//
// Owned, insertion-ordered set of identifiers.
//
// Updates are pure: `with()` / `without()` / `toggled()` return a new set
// and leave the receiver untouched, so a set handed to one consumer can
// never be spliced underneath another.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

//=== IdSet ===============================================================

/// Ordered set of unique identifiers.
///
/// Equality ignores order (set semantics); iteration follows insertion
/// order so presentation can list entries the way they were picked.
#[derive(Debug, Clone)]
pub struct IdSet<T: Copy + Eq + Hash + Debug> {
    ids: IndexSet<T>,
}

impl<T: Copy + Eq + Hash + Debug> IdSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            ids: IndexSet::new(),
        }
    }

    /// Creates a set holding exactly one identifier.
    pub fn singleton(id: T) -> Self {
        let mut ids = IndexSet::with_capacity(1);
        ids.insert(id);
        Self { ids }
    }

    //--- Pure Updates -----------------------------------------------------

    /// Returns a copy of this set with `id` appended (no-op if present).
    pub fn with(&self, id: T) -> Self {
        let mut ids = self.ids.clone();
        ids.insert(id);
        Self { ids }
    }

    /// Returns a copy of this set without `id`, keeping the order of the rest.
    pub fn without(&self, id: T) -> Self {
        let mut ids = self.ids.clone();
        ids.shift_remove(&id);
        Self { ids }
    }

    /// Returns `without(id)` if present, `with(id)` otherwise.
    pub fn toggled(&self, id: T) -> Self {
        if self.contains(id) {
            self.without(id)
        } else {
            self.with(id)
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, id: T) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.ids.iter().copied()
    }

    /// Copies the identifiers out in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Copy + Eq + Hash + Debug> Default for IdSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash + Debug> PartialEq for IdSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl<T: Copy + Eq + Hash + Debug> Eq for IdSet<T> {}

impl<T: Copy + Eq + Hash + Debug> FromIterator<T> for IdSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
