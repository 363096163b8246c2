//! Interned symbol tables built during a scan.
//!
//! Each table hands out 1-based indices in order of first sighting and keeps
//! exactly one entry per name or spelling.

use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

/// Declared type recorded for identifiers first seen outside a declaration.
pub const NOT_DECLARED: &str = "Not Declared";

pub trait Symbol {
    fn name(&self) -> &str;
    fn index(&self) -> usize;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub index: usize,
    pub declared_type: String,
}

impl Identifier {
    pub fn is_declared(&self) -> bool {
        self.declared_type != NOT_DECLARED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub spelling: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub name: String,
    pub index: usize,
    /// Line of the `goto` that references this label.
    pub line_from: Option<u32>,
    /// Line where the label is declared as a jump target.
    pub line_to: Option<u32>,
}

impl Symbol for Identifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn index(&self) -> usize {
        self.index
    }
}

impl Symbol for Constant {
    fn name(&self) -> &str {
        &self.spelling
    }

    fn index(&self) -> usize {
        self.index
    }
}

impl Symbol for Label {
    fn name(&self) -> &str {
        &self.name
    }

    fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
pub struct SymbolTable<T: Symbol> {
    entries: Vec<T>,
    lookup: HashMap<String, usize>,
}

impl<T: Symbol> Default for SymbolTable<T> {
    fn default() -> Self {
        SymbolTable {
            entries: vec![],
            lookup: HashMap::new(),
        }
    }
}

impl<T: Symbol> SymbolTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.lookup.get(name).map(|slot| &self.entries[*slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let slot = self.lookup.get(name).copied()?;
        self.entries.get_mut(slot)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Returns the entry for `name`, registering `make(next_index)` first if
    /// the name has not been seen yet. The flag is true for a fresh entry.
    pub fn intern(&mut self, name: &str, make: impl FnOnce(usize) -> T) -> (&mut T, bool) {
        let mut inserted = false;
        let slot = match self.lookup.get(name).copied() {
            Some(slot) => slot,
            None => {
                let entry = make(self.entries.len() + 1);
                trace!(name, index = entry.index(), "interned symbol");
                self.entries.push(entry);
                self.lookup.insert(name.to_string(), self.entries.len() - 1);
                inserted = true;
                self.entries.len() - 1
            }
        };

        (&mut self.entries[slot], inserted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.lookup.clear();
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}
