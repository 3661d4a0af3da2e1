//! Files and nodes as seen by the placement engine.

/// A file waiting for placement. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    name: String,
    size: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// A node with a fixed capacity and a load that only grows.
///
/// `free` is derived from `capacity - occupied`; `occupied <= capacity`
/// holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Container {
    name: String,
    capacity: u64,
    occupied: u64,
}

impl Container {
    /// Create an empty node.
    pub fn new(name: impl Into<String>, capacity: u64) -> Self {
        Self {
            name: name.into(),
            capacity,
            occupied: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    pub fn free(&self) -> u64 {
        self.capacity - self.occupied
    }

    /// True iff `item` fits into the remaining free space.
    pub fn can_accept(&self, item: &Item) -> bool {
        item.size <= self.free()
    }

    /// Add `item` to this node's load.
    ///
    /// # Panics
    ///
    /// Panics if the item does not fit. Callers check [`Container::can_accept`]
    /// first; reaching the panic means the placement loop is broken.
    pub fn place(&mut self, item: &Item) {
        assert!(
            self.can_accept(item),
            "file '{}' ({}) placed on node '{}' with only {} free",
            item.name,
            item.size,
            self.name,
            self.free()
        );
        self.occupied += item.size;
    }
}
