use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a label on the canvas.
/// Plain `u32` so it fits a JS `Number` exactly, both in the label JSON
/// and across the `wasm-bindgen` boundary. Serializes as a bare number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(u32);

impl LabelId {
    /// Wrap a raw id (e.g. one handed back by JavaScript).
    pub const fn from_raw(raw: u32) -> Self {
        LabelId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source owned by a label store.
///
/// Never rewound: undoing an add does not give its id back, so an id is
/// unique for the whole session no matter how fast labels are created.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        // 0 is reserved as "no label" for the JS bridge.
        Self { next: 1 }
    }

    /// Hand out the next unused id.
    pub fn allocate(&mut self) -> LabelId {
        let id = LabelId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_ids_are_unique() {
        let mut ids = IdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn ids_start_above_zero() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(), LabelId::from_raw(1));
        assert_eq!(ids.allocate().raw(), 2);
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(LabelId::from_raw(7).to_string(), "#7");
        assert_eq!(format!("{:?}", LabelId::from_raw(7)), "#7");
    }
}
