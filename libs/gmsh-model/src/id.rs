//! # Entity Identifiers
//!
//! Symbolic script identifiers and their per-document allocation.
//!
//! Every entity is referenced in the generated script through a symbolic
//! variable (`p0`, `l3`, `s1`, ...) rather than a literal number, so the
//! script stays readable and Gmsh resolves the actual tags itself via the
//! `newp`/`newl`/... pseudo-variables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbolic identifier assigned to an entity by its owning document.
///
/// Ids are plain script variable names. They are stable for the lifetime
/// of the document and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// The identifier as it appears in the script.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The entity classes the allocator hands out ids for.
///
/// Each class has its own counter and script prefix, matching the naming
/// Gmsh users expect in hand-written `.geo` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityClass {
    Point,
    Curve,
    CurveLoop,
    Surface,
    SurfaceLoop,
    Volume,
}

impl EntityClass {
    fn prefix(self) -> &'static str {
        match self {
            EntityClass::Point => "p",
            EntityClass::Curve => "l",
            EntityClass::CurveLoop => "ll",
            EntityClass::Surface => "s",
            EntityClass::SurfaceLoop => "sl",
            EntityClass::Volume => "vol",
        }
    }
}

/// Per-document id allocation.
///
/// One monotonic counter per entity class. The allocator is owned by the
/// `Geometry` document; it is deliberately not global state, so several
/// documents can coexist with independent numbering.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counters: [u64; 6],
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for `class`. Never reuses an id.
    pub fn fresh(&mut self, class: EntityClass) -> EntityId {
        let slot = match class {
            EntityClass::Point => 0,
            EntityClass::Curve => 1,
            EntityClass::CurveLoop => 2,
            EntityClass::Surface => 3,
            EntityClass::SurfaceLoop => 4,
            EntityClass::Volume => 5,
        };
        let n = self.counters[slot];
        self.counters[slot] += 1;
        EntityId(format!("{}{}", class.prefix(), n))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increment_per_class() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.fresh(EntityClass::Point).as_str(), "p0");
        assert_eq!(ids.fresh(EntityClass::Point).as_str(), "p1");
        assert_eq!(ids.fresh(EntityClass::Curve).as_str(), "l0");
        assert_eq!(ids.fresh(EntityClass::Point).as_str(), "p2");
        assert_eq!(ids.fresh(EntityClass::Volume).as_str(), "vol0");
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();
        a.fresh(EntityClass::Surface);
        assert_eq!(b.fresh(EntityClass::Surface).as_str(), "s0");
    }
}
