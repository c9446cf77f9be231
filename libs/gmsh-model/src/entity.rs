//! # Geometric Entities
//!
//! The typed entity model: points, curves, surfaces, volumes, and the
//! loop helpers used as construction input for surfaces and volumes.
//!
//! Entities are immutable value types carrying their symbolic id and the
//! parameters they were built from. Downstream code dispatches on the
//! `Entity` sum type with exhaustive matching; there is no downcasting.

use crate::id::EntityId;
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// PRIMITIVE ENTITIES
// =============================================================================

/// A 0-D point with coordinates and a characteristic mesh length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: EntityId,
    coords: DVec3,
    lcar: f64,
}

impl Point {
    pub(crate) fn new(id: EntityId, coords: DVec3, lcar: f64) -> Self {
        Self { id, coords, lcar }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn coords(&self) -> DVec3 {
        self.coords
    }

    pub fn lcar(&self) -> f64 {
        self.lcar
    }
}

/// The concrete shape of a 1-D curve.
///
/// All curve kinds share the script reference tag `Line`; the kind only
/// selects the construction statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    Line,
    CircleArc,
    Spline,
}

/// A 1-D curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    id: EntityId,
    kind: CurveKind,
}

impl Curve {
    pub(crate) fn new(id: EntityId, kind: CurveKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }
}

/// A closed chain of curves, used only as surface construction input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveLoop {
    id: EntityId,
}

impl CurveLoop {
    pub(crate) fn new(id: EntityId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }
}

/// The concrete shape of a 2-D surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Plane,
    Ruled,
}

/// A 2-D surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    id: EntityId,
    kind: SurfaceKind,
}

impl Surface {
    pub(crate) fn new(id: EntityId, kind: SurfaceKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }
}

/// A closed shell of surfaces, used only as volume construction input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLoop {
    id: EntityId,
}

impl SurfaceLoop {
    pub(crate) fn new(id: EntityId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A 3-D volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    id: EntityId,
}

impl Volume {
    pub(crate) fn new(id: EntityId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }
}

// =============================================================================
// ENTITY SUM TYPE
// =============================================================================

/// The dimensionality of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Point,
    Curve,
    Surface,
    Volume,
}

impl EntityKind {
    /// The reference tag used when listing entities of this kind in a
    /// script expression. Curves of every shape are referenced as `Line`.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Point => "Point",
            EntityKind::Curve => "Line",
            EntityKind::Surface => "Surface",
            EntityKind::Volume => "Volume",
        }
    }
}

/// Any geometric entity, tagged by dimensionality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    Point(Point),
    Curve(Curve),
    Surface(Surface),
    Volume(Volume),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Point(_) => EntityKind::Point,
            Entity::Curve(_) => EntityKind::Curve,
            Entity::Surface(_) => EntityKind::Surface,
            Entity::Volume(_) => EntityKind::Volume,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Point(p) => p.id(),
            Entity::Curve(c) => c.id(),
            Entity::Surface(s) => s.id(),
            Entity::Volume(v) => v.id(),
        }
    }

    /// Render the single-entity reference list `<Tag>{<id>};`.
    pub fn boolean_list(&self) -> String {
        format!("{}{{{}}};", self.kind().tag(), self.id())
    }
}

impl From<Point> for Entity {
    fn from(p: Point) -> Self {
        Entity::Point(p)
    }
}

impl From<Curve> for Entity {
    fn from(c: Curve) -> Self {
        Entity::Curve(c)
    }
}

impl From<Surface> for Entity {
    fn from(s: Surface) -> Self {
        Entity::Surface(s)
    }
}

impl From<Volume> for Entity {
    fn from(v: Volume) -> Self {
        Entity::Volume(v)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{EntityClass, IdAllocator};

    fn sample_surface() -> Surface {
        let mut ids = IdAllocator::new();
        Surface::new(ids.fresh(EntityClass::Surface), SurfaceKind::Plane)
    }

    #[test]
    fn test_curve_tag_is_line() {
        assert_eq!(EntityKind::Curve.tag(), "Line");
    }

    #[test]
    fn test_entity_boolean_list() {
        let surface = sample_surface();
        let entity = Entity::from(surface);
        assert_eq!(entity.boolean_list(), "Surface{s0};");
    }
}
