//! # Entity Sets
//!
//! Ordered groups of same-dimensionality elements, renderable to the
//! comma-separated reference lists the script syntax expects.
//!
//! Each set holds three kinds of element: a concrete entity of the set's
//! dimensionality, a nested set of the same dimensionality, or a raw
//! pre-rendered fragment (used to embed `Boundary{...}` / `PointsOf{...}`
//! expressions). The per-set element enums make a mismatched element
//! unrepresentable; the fallible path is `try_from_operands`, which
//! classifies a heterogeneous operand list and rejects the first operand
//! of the wrong dimensionality.
//!
//! Rendering groups by element kind: first all direct entity ids, then all
//! nested sets, then all raw fragments, each group in its original relative
//! order and every item joined with `", "`. The grouping (rather than a
//! single interleaved order) is what the target format downstream expects;
//! it must not be changed.

use crate::error::MeshingError;
use gmsh_model::{Curve, Entity, EntityKind, Point, Surface, Volume};

// =============================================================================
// RENDERABLE REFERENCE LISTS
// =============================================================================

/// Anything that renders to a `<Tag>{<id_list>};` reference list.
pub trait BooleanList {
    fn boolean_list(&self) -> String;
}

impl BooleanList for Entity {
    fn boolean_list(&self) -> String {
        Entity::boolean_list(self)
    }
}

impl BooleanList for Point {
    fn boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Point.tag(), self.id())
    }
}

impl BooleanList for Curve {
    fn boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Curve.tag(), self.id())
    }
}

impl BooleanList for Surface {
    fn boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Surface.tag(), self.id())
    }
}

impl BooleanList for Volume {
    fn boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Volume.tag(), self.id())
    }
}

// =============================================================================
// OPERANDS
// =============================================================================

/// A heterogeneous input to set construction, boundary resolution, or
/// field attachment: any entity or any set.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Point(Point),
    Curve(Curve),
    Surface(Surface),
    Volume(Volume),
    Points(PointSet),
    Curves(CurveSet),
    Surfaces(SurfaceSet),
    Volumes(VolumeSet),
}

impl Operand {
    /// Human-readable kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Point(_) => "point",
            Operand::Curve(_) => "curve",
            Operand::Surface(_) => "surface",
            Operand::Volume(_) => "volume",
            Operand::Points(_) => "point set",
            Operand::Curves(_) => "curve set",
            Operand::Surfaces(_) => "surface set",
            Operand::Volumes(_) => "volume set",
        }
    }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Self {
        Operand::Point(p)
    }
}

impl From<Curve> for Operand {
    fn from(c: Curve) -> Self {
        Operand::Curve(c)
    }
}

impl From<Surface> for Operand {
    fn from(s: Surface) -> Self {
        Operand::Surface(s)
    }
}

impl From<Volume> for Operand {
    fn from(v: Volume) -> Self {
        Operand::Volume(v)
    }
}

impl From<PointSet> for Operand {
    fn from(s: PointSet) -> Self {
        Operand::Points(s)
    }
}

impl From<CurveSet> for Operand {
    fn from(s: CurveSet) -> Self {
        Operand::Curves(s)
    }
}

impl From<SurfaceSet> for Operand {
    fn from(s: SurfaceSet) -> Self {
        Operand::Surfaces(s)
    }
}

impl From<VolumeSet> for Operand {
    fn from(s: VolumeSet) -> Self {
        Operand::Volumes(s)
    }
}

impl From<Entity> for Operand {
    fn from(e: Entity) -> Self {
        match e {
            Entity::Point(p) => Operand::Point(p),
            Entity::Curve(c) => Operand::Curve(c),
            Entity::Surface(s) => Operand::Surface(s),
            Entity::Volume(v) => Operand::Volume(v),
        }
    }
}

impl From<EntitySet> for Operand {
    fn from(set: EntitySet) -> Self {
        match set {
            EntitySet::Points(s) => Operand::Points(s),
            EntitySet::Curves(s) => Operand::Curves(s),
            EntitySet::Surfaces(s) => Operand::Surfaces(s),
            EntitySet::Volumes(s) => Operand::Volumes(s),
        }
    }
}

// =============================================================================
// POINT SETS
// =============================================================================

/// One element of a [`PointSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum PointElement {
    Point(Point),
    Set(PointSet),
    Code(String),
}

impl From<Point> for PointElement {
    fn from(p: Point) -> Self {
        PointElement::Point(p)
    }
}

impl From<PointSet> for PointElement {
    fn from(s: PointSet) -> Self {
        PointElement::Set(s)
    }
}

impl From<String> for PointElement {
    fn from(code: String) -> Self {
        PointElement::Code(code)
    }
}

/// An ordered set of points, nested point sets, and raw fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    elements: Vec<PointElement>,
}

impl PointSet {
    pub fn new(elements: Vec<PointElement>) -> Self {
        Self { elements }
    }

    /// Classify heterogeneous operands as points; the first operand of
    /// another dimensionality fails.
    pub fn try_from_operands(operands: &[Operand]) -> Result<Self, MeshingError> {
        let mut elements = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Operand::Point(p) => elements.push(PointElement::Point(p.clone())),
                Operand::Points(s) => elements.push(PointElement::Set(s.clone())),
                other => {
                    return Err(MeshingError::TypeConstraint {
                        expected: "point or point set",
                        found: other.kind_name(),
                    })
                }
            }
        }
        Ok(Self::new(elements))
    }

    pub fn empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Grouped rendering: entity ids, then nested sets, then fragments.
    pub fn code(&self) -> String {
        let mut parts = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            if let PointElement::Point(p) = element {
                parts.push(p.id().to_string());
            }
        }
        for element in &self.elements {
            if let PointElement::Set(s) = element {
                parts.push(s.code());
            }
        }
        for element in &self.elements {
            if let PointElement::Code(c) = element {
                parts.push(c.clone());
            }
        }
        parts.join(", ")
    }

    pub fn as_boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Point.tag(), self.code())
    }
}

impl BooleanList for PointSet {
    fn boolean_list(&self) -> String {
        self.as_boolean_list()
    }
}

// =============================================================================
// CURVE SETS
// =============================================================================

/// One element of a [`CurveSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum CurveElement {
    Curve(Curve),
    Set(CurveSet),
    Code(String),
}

impl From<Curve> for CurveElement {
    fn from(c: Curve) -> Self {
        CurveElement::Curve(c)
    }
}

impl From<CurveSet> for CurveElement {
    fn from(s: CurveSet) -> Self {
        CurveElement::Set(s)
    }
}

impl From<String> for CurveElement {
    fn from(code: String) -> Self {
        CurveElement::Code(code)
    }
}

/// An ordered set of curves, nested curve sets, and raw fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    elements: Vec<CurveElement>,
}

impl CurveSet {
    pub fn new(elements: Vec<CurveElement>) -> Self {
        Self { elements }
    }

    pub fn try_from_operands(operands: &[Operand]) -> Result<Self, MeshingError> {
        let mut elements = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Operand::Curve(c) => elements.push(CurveElement::Curve(c.clone())),
                Operand::Curves(s) => elements.push(CurveElement::Set(s.clone())),
                other => {
                    return Err(MeshingError::TypeConstraint {
                        expected: "curve or curve set",
                        found: other.kind_name(),
                    })
                }
            }
        }
        Ok(Self::new(elements))
    }

    pub fn empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn code(&self) -> String {
        let mut parts = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            if let CurveElement::Curve(c) = element {
                parts.push(c.id().to_string());
            }
        }
        for element in &self.elements {
            if let CurveElement::Set(s) = element {
                parts.push(s.code());
            }
        }
        for element in &self.elements {
            if let CurveElement::Code(c) = element {
                parts.push(c.clone());
            }
        }
        parts.join(", ")
    }

    pub fn as_boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Curve.tag(), self.code())
    }
}

impl BooleanList for CurveSet {
    fn boolean_list(&self) -> String {
        self.as_boolean_list()
    }
}

// =============================================================================
// SURFACE SETS
// =============================================================================

/// One element of a [`SurfaceSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceElement {
    Surface(Surface),
    Set(SurfaceSet),
    Code(String),
}

impl From<Surface> for SurfaceElement {
    fn from(s: Surface) -> Self {
        SurfaceElement::Surface(s)
    }
}

impl From<SurfaceSet> for SurfaceElement {
    fn from(s: SurfaceSet) -> Self {
        SurfaceElement::Set(s)
    }
}

impl From<String> for SurfaceElement {
    fn from(code: String) -> Self {
        SurfaceElement::Code(code)
    }
}

/// An ordered set of surfaces, nested surface sets, and raw fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSet {
    elements: Vec<SurfaceElement>,
}

impl SurfaceSet {
    pub fn new(elements: Vec<SurfaceElement>) -> Self {
        Self { elements }
    }

    pub fn try_from_operands(operands: &[Operand]) -> Result<Self, MeshingError> {
        let mut elements = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Operand::Surface(s) => elements.push(SurfaceElement::Surface(s.clone())),
                Operand::Surfaces(s) => elements.push(SurfaceElement::Set(s.clone())),
                other => {
                    return Err(MeshingError::TypeConstraint {
                        expected: "surface or surface set",
                        found: other.kind_name(),
                    })
                }
            }
        }
        Ok(Self::new(elements))
    }

    pub fn empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn code(&self) -> String {
        let mut parts = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            if let SurfaceElement::Surface(s) = element {
                parts.push(s.id().to_string());
            }
        }
        for element in &self.elements {
            if let SurfaceElement::Set(s) = element {
                parts.push(s.code());
            }
        }
        for element in &self.elements {
            if let SurfaceElement::Code(c) = element {
                parts.push(c.clone());
            }
        }
        parts.join(", ")
    }

    pub fn as_boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Surface.tag(), self.code())
    }
}

impl BooleanList for SurfaceSet {
    fn boolean_list(&self) -> String {
        self.as_boolean_list()
    }
}

// =============================================================================
// VOLUME SETS
// =============================================================================

/// One element of a [`VolumeSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeElement {
    Volume(Volume),
    Set(VolumeSet),
    Code(String),
}

impl From<Volume> for VolumeElement {
    fn from(v: Volume) -> Self {
        VolumeElement::Volume(v)
    }
}

impl From<VolumeSet> for VolumeElement {
    fn from(s: VolumeSet) -> Self {
        VolumeElement::Set(s)
    }
}

impl From<String> for VolumeElement {
    fn from(code: String) -> Self {
        VolumeElement::Code(code)
    }
}

/// An ordered set of volumes, nested volume sets, and raw fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSet {
    elements: Vec<VolumeElement>,
}

impl VolumeSet {
    pub fn new(elements: Vec<VolumeElement>) -> Self {
        Self { elements }
    }

    pub fn try_from_operands(operands: &[Operand]) -> Result<Self, MeshingError> {
        let mut elements = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Operand::Volume(v) => elements.push(VolumeElement::Volume(v.clone())),
                Operand::Volumes(s) => elements.push(VolumeElement::Set(s.clone())),
                other => {
                    return Err(MeshingError::TypeConstraint {
                        expected: "volume or volume set",
                        found: other.kind_name(),
                    })
                }
            }
        }
        Ok(Self::new(elements))
    }

    pub fn empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn code(&self) -> String {
        let mut parts = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            if let VolumeElement::Volume(v) = element {
                parts.push(v.id().to_string());
            }
        }
        for element in &self.elements {
            if let VolumeElement::Set(s) = element {
                parts.push(s.code());
            }
        }
        for element in &self.elements {
            if let VolumeElement::Code(c) = element {
                parts.push(c.clone());
            }
        }
        parts.join(", ")
    }

    pub fn as_boolean_list(&self) -> String {
        format!("{}{{{}}};", EntityKind::Volume.tag(), self.code())
    }
}

impl BooleanList for VolumeSet {
    fn boolean_list(&self) -> String {
        self.as_boolean_list()
    }
}

// =============================================================================
// SET SUM TYPE
// =============================================================================

/// A set of any single dimensionality, as produced by boundary resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum EntitySet {
    Points(PointSet),
    Curves(CurveSet),
    Surfaces(SurfaceSet),
    Volumes(VolumeSet),
}

impl EntitySet {
    pub fn empty(&self) -> bool {
        match self {
            EntitySet::Points(s) => s.empty(),
            EntitySet::Curves(s) => s.empty(),
            EntitySet::Surfaces(s) => s.empty(),
            EntitySet::Volumes(s) => s.empty(),
        }
    }

    pub fn code(&self) -> String {
        match self {
            EntitySet::Points(s) => s.code(),
            EntitySet::Curves(s) => s.code(),
            EntitySet::Surfaces(s) => s.code(),
            EntitySet::Volumes(s) => s.code(),
        }
    }

    pub fn as_boolean_list(&self) -> String {
        match self {
            EntitySet::Points(s) => s.as_boolean_list(),
            EntitySet::Curves(s) => s.as_boolean_list(),
            EntitySet::Surfaces(s) => s.as_boolean_list(),
            EntitySet::Volumes(s) => s.as_boolean_list(),
        }
    }
}

impl BooleanList for EntitySet {
    fn boolean_list(&self) -> String {
        self.as_boolean_list()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use gmsh_model::Geometry;

    fn two_points(geo: &mut Geometry) -> (Point, Point) {
        let a = geo.add_point(DVec3::ZERO, None);
        let b = geo.add_point(DVec3::X, None);
        (a, b)
    }

    #[test]
    fn test_point_set_code_joins_ids_in_order() {
        let mut geo = Geometry::new();
        let (a, b) = two_points(&mut geo);
        let set = PointSet::new(vec![a.into(), b.into()]);
        assert_eq!(set.code(), "p0, p1");
    }

    #[test]
    fn test_empty_reflects_element_count() {
        let mut geo = Geometry::new();
        let (a, _) = two_points(&mut geo);
        assert!(PointSet::new(vec![]).empty());
        assert!(!PointSet::new(vec![a.into()]).empty());
        assert!(CurveSet::new(vec![]).empty());
        assert!(VolumeSet::new(vec![]).empty());
    }

    #[test]
    fn test_code_groups_entities_then_sets_then_fragments() {
        let mut geo = Geometry::new();
        let (a, b) = two_points(&mut geo);
        let c = geo.add_point(DVec3::Y, None);
        let nested = PointSet::new(vec![c.into()]);
        // Insertion order interleaves the kinds; rendering regroups them.
        let set = PointSet::new(vec![
            PointElement::Code("PointsOf{Surface{s0};}".to_string()),
            a.into(),
            nested.into(),
            b.into(),
        ]);
        assert_eq!(set.code(), "p0, p1, p2, PointsOf{Surface{s0};}");
    }

    #[test]
    fn test_curve_set_boolean_list() {
        let mut geo = Geometry::new();
        let (a, b) = two_points(&mut geo);
        let line = geo.add_line(&a, &b);
        let set = CurveSet::new(vec![line.into()]);
        assert_eq!(set.as_boolean_list(), "Line{l0};");
    }

    #[test]
    fn test_try_from_operands_rejects_mismatched_kind() {
        let mut geo = Geometry::new();
        let (a, b) = two_points(&mut geo);
        let line = geo.add_line(&a, &b);
        let err = PointSet::try_from_operands(&[line.into()]).unwrap_err();
        match err {
            MeshingError::TypeConstraint { found, .. } => assert_eq!(found, "curve"),
            other => panic!("expected TypeConstraint, got {other:?}"),
        }
    }

    #[test]
    fn test_try_from_operands_accepts_nested_sets() {
        let mut geo = Geometry::new();
        let (a, b) = two_points(&mut geo);
        let line = geo.add_line(&a, &b);
        let inner = CurveSet::new(vec![line.clone().into()]);
        let set =
            CurveSet::try_from_operands(&[line.into(), inner.into()]).unwrap();
        assert_eq!(set.code(), "l0, l0");
    }

    #[test]
    fn test_entity_boolean_list_trait() {
        let mut geo = Geometry::new();
        let (a, _) = two_points(&mut geo);
        assert_eq!(a.boolean_list(), "Point{p0};");
    }
}
