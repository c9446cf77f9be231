//! # Boundary Resolution
//!
//! Derives the topological boundary (one dimensionality lower) or the
//! defining points of one or more entities, as an embedded script
//! expression.
//!
//! Resolution is dimensionality-polymorphic: the operands are first tried
//! as a homogeneous curve set, then as a surface set, then as a volume set,
//! in increasing dimensionality order; the first classification that
//! accepts every operand wins. Only when all three attempts reject does
//! the resolver dispatch on a single operand's concrete kind.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use gmsh_meshing::{boundary_of, EntitySet};
//! use gmsh_model::Geometry;
//!
//! let mut geo = Geometry::new();
//! let a = geo.add_point(DVec3::ZERO, None);
//! let b = geo.add_point(DVec3::X, None);
//! let line = geo.add_line(&a, &b);
//!
//! let endpoints = boundary_of(&[line.into()]).unwrap();
//! assert_eq!(endpoints.code(), "Boundary{Line{l0};}");
//! assert!(matches!(endpoints, EntitySet::Points(_)));
//! ```

use crate::error::MeshingError;
use crate::sets::{
    BooleanList, CurveElement, CurveSet, EntitySet, Operand, PointElement, PointSet,
    SurfaceElement, SurfaceSet, VolumeSet,
};

/// Resolve the boundary of the given operands.
///
/// A single entity is passed as a one-element slice. The result is a set
/// one dimensionality below the input, holding a single embedded
/// `Boundary{...}` fragment.
///
/// Fails with [`MeshingError::PointBoundary`] when asked for the boundary
/// of a point, and with [`MeshingError::Unclassified`] when the operands
/// match no single dimensionality.
pub fn boundary_of(operands: &[Operand]) -> Result<EntitySet, MeshingError> {
    if let Some(set) = resolve_homogeneous(operands) {
        return Ok(set);
    }

    // The grouped attempts rejected; fall back to single-operand dispatch.
    match operands {
        [Operand::Point(_)] | [Operand::Points(_)] => Err(MeshingError::PointBoundary),
        [Operand::Curve(c)] => Ok(EntitySet::Points(boundary_fragment_points(c))),
        [Operand::Curves(s)] => Ok(EntitySet::Points(boundary_fragment_points(s))),
        [Operand::Surface(s)] => Ok(EntitySet::Curves(boundary_fragment_curves(s))),
        [Operand::Surfaces(s)] => Ok(EntitySet::Curves(boundary_fragment_curves(s))),
        [Operand::Volume(v)] => Ok(EntitySet::Surfaces(boundary_fragment_surfaces(v))),
        [Operand::Volumes(s)] => Ok(EntitySet::Surfaces(boundary_fragment_surfaces(s))),
        _ => Err(MeshingError::Unclassified(describe(operands))),
    }
}

/// The set of points defining an entity or set, as an embedded
/// `PointsOf{...}` expression.
///
/// Unlike [`boundary_of`], this wraps the operand's own reference list
/// directly; no grouped resolution is involved.
pub fn points_of(entity: &impl BooleanList) -> PointSet {
    PointSet::new(vec![PointElement::Code(format!(
        "PointsOf{{{}}}",
        entity.boolean_list()
    ))])
}

// =============================================================================
// RANKED ATTEMPTS
// =============================================================================

/// Try each dimensionality in increasing order; first acceptance wins.
///
/// Each attempt classifies the operands as one homogeneous set and, on
/// success, wraps that set's reference list in a `Boundary{...}` fragment
/// one dimensionality lower.
fn resolve_homogeneous(operands: &[Operand]) -> Option<EntitySet> {
    let attempts: [fn(&[Operand]) -> Option<EntitySet>; 3] = [
        |ops| {
            let curves = CurveSet::try_from_operands(ops).ok()?;
            Some(EntitySet::Points(boundary_fragment_points(&curves)))
        },
        |ops| {
            let surfaces = SurfaceSet::try_from_operands(ops).ok()?;
            Some(EntitySet::Curves(boundary_fragment_curves(&surfaces)))
        },
        |ops| {
            let volumes = VolumeSet::try_from_operands(ops).ok()?;
            Some(EntitySet::Surfaces(boundary_fragment_surfaces(&volumes)))
        },
    ];
    attempts.iter().find_map(|attempt| attempt(operands))
}

fn boundary_fragment_points(inner: &impl BooleanList) -> PointSet {
    PointSet::new(vec![PointElement::Code(boundary_fragment(inner))])
}

fn boundary_fragment_curves(inner: &impl BooleanList) -> CurveSet {
    CurveSet::new(vec![CurveElement::Code(boundary_fragment(inner))])
}

fn boundary_fragment_surfaces(inner: &impl BooleanList) -> SurfaceSet {
    SurfaceSet::new(vec![SurfaceElement::Code(boundary_fragment(inner))])
}

fn boundary_fragment(inner: &impl BooleanList) -> String {
    format!("Boundary{{{}}}", inner.boolean_list())
}

fn describe(operands: &[Operand]) -> String {
    operands
        .iter()
        .map(Operand::kind_name)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// TESTS
// =============================================================================
