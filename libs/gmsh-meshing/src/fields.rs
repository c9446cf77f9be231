//! # Mesh Size Fields
//!
//! Declarative size field definitions: distance-based fields attached to
//! entities, expression fields over other fields, and min/max combinators.
//!
//! A field is immutable after construction. It renders to a block of
//! statements: one declaration line `Field[<id>] = <kind>;` followed by one
//! attribute line per configured attribute. Attribute values are fixed at
//! construction; the `Field[<id>]` prefixes render from the field's current
//! id, so a field renumbered at registration still emits a self-consistent
//! block.
//!
//! Field ids come from a [`FieldAllocator`] owned by the caller or the
//! session. The allocator is an explicit value, not process-global state,
//! so independent sessions never share numbering.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use gmsh_meshing::{Field, FieldAllocator, MathEvalArgs};
//! use gmsh_model::Geometry;
//!
//! let mut geo = Geometry::new();
//! let mut fields = FieldAllocator::new();
//! let p = geo.add_point(DVec3::ZERO, None);
//!
//! let distance = Field::distance(&mut fields, &[p.into()], Some(5)).unwrap();
//! let eval = Field::math_eval(
//!     &mut fields,
//!     "{}^2",
//!     MathEvalArgs::Positional(&[&distance]),
//! )
//! .unwrap();
//! assert!(eval.code().contains("Field[1].F = \"F0^2\";"));
//! ```

use crate::error::MeshingError;
use crate::sets::{CurveElement, CurveSet, Operand, PointElement, PointSet, SurfaceElement, SurfaceSet};
use config::constants::DEFAULT_N_NODES_BY_EDGE;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// FIELD KINDS AND ALLOCATION
// =============================================================================

/// The kind tag of a size field, as it appears in the declaration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Distance,
    MathEval,
    Min,
    Max,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Distance => "Distance",
            FieldKind::MathEval => "MathEval",
            FieldKind::Min => "Min",
            FieldKind::Max => "Max",
        };
        f.write_str(name)
    }
}

/// Monotonic field id allocation.
///
/// Owned by the caller or the session and injected into every field
/// constructor. Ids are never decremented or reused.
#[derive(Debug, Default)]
pub struct FieldAllocator {
    next: u32,
}

impl FieldAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next field id.
    pub fn fresh(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

// =============================================================================
// FIELD
// =============================================================================

/// A declarative size field: id, kind, and an ordered attribute list.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    id: u32,
    kind: FieldKind,
    attributes: Vec<(&'static str, String)>,
}

impl Field {
    fn new(allocator: &mut FieldAllocator, kind: FieldKind) -> Self {
        Self {
            id: allocator.fresh(),
            kind,
            attributes: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The token other fields use to reference this one in expressions.
    pub fn token(&self) -> String {
        format!("F{}", self.id)
    }

    /// Render the field's full statement block.
    pub fn code(&self) -> String {
        let mut lines = Vec::with_capacity(1 + self.attributes.len());
        lines.push(format!("Field[{}] = {};", self.id, self.kind));
        for (attribute, value) in &self.attributes {
            lines.push(format!("Field[{}].{} = {};", self.id, attribute, value));
        }
        lines.join("\n")
    }

    /// Reassign the id. Used by the document when registering under the
    /// `OnRegister` numbering policy; attribute values are left untouched.
    pub(crate) fn renumber(&mut self, id: u32) {
        self.id = id;
    }

    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// A distance field attached to the given points, curves, and surfaces
    /// (entities or sets of them, freely mixed).
    ///
    /// Operands are partitioned by dimensionality; each non-empty group
    /// contributes one `NodesList` / `EdgesList` / `FacesList` attribute.
    /// `n_nodes_by_edge` defaults to the configured value. Volumes cannot
    /// carry a distance field and are rejected.
    pub fn distance(
        allocator: &mut FieldAllocator,
        objects: &[Operand],
        n_nodes_by_edge: Option<u32>,
    ) -> Result<Self, MeshingError> {
        let mut points = Vec::new();
        let mut curves = Vec::new();
        let mut surfaces = Vec::new();
        for object in objects {
            match object {
                Operand::Point(p) => points.push(PointElement::Point(p.clone())),
                Operand::Points(s) => points.push(PointElement::Set(s.clone())),
                Operand::Curve(c) => curves.push(CurveElement::Curve(c.clone())),
                Operand::Curves(s) => curves.push(CurveElement::Set(s.clone())),
                Operand::Surface(s) => surfaces.push(SurfaceElement::Surface(s.clone())),
                Operand::Surfaces(s) => surfaces.push(SurfaceElement::Set(s.clone())),
                other @ (Operand::Volume(_) | Operand::Volumes(_)) => {
                    return Err(MeshingError::TypeConstraint {
                        expected: "point, curve, or surface",
                        found: other.kind_name(),
                    })
                }
            }
        }

        let mut field = Self::new(allocator, FieldKind::Distance);
        let nodes = PointSet::new(points);
        if !nodes.empty() {
            field
                .attributes
                .push(("NodesList", format!("{{{}}}", nodes.code())));
        }
        let edges = CurveSet::new(curves);
        if !edges.empty() {
            field
                .attributes
                .push(("EdgesList", format!("{{{}}}", edges.code())));
        }
        let faces = SurfaceSet::new(surfaces);
        if !faces.empty() {
            field
                .attributes
                .push(("FacesList", format!("{{{}}}", faces.code())));
        }
        field.attributes.push((
            "NNodesByEdge",
            n_nodes_by_edge.unwrap_or(DEFAULT_N_NODES_BY_EDGE).to_string(),
        ));
        Ok(field)
    }

    /// An expression field. Placeholders in the template (`{}` positional,
    /// `{name}` named) substitute the referenced fields' tokens.
    pub fn math_eval(
        allocator: &mut FieldAllocator,
        expression: &str,
        args: MathEvalArgs<'_>,
    ) -> Result<Self, MeshingError> {
        let substituted = substitute(expression, &args)?;
        let mut field = Self::new(allocator, FieldKind::MathEval);
        field.attributes.push(("F", format!("\"{}\"", substituted)));
        Ok(field)
    }

    /// The pointwise minimum of the given fields.
    pub fn min(allocator: &mut FieldAllocator, fields: &[&Field]) -> Self {
        Self::combine(allocator, FieldKind::Min, fields)
    }

    /// The pointwise maximum of the given fields.
    pub fn max(allocator: &mut FieldAllocator, fields: &[&Field]) -> Self {
        Self::combine(allocator, FieldKind::Max, fields)
    }

    fn combine(allocator: &mut FieldAllocator, kind: FieldKind, fields: &[&Field]) -> Self {
        let ids = fields
            .iter()
            .map(|field| field.id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut field = Self::new(allocator, kind);
        field.attributes.push(("FieldsList", format!("{{{}}}", ids)));
        field
    }
}

// =============================================================================
// MATHEVAL SUBSTITUTION
// =============================================================================

/// Field references for a MathEval template: none, positional, or named.
#[derive(Debug, Clone, Copy)]
pub enum MathEvalArgs<'a> {
    None,
    Positional(&'a [&'a Field]),
    Named(&'a [(&'a str, &'a Field)]),
}

/// Substitute placeholders with field tokens. `{{` and `}}` escape literal
/// braces, as in the usual template notation.
fn substitute(expression: &str, args: &MathEvalArgs<'_>) -> Result<String, MeshingError> {
    let mut out = String::with_capacity(expression.len());
    let mut chars = expression.chars().peekable();
    let mut next_positional = 0usize;
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => {
                            return Err(MeshingError::BadExpression(format!(
                                "unterminated placeholder in \"{}\"",
                                expression
                            )))
                        }
                    }
                }
                let field = lookup(&name, args, &mut next_positional)?;
                out.push_str(&field.token());
            }
            '}' => {
                return Err(MeshingError::BadExpression(format!(
                    "unmatched '}}' in \"{}\"",
                    expression
                )))
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

fn lookup<'a>(
    name: &str,
    args: &MathEvalArgs<'a>,
    next_positional: &mut usize,
) -> Result<&'a Field, MeshingError> {
    if name.is_empty() {
        match args {
            MathEvalArgs::Positional(fields) => {
                let field = fields.get(*next_positional).copied().ok_or_else(|| {
                    MeshingError::BadExpression(format!(
                        "no field supplied for positional placeholder {}",
                        next_positional
                    ))
                })?;
                *next_positional += 1;
                Ok(field)
            }
            _ => Err(MeshingError::BadExpression(
                "positional placeholder without positional fields".to_string(),
            )),
        }
    } else {
        match args {
            MathEvalArgs::Named(pairs) => pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, field)| *field)
                .ok_or_else(|| {
                    MeshingError::BadExpression(format!("unknown field name '{}'", name))
                }),
            _ => Err(MeshingError::BadExpression(format!(
                "named placeholder '{}' without named fields",
                name
            ))),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
