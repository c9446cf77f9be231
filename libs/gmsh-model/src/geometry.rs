//! # Geometry Document
//!
//! The script document. A `Geometry` owns the append-only statement buffer
//! that becomes the final `.geo` script, allocates symbolic ids, and emits
//! one construction statement block per entity it builds.
//!
//! The document only records declarative statements; it never evaluates
//! geometry itself. Gmsh consumes the rendered script and does the actual
//! work.
//!
//! ## Example
//!
//! ```rust
//! use gmsh_model::Geometry;
//! use glam::DVec3;
//!
//! let mut geo = Geometry::new();
//! let a = geo.add_point(DVec3::new(0.0, 0.0, 0.0), Some(0.1));
//! let b = geo.add_point(DVec3::new(1.0, 0.0, 0.0), Some(0.1));
//! geo.add_line(&a, &b);
//! assert!(geo.get_code().contains("Line(l0) = {p0, p1};"));
//! ```

use crate::entity::{
    Curve, CurveKind, CurveLoop, Point, Surface, SurfaceKind, SurfaceLoop, Volume,
};
use crate::error::ModelError;
use crate::id::{EntityClass, EntityId, IdAllocator};
use config::constants::DEFAULT_CHARACTERISTIC_LENGTH;
use glam::DVec3;

/// The script document: statement buffer plus id allocation.
#[derive(Debug, Default)]
pub struct Geometry {
    statements: Vec<String>,
    ids: IdAllocator,
    next_field_id: u32,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // SCRIPT BUFFER
    // =========================================================================

    /// Append one statement to the script buffer.
    ///
    /// The buffer is append-only; statements are never rewritten once
    /// recorded.
    pub fn append_statement(&mut self, statement: impl Into<String>) {
        self.statements.push(statement.into());
    }

    /// Append caller-supplied statements verbatim.
    pub fn add_raw_code<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for line in lines {
            self.append_statement(line);
        }
    }

    /// The statements recorded so far, in emission order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Render the full script.
    pub fn get_code(&self) -> String {
        self.statements.join("\n")
    }

    /// Allocation hook for mesh size field ids.
    ///
    /// Monotonic per document, never reused. Used by the meshing layer when
    /// registering fields.
    pub fn fresh_field_id(&mut self) -> u32 {
        let id = self.next_field_id;
        self.next_field_id += 1;
        id
    }

    // =========================================================================
    // ENTITY CONSTRUCTION
    // =========================================================================

    /// Add a point. Without an explicit characteristic length the
    /// configured default is attached.
    pub fn add_point(&mut self, coords: DVec3, lcar: Option<f64>) -> Point {
        let id = self.ids.fresh(EntityClass::Point);
        let lcar = lcar.unwrap_or(DEFAULT_CHARACTERISTIC_LENGTH);
        self.append_statement(format!("{} = newp;", id));
        self.append_statement(format!(
            "Point({}) = {{{}, {}, {}, {}}};",
            id, coords.x, coords.y, coords.z, lcar
        ));
        Point::new(id, coords, lcar)
    }

    /// Add a straight line between two points.
    pub fn add_line(&mut self, start: &Point, end: &Point) -> Curve {
        let id = self.ids.fresh(EntityClass::Curve);
        self.append_statement(format!("{} = newl;", id));
        self.append_statement(format!("Line({}) = {{{}, {}}};", id, start.id(), end.id()));
        Curve::new(id, CurveKind::Line)
    }

    /// Add a circle arc from `start` to `end` around `center`.
    pub fn add_circle_arc(&mut self, start: &Point, center: &Point, end: &Point) -> Curve {
        let id = self.ids.fresh(EntityClass::Curve);
        self.append_statement(format!("{} = newl;", id));
        self.append_statement(format!(
            "Circle({}) = {{{}, {}, {}}};",
            id,
            start.id(),
            center.id(),
            end.id()
        ));
        Curve::new(id, CurveKind::CircleArc)
    }

    /// Add a spline through the given control points. Needs at least two.
    pub fn add_spline(&mut self, points: &[Point]) -> Result<Curve, ModelError> {
        if points.len() < 2 {
            return Err(ModelError::TooFewPoints {
                kind: "Spline",
                required: 2,
                given: points.len(),
            });
        }
        let id = self.ids.fresh(EntityClass::Curve);
        self.append_statement(format!("{} = newl;", id));
        self.append_statement(format!(
            "Spline({}) = {{{}}};",
            id,
            id_list(points.iter().map(Point::id))
        ));
        Ok(Curve::new(id, CurveKind::Spline))
    }

    /// Add a closed loop of curves.
    pub fn add_curve_loop(&mut self, curves: &[Curve]) -> Result<CurveLoop, ModelError> {
        if curves.is_empty() {
            return Err(ModelError::EmptyLoop("Line Loop"));
        }
        let id = self.ids.fresh(EntityClass::CurveLoop);
        self.append_statement(format!("{} = newll;", id));
        self.append_statement(format!(
            "Line Loop({}) = {{{}}};",
            id,
            id_list(curves.iter().map(Curve::id))
        ));
        Ok(CurveLoop::new(id))
    }

    /// Add a plane surface bounded by a curve loop.
    pub fn add_plane_surface(&mut self, boundary: &CurveLoop) -> Surface {
        let id = self.ids.fresh(EntityClass::Surface);
        self.append_statement(format!("{} = news;", id));
        self.append_statement(format!("Plane Surface({}) = {{{}}};", id, boundary.id()));
        Surface::new(id, SurfaceKind::Plane)
    }

    /// Add a ruled surface bounded by a curve loop.
    pub fn add_ruled_surface(&mut self, boundary: &CurveLoop) -> Surface {
        let id = self.ids.fresh(EntityClass::Surface);
        self.append_statement(format!("{} = news;", id));
        self.append_statement(format!("Ruled Surface({}) = {{{}}};", id, boundary.id()));
        Surface::new(id, SurfaceKind::Ruled)
    }

    /// Add a closed shell of surfaces.
    pub fn add_surface_loop(&mut self, surfaces: &[Surface]) -> Result<SurfaceLoop, ModelError> {
        if surfaces.is_empty() {
            return Err(ModelError::EmptyLoop("Surface Loop"));
        }
        let id = self.ids.fresh(EntityClass::SurfaceLoop);
        self.append_statement(format!("{} = newsl;", id));
        self.append_statement(format!(
            "Surface Loop({}) = {{{}}};",
            id,
            id_list(surfaces.iter().map(Surface::id))
        ));
        Ok(SurfaceLoop::new(id))
    }

    /// Add the volume enclosed by a surface loop.
    pub fn add_volume(&mut self, shell: &SurfaceLoop) -> Volume {
        let id = self.ids.fresh(EntityClass::Volume);
        self.append_statement(format!("{} = newv;", id));
        self.append_statement(format!("Volume({}) = {{{}}};", id, shell.id()));
        Volume::new(id)
    }
}

fn id_list<'a, I>(ids: I) -> String
where
    I: Iterator<Item = &'a EntityId>,
{
    ids.map(EntityId::to_string).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// TESTS
// =============================================================================
