//! # Gmsh Meshing
//!
//! Entity sets, boundary resolution, and mesh size field composition for
//! Gmsh script generation.
//!
//! ## Architecture
//!
//! ```text
//! gmsh-model (Geometry, entities) → gmsh-meshing (sets, fields) → .geo script → Gmsh
//! ```
//!
//! The crate turns typed entities into the textual constructs the Gmsh
//! scripting syntax expects: comma-separated reference lists, embedded
//! `Boundary{...}` / `PointsOf{...}` expressions, and `Field[...]`
//! statement blocks. It performs no geometry computation.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use gmsh_meshing::{boundary_of, FieldAllocator, Meshing};
//! use gmsh_model::Geometry;
//!
//! let mut geo = Geometry::new();
//! let mut fields = FieldAllocator::new();
//!
//! let a = geo.add_point(DVec3::ZERO, Some(0.1));
//! let b = geo.add_point(DVec3::X, Some(0.1));
//! let line = geo.add_line(&a, &b);
//!
//! let endpoints = boundary_of(&[line.into()]).unwrap();
//! assert_eq!(endpoints.code(), "Boundary{Line{l0};}");
//!
//! let field = geo
//!     .add_distance_field(&mut fields, &[a.into(), b.into()], None)
//!     .unwrap();
//! geo.set_background_field(&field);
//! ```

pub mod boundary;
pub mod document;
pub mod error;
pub mod fields;
pub mod sets;

// Re-export public API
pub use boundary::{boundary_of, points_of};
pub use document::{FieldNumbering, Meshing};
pub use error::MeshingError;
pub use fields::{Field, FieldAllocator, FieldKind, MathEvalArgs};
pub use sets::{
    BooleanList, CurveElement, CurveSet, EntitySet, Operand, PointElement, PointSet,
    SurfaceElement, SurfaceSet, VolumeElement, VolumeSet,
};
