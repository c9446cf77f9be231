//! # Gmsh Model
//!
//! Typed geometric entities and the script document that owns them.
//!
//! ## Architecture
//!
//! ```text
//! Geometry (this crate) → gmsh-meshing (sets, fields) → .geo script → Gmsh
//! ```
//!
//! This crate never computes geometry. It builds immutable entity values
//! with document-assigned symbolic ids and records the matching `.geo`
//! construction statements in an append-only buffer.
//!
//! ## Example
//!
//! ```rust
//! use gmsh_model::Geometry;
//! use glam::DVec3;
//!
//! let mut geo = Geometry::new();
//! let a = geo.add_point(DVec3::ZERO, None);
//! let b = geo.add_point(DVec3::X, None);
//! let line = geo.add_line(&a, &b);
//! assert_eq!(line.id().as_str(), "l0");
//! ```

pub mod entity;
pub mod error;
pub mod geometry;
pub mod id;

// Re-export public API
pub use entity::{
    Curve, CurveKind, CurveLoop, Entity, EntityKind, Point, Surface, SurfaceKind, SurfaceLoop,
    Volume,
};
pub use error::ModelError;
pub use geometry::Geometry;
pub use id::{EntityClass, EntityId, IdAllocator};
