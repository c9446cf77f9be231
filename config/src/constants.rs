//! # Configuration Constants
//!
//! Centralized constants for the Gmsh script pipeline. Default mesh sizing
//! parameters are defined here.
//!
//! ## Categories
//!
//! - **Sizing**: Default characteristic length for points
//! - **Fields**: Default sampling parameters for size fields

// =============================================================================
// SIZING CONSTANTS
// =============================================================================

/// Characteristic length attached to a point when the caller does not
/// supply one.
///
/// The characteristic length controls the target mesh element size around
/// a point. Gmsh interprets it in model units.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CHARACTERISTIC_LENGTH;
///
/// fn effective_lcar(requested: Option<f64>) -> f64 {
///     requested.unwrap_or(DEFAULT_CHARACTERISTIC_LENGTH)
/// }
///
/// assert_eq!(effective_lcar(None), 1.0);
/// assert_eq!(effective_lcar(Some(0.25)), 0.25);
/// ```
pub const DEFAULT_CHARACTERISTIC_LENGTH: f64 = 1.0;

// =============================================================================
// FIELD CONSTANTS
// =============================================================================

/// Default number of sampling nodes per edge for a Distance field.
///
/// A Distance field evaluates the distance to its attached curves by
/// sampling each curve at this many points. Matches the Gmsh default.
pub const DEFAULT_N_NODES_BY_EDGE: u32 = 20;
