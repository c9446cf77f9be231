//! # Config Crate
//!
//! Centralized configuration constants for the Gmsh script pipeline.
//! All tunable defaults are defined here to ensure consistency across
//! crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CHARACTERISTIC_LENGTH, DEFAULT_N_NODES_BY_EDGE};
//!
//! // Characteristic length attached to a point when the caller supplies none
//! let lcar = DEFAULT_CHARACTERISTIC_LENGTH;
//! assert!(lcar > 0.0);
//!
//! // Sampling density of a Distance field
//! assert_eq!(DEFAULT_N_NODES_BY_EDGE, 20);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Gmsh Compatible**: Defaults match the values Gmsh itself assumes
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
