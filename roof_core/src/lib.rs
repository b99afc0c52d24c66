//! # roof_core - Hipped Roof Geometry & Timber Estimation Engine
//!
//! `roof_core` turns a handful of conservatory dimensions into roof geometry
//! (external footprint, truss length, hip length and pitch, finished height)
//! and a timber bill of materials (truss count, linear metres, stock bars,
//! cost).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions of one immutable [`RoofParameters`] value
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Typed Errors**: Every failure is a [`RoofError`] variant, never a panic
//! - **All-or-nothing**: [`evaluate`] returns a zeroed estimate on any error
//!
//! ## Quick Start
//!
//! ```rust
//! use roof_core::{estimate, RoofParameters};
//!
//! let params = RoofParameters::default().with_explicit_pitch(25.0);
//! let result = estimate(&params).unwrap();
//!
//! assert_eq!(result.geometry.external_width_mm, 4890.0);
//! assert_eq!(result.materials.num_trusses, 4);
//! ```
//!
//! ## Modules
//!
//! - [`params`] - Input parameters, pitch mode and fixed constants
//! - [`calculations`] - The engine components and pipeline
//! - [`equations`] - Closed-form framing formulas
//! - [`units`] - Length and angle newtypes
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod params;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_geometry, estimate, estimate_materials, evaluate, solve_pitch_for_height, DerivedGeometry,
    Evaluation, MaterialEstimate, RoofEstimate,
};
pub use errors::{RoofError, RoofResult};
pub use params::{CostParameters, FabricationNotes, HipAllowance, PitchMode, ProjectionWall, RoofParameters};
