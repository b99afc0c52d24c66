//! # Roof Calculations
//!
//! The five engine components plus the pipeline that chains them. Each
//! component follows the same pattern:
//!
//! - a JSON-serializable result struct
//! - a pure function `(inputs) -> RoofResult<Result>`
//!
//! ## Components
//!
//! - [`dimensions`] - External footprint and ridge length
//! - [`truss`] - Common truss length, rise and finished height
//! - [`pitch_solver`] - Pitch from a target finished height (bisection)
//! - [`hip`] - Hip pitch and fabricated hip length
//! - [`quantities`] - Truss count, timber totals and cost
//! - [`geometry`] - Full pipeline and host-facing evaluation

pub mod dimensions;
pub mod geometry;
pub mod hip;
pub mod pitch_solver;
pub mod quantities;
pub mod truss;

// Re-export commonly used types
pub use dimensions::{derive_dimensions, Dimensions};
pub use geometry::{compute_geometry, estimate, evaluate, DerivedGeometry, Evaluation, PitchSource, RoofEstimate};
pub use hip::{solve_hip, HipGeometry};
pub use pitch_solver::{solve_pitch_for_height, BISECTION_ITERATIONS, PITCH_RESOLUTION_DEG};
pub use quantities::{estimate_materials, MaterialEstimate};
pub use truss::{solve_truss, TrussGeometry};
