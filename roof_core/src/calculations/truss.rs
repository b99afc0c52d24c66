//! # Truss Geometry Solver
//!
//! Given the external width and a pitch, computes the sloped truss length,
//! its vertical rise and the finished floor-to-ridge-cap height.
//!
//! For fixed width and offsets the finished height is strictly increasing in
//! pitch over [0°, 90°), which the pitch-from-height bisection relies on.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::truss::solve_truss;
//! use roof_core::params::RoofParameters;
//!
//! let offsets = RoofParameters::default().height_offsets();
//! let truss = solve_truss(4890.0, 25.0, &offsets).unwrap();
//! assert!((truss.truss_length_mm - 2697.8).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::equations;
use crate::errors::{RoofError, RoofResult};
use crate::params::{HeightOffsets, MAX_PITCH_DEG};

/// Truss results for one pitch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrussGeometry {
    /// Pitch the geometry was evaluated at (degrees)
    pub pitch_degrees: f64,

    /// Sloped length plate to ridge (mm)
    pub truss_length_mm: f64,

    /// Vertical rise, underside to ridge (mm)
    pub vertical_truss_height_mm: f64,

    /// Floor to top of ridge cap (mm)
    pub finished_height_mm: f64,
}

/// Check a caller-supplied pitch is a finite angle in [0°, 90°).
pub fn validate_pitch(pitch_degrees: f64) -> RoofResult<()> {
    if !pitch_degrees.is_finite() || !(0.0..90.0).contains(&pitch_degrees) {
        return Err(RoofError::invalid_input(
            "pitch_degrees",
            pitch_degrees.to_string(),
            "Pitch must be between 0 and 90 degrees",
        ));
    }
    Ok(())
}

/// Validate an explicit pitch and clamp it to the supported range.
pub fn resolve_explicit_pitch(pitch_degrees: f64) -> RoofResult<f64> {
    validate_pitch(pitch_degrees)?;
    if pitch_degrees > MAX_PITCH_DEG {
        warn!(pitch_degrees, max = MAX_PITCH_DEG, "pitch clamped to maximum");
        return Ok(MAX_PITCH_DEG);
    }
    Ok(pitch_degrees)
}

/// Finished height without validation. Shared by the forward solve and bisection.
pub(crate) fn finished_height_mm(external_width_mm: f64, pitch_degrees: f64, offsets: &HeightOffsets) -> f64 {
    let length = equations::truss_length(external_width_mm, pitch_degrees);
    equations::vertical_rise(length, pitch_degrees) + offsets.total_mm()
}

/// Solve truss geometry for an external width and pitch.
///
/// # Errors
///
/// * `InvalidInput` - pitch is not finite or outside [0°, 90°)
/// * `InvalidGeometry` - external width is not positive
pub fn solve_truss(
    external_width_mm: f64,
    pitch_degrees: f64,
    offsets: &HeightOffsets,
) -> RoofResult<TrussGeometry> {
    validate_pitch(pitch_degrees)?;
    if !external_width_mm.is_finite() || external_width_mm <= 0.0 {
        return Err(RoofError::invalid_geometry(
            "external_width_mm",
            external_width_mm.to_string(),
            "External width must be positive",
        ));
    }

    let truss_length_mm = equations::truss_length(external_width_mm, pitch_degrees);
    let vertical_truss_height_mm = equations::vertical_rise(truss_length_mm, pitch_degrees);

    Ok(TrussGeometry {
        pitch_degrees,
        truss_length_mm,
        vertical_truss_height_mm,
        finished_height_mm: vertical_truss_height_mm + offsets.total_mm(),
    })
}
