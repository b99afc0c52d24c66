//! # Pitch-From-Height Solver
//!
//! Inverts the truss geometry: finds the pitch in [0°, 60°] whose finished
//! height matches a target, by bisection.
//!
//! The loop always runs [`BISECTION_ITERATIONS`] times with no tolerance exit,
//! so the cost is fixed and the output is reproducible bit for bit. The
//! returned midpoint is within `60 / 2^21 ≈ 2.9×10⁻⁵` degrees of the true root,
//! comfortably inside the `60 / 2^20 ≈ 5.7×10⁻⁵` degree bracket width.
//! Treat the result as accurate to that bound, not as exact.
//!
//! Targets below the height reachable at 0° converge to the lower bound;
//! targets above the 60° height converge to the upper bound.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::pitch_solver::solve_pitch_for_height;
//! use roof_core::params::RoofParameters;
//!
//! let params = RoofParameters::default();
//! let pitch = solve_pitch_for_height(&params, 1546.12).unwrap();
//! assert!((pitch - 25.0).abs() < 0.01);
//! ```

use tracing::debug;

use super::dimensions::derive_dimensions;
use super::truss::finished_height_mm;
use crate::errors::{RoofError, RoofResult};
use crate::params::{HeightOffsets, RoofParameters, MAX_PITCH_DEG};

/// Fixed number of halvings of the pitch interval
pub const BISECTION_ITERATIONS: u32 = 20;

/// Worst-case width of the final bracket (degrees)
pub const PITCH_RESOLUTION_DEG: f64 = MAX_PITCH_DEG / (1u32 << BISECTION_ITERATIONS) as f64;

/// Check a target finished height is usable.
pub fn validate_target(target_height_mm: f64) -> RoofResult<()> {
    if !target_height_mm.is_finite() {
        return Err(RoofError::invalid_target(
            target_height_mm.to_string(),
            "Target height must be a finite number",
        ));
    }
    if target_height_mm <= 0.0 {
        return Err(RoofError::invalid_target(
            target_height_mm.to_string(),
            "Target height must be positive",
        ));
    }
    Ok(())
}

/// Bisect the pitch for a known external width and offsets.
pub fn bisect_pitch(external_width_mm: f64, offsets: &HeightOffsets, target_height_mm: f64) -> RoofResult<f64> {
    validate_target(target_height_mm)?;

    let mut low = 0.0_f64;
    let mut high = MAX_PITCH_DEG;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / 2.0;
        if finished_height_mm(external_width_mm, mid, offsets) > target_height_mm {
            high = mid;
        } else {
            low = mid;
        }
    }
    let pitch = (low + high) / 2.0;

    debug!(target_height_mm, pitch_degrees = pitch, "solved pitch for target height");
    Ok(pitch)
}

/// Find the pitch whose finished height matches `target_height_mm`.
///
/// The caller's parameters are not modified; adopt the result with
/// [`RoofParameters::with_explicit_pitch`] if wanted.
///
/// # Errors
///
/// * `InvalidTarget` - target is not a finite positive number; fall back to an explicit pitch
/// * `InvalidGeometry` - plan dimensions are invalid
pub fn solve_pitch_for_height(params: &RoofParameters, target_height_mm: f64) -> RoofResult<f64> {
    validate_target(target_height_mm)?;
    let dims = derive_dimensions(params)?;
    bisect_pitch(dims.external_width_mm, &params.height_offsets(), target_height_mm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::truss::solve_truss;

    #[test]
    fn test_resolution_constant() {
        assert!((PITCH_RESOLUTION_DEG - 5.722e-5).abs() < 1e-8);
    }

    #[test]
    fn test_round_trip_default_roof() {
        let params = RoofParameters::default();
        let offsets = params.height_offsets();
        for pitch in [5.0, 17.5, 23.0, 35.0, 42.25, 59.0] {
            let height = solve_truss(4890.0, pitch, &offsets).unwrap().finished_height_mm;
            let solved = solve_pitch_for_height(&params, height).unwrap();
            assert!((solved - pitch).abs() < 6e-5, "pitch {} solved as {}", pitch, solved);
        }
    }

    #[test]
    fn test_target_below_flat_height_converges_to_zero() {
        let params = RoofParameters::default();
        // 406 mm is reachable only at 0°
        let solved = solve_pitch_for_height(&params, 100.0).unwrap();
        assert!(solved >= 0.0);
        assert!(solved < PITCH_RESOLUTION_DEG);
    }

    #[test]
    fn test_target_above_sixty_converges_to_max() {
        let params = RoofParameters::default();
        let solved = solve_pitch_for_height(&params, 50_000.0).unwrap();
        assert!(solved <= MAX_PITCH_DEG);
        assert!(MAX_PITCH_DEG - solved < PITCH_RESOLUTION_DEG);
    }

    #[test]
    fn test_invalid_targets() {
        let params = RoofParameters::default();
        for target in [0.0, -1500.0, f64::NAN, f64::INFINITY] {
            let err = solve_pitch_for_height(&params, target).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_TARGET");
        }
    }

    #[test]
    fn test_deterministic() {
        let params = RoofParameters::default();
        let a = solve_pitch_for_height(&params, 2400.0).unwrap();
        let b = solve_pitch_for_height(&params, 2400.0).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_caller_params_untouched() {
        let params = RoofParameters::default();
        let before = params.clone();
        let _ = solve_pitch_for_height(&params, 2400.0).unwrap();
        assert_eq!(params, before);
    }
}
