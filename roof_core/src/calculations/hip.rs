//! # Hip Geometry Solver
//!
//! Computes the compound hip pitch and the fabricated hip rafter length.
//!
//! Two allowance variants are supported (see [`HipAllowance`]):
//!
//! - `Additive`: sloped run over the full ridge, plus the foot-cut allowance,
//!   plus the hook length
//! - `HookOffset`: the hook length is taken off the ridge run and no
//!   allowances are added
//!
//! With `Additive`, the hip is longer than the common truss whenever the ridge
//! run is at least half the external width. Shorter ridges rely on the
//! allowances to keep it so.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::dimensions::derive_dimensions;
//! use roof_core::calculations::hip::solve_hip;
//! use roof_core::params::RoofParameters;
//!
//! let params = RoofParameters::default();
//! let dims = derive_dimensions(&params).unwrap();
//! let hip = solve_hip(&params, &dims, 25.0).unwrap();
//! assert!(hip.hip_pitch_degrees < 25.0);
//! assert!(hip.hip_length_mm > 3000.0);
//! ```

use serde::{Deserialize, Serialize};

use super::dimensions::Dimensions;
use super::truss::validate_pitch;
use crate::equations;
use crate::errors::RoofResult;
use crate::params::{HipAllowance, RoofParameters, HIP_CORNER_ANGLE_DEG};

/// Hip rafter results.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HipGeometry {
    /// Pitch of the hip itself, never steeper than the roof pitch (degrees)
    pub hip_pitch_degrees: f64,

    /// Ridge run after the hook offset, equal to the ridge for `Additive` (mm).
    /// Negative when the hook outruns the ridge; only its square enters the run.
    pub adjusted_ridge_length_mm: f64,

    /// Horizontal run corner to ridge connection (mm)
    pub horizontal_run_mm: f64,

    /// Foot-cut allowance, zero for `HookOffset` (mm)
    pub hip_foot_cut_length_mm: f64,

    /// Finished hip rafter length (mm)
    pub hip_length_mm: f64,
}

/// Solve hip geometry for a resolved pitch.
///
/// # Errors
///
/// * `InvalidInput` - pitch is not finite or outside [0°, 90°)
pub fn solve_hip(params: &RoofParameters, dims: &Dimensions, pitch_degrees: f64) -> RoofResult<HipGeometry> {
    validate_pitch(pitch_degrees)?;

    let hip_pitch_degrees = equations::hip_pitch(pitch_degrees, HIP_CORNER_ANGLE_DEG);

    let adjusted_ridge_length_mm = match params.hip_allowance {
        HipAllowance::Additive => dims.ridge_length_mm,
        HipAllowance::HookOffset => dims.ridge_length_mm - params.hook_length_mm,
    };
    let horizontal_run_mm = equations::horizontal_run(adjusted_ridge_length_mm, dims.external_width_mm);
    let sloped_mm = equations::sloped_length(horizontal_run_mm, hip_pitch_degrees);

    let (hip_foot_cut_length_mm, hip_length_mm) = match params.hip_allowance {
        HipAllowance::Additive => {
            let foot_cut = equations::foot_cut_length(
                params.ring_beam_thickness_mm,
                params.soffit_depth_mm,
                hip_pitch_degrees,
            );
            (foot_cut, sloped_mm + foot_cut + params.hook_length_mm)
        }
        HipAllowance::HookOffset => (0.0, sloped_mm),
    };

    Ok(HipGeometry {
        hip_pitch_degrees,
        adjusted_ridge_length_mm,
        horizontal_run_mm,
        hip_foot_cut_length_mm,
        hip_length_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::dimensions::derive_dimensions;
    use crate::equations::truss_length;

    fn scenario() -> RoofParameters {
        RoofParameters {
            hook_length_mm: 190.0,
            ..RoofParameters::default()
        }
    }

    #[test]
    fn test_hip_pitch_compound_angle() {
        let params = scenario();
        let dims = derive_dimensions(&params).unwrap();
        let hip = solve_hip(&params, &dims, 25.0).unwrap();
        // atan(tan 25° × cos 45°) = 18.25°
        assert!((hip.hip_pitch_degrees - 18.25).abs() < 0.01);
    }

    #[test]
    fn test_additive_hip_length() {
        let params = scenario();
        let dims = derive_dimensions(&params).unwrap();
        let hip = solve_hip(&params, &dims, 25.0).unwrap();

        let phi = hip.hip_pitch_degrees.to_radians();
        let run = (1675.0_f64 * 1675.0 + 2445.0 * 2445.0).sqrt();
        let foot = (190.0_f64 * 190.0 + 150.0 * 150.0).sqrt() / phi.cos();
        let expected = run / phi.cos() + foot + 190.0;

        assert!((hip.horizontal_run_mm - run).abs() < 1e-6);
        assert!((hip.hip_foot_cut_length_mm - foot).abs() < 1e-6);
        assert!((hip.hip_length_mm - expected).abs() < 1e-6);
    }

    #[test]
    fn test_hook_offset_variant() {
        let params = RoofParameters {
            hip_allowance: HipAllowance::HookOffset,
            ..scenario()
        };
        let dims = derive_dimensions(&params).unwrap();
        let hip = solve_hip(&params, &dims, 23.0).unwrap();

        assert_eq!(hip.adjusted_ridge_length_mm, 1675.0 - 190.0);
        assert_eq!(hip.hip_foot_cut_length_mm, 0.0);
        let expected = (1485.0_f64).hypot(2445.0) / hip.hip_pitch_degrees.to_radians().cos();
        assert!((hip.hip_length_mm - expected).abs() < 1e-6);
    }

    #[test]
    fn test_hook_longer_than_ridge_still_adds_run() {
        let params = RoofParameters {
            hip_allowance: HipAllowance::HookOffset,
            internal_projection_mm: 2300.0,
            ..scenario()
        };
        let dims = derive_dimensions(&params).unwrap();
        // ridge 75 mm, hook 190 mm
        let hip = solve_hip(&params, &dims, 23.0).unwrap();
        assert_eq!(hip.adjusted_ridge_length_mm, -115.0);
        // √(115² + 2445²) = 2447.70
        assert!((hip.horizontal_run_mm - 2447.70).abs() < 0.01);
        assert!(hip.horizontal_run_mm > dims.external_width_mm / 2.0);
        // 2447.70 / cos 16.71°
        assert!((hip.hip_length_mm - 2555.58).abs() < 0.01);
    }

    #[test]
    fn test_additive_longer_than_hook_offset() {
        let additive = scenario();
        let offset = RoofParameters {
            hip_allowance: HipAllowance::HookOffset,
            ..scenario()
        };
        let dims = derive_dimensions(&additive).unwrap();
        let a = solve_hip(&additive, &dims, 30.0).unwrap();
        let b = solve_hip(&offset, &dims, 30.0).unwrap();
        assert!(a.hip_length_mm > b.hip_length_mm);
    }

    #[test]
    fn test_flat_pitch_foot_cut_is_diagonal() {
        let params = scenario();
        let dims = derive_dimensions(&params).unwrap();
        let hip = solve_hip(&params, &dims, 0.0).unwrap();
        assert_eq!(hip.hip_pitch_degrees, 0.0);
        assert!((hip.hip_foot_cut_length_mm - 190.0_f64.hypot(150.0)).abs() < 1e-9);
        assert!(hip.hip_length_mm.is_finite());
    }

    #[test]
    fn test_hip_longer_than_truss() {
        let params = scenario();
        let dims = derive_dimensions(&params).unwrap();
        for pitch in [5.0, 15.0, 25.0, 45.0, 60.0] {
            let hip = solve_hip(&params, &dims, pitch).unwrap();
            assert!(hip.hip_length_mm > truss_length(dims.external_width_mm, pitch));
        }
    }
}
