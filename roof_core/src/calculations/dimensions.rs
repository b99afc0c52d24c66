//! # Dimension Deriver
//!
//! Converts internal frame dimensions plus cladding thicknesses into the
//! external roof footprint and the ridge length.
//!
//! ```text
//!   host wall
//!   ═══════════════════════════
//!   │   ╲                 ╱   │
//!   │     ╲    ridge    ╱     │  internal projection
//!   │      ═══════════════    │
//!   │     ╱               ╲   │
//!   └─────────────────────────┘
//!          internal width
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::dimensions::derive_dimensions;
//! use roof_core::params::RoofParameters;
//!
//! let params = RoofParameters::default();
//! let dims = derive_dimensions(&params).unwrap();
//! assert_eq!(dims.external_width_mm, 4890.0);
//! assert_eq!(dims.ridge_length_mm, 1675.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{RoofError, RoofResult};
use crate::params::{ProjectionWall, RoofParameters};

/// External footprint and ridge length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Internal width + two frames + two soffits (mm)
    pub external_width_mm: f64,

    /// Internal projection + one wall thickness + one soffit (mm)
    pub external_projection_mm: f64,

    /// Internal projection minus half the internal width (mm)
    pub ridge_length_mm: f64,
}

impl Dimensions {
    /// External plan area (m²)
    pub fn plan_area_m2(&self) -> f64 {
        self.external_width_mm * self.external_projection_mm / 1_000_000.0
    }
}

/// Derive external dimensions and ridge length.
///
/// # Errors
///
/// * `InvalidGeometry` - a dimension is non-positive, a thickness negative, or
///   the projection is too shallow for the width (negative ridge length)
pub fn derive_dimensions(params: &RoofParameters) -> RoofResult<Dimensions> {
    params.validate_dimensions()?;

    let external_width_mm = params.internal_width_mm
        + 2.0 * params.frame_thickness_mm
        + 2.0 * params.soffit_depth_mm;

    let wall_mm = match params.projection_wall {
        ProjectionWall::RingBeam => params.ring_beam_thickness_mm,
        ProjectionWall::Frame => params.frame_thickness_mm,
    };
    let external_projection_mm = params.internal_projection_mm + wall_mm + params.soffit_depth_mm;

    let ridge_length_mm = params.internal_projection_mm - params.internal_width_mm / 2.0;
    if ridge_length_mm < 0.0 {
        return Err(RoofError::invalid_geometry(
            "ridge_length_mm",
            ridge_length_mm.to_string(),
            format!(
                "Projection {} mm is too shallow for width {} mm (needs at least half the width)",
                params.internal_projection_mm, params.internal_width_mm
            ),
        ));
    }

    Ok(Dimensions {
        external_width_mm,
        external_projection_mm,
        ridge_length_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> RoofParameters {
        RoofParameters {
            internal_width_mm: 4450.0,
            internal_projection_mm: 3900.0,
            frame_thickness_mm: 70.0,
            soffit_depth_mm: 150.0,
            ring_beam_thickness_mm: 40.0,
            ..RoofParameters::default()
        }
    }

    #[test]
    fn test_external_width() {
        let dims = derive_dimensions(&scenario()).unwrap();
        // 4450 + 140 + 300
        assert_eq!(dims.external_width_mm, 4890.0);
    }

    #[test]
    fn test_projection_over_ring_beam() {
        let dims = derive_dimensions(&scenario()).unwrap();
        // 3900 + 40 + 150
        assert_eq!(dims.external_projection_mm, 4090.0);
    }

    #[test]
    fn test_projection_over_frame() {
        let params = RoofParameters {
            projection_wall: ProjectionWall::Frame,
            ..scenario()
        };
        let dims = derive_dimensions(&params).unwrap();
        // 3900 + 70 + 150
        assert_eq!(dims.external_projection_mm, 4120.0);
    }

    #[test]
    fn test_ridge_length() {
        let dims = derive_dimensions(&scenario()).unwrap();
        assert_eq!(dims.ridge_length_mm, 1675.0);
    }

    #[test]
    fn test_zero_ridge_is_valid() {
        let params = RoofParameters {
            internal_projection_mm: 2225.0,
            ..scenario()
        };
        assert_eq!(derive_dimensions(&params).unwrap().ridge_length_mm, 0.0);
    }

    #[test]
    fn test_shallow_projection_is_invalid_geometry() {
        let params = RoofParameters {
            internal_projection_mm: 2000.0,
            ..scenario()
        };
        let err = derive_dimensions(&params).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        assert_eq!(err.field(), Some("ridge_length_mm"));
    }

    #[test]
    fn test_negative_width_is_invalid_geometry() {
        let params = RoofParameters {
            internal_width_mm: -10.0,
            ..scenario()
        };
        assert!(matches!(
            derive_dimensions(&params),
            Err(RoofError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_plan_area() {
        let dims = derive_dimensions(&scenario()).unwrap();
        // 4.890 × 4.090
        assert!((dims.plan_area_m2() - 20.0001).abs() < 1e-9);
    }
}
