//! # Roof Geometry Pipeline
//!
//! Chains the components in their fixed order:
//!
//! ```text
//! dimensions ─► pitch (explicit or solved) ─► truss ─► hip ─► quantities
//! ```
//!
//! [`evaluate`] is the single recomputation point for a host: it either
//! returns a complete estimate, or a zeroed one together with the error, so a
//! partially computed geometry is never visible.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::geometry::{compute_geometry, evaluate};
//! use roof_core::params::RoofParameters;
//!
//! let params = RoofParameters::default();
//! let geometry = compute_geometry(&params).unwrap();
//! assert_eq!(geometry.external_width_mm, 4890.0);
//!
//! let bad = RoofParameters { internal_width_mm: -1.0, ..params };
//! let outcome = evaluate(&bad);
//! assert!(outcome.error.is_some());
//! assert_eq!(outcome.estimate.geometry.external_width_mm, 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dimensions::derive_dimensions;
use super::hip::solve_hip;
use super::pitch_solver::bisect_pitch;
use super::quantities::{count_trusses, estimate_materials, MaterialEstimate};
use super::truss::{resolve_explicit_pitch, solve_truss};
use crate::errors::{RoofError, RoofResult};
use crate::params::{PitchMode, RoofParameters};

/// Where the resolved pitch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchSource {
    /// Caller's explicit pitch (after clamping)
    #[default]
    Explicit,
    /// Bisection from a target finished height
    SolvedFromHeight,
}

/// Every geometric output of one calculation pass.
///
/// `Default` is the all-zero reset state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedGeometry {
    // === Footprint ===
    pub external_width_mm: f64,
    pub external_projection_mm: f64,
    pub ridge_length_mm: f64,

    /// External plan area (m²), the figure area-based pricing works from
    pub plan_area_m2: f64,

    // === Pitch ===
    /// Pitch used downstream, in [0°, 60°]
    pub resolved_pitch_degrees: f64,
    pub pitch_source: PitchSource,

    // === Common truss ===
    pub truss_length_mm: f64,
    pub vertical_truss_height_mm: f64,

    /// Floor to top of ridge cap
    pub finished_height_mm: f64,
    pub num_trusses: u32,

    // === Hip ===
    pub hip_pitch_degrees: f64,
    pub hip_foot_cut_length_mm: f64,
    pub hip_length_mm: f64,
}

/// Compute the full roof geometry.
///
/// # Errors
///
/// * `InvalidGeometry` - bad plan dimensions or negative ridge length
/// * `InvalidInput` - explicit pitch outside [0°, 90°)
/// * `InvalidTarget` - target height not a finite positive number
/// * `InvalidSpacing` - truss count cannot be formed
pub fn compute_geometry(params: &RoofParameters) -> RoofResult<DerivedGeometry> {
    let dims = derive_dimensions(params)?;
    let offsets = params.height_offsets();

    let (resolved_pitch_degrees, pitch_source) = match params.pitch {
        PitchMode::Explicit { pitch_degrees } => (resolve_explicit_pitch(pitch_degrees)?, PitchSource::Explicit),
        PitchMode::TargetHeight { finished_height_mm } => (
            bisect_pitch(dims.external_width_mm, &offsets, finished_height_mm)?,
            PitchSource::SolvedFromHeight,
        ),
    };
    debug!(
        pitch_degrees = resolved_pitch_degrees,
        source = ?pitch_source,
        "resolved roof pitch"
    );

    let truss = solve_truss(dims.external_width_mm, resolved_pitch_degrees, &offsets)?;
    let hip = solve_hip(params, &dims, resolved_pitch_degrees)?;
    let num_trusses = count_trusses(
        dims.ridge_length_mm,
        params.truss_thickness_mm,
        params.rafter_spacing_mm,
    )?;

    Ok(DerivedGeometry {
        external_width_mm: dims.external_width_mm,
        external_projection_mm: dims.external_projection_mm,
        ridge_length_mm: dims.ridge_length_mm,
        plan_area_m2: dims.plan_area_m2(),
        resolved_pitch_degrees,
        pitch_source,
        truss_length_mm: truss.truss_length_mm,
        vertical_truss_height_mm: truss.vertical_truss_height_mm,
        finished_height_mm: truss.finished_height_mm,
        num_trusses,
        hip_pitch_degrees: hip.hip_pitch_degrees,
        hip_foot_cut_length_mm: hip.hip_foot_cut_length_mm,
        hip_length_mm: hip.hip_length_mm,
    })
}

/// Geometry and bill of materials together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoofEstimate {
    pub geometry: DerivedGeometry,
    pub materials: MaterialEstimate,
}

/// Compute geometry then materials in one pass.
pub fn estimate(params: &RoofParameters) -> RoofResult<RoofEstimate> {
    let geometry = compute_geometry(params)?;
    let materials = estimate_materials(&geometry, &params.cost_parameters())?;
    Ok(RoofEstimate { geometry, materials })
}

/// Outcome of a host recomputation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Complete estimate, or all zeros when `error` is set
    pub estimate: RoofEstimate,

    pub error: Option<RoofError>,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Recompute everything from scratch, resetting all outputs on any error.
pub fn evaluate(params: &RoofParameters) -> Evaluation {
    match estimate(params) {
        Ok(estimate) => Evaluation { estimate, error: None },
        Err(error) => {
            debug!(code = error.error_code(), "estimate reset: {}", error);
            Evaluation {
                estimate: RoofEstimate::default(),
                error: Some(error),
            }
        }
    }
}
