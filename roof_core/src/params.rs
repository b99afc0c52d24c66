//! # Roof Parameters
//!
//! The immutable input value for one calculation pass. Every derived figure in
//! the engine is a pure function of a [`RoofParameters`] value; nothing is
//! cached between calls.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "internal_width_mm": 4450.0,
//!   "internal_projection_mm": 3900.0,
//!   "pitch": { "mode": "explicit", "pitch_degrees": 23.0 },
//!   "frame_thickness_mm": 70.0,
//!   "soffit_depth_mm": 150.0,
//!   "ring_beam_thickness_mm": 40.0,
//!   "underside_height_mm": 306.0,
//!   "rafter_spacing_mm": 665.0,
//!   "truss_thickness_mm": 47.0,
//!   "hook_length_mm": 190.0,
//!   "price_per_linear_meter": 6.12,
//!   "projection_wall": "ring_beam",
//!   "hip_allowance": "additive"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{RoofError, RoofResult};

/// Height of the ridge cap above the top of the trusses (mm)
pub const RIDGE_CAP_HEIGHT_MM: f64 = 60.0;

/// Plan angle between a hip and the adjacent wall plates (degrees)
pub const HIP_CORNER_ANGLE_DEG: f64 = 45.0;

/// Saw angle for the spar hook cut. Workshop note only, never used in arithmetic.
pub const SPAR_HOOK_CUT_ANGLE_DEG: f64 = 19.0;

/// Raw bar length timber is bought in (m)
pub const STOCK_LENGTH_M: f64 = 12.0;

/// Fixed linear allowance for hips and jack rafters (m)
pub const HIP_JACK_RAFTER_ALLOWANCE_M: f64 = 5.0;

/// Fixed linear allowance for intermediate bars (m)
pub const INTERMEDIATE_BAR_ALLOWANCE_M: f64 = 10.0;

/// Upper bound of the pitch range the engine resolves to (degrees)
pub const MAX_PITCH_DEG: f64 = 60.0;

/// How the roof pitch is determined for a calculation pass.
///
/// The two modes are mutually exclusive: a target height never silently
/// rewrites an explicit pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PitchMode {
    /// Use this pitch directly (degrees, clamped to 60)
    Explicit { pitch_degrees: f64 },
    /// Solve for the pitch that produces this floor-to-ridge-cap height (mm)
    TargetHeight { finished_height_mm: f64 },
}

impl Default for PitchMode {
    fn default() -> Self {
        PitchMode::Explicit { pitch_degrees: 23.0 }
    }
}

impl PitchMode {
    /// Short label for reports
    pub fn label(&self) -> &'static str {
        match self {
            PitchMode::Explicit { .. } => "explicit",
            PitchMode::TargetHeight { .. } => "target height",
        }
    }
}

/// Which wall thickness the external projection is measured over.
///
/// Both conventions are in use on site drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionWall {
    /// `external_projection = internal_projection + ring_beam + soffit`
    #[default]
    RingBeam,
    /// `external_projection = internal_projection + frame + soffit`
    Frame,
}

/// How the hook length enters the hip rafter length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HipAllowance {
    /// Foot-cut allowance and hook length are both added to the sloped run
    #[default]
    Additive,
    /// Hook length is subtracted from the ridge run; nothing is added
    HookOffset,
}

/// Input parameters for one roof.
///
/// All lengths in millimetres, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofParameters {
    /// Internal frame width, wall to wall (mm)
    pub internal_width_mm: f64,

    /// Internal projection from the host wall (mm)
    pub internal_projection_mm: f64,

    /// Explicit pitch or target finished height
    pub pitch: PitchMode,

    /// Window frame thickness (mm)
    pub frame_thickness_mm: f64,

    /// Soffit depth (mm)
    pub soffit_depth_mm: f64,

    /// Ring-beam thickness (mm)
    pub ring_beam_thickness_mm: f64,

    /// Floor to underside of the ring-beam (mm)
    pub underside_height_mm: f64,

    /// Centre-to-centre truss spacing (mm)
    pub rafter_spacing_mm: f64,

    /// Truss timber thickness (mm)
    pub truss_thickness_mm: f64,

    /// Fabrication allowance at the hip foot (mm)
    pub hook_length_mm: f64,

    /// Timber price per linear metre
    pub price_per_linear_meter: f64,

    /// Wall the external projection is measured over
    pub projection_wall: ProjectionWall,

    /// How the hook length is applied to the hip
    pub hip_allowance: HipAllowance,
}

impl Default for RoofParameters {
    /// Typical 4450 x 3900 lean-to conservatory.
    fn default() -> Self {
        RoofParameters {
            internal_width_mm: 4450.0,
            internal_projection_mm: 3900.0,
            pitch: PitchMode::default(),
            frame_thickness_mm: 70.0,
            soffit_depth_mm: 150.0,
            ring_beam_thickness_mm: 40.0,
            underside_height_mm: 306.0,
            rafter_spacing_mm: 665.0,
            truss_thickness_mm: 47.0,
            hook_length_mm: 190.0,
            price_per_linear_meter: 6.12,
            projection_wall: ProjectionWall::default(),
            hip_allowance: HipAllowance::default(),
        }
    }
}

impl RoofParameters {
    /// Copy of these parameters with an explicit pitch.
    ///
    /// Used by hosts that adopt a solved pitch, or fall back to the explicit
    /// value after an invalid target height.
    pub fn with_explicit_pitch(&self, pitch_degrees: f64) -> Self {
        RoofParameters {
            pitch: PitchMode::Explicit { pitch_degrees },
            ..self.clone()
        }
    }

    /// Copy of these parameters solving for a target finished height.
    pub fn with_target_height(&self, finished_height_mm: f64) -> Self {
        RoofParameters {
            pitch: PitchMode::TargetHeight { finished_height_mm },
            ..self.clone()
        }
    }

    /// Validate the plan dimensions and cladding thicknesses.
    ///
    /// Pitch, spacing and price are checked by the component that consumes them.
    pub fn validate_dimensions(&self) -> RoofResult<()> {
        for (field, value) in [
            ("internal_width_mm", self.internal_width_mm),
            ("internal_projection_mm", self.internal_projection_mm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RoofError::invalid_geometry(
                    field,
                    value.to_string(),
                    "Dimension must be a positive number",
                ));
            }
        }

        for (field, value) in [
            ("frame_thickness_mm", self.frame_thickness_mm),
            ("soffit_depth_mm", self.soffit_depth_mm),
            ("ring_beam_thickness_mm", self.ring_beam_thickness_mm),
            ("underside_height_mm", self.underside_height_mm),
            ("hook_length_mm", self.hook_length_mm),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RoofError::invalid_geometry(
                    field,
                    value.to_string(),
                    "Thickness cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Height offsets stacked under and over the trusses
    pub fn height_offsets(&self) -> HeightOffsets {
        HeightOffsets {
            ring_beam_thickness_mm: self.ring_beam_thickness_mm,
            underside_height_mm: self.underside_height_mm,
            ridge_cap_height_mm: RIDGE_CAP_HEIGHT_MM,
        }
    }

    /// Cost inputs for the quantity estimator
    pub fn cost_parameters(&self) -> CostParameters {
        CostParameters {
            rafter_spacing_mm: self.rafter_spacing_mm,
            truss_thickness_mm: self.truss_thickness_mm,
            price_per_linear_meter: self.price_per_linear_meter,
            hip_allowance_m: HIP_JACK_RAFTER_ALLOWANCE_M,
            intermediate_allowance_m: INTERMEDIATE_BAR_ALLOWANCE_M,
            stock_length_m: STOCK_LENGTH_M,
        }
    }
}

/// Vertical offsets added to the truss rise to reach the finished height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightOffsets {
    pub ring_beam_thickness_mm: f64,
    pub underside_height_mm: f64,
    pub ridge_cap_height_mm: f64,
}

impl HeightOffsets {
    /// Sum of all offsets (mm)
    pub fn total_mm(&self) -> f64 {
        self.ring_beam_thickness_mm + self.underside_height_mm + self.ridge_cap_height_mm
    }
}

/// Inputs to the quantity and cost estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    /// Centre-to-centre truss spacing (mm)
    pub rafter_spacing_mm: f64,

    /// Truss timber thickness (mm)
    pub truss_thickness_mm: f64,

    /// Timber price per linear metre
    pub price_per_linear_meter: f64,

    /// Fixed allowance for hips and jack rafters (m)
    pub hip_allowance_m: f64,

    /// Fixed allowance for intermediate bars (m)
    pub intermediate_allowance_m: f64,

    /// Stock bar length (m)
    pub stock_length_m: f64,
}

impl Default for CostParameters {
    /// Cost inputs of the default roof.
    fn default() -> Self {
        RoofParameters::default().cost_parameters()
    }
}

/// Workshop notes printed alongside an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricationNotes {
    pub spar_hook_cut_angle_deg: f64,
    pub hip_corner_angle_deg: f64,
    pub ridge_cap_height_mm: f64,
    pub stock_length_m: f64,
}

impl Default for FabricationNotes {
    fn default() -> Self {
        FabricationNotes {
            spar_hook_cut_angle_deg: SPAR_HOOK_CUT_ANGLE_DEG,
            hip_corner_angle_deg: HIP_CORNER_ANGLE_DEG,
            ridge_cap_height_mm: RIDGE_CAP_HEIGHT_MM,
            stock_length_m: STOCK_LENGTH_M,
        }
    }
}
