//! # Hip Rafter Formulas
//!
//! Compound-angle relations for a hip running diagonally under two roof
//! slopes of equal pitch.
//!
//! ## Notation
//!
//! - `θ` = Common roof pitch
//! - `φ` = Hip pitch
//! - `α` = Plan angle of the hip to the wall plate (45° for a square corner)
//! - `R` = Horizontal run of the hip
//!
//! ## References
//!
//! - Standard carpentry roof-framing tables (hip and valley pitch)

use crate::units::{Degrees, Radians};

/// Pitch of a hip given the common roof pitch.
///
/// ```text
///   plan view          section along hip
///   ┌──────╱           ╱│
///   │    ╱            ╱ │
///   │  ╱ α          ╱ φ │
///   │╱─────       ──────┘
/// ```
///
/// # Formula
/// φ = atan(tan θ × cos α)
///
/// φ ≤ θ for every θ in [0°, 90°).
///
/// # Example
/// ```rust
/// use roof_core::equations::hip::hip_pitch;
///
/// let phi = hip_pitch(45.0, 45.0);
/// // tan φ = 1 × 0.7071
/// assert!((phi - 35.264).abs() < 0.001);
/// ```
#[inline]
pub fn hip_pitch(pitch_deg: f64, corner_angle_deg: f64) -> f64 {
    let theta: Radians = Degrees(pitch_deg).into();
    let alpha: Radians = Degrees(corner_angle_deg).into();
    let phi = Radians((theta.tan() * alpha.cos()).atan());
    Degrees::from(phi).0
}

/// Horizontal run from the corner to the hip's ridge connection.
///
/// # Formula
/// R = √(ridge² + (W/2)²)
#[inline]
pub fn horizontal_run(adjusted_ridge_mm: f64, external_width_mm: f64) -> f64 {
    adjusted_ridge_mm.hypot(external_width_mm / 2.0)
}

/// Extra length consumed by the compound foot cut on the ring-beam corner.
///
/// # Formula
/// Lf = √((t_rb + s)² + s²) / cos φ
///
/// where `t_rb` is the ring-beam thickness and `s` the soffit depth.
#[inline]
pub fn foot_cut_length(ring_beam_mm: f64, soffit_mm: f64, hip_pitch_deg: f64) -> f64 {
    let phi: Radians = Degrees(hip_pitch_deg).into();
    (ring_beam_mm + soffit_mm).hypot(soffit_mm) / phi.cos()
}

/// Sloped length of a hip over a horizontal run.
///
/// # Formula
/// L = R / cos φ
#[inline]
pub fn sloped_length(run_mm: f64, hip_pitch_deg: f64) -> f64 {
    let phi: Radians = Degrees(hip_pitch_deg).into();
    run_mm / phi.cos()
}
