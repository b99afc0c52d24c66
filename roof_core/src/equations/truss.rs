//! # Common Truss Formulas
//!
//! Right-triangle relations for a single truss spanning the external width.
//!
//! ## Notation
//!
//! - `W` = External roof width (wall plate to wall plate, incl. soffits)
//! - `θ` = Roof pitch from horizontal
//! - `Lt` = Sloped truss length (plate to ridge)
//! - `h` = Vertical rise of the truss

use crate::units::{Degrees, Radians};

/// Sloped length of one truss from the plate to the ridge.
///
/// ```text
///              ╱│
///         Lt ╱  │ h
///          ╱ θ  │
///        ──────┘
///          W/2
/// ```
///
/// # Formula
/// Lt = (W/2) / cos θ
///
/// # Example
/// ```rust
/// use roof_core::equations::truss::truss_length;
///
/// let lt = truss_length(4890.0, 25.0);
/// assert!((lt - 2697.8).abs() < 0.1);
/// ```
#[inline]
pub fn truss_length(external_width_mm: f64, pitch_deg: f64) -> f64 {
    let theta: Radians = Degrees(pitch_deg).into();
    (external_width_mm / 2.0) / theta.cos()
}

/// Vertical rise of a truss of sloped length `Lt`.
///
/// # Formula
/// h = sin θ × Lt
#[inline]
pub fn vertical_rise(truss_length_mm: f64, pitch_deg: f64) -> f64 {
    let theta: Radians = Degrees(pitch_deg).into();
    theta.sin() * truss_length_mm
}
