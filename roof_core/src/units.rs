//! # Unit Types
//!
//! Lightweight newtype wrappers for the units the roof engine works in.
//! They serialize as bare numbers so JSON stays clean.
//!
//! ## Conventions
//!
//! - Length: millimetres (mm) for every dimension, metres (m) for timber totals
//! - Angle: degrees on every public interface, radians only inside formulas
//!
//! ## Example
//!
//! ```rust
//! use roof_core::units::{Degrees, Metres, Millimetres, Radians};
//!
//! let run: Metres = Millimetres(2435.0).into();
//! assert!((run.0 - 2.435).abs() < 1e-12);
//!
//! let pitch: Radians = Degrees(180.0).into();
//! assert!((pitch.0 - std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 * std::f64::consts::PI / 180.0)
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0 * 180.0 / std::f64::consts::PI)
    }
}

impl Radians {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}
