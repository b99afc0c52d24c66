//! # Quantity Formulas
//!
//! Counting and rounding rules for the timber bill of materials.

use crate::units::{Metres, Millimetres};

/// Number of trusses along the ridge.
///
/// # Formula
/// n = ⌈(ridge − t) / spacing⌉ + 1, never less than 1
///
/// Callers validate `spacing > 0` and `ridge ≥ t` first.
///
/// # Example
/// ```rust
/// use roof_core::equations::quantity::truss_count;
///
/// // ⌈(1675 − 47) / 665⌉ + 1 = ⌈2.448⌉ + 1 = 4
/// assert_eq!(truss_count(1675.0, 47.0, 665.0), 4);
/// ```
#[inline]
pub fn truss_count(ridge_length_mm: f64, truss_thickness_mm: f64, spacing_mm: f64) -> u32 {
    let bays = ((ridge_length_mm - truss_thickness_mm) / spacing_mm).ceil();
    (bays + 1.0).max(1.0) as u32
}

/// Total linear metres of timber for the trusses plus fixed allowances.
#[inline]
pub fn total_linear_meters(num_trusses: u32, truss_length_mm: f64, allowances_m: f64) -> f64 {
    let per_truss: Metres = Millimetres(truss_length_mm).into();
    f64::from(num_trusses) * per_truss.0 + allowances_m
}

/// Whole stock bars needed to cover a linear total.
///
/// # Formula
/// ⌈total / stock⌉
#[inline]
pub fn stock_lengths(total_m: f64, stock_length_m: f64) -> u32 {
    (total_m / stock_length_m).ceil() as u32
}
