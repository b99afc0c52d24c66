//! # Quantity & Cost Estimator
//!
//! Turns the ridge length and truss length into a timber bill of materials:
//! truss count, total linear metres, 12 m stock bars and material cost.
//!
//! Every output is non-decreasing in ridge length, truss length and price.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::geometry::DerivedGeometry;
use crate::equations;
use crate::errors::{RoofError, RoofResult};
use crate::params::CostParameters;

/// Timber bill of materials.
///
/// ## JSON Example
///
/// ```json
/// {
///   "num_trusses": 4,
///   "total_linear_meters": 25.79,
///   "stock_lengths_needed": 3,
///   "material_cost": 157.84
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialEstimate {
    /// Trusses the total was built from
    pub num_trusses: u32,

    /// Truss timber plus hip/jack-rafter and intermediate-bar allowances (m)
    pub total_linear_meters: f64,

    /// Whole stock bars needed
    pub stock_lengths_needed: u32,

    /// `total_linear_meters × price_per_linear_meter`
    pub material_cost: f64,
}

/// Validate spacing inputs and count trusses along the ridge.
///
/// # Errors
///
/// * `InvalidGeometry` - ridge length is not a finite number
/// * `InvalidSpacing` - spacing or thickness not positive, or ridge shorter than one truss
pub fn count_trusses(ridge_length_mm: f64, truss_thickness_mm: f64, rafter_spacing_mm: f64) -> RoofResult<u32> {
    if !ridge_length_mm.is_finite() {
        return Err(RoofError::invalid_geometry(
            "ridge_length_mm",
            ridge_length_mm.to_string(),
            "Ridge length must be a finite number",
        ));
    }
    if !rafter_spacing_mm.is_finite() || rafter_spacing_mm <= 0.0 {
        return Err(RoofError::invalid_spacing(
            "rafter_spacing_mm",
            rafter_spacing_mm.to_string(),
            "Rafter spacing must be positive",
        ));
    }
    if !truss_thickness_mm.is_finite() || truss_thickness_mm <= 0.0 {
        return Err(RoofError::invalid_spacing(
            "truss_thickness_mm",
            truss_thickness_mm.to_string(),
            "Truss thickness must be positive",
        ));
    }
    if ridge_length_mm < truss_thickness_mm {
        return Err(RoofError::invalid_spacing(
            "truss_thickness_mm",
            truss_thickness_mm.to_string(),
            format!("Truss thickness exceeds ridge length of {} mm", ridge_length_mm),
        ));
    }

    let count = equations::truss_count(ridge_length_mm, truss_thickness_mm, rafter_spacing_mm);
    debug!(ridge_length_mm, rafter_spacing_mm, count, "counted trusses");
    Ok(count)
}

/// Estimate timber quantities and cost for a derived geometry.
///
/// # Errors
///
/// * `InvalidGeometry` - ridge or truss length not finite, or truss length negative
/// * `InvalidSpacing` - see [`count_trusses`]
/// * `InvalidInput` - price, allowances or stock length out of range
pub fn estimate_materials(geometry: &DerivedGeometry, cost: &CostParameters) -> RoofResult<MaterialEstimate> {
    if !geometry.truss_length_mm.is_finite() || geometry.truss_length_mm < 0.0 {
        return Err(RoofError::invalid_geometry(
            "truss_length_mm",
            geometry.truss_length_mm.to_string(),
            "Truss length must be a finite, non-negative number",
        ));
    }
    if !cost.price_per_linear_meter.is_finite() || cost.price_per_linear_meter < 0.0 {
        return Err(RoofError::invalid_input(
            "price_per_linear_meter",
            cost.price_per_linear_meter.to_string(),
            "Price cannot be negative",
        ));
    }
    for (field, value) in [
        ("hip_allowance_m", cost.hip_allowance_m),
        ("intermediate_allowance_m", cost.intermediate_allowance_m),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RoofError::invalid_input(field, value.to_string(), "Allowance cannot be negative"));
        }
    }
    if !cost.stock_length_m.is_finite() || cost.stock_length_m <= 0.0 {
        return Err(RoofError::invalid_input(
            "stock_length_m",
            cost.stock_length_m.to_string(),
            "Stock length must be positive",
        ));
    }

    let num_trusses = count_trusses(
        geometry.ridge_length_mm,
        cost.truss_thickness_mm,
        cost.rafter_spacing_mm,
    )?;

    let total_linear_meters = equations::total_linear_meters(
        num_trusses,
        geometry.truss_length_mm,
        cost.hip_allowance_m + cost.intermediate_allowance_m,
    );

    Ok(MaterialEstimate {
        num_trusses,
        total_linear_meters,
        stock_lengths_needed: equations::stock_lengths(total_linear_meters, cost.stock_length_m),
        material_cost: total_linear_meters * cost.price_per_linear_meter,
    })
}
