//! Printable estimate report.

use std::fmt;

use chrono::{DateTime, Utc};
use roof_core::calculations::geometry::PitchSource;
use roof_core::{FabricationNotes, RoofEstimate, RoofParameters};
use serde::Serialize;

/// Everything printed for one estimate, JSON-serializable.
#[derive(Debug, Clone, Serialize)]
pub struct RoofReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: RoofParameters,
    pub estimate: RoofEstimate,
    pub fabrication: FabricationNotes,
}

impl RoofReport {
    pub fn new(parameters: RoofParameters, estimate: RoofEstimate) -> Self {
        Self {
            generated_at: Utc::now(),
            parameters,
            estimate,
            fabrication: FabricationNotes::default(),
        }
    }
}

impl fmt::Display for RoofReport {
    /// Text summary, rounded the way the workshop reads it.
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.estimate.geometry;
        let m = &self.estimate.materials;
        let f = &self.fabrication;
        let pitch_note = match g.pitch_source {
            PitchSource::Explicit => "",
            PitchSource::SolvedFromHeight => " (solved from target height)",
        };

        writeln!(out, "═══════════════════════════════════════")?;
        writeln!(out, "  ROOF GEOMETRY")?;
        writeln!(out, "═══════════════════════════════════════")?;
        writeln!(out, "  External roof width:      {:.0} mm", g.external_width_mm)?;
        writeln!(out, "  External roof projection: {:.0} mm", g.external_projection_mm)?;
        writeln!(out, "  Plan area:                {:.2} m²", g.plan_area_m2)?;
        writeln!(out, "  Ridge length:             {:.0} mm", g.ridge_length_mm)?;
        writeln!(out, "  Roof pitch:               {:.2}°{}", g.resolved_pitch_degrees, pitch_note)?;
        writeln!(out, "  Truss length:             {:.0} mm", g.truss_length_mm)?;
        writeln!(out, "  Vertical truss height:    {:.0} mm", g.vertical_truss_height_mm)?;
        writeln!(out, "  Finished ridge height:    {:.0} mm", g.finished_height_mm)?;
        writeln!(out, "  Hip pitch:                {:.2}°", g.hip_pitch_degrees)?;
        writeln!(out, "  Hip foot-cut allowance:   {:.0} mm", g.hip_foot_cut_length_mm)?;
        writeln!(out, "  Hip length:               {:.0} mm", g.hip_length_mm)?;
        writeln!(out)?;
        writeln!(out, "═══════════════════════════════════════")?;
        writeln!(out, "  MATERIALS")?;
        writeln!(out, "═══════════════════════════════════════")?;
        writeln!(out, "  Number of trusses:        {}", m.num_trusses)?;
        writeln!(out, "  Total joist length:       {:.2} m", m.total_linear_meters)?;
        writeln!(out, "  Stock lengths ({:.0} m):    {}", f.stock_length_m, m.stock_lengths_needed)?;
        writeln!(out, "  Estimated material cost:  {:.2}", m.material_cost)?;
        writeln!(out)?;
        writeln!(
            out,
            "  Notes: spar hook cut {:.0}°, hip corner {:.0}°, ridge cap {:.0} mm",
            f.spar_hook_cut_angle_deg, f.hip_corner_angle_deg, f.ridge_cap_height_mm
        )
    }
}
