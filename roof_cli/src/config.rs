//! Configuration file loading for the roof CLI.
//!
//! Discovers and loads `roof.toml` from the working directory. Command-line
//! flags are merged over the file (CLI > file > built-in defaults).

use std::path::{Path, PathBuf};

use anyhow::Context;
use roof_core::{HipAllowance, PitchMode, ProjectionWall, RoofParameters};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "roof.toml";

/// Pitch used when a target height is rejected and nothing else is given.
pub const FALLBACK_PITCH_DEG: f64 = 23.0;

/// Top-level configuration from roof.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofConfig {
    /// Roof dimensions and options.
    pub roof: RoofParameters,

    /// Output settings.
    pub output: OutputConfig,
}

/// Output section of the config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the JSON report instead of the text summary.
    pub json: bool,
}

/// Find the config file: an explicit path wins, otherwise `./roof.toml` if present.
pub fn discover_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load and parse a config file.
pub fn load_config(path: &Path) -> anyhow::Result<RoofConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: RoofConfig = toml::from_str(&contents)
        .with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Render the built-in defaults as a starter roof.toml.
pub fn default_config_toml() -> anyhow::Result<String> {
    toml::to_string_pretty(&RoofConfig::default()).context("serialize default config")
}

/// Per-field overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub internal_width_mm: Option<f64>,
    pub internal_projection_mm: Option<f64>,
    pub pitch_degrees: Option<f64>,
    pub target_height_mm: Option<f64>,
    pub frame_thickness_mm: Option<f64>,
    pub soffit_depth_mm: Option<f64>,
    pub ring_beam_thickness_mm: Option<f64>,
    pub underside_height_mm: Option<f64>,
    pub rafter_spacing_mm: Option<f64>,
    pub truss_thickness_mm: Option<f64>,
    pub hook_length_mm: Option<f64>,
    pub price_per_linear_meter: Option<f64>,
    pub projection_wall: Option<ProjectionWall>,
    pub hip_allowance: Option<HipAllowance>,
}

/// Merges config file settings with CLI overrides.
pub struct ConfigMerger {
    config: RoofConfig,
}

impl ConfigMerger {
    pub fn new(config: RoofConfig) -> Self {
        Self { config }
    }

    /// Apply overrides and return the final parameters.
    ///
    /// A `--target-height` beats `--pitch`; `--pitch` alone switches an
    /// explicit-mode file back to explicit.
    pub fn merge(&self, overrides: &Overrides) -> RoofParameters {
        let mut params = self.config.roof.clone();

        let fields = [
            (&mut params.internal_width_mm, overrides.internal_width_mm),
            (&mut params.internal_projection_mm, overrides.internal_projection_mm),
            (&mut params.frame_thickness_mm, overrides.frame_thickness_mm),
            (&mut params.soffit_depth_mm, overrides.soffit_depth_mm),
            (&mut params.ring_beam_thickness_mm, overrides.ring_beam_thickness_mm),
            (&mut params.underside_height_mm, overrides.underside_height_mm),
            (&mut params.rafter_spacing_mm, overrides.rafter_spacing_mm),
            (&mut params.truss_thickness_mm, overrides.truss_thickness_mm),
            (&mut params.hook_length_mm, overrides.hook_length_mm),
            (&mut params.price_per_linear_meter, overrides.price_per_linear_meter),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(wall) = overrides.projection_wall {
            params.projection_wall = wall;
        }
        if let Some(allowance) = overrides.hip_allowance {
            params.hip_allowance = allowance;
        }

        match (overrides.target_height_mm, overrides.pitch_degrees) {
            (Some(finished_height_mm), _) => params.pitch = PitchMode::TargetHeight { finished_height_mm },
            (None, Some(pitch_degrees)) => params.pitch = PitchMode::Explicit { pitch_degrees },
            (None, None) => {}
        }
        params
    }

    /// Explicit pitch to retry with when a target height is rejected.
    pub fn fallback_pitch(&self, overrides: &Overrides) -> f64 {
        overrides.pitch_degrees.unwrap_or(match self.config.roof.pitch {
            PitchMode::Explicit { pitch_degrees } => pitch_degrees,
            PitchMode::TargetHeight { .. } => FALLBACK_PITCH_DEG,
        })
    }

    pub fn json_output(&self, cli_json: bool) -> bool {
        cli_json || self.config.output.json
    }
}
