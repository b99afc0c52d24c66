//! # Roof CLI
//!
//! Terminal front end for the roof geometry and timber estimation engine.
//! Reads `roof.toml` (if any), applies command-line overrides and prints
//! either a text summary or a JSON report.

mod config;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use roof_core::{evaluate, solve_pitch_for_height, HipAllowance, ProjectionWall, RoofError};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::{default_config_toml, discover_config, load_config, ConfigMerger, Overrides, RoofConfig};
use report::RoofReport;

#[derive(Debug, Parser)]
#[command(
    name = "roof",
    version,
    about = "Hipped conservatory roof geometry and timber estimator."
)]
struct Cli {
    /// Config file (default: ./roof.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute geometry and bill of materials.
    Estimate(EstimateArgs),
    /// Find the pitch that gives a finished ridge height.
    SolvePitch(SolvePitchArgs),
    /// Print a starter roof.toml with the built-in defaults.
    Defaults,
}

#[derive(Debug, Args)]
struct DimensionArgs {
    /// Internal width (mm).
    #[arg(long, allow_negative_numbers = true)]
    width: Option<f64>,

    /// Internal projection (mm).
    #[arg(long, allow_negative_numbers = true)]
    projection: Option<f64>,

    /// Frame thickness (mm).
    #[arg(long, allow_negative_numbers = true)]
    frame: Option<f64>,

    /// Soffit depth (mm).
    #[arg(long, allow_negative_numbers = true)]
    soffit: Option<f64>,

    /// Ring-beam thickness (mm).
    #[arg(long, allow_negative_numbers = true)]
    ring_beam: Option<f64>,

    /// Floor to underside of ring-beam (mm).
    #[arg(long, allow_negative_numbers = true)]
    underside: Option<f64>,

    /// Wall the external projection is measured over.
    #[arg(long, value_enum)]
    projection_wall: Option<WallArg>,
}

#[derive(Debug, Args)]
struct EstimateArgs {
    #[command(flatten)]
    dims: DimensionArgs,

    /// Roof pitch (degrees).
    #[arg(long, allow_negative_numbers = true)]
    pitch: Option<f64>,

    /// Target finished height (mm); the pitch is solved from it.
    #[arg(long, allow_negative_numbers = true)]
    target_height: Option<f64>,

    /// Rafter spacing (mm).
    #[arg(long, allow_negative_numbers = true)]
    rafter_spacing: Option<f64>,

    /// Truss thickness (mm).
    #[arg(long, allow_negative_numbers = true)]
    truss_thickness: Option<f64>,

    /// Hook length at the hip foot (mm).
    #[arg(long, allow_negative_numbers = true)]
    hook: Option<f64>,

    /// Timber price per linear metre.
    #[arg(long, allow_negative_numbers = true)]
    price: Option<f64>,

    /// How the hook length is applied to the hip.
    #[arg(long, value_enum)]
    hip_allowance: Option<HipArg>,

    /// Print the JSON report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Args)]
struct SolvePitchArgs {
    #[command(flatten)]
    dims: DimensionArgs,

    /// Target finished height (mm).
    #[arg(long, allow_negative_numbers = true)]
    height: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WallArg {
    RingBeam,
    Frame,
}

impl From<WallArg> for ProjectionWall {
    fn from(arg: WallArg) -> Self {
        match arg {
            WallArg::RingBeam => ProjectionWall::RingBeam,
            WallArg::Frame => ProjectionWall::Frame,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HipArg {
    Additive,
    HookOffset,
}

impl From<HipArg> for HipAllowance {
    fn from(arg: HipArg) -> Self {
        match arg {
            HipArg::Additive => HipAllowance::Additive,
            HipArg::HookOffset => HipAllowance::HookOffset,
        }
    }
}

impl DimensionArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            internal_width_mm: self.width,
            internal_projection_mm: self.projection,
            frame_thickness_mm: self.frame,
            soffit_depth_mm: self.soffit,
            ring_beam_thickness_mm: self.ring_beam,
            underside_height_mm: self.underside,
            projection_wall: self.projection_wall.map(Into::into),
            ..Overrides::default()
        }
    }
}

impl EstimateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            pitch_degrees: self.pitch,
            target_height_mm: self.target_height,
            rafter_spacing_mm: self.rafter_spacing,
            truss_thickness_mm: self.truss_thickness,
            hook_length_mm: self.hook,
            price_per_linear_meter: self.price,
            hip_allowance: self.hip_allowance.map(Into::into),
            ..self.dims.overrides()
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match discover_config(cli.config.as_deref(), &std::env::current_dir()?) {
        Some(path) => load_config(&path)?,
        None => RoofConfig::default(),
    };

    match cli.cmd {
        Command::Estimate(args) => cmd_estimate(config, args),
        Command::SolvePitch(args) => cmd_solve_pitch(config, args),
        Command::Defaults => {
            print!("{}", default_config_toml()?);
            Ok(())
        }
    }
}

fn cmd_estimate(config: RoofConfig, args: EstimateArgs) -> anyhow::Result<()> {
    let merger = ConfigMerger::new(config);
    let overrides = args.overrides();
    let mut params = merger.merge(&overrides);

    let mut outcome = evaluate(&params);
    if matches!(outcome.error, Some(RoofError::InvalidTarget { .. })) {
        let pitch = merger.fallback_pitch(&overrides);
        if let Some(err) = &outcome.error {
            warn!(error = %err, fallback_pitch = pitch, "target height rejected, using explicit pitch");
        }
        params = params.with_explicit_pitch(pitch);
        outcome = evaluate(&params);
    }

    if let Some(err) = outcome.error {
        if merger.json_output(args.json) {
            let body = serde_json::json!({ "code": err.error_code(), "error": &err });
            println!("{}", serde_json::to_string_pretty(&body).context("serialize error")?);
        }
        return Err(err).context("roof estimate failed");
    }

    let report = RoofReport::new(params, outcome.estimate);
    info!(
        trusses = report.estimate.materials.num_trusses,
        cost = report.estimate.materials.material_cost,
        "estimate complete"
    );

    if merger.json_output(args.json) {
        println!("{}", serde_json::to_string_pretty(&report).context("serialize report")?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn cmd_solve_pitch(config: RoofConfig, args: SolvePitchArgs) -> anyhow::Result<()> {
    let params = ConfigMerger::new(config).merge(&args.dims.overrides());
    let pitch = solve_pitch_for_height(&params, args.height)
        .with_context(|| format!("solve pitch for {} mm", args.height))?;

    println!("Target finished height: {:.0} mm", args.height);
    println!("Solved roof pitch:      {:.4}°", pitch);
    Ok(())
}
