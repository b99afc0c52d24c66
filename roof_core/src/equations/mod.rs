//! # Roof Framing Equations
//!
//! Closed-form formulas shared by the calculation components. Keeping them in
//! one place means the pitch solver evaluates exactly the same arithmetic as
//! the forward truss calculation.
//!
//! ## Modules
//!
//! - [`truss`] - Common truss length and rise
//! - [`hip`] - Compound hip pitch, hip run and foot-cut allowance
//! - [`quantity`] - Truss count, linear totals and stock rounding
//!
//! ## Conventions
//!
//! - Lengths in millimetres unless the name says metres
//! - Angles passed and returned in degrees; radians stay inside each function

pub mod hip;
pub mod quantity;
pub mod truss;

pub use hip::{foot_cut_length, hip_pitch, horizontal_run, sloped_length};
pub use quantity::{stock_lengths, total_linear_meters, truss_count};
pub use truss::{truss_length, vertical_rise};
