//! Worked scenarios checked end to end against hand calculations.

use roof_core::calculations::geometry::PitchSource;
use roof_core::{compute_geometry, estimate, evaluate, HipAllowance, PitchMode, RoofError, RoofParameters};

fn scenario(pitch_degrees: f64) -> RoofParameters {
    RoofParameters {
        internal_width_mm: 4450.0,
        internal_projection_mm: 3900.0,
        pitch: PitchMode::Explicit { pitch_degrees },
        frame_thickness_mm: 70.0,
        soffit_depth_mm: 150.0,
        ring_beam_thickness_mm: 40.0,
        ..RoofParameters::default()
    }
}

#[test]
fn reference_conservatory_at_25_degrees() {
    let geometry = compute_geometry(&scenario(25.0)).unwrap();

    assert_eq!(geometry.external_width_mm, 4890.0);
    assert_eq!(geometry.ridge_length_mm, 1675.0);
    // 2445 / cos 25°
    assert!((geometry.truss_length_mm - 2697.76).abs() < 0.01);
    assert_eq!(geometry.truss_length_mm.round(), 2698.0);
    // 1140.12 rise + 40 ring-beam + 306 underside + 60 ridge cap
    assert!((geometry.finished_height_mm - 1546.12).abs() < 0.01);
    assert!((geometry.hip_pitch_degrees - 18.25).abs() < 0.01);
}

#[test]
fn reference_conservatory_bill_of_materials() {
    let result = estimate(&scenario(25.0)).unwrap();

    assert_eq!(result.materials.num_trusses, 4);
    assert!((result.materials.total_linear_meters - 25.791).abs() < 0.001);
    assert_eq!(result.materials.stock_lengths_needed, 3);
    assert!((result.materials.material_cost - 157.84).abs() < 0.01);
}

#[test]
fn flat_roof_keeps_only_offsets() {
    let geometry = compute_geometry(&scenario(0.0)).unwrap();

    assert_eq!(geometry.vertical_truss_height_mm, 0.0);
    assert_eq!(geometry.hip_pitch_degrees, 0.0);
    assert_eq!(geometry.finished_height_mm, 40.0 + 306.0 + 60.0);
    assert_eq!(geometry.truss_length_mm, 2445.0);
}

#[test]
fn unreachably_low_target_converges_to_flat() {
    let params = scenario(25.0).with_target_height(200.0);
    let geometry = compute_geometry(&params).unwrap();

    assert_eq!(geometry.pitch_source, PitchSource::SolvedFromHeight);
    assert!(geometry.resolved_pitch_degrees >= 0.0);
    assert!(geometry.resolved_pitch_degrees < 1e-4);
}

#[test]
fn invalid_target_is_recoverable_with_explicit_pitch() {
    let explicit = scenario(25.0);
    let target = explicit.with_target_height(-1.0);

    let geometry = match compute_geometry(&target) {
        Err(RoofError::InvalidTarget { .. }) => compute_geometry(&explicit).unwrap(),
        other => panic!("expected InvalidTarget, got {:?}", other),
    };
    assert_eq!(geometry.resolved_pitch_degrees, 25.0);
}

#[test]
fn negative_width_resets_everything() {
    let params = RoofParameters {
        internal_width_mm: -4450.0,
        ..scenario(25.0)
    };
    let outcome = evaluate(&params);

    assert!(matches!(outcome.error, Some(RoofError::InvalidGeometry { .. })));
    assert_eq!(outcome.estimate.geometry.external_width_mm, 0.0);
    assert_eq!(outcome.estimate.geometry.truss_length_mm, 0.0);
    assert_eq!(outcome.estimate.geometry.hip_length_mm, 0.0);
    assert_eq!(outcome.estimate.materials.num_trusses, 0);
    assert_eq!(outcome.estimate.materials.material_cost, 0.0);
}

#[test]
fn zero_width_is_invalid_geometry() {
    let params = RoofParameters {
        internal_width_mm: 0.0,
        ..scenario(25.0)
    };
    assert_eq!(evaluate(&params).error.unwrap().error_code(), "INVALID_GEOMETRY");
}

#[test]
fn shallow_projection_is_invalid_geometry() {
    let params = RoofParameters {
        internal_projection_mm: 2000.0,
        ..scenario(25.0)
    };
    let err = compute_geometry(&params).unwrap_err();
    assert_eq!(err.field(), Some("ridge_length_mm"));
}

#[test]
fn hook_offset_variant_subtracts_hook_from_ridge() {
    // hip = √((ridge − hook)² + (W/2)²) / cos φ
    let params = RoofParameters {
        hip_allowance: HipAllowance::HookOffset,
        hook_length_mm: 190.0,
        ..scenario(23.0)
    };
    let geometry = compute_geometry(&params).unwrap();

    let phi = (23.0_f64.to_radians().tan() * 45.0_f64.to_radians().cos()).atan();
    let expected = (1485.0_f64 * 1485.0 + 2445.0 * 2445.0).sqrt() / phi.cos();
    assert!((geometry.hip_length_mm - expected).abs() < 1e-6);
}
