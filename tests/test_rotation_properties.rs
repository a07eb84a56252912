use approx::assert_relative_eq;
use optoacoustic::prelude::*;
use optoacoustic::tensor::{rotate_voigt, ZRotationClosedForm};
use std::f64::consts::PI;

// Silicon-like cubic crystal
//
// c11 = 166 GPa, c12 = 64 GPa, c44 = 80 GPa
//
// The photoelastic and loss constants are those of Si_2016_Smith.

const C11: f64 = 166e9;
const C12: f64 = 64e9;
const C44: f64 = 80e9;
const TOL: f64 = 1e-9;

fn silicon() -> Material {
    Material::isotropic(
        "silicon-like",
        3.48,
        2329.0,
        CubicConstants::new(C11, C12, C44),
        CubicConstants::new(-0.094, 0.017, -0.051),
        CubicConstants::new(5.9e-3, 5.16e-3, 0.362e-3),
    )
}

fn all_tensors(material: &Material) -> [VoigtTensor; 3] {
    [material.stiffness(), material.photoelastic(), material.acoustic_loss()]
}

fn angles() -> Vec<f64> {
    (0..16).map(|i| -PI + (i as f64) * 2.0 * PI / 15.0 + 0.05).collect()
}

#[test]
fn test_rotation_by_zero_is_the_identity() -> Result<(), RotationError> {
    let mat = silicon();
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let rotated = mat.rotate(0.0, axis)?;
        for (orig, rot) in all_tensors(&mat).iter().zip(all_tensors(&rotated).iter()) {
            let scale = orig.max_abs();
            assert_relative_eq!(rot.matrix(), orig.matrix(), epsilon = TOL * scale);
        }
    }
    Ok(())
}

#[test]
fn test_rotation_is_periodic() -> Result<(), RotationError> {
    let mat = silicon();
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for theta in angles() {
            let a = mat.rotate(theta, axis)?;
            let b = mat.rotate(theta + 2.0 * PI, axis)?;
            for (ta, tb) in all_tensors(&a).iter().zip(all_tensors(&b).iter()) {
                assert_relative_eq!(ta.matrix(), tb.matrix(), epsilon = TOL * ta.max_abs());
            }
        }
    }
    Ok(())
}

#[test]
fn test_rotated_tensors_are_symmetric() -> Result<(), RotationError> {
    let mat = silicon();
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for theta in angles() {
            let rotated = mat.rotate(theta, axis)?;
            for tensor in all_tensors(&rotated) {
                assert!(tensor.is_symmetric(TOL));
            }
        }
    }
    Ok(())
}

#[test]
fn test_normal_row_sums_are_invariant() -> Result<(), RotationError> {
    // c'ᵢᵢₖₖ = c11 + 2 c12 for each i (the normal block row sums)
    let mat = silicon();
    let correct = C11 + 2.0 * C12;
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for theta in angles() {
            let c = mat.rotate(theta, axis)?.stiffness();
            let mut bulk = 0.0;
            for m in 0..3 {
                let row_sum = c.get(m, 0) + c.get(m, 1) + c.get(m, 2);
                assert_relative_eq!(row_sum, correct, max_relative = TOL);
                bulk += row_sum;
            }
            assert_relative_eq!(bulk, 3.0 * correct, max_relative = TOL);
        }
    }
    Ok(())
}

#[test]
fn test_general_rotation_keeps_the_invariants() {
    let c = CubicConstants::new(C11, C12, C44).to_voigt();
    let rr = Axis::Z.rotation_matrix(0.3) * Axis::X.rotation_matrix(-1.2) * Axis::Y.rotation_matrix(2.1);
    let rotated = rotate_voigt(&c, &rr);
    assert!(rotated.is_symmetric(TOL));
    for m in 0..3 {
        let row_sum = rotated.get(m, 0) + rotated.get(m, 1) + rotated.get(m, 2);
        assert_relative_eq!(row_sum, C11 + 2.0 * C12, max_relative = TOL);
    }
}

#[test]
fn test_kernel_matches_the_closed_form_about_z() -> Result<(), RotationError> {
    let mat = silicon();
    let cubic = CubicConstants::new(C11, C12, C44);
    for i in 0..12 {
        let theta = (i as f64) * 2.0 * PI / 12.0 + 0.01;
        let c = mat.rotate(theta, Axis::Z)?.stiffness();
        let cos4 = f64::cos(4.0 * theta);
        let c11 = 0.25 * (C11 * (3.0 + cos4) + (C12 + 2.0 * C44) * (1.0 - cos4));
        assert_relative_eq!(c.get(0, 0), c11, max_relative = TOL);
        assert_relative_eq!(c.get(1, 1), c11, max_relative = TOL);
        let closed = ZRotationClosedForm::new(&cubic, theta);
        assert_relative_eq!(c.matrix(), closed.to_voigt().matrix(), epsilon = TOL * C11);
    }
    Ok(())
}

#[test]
fn test_silicon_rotated_45_degrees_about_z() -> Result<(), RotationError> {
    let mat = silicon();
    let original = mat.clone();
    let theta = PI / 4.0;
    let rotated = mat.rotate_label(theta, "z-axis")?;
    let c = rotated.stiffness();

    // closed form with cos(4θ) = -1
    assert_relative_eq!(c.get(0, 0), 195e9, max_relative = TOL);
    assert_relative_eq!(c.get(1, 1), 195e9, max_relative = TOL);
    assert_relative_eq!(c.get(0, 1), 35e9, max_relative = TOL);
    assert_relative_eq!(c.get(5, 5), 51e9, max_relative = TOL);
    assert_relative_eq!(c.get(2, 2), C11, max_relative = TOL);
    assert_relative_eq!(c.get(0, 2), C12, max_relative = TOL);
    assert_relative_eq!(c.get(3, 3), C44, max_relative = TOL);
    assert_relative_eq!(c.get(4, 4), C44, max_relative = TOL);

    // c16 = c61 = sin(4θ) (2c44 + c12 - c11) / 4 ≈ 0
    let c16 = 0.25 * f64::sin(4.0 * theta) * (2.0 * C44 + C12 - C11);
    assert_relative_eq!(c.get(0, 5), c16, epsilon = TOL * C11);
    assert_relative_eq!(c.get(5, 0), c16, epsilon = TOL * C11);
    assert_relative_eq!(c.get(1, 5), -c16, epsilon = TOL * C11);

    // the original material is untouched
    assert_eq!(mat, original);
    assert_eq!(mat.is_anisotropic(), false);
    assert_eq!(rotated.is_anisotropic(), true);
    Ok(())
}

#[test]
fn test_rotation_errors() {
    let mat = silicon();
    assert_eq!(
        mat.rotate_label(0.5, "w-axis").err(),
        Some(RotationError::InvalidAxis("w-axis".to_string()))
    );
    let anisotropic = mat.rotate(0.5, Axis::Y).unwrap();
    assert_eq!(anisotropic.rotate(0.5, Axis::Y).err(), Some(RotationError::NotSupported));
    assert_eq!(
        anisotropic.rotate_label(0.5, "z-axis").err(),
        Some(RotationError::NotSupported)
    );
}
