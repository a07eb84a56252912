use super::{voigt_index, voigt_pair, CubicConstants, VoigtTensor};
use nalgebra::Matrix3;

/// Computes one component of the rotated fourth-rank tensor
///
/// ```text
/// T'ᵢⱼₖₗ = Σ Rᵢq Rⱼr Rₖs Rₗt T[V(q,r), V(s,t)]
///         q,r,s,t
/// ```
///
/// where `V` maps a pair of Cartesian indices to the Voigt index.
///
/// # Input
///
/// * `i, j, k, l` -- Cartesian indices in {0, 1, 2}
/// * `tensor` -- the original tensor in Voigt notation
/// * `rr` -- the 3×3 orthogonal rotation matrix
pub fn rotated_component(i: usize, j: usize, k: usize, l: usize, tensor: &VoigtTensor, rr: &Matrix3<f64>) -> f64 {
    let mut sum = 0.0;
    for q in 0..3 {
        for r in 0..3 {
            let rr_iq_jr = rr[(i, q)] * rr[(j, r)];
            let m = voigt_index(q, r);
            for s in 0..3 {
                for t in 0..3 {
                    let n = voigt_index(s, t);
                    sum += rr_iq_jr * rr[(k, s)] * rr[(l, t)] * tensor.get(m, n);
                }
            }
        }
    }
    sum
}

/// Rotates a tensor in Voigt notation by an orthogonal matrix
///
/// All 36 components are computed (no symmetry is assumed), thus the
/// symmetry of the result may be used as a check.
pub fn rotate_voigt(tensor: &VoigtTensor, rr: &Matrix3<f64>) -> VoigtTensor {
    let mut rotated = VoigtTensor::new();
    for m in 0..6 {
        let (i, j) = voigt_pair(m);
        for n in 0..6 {
            let (k, l) = voigt_pair(n);
            rotated.set(m, n, rotated_component(i, j, k, l, tensor, rr));
        }
    }
    rotated
}

/// Holds the closed-form components of a cubic tensor rotated about the z-axis
///
/// The rotation sense is the same as `Axis::Z.rotation_matrix(theta)`.
/// The remaining components vanish (14, 15, 24, 25, 34, 35, 36, 45 and their transposes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZRotationClosedForm {
    /// Components 11 and 22
    pub t11: f64,

    /// Components 12 and 21
    pub t12: f64,

    /// Components 13, 23, 31 and 32
    pub t13: f64,

    /// Component 33
    pub t33: f64,

    /// Components 44 and 55
    pub t44: f64,

    /// Component 66
    pub t66: f64,

    /// Components 16 and 61
    pub t16: f64,

    /// Components 26 and 62 (equal to -t16)
    pub t26: f64,
}

impl ZRotationClosedForm {
    /// Evaluates the closed-form expressions
    pub fn new(cubic: &CubicConstants, theta: f64) -> Self {
        let (a, b, d) = (cubic.t11, cubic.t12, cubic.t44);
        let cos4 = f64::cos(4.0 * theta);
        let sin4 = f64::sin(4.0 * theta);
        ZRotationClosedForm {
            t11: 0.25 * (a * (3.0 + cos4) + (b + 2.0 * d) * (1.0 - cos4)),
            t12: 0.25 * (b * (3.0 + cos4) + (a - 2.0 * d) * (1.0 - cos4)),
            t13: b,
            t33: a,
            t44: d,
            t66: 0.25 * (2.0 * d * (1.0 + cos4) + (a - b) * (1.0 - cos4)),
            t16: 0.25 * sin4 * (a - b - 2.0 * d),
            t26: 0.25 * sin4 * (2.0 * d + b - a),
        }
    }

    /// Assembles the full 6×6 tensor
    pub fn to_voigt(&self) -> VoigtTensor {
        let mut tt = VoigtTensor::new();
        for m in 0..2 {
            tt.set(m, m, self.t11);
            tt.set(m, 2, self.t13);
            tt.set(2, m, self.t13);
            tt.set(m + 3, m + 3, self.t44);
        }
        tt.set(0, 1, self.t12);
        tt.set(1, 0, self.t12);
        tt.set(2, 2, self.t33);
        tt.set(5, 5, self.t66);
        tt.set(0, 5, self.t16);
        tt.set(5, 0, self.t16);
        tt.set(1, 5, self.t26);
        tt.set(5, 1, self.t26);
        tt
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
