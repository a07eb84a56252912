use super::CubicConstants;
use crate::StrError;

/// Calculates the stiffness components of an isotropic material from Young's modulus and Poisson's coefficient
///
/// ```text
///        E (1 - ν)                 E ν                   E
/// c11 = ─────────────── ,  c12 = ─────────────── ,  c44 = ────────
///       (1 + ν)(1 - 2ν)          (1 + ν)(1 - 2ν)          2 (1 + ν)
/// ```
pub fn isotropic_stiffness(young: f64, poisson: f64) -> Result<CubicConstants, StrError> {
    if young <= 0.0 {
        return Err("Young's modulus must be > 0.0");
    }
    if poisson <= -1.0 || poisson >= 0.5 {
        return Err("Poisson's coefficient must be in (-1.0, 0.5)");
    }
    let den = (1.0 + poisson) * (1.0 - 2.0 * poisson);
    Ok(CubicConstants {
        t11: young * (1.0 - poisson) / den,
        t12: young * poisson / den,
        t44: young / (2.0 * (1.0 + poisson)),
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
