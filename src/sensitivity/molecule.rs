//! This module defines the molecular and nuclear sensitivity factors of a proposed measurement.
//!
//! The `Molecule` struct holds the molecular enhancement W_S, the Schiff-moment-per-theta factor
//! K_S, and the pion-nucleon sensitivities a_0, a_1, a_2. Two derived conversions express W_S and
//! K_S in SI units so that their product is an energy shift in joules.

use crate::error::EdmError;
use crate::math::constants::{BOHR_RADIUS, ELEMENTARY_CHARGE, FEMTOMETRE, VACUUM_PERMITTIVITY};
use serde::Deserialize;
use std::f64::consts::PI;

/// Molecule sensitivity properties to physics beyond the Standard Model.
///
/// The defaults describe a radium-225 nucleus in RaSH+: a_0, a_1, a_2 from Engel2013, and a
/// W_S value from unpublished relativistic calculations. The nuclear spin alignment of 0.25
/// suits RaSH+ and RaOCH3+; other molecules such as RaOH+ need their own value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Molecule {
    /// Molecular enhancement factor in atomic units.
    #[serde(alias = "W_S")]
    pub w_s: f64,
    /// Schiff moment per unit theta_QCD in e*fm^3.
    #[serde(alias = "K_S")]
    pub k_s: f64,
    /// Isoscalar sensitivity, unitless.
    pub a_0: f64,
    /// Isovector sensitivity, unitless.
    pub a_1: f64,
    /// Isotensor sensitivity, unitless.
    pub a_2: f64,
    /// Alignment between the nuclear spin and the molecule orientation, in (0, 1].
    #[serde(alias = "nucleus_E_field_alignment")]
    pub nucleus_e_field_alignment: f64,
    /// Optional label such as `"RaSH+"`.
    pub molecule_name: Option<String>,
}

impl Default for Molecule {
    fn default() -> Self {
        Self {
            w_s: 45_000.0,
            k_s: 1.0,
            a_0: -1.5,
            a_1: 6.0,
            a_2: -4.0,
            nucleus_e_field_alignment: 0.25,
            molecule_name: None,
        }
    }
}

impl Molecule {
    /// Schiff moment factor K_S in SI units (C*m^3).
    ///
    /// Multiplying by [`Molecule::w_s_si`] gives an energy in joules; see the supplementary
    /// material of Yu2021.
    pub fn schiff_si(&self) -> f64 {
        let schiff_au_to_si = ELEMENTARY_CHARGE * FEMTOMETRE.powi(3);
        schiff_au_to_si * self.k_s
    }

    /// Molecular enhancement W_S in SI units (J/(C*m^3)).
    ///
    /// W_S in atomic units is expressed in `e / (4 pi epsilon_0 a_0^4)`.
    pub fn w_s_si(&self) -> f64 {
        let electric_const = 4.0 * PI * VACUUM_PERMITTIVITY;
        let w_s_au_to_si = ELEMENTARY_CHARGE / (electric_const * BOHR_RADIUS.powi(4));
        w_s_au_to_si * self.w_s
    }

    /// Checks that the alignment lies in (0, 1] and every factor is finite.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::InvalidSettings`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EdmError> {
        let alignment = self.nucleus_e_field_alignment;
        if !(alignment > 0.0 && alignment <= 1.0) {
            return Err(EdmError::InvalidSettings(format!(
                "nucleus_e_field_alignment must be in (0, 1], got {alignment}"
            )));
        }
        for (name, value) in [
            ("w_s", self.w_s),
            ("k_s", self.k_s),
            ("a_0", self.a_0),
            ("a_1", self.a_1),
            ("a_2", self.a_2),
        ] {
            if !value.is_finite() {
                return Err(EdmError::InvalidSettings(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schiff_si_for_unit_k_s() {
        let molecule = Molecule::default();
        assert_relative_eq!(molecule.schiff_si(), 1.602_176_634e-64, max_relative = 1e-12);
    }

    #[test]
    fn test_w_s_si_atomic_unit() {
        let unit = Molecule {
            w_s: 1.0,
            ..Default::default()
        };
        assert_relative_eq!(unit.w_s_si(), 1.836_3e32, max_relative = 1e-4);

        let default = Molecule::default();
        assert_relative_eq!(default.w_s_si(), 45_000.0 * unit.w_s_si(), max_relative = 1e-14);
    }

    #[test]
    fn test_validate_alignment_bounds() {
        let mut molecule = Molecule::default();
        assert!(molecule.validate().is_ok());

        molecule.nucleus_e_field_alignment = 0.0;
        assert!(matches!(
            molecule.validate(),
            Err(EdmError::InvalidSettings(_))
        ));

        molecule.nucleus_e_field_alignment = 1.0;
        molecule.a_1 = f64::INFINITY;
        let err = molecule.validate().unwrap_err();
        assert!(err.to_string().contains("a_1"));
    }
}
