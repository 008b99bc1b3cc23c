//! This module defines `EdmLimit`, the value object for one published EDM upper limit.
//!
//! A limit records the year, the bound in e*cm, a short citation, and the measured system.
//! Derived physics quantities are computed on demand from the bound through the system's
//! conversion bundle; nothing is cached and the value never changes after construction.
//! Queries for channels a system does not have return
//! [`EdmError::UnimplementedConversion`].

use super::conversion::hadronic_conversion;
use super::system::System;
use crate::error::EdmError;
use crate::math::mass_scale::chromo_edm_limits_on_new_particle_mass;

/// Reference electron EDM in e*cm at which the loop-level mass estimates are normalised.
const ELECTRON_REFERENCE_EDM: f64 = 1e-29;

/// New-particle mass in TeV probed at [`ELECTRON_REFERENCE_EDM`] through one-loop diagrams.
const ONE_LOOP_REFERENCE_MASS_TEV: f64 = 48.0;

/// New-particle mass in TeV probed at [`ELECTRON_REFERENCE_EDM`] through two-loop diagrams.
const TWO_LOOP_REFERENCE_MASS_TEV: f64 = 2.0;

/// A measured permanent electric dipole moment limit.
///
/// The bound is treated as a magnitude. [`EdmLimit::new`] performs no validation so that
/// degenerate inputs propagate numerically; [`EdmLimit::new_strict`] rejects them.
#[derive(Debug, Clone, PartialEq)]
pub struct EdmLimit {
    year: i64,
    edm_bound: f64,
    reference: String,
    system: Option<System>,
}

impl EdmLimit {
    /// Creates a limit for a measured system.
    ///
    /// # Arguments
    ///
    /// * `system` - The measured system, or `None` for an untagged base limit.
    /// * `year` - The year of publication.
    /// * `edm_bound` - The reported EDM upper limit in e*cm.
    /// * `reference` - A short citation in `NameYear` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use edmlimits::{EdmLimit, System};
    ///
    /// let limit = EdmLimit::new(Some(System::Neutron), 2020, 1e-26, "Abel2020");
    /// assert_eq!(limit.chromo_edm_limit().unwrap(), 1e-26 / 0.55);
    /// ```
    pub fn new(
        system: Option<System>,
        year: i64,
        edm_bound: f64,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            year,
            edm_bound,
            reference: reference.into(),
            system,
        }
    }

    /// Creates a limit after checking that the bound is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::InvalidBound`] if `edm_bound` is zero, negative, or not finite.
    pub fn new_strict(
        system: Option<System>,
        year: i64,
        edm_bound: f64,
        reference: impl Into<String>,
    ) -> Result<Self, EdmError> {
        if !edm_bound.is_finite() || edm_bound <= 0.0 {
            return Err(EdmError::InvalidBound(edm_bound));
        }
        Ok(Self::new(system, year, edm_bound, reference))
    }

    pub fn neutron(year: i64, edm_bound: f64, reference: impl Into<String>) -> Self {
        Self::new(Some(System::Neutron), year, edm_bound, reference)
    }

    pub fn hg(year: i64, edm_bound: f64, reference: impl Into<String>) -> Self {
        Self::new(Some(System::Hg), year, edm_bound, reference)
    }

    pub fn xe(year: i64, edm_bound: f64, reference: impl Into<String>) -> Self {
        Self::new(Some(System::Xe), year, edm_bound, reference)
    }

    pub fn tlf(year: i64, edm_bound: f64, reference: impl Into<String>) -> Self {
        Self::new(Some(System::TlF), year, edm_bound, reference)
    }

    pub fn ra(year: i64, edm_bound: f64, reference: impl Into<String>) -> Self {
        Self::new(Some(System::Ra), year, edm_bound, reference)
    }

    pub fn yb(year: i64, edm_bound: f64, reference: impl Into<String>) -> Self {
        Self::new(Some(System::Yb), year, edm_bound, reference)
    }

    pub fn electron(year: i64, edm_bound: f64, reference: impl Into<String>) -> Self {
        Self::new(Some(System::Electron), year, edm_bound, reference)
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// The reported EDM bound in e*cm.
    pub fn edm_bound(&self) -> f64 {
        self.edm_bound
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn system(&self) -> Option<System> {
        self.system
    }

    fn unimplemented(&self, quantity: &'static str) -> EdmError {
        EdmError::UnimplementedConversion {
            system: self.system,
            quantity,
        }
    }

    fn require_electron(&self, quantity: &'static str) -> Result<(), EdmError> {
        match self.system {
            Some(System::Electron) => Ok(()),
            _ => Err(self.unimplemented(quantity)),
        }
    }

    /// Bound on the nuclear Schiff moment in e*fm^3.
    ///
    /// Only TlF, Ra, and Yb limits are read through a Schiff moment; it is recomputed from
    /// the bound on every call.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::UnimplementedConversion`] for every other system.
    pub fn schiff_moment_limit(&self) -> Result<f64, EdmError> {
        self.system
            .and_then(hadronic_conversion)
            .and_then(|conversion| conversion.schiff_moment(self.edm_bound))
            .ok_or_else(|| self.unimplemented("schiff_moment_limit"))
    }

    /// Bound on the QCD vacuum angle theta_QCD implied by this limit.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::UnimplementedConversion`] for the electron and for untagged limits.
    pub fn theta_qcd_limit(&self) -> Result<f64, EdmError> {
        self.system
            .and_then(hadronic_conversion)
            .and_then(|conversion| conversion.theta_qcd(self.edm_bound))
            .ok_or_else(|| self.unimplemented("theta_QCD_limit"))
    }

    /// Bound on the quark chromo-EDM combination probed by this system, in cm.
    ///
    /// The neutron constrains d_d + 0.5 d_u, TlF constrains d_u + d_d, and the remaining
    /// hadronic systems constrain d_u - d_d.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::UnimplementedConversion`] for the electron and for untagged limits.
    pub fn chromo_edm_limit(&self) -> Result<f64, EdmError> {
        self.system
            .and_then(hadronic_conversion)
            .and_then(|conversion| conversion.chromo_edm(self.edm_bound))
            .ok_or_else(|| self.unimplemented("chromo_EDM_limit"))
    }

    /// New-particle mass scale in TeV implied by the chromo-EDM limit.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`EdmLimit::chromo_edm_limit`].
    pub fn new_particle_mass_from_chromo_edm(&self) -> Result<f64, EdmError> {
        self.chromo_edm_limit().map(chromo_edm_limits_on_new_particle_mass)
    }

    /// Electron EDM limit on new particle masses at the one-loop level, in TeV.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::UnimplementedConversion`] unless this is an electron limit.
    pub fn one_loop_mass_limit(&self) -> Result<f64, EdmError> {
        self.require_electron("one_loop_mass_limit")?;
        Ok(ONE_LOOP_REFERENCE_MASS_TEV * (ELECTRON_REFERENCE_EDM / self.edm_bound).sqrt())
    }

    /// Electron EDM limit on new particle masses at the two-loop level, in TeV.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::UnimplementedConversion`] unless this is an electron limit.
    pub fn two_loop_mass_limit(&self) -> Result<f64, EdmError> {
        self.require_electron("two_loop_mass_limit")?;
        Ok(TWO_LOOP_REFERENCE_MASS_TEV * (ELECTRON_REFERENCE_EDM / self.edm_bound).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::conversion::{HG_CHROMO_FACTOR, HG_THETA_RATIO};
    use approx::assert_relative_eq;

    #[test]
    fn test_neutron_chromo_edm_is_exact() {
        let limit = EdmLimit::neutron(2020, 1e-26, "x");
        assert_eq!(limit.chromo_edm_limit().unwrap(), 1e-26 / 0.55);
    }

    #[test]
    fn test_neutron_theta_qcd() {
        let limit = EdmLimit::neutron(2020, 1.8e-26, "Abel2020");
        assert_relative_eq!(
            limit.theta_qcd_limit().unwrap(),
            1.8e-26 / (0.0039 * (1e2 / 1e15)),
            max_relative = 1e-14
        );
        assert_relative_eq!(limit.theta_qcd_limit().unwrap(), 4.615e-11, max_relative = 1e-3);
    }

    #[test]
    fn test_hg_graner_limit_reproduces_published_theta() {
        let limit = EdmLimit::hg(2016, 7.4e-30, "Graner2016");
        assert_relative_eq!(limit.theta_qcd_limit().unwrap(), 1.5e-10, max_relative = 1e-12);
        assert_relative_eq!(limit.chromo_edm_limit().unwrap(), 5.7e-27, max_relative = 1e-12);
    }

    #[test]
    fn test_xe_reads_as_ten_times_hg() {
        let limit = EdmLimit::xe(2019, 1.4e-27, "Sachdeva2019");
        assert_relative_eq!(
            limit.theta_qcd_limit().unwrap(),
            1.4e-27 * 10.0 / HG_THETA_RATIO,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            limit.chromo_edm_limit().unwrap(),
            1.4e-27 * 10.0 * HG_CHROMO_FACTOR,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_tlf_goes_through_cho_schiff_ratio() {
        let limit = EdmLimit::tlf(1991, 2.9e-23, "Cho1991");
        assert_relative_eq!(limit.schiff_moment_limit().unwrap(), 4e-10, max_relative = 1e-12);
        assert_relative_eq!(
            limit.theta_qcd_limit().unwrap(),
            4e-10 / 0.027,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            limit.chromo_edm_limit().unwrap(),
            4e-10 / 10.0 / 1e13,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_ra_theta_equals_schiff_moment() {
        let limit = EdmLimit::ra(2016, 1.4e-23, "Bishof2016");
        let schiff = limit.schiff_moment_limit().unwrap();
        assert_relative_eq!(schiff, 1.4e-23 * 1e13 / 8.5e-4, max_relative = 1e-14);
        assert_eq!(limit.theta_qcd_limit().unwrap(), schiff);
        assert_relative_eq!(
            limit.chromo_edm_limit().unwrap(),
            schiff / (6.0 * 13.5) / 2e14,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_yb_schiff_and_chromo() {
        let limit = EdmLimit::yb(2024, 1.5e-26, "Zheng2022");
        let schiff = limit.schiff_moment_limit().unwrap();
        assert_relative_eq!(schiff, 1.5e-26 * 1e13 / 1.88e-4, max_relative = 1e-14);
        assert_relative_eq!(limit.theta_qcd_limit().unwrap(), schiff / 0.005, max_relative = 1e-14);
        assert_relative_eq!(
            limit.chromo_edm_limit().unwrap(),
            1.5e-26 / 0.6 * HG_CHROMO_FACTOR,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_schiff_moment_unavailable_for_direct_systems() {
        let limit = EdmLimit::hg(2016, 7.4e-30, "Graner2016");
        assert!(matches!(
            limit.schiff_moment_limit(),
            Err(EdmError::UnimplementedConversion {
                system: Some(System::Hg),
                quantity: "schiff_moment_limit",
            })
        ));
    }

    #[test]
    fn test_untagged_limit_has_no_channels() {
        let limit = EdmLimit::new(None, 2000, 1e-27, "Base2000");
        assert!(matches!(
            limit.theta_qcd_limit(),
            Err(EdmError::UnimplementedConversion { system: None, .. })
        ));
        assert!(limit.chromo_edm_limit().is_err());
        assert!(limit.new_particle_mass_from_chromo_edm().is_err());
        assert!(limit.one_loop_mass_limit().is_err());
    }

    #[test]
    fn test_electron_has_only_loop_mass_limits() {
        let limit = EdmLimit::electron(2023, 4.1e-30, "Roussy2023");
        assert!(limit.theta_qcd_limit().is_err());
        assert!(matches!(
            limit.chromo_edm_limit(),
            Err(EdmError::UnimplementedConversion {
                system: Some(System::Electron),
                quantity: "chromo_EDM_limit",
            })
        ));
        assert!(limit.new_particle_mass_from_chromo_edm().is_err());
        assert_relative_eq!(
            limit.one_loop_mass_limit().unwrap(),
            48.0 * (1e-29_f64 / 4.1e-30).sqrt(),
            max_relative = 1e-14
        );
        assert_relative_eq!(
            limit.two_loop_mass_limit().unwrap(),
            2.0 * (1e-29_f64 / 4.1e-30).sqrt(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_electron_reference_edm_gives_reference_masses() {
        let limit = EdmLimit::electron(2018, 1e-29, "ACME2018");
        assert_eq!(limit.one_loop_mass_limit().unwrap(), 48.0);
        assert_eq!(limit.two_loop_mass_limit().unwrap(), 2.0);
    }

    #[test]
    fn test_loop_mass_limits_rejected_for_hadronic() {
        let limit = EdmLimit::neutron(2020, 1.8e-26, "Abel2020");
        assert!(limit.one_loop_mass_limit().is_err());
        assert!(limit.two_loop_mass_limit().is_err());
    }

    #[test]
    fn test_mass_from_chromo_matches_manual_chain() {
        for system in System::HADRONIC {
            let limit = EdmLimit::new(Some(system), 2020, 3e-27, "x");
            let manual = chromo_edm_limits_on_new_particle_mass(limit.chromo_edm_limit().unwrap());
            assert_eq!(limit.new_particle_mass_from_chromo_edm().unwrap(), manual);
        }
    }

    #[test]
    fn test_new_strict_rejects_degenerate_bounds() {
        for bound in [0.0, -1e-27, f64::NAN, f64::INFINITY] {
            let result = EdmLimit::new_strict(Some(System::Hg), 2016, bound, "x");
            assert!(matches!(result, Err(EdmError::InvalidBound(_))));
        }
        assert!(EdmLimit::new_strict(Some(System::Hg), 2016, 7.4e-30, "x").is_ok());
    }

    #[test]
    fn test_new_passes_degenerate_bounds_through() {
        let limit = EdmLimit::neutron(2020, -1e-26, "x");
        assert!(limit.theta_qcd_limit().unwrap() < 0.0);
        assert!(limit.new_particle_mass_from_chromo_edm().unwrap().is_nan());

        let zero = EdmLimit::electron(2020, 0.0, "x");
        assert!(zero.one_loop_mass_limit().unwrap().is_infinite());
    }
}
