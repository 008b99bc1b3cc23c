//! This module holds the per-system conversion coefficients for hadronic EDM limits.
//!
//! Every hadronic [`System`] maps to exactly one [`Conversion`] bundle through
//! [`hadronic_conversion`]. A bundle describes how the raw EDM bound becomes a Schiff moment
//! (for systems read through nuclear structure), a theta_QCD bound, and a quark chromo-EDM
//! bound. The rules are plain data; evaluation is a pure function of the bound.

use super::system::System;
use crate::math::constants::CM_TO_FM;

/// Ratio of the Hg-199 EDM to theta_QCD, from Graner et al., PRL 116, 161601 (2016).
pub const HG_THETA_RATIO: f64 = 7.4e-30 / 1.5e-10;

/// Ratio of the chromo-EDM difference d_u - d_d to the Hg-199 EDM (Graner2016 Table III, Eq. 5).
pub const HG_CHROMO_FACTOR: f64 = 5.7e-27 / 7.4e-30;

/// Neutron EDM per unit theta_QCD in e*fm, PRL 115, 062001 (2015), Eq. 19.
const NEUTRON_THETA_FACTOR_E_FM: f64 = 0.0039;

/// Pion-nucleon coupling g used with the Ra-225 isovector sensitivity (Ban2010).
const G_PI_NN: f64 = 13.5;

/// Conversion from g_1 to the d_u - d_d chromo-EDM difference in cm^-1 (Pospelov2002).
pub const QUARK_CHROMO_FACTOR: f64 = 2e14;

/// Rescales an EDM bound into an effective Hg-199 EDM bound as `edm * multiplier / divisor`.
///
/// The Xe (10x) and Yb (1/0.6x) equivalences are rough literature estimates and are kept
/// literally; Flambaum2020a suggests Xe is closer to Hg than the 10x assumed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HgEquivalence {
    pub multiplier: f64,
    pub divisor: f64,
}

impl HgEquivalence {
    pub const IDENTITY: HgEquivalence = HgEquivalence {
        multiplier: 1.0,
        divisor: 1.0,
    };

    #[inline]
    pub fn apply(&self, edm_e_cm: f64) -> f64 {
        edm_e_cm * self.multiplier / self.divisor
    }
}

/// How an EDM bound in e*cm is turned into a Schiff moment bound in e*fm^3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchiffRoute {
    /// A fixed empirical Schiff/EDM ratio in (e*fm^3)/(e*cm).
    Empirical { ratio: f64 },
    /// Division of the EDM (converted to e*fm) by the atomic sensitivity kappa_s in fm^-2.
    ///
    /// The magnitude of kappa_s is used, as the bound is itself a magnitude.
    AtomicKappa { kappa_s: f64 },
}

impl SchiffRoute {
    #[inline]
    fn apply(&self, edm_e_cm: f64) -> f64 {
        match *self {
            SchiffRoute::Empirical { ratio } => ratio * edm_e_cm,
            SchiffRoute::AtomicKappa { kappa_s } => edm_e_cm * CM_TO_FM / kappa_s,
        }
    }
}

/// How a theta_QCD bound is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThetaRule {
    /// The EDM bound divided by an EDM-per-theta factor in e*cm.
    EdmOver(f64),
    /// The effective Hg-199 EDM divided by [`HG_THETA_RATIO`].
    EffectiveHg(HgEquivalence),
    /// The Schiff moment bound divided by a Schiff-per-theta factor in e*fm^3.
    SchiffOver(f64),
}

/// How a quark chromo-EDM bound in cm is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromoRule {
    /// The EDM bound divided by a constant (neutron: d_d + 0.5 d_u).
    EdmOver(f64),
    /// The effective Hg-199 EDM multiplied by [`HG_CHROMO_FACTOR`].
    EffectiveHg(HgEquivalence),
    /// The Schiff moment divided by a constant in e*fm^2, then converted from fm to cm.
    SchiffOver(f64),
    /// A sole-source g_1 bound from `S = a_1 * g * g_1`, divided by [`QUARK_CHROMO_FACTOR`].
    IsovectorPion { a_1: f64 },
}

/// The complete set of conversion rules for one hadronic system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub schiff: Option<SchiffRoute>,
    pub theta: ThetaRule,
    pub chromo: ChromoRule,
}

impl Conversion {
    /// Schiff moment bound in e*fm^3, or `None` when this system is not read through one.
    pub fn schiff_moment(&self, edm_e_cm: f64) -> Option<f64> {
        self.schiff.map(|route| route.apply(edm_e_cm))
    }

    pub fn theta_qcd(&self, edm_e_cm: f64) -> Option<f64> {
        match self.theta {
            ThetaRule::EdmOver(factor) => Some(edm_e_cm / factor),
            ThetaRule::EffectiveHg(equivalence) => {
                Some(equivalence.apply(edm_e_cm) / HG_THETA_RATIO)
            }
            ThetaRule::SchiffOver(factor) => Some(self.schiff_moment(edm_e_cm)? / factor),
        }
    }

    pub fn chromo_edm(&self, edm_e_cm: f64) -> Option<f64> {
        match self.chromo {
            ChromoRule::EdmOver(factor) => Some(edm_e_cm / factor),
            ChromoRule::EffectiveHg(equivalence) => {
                Some(chromo_edm_from_hg(equivalence.apply(edm_e_cm)))
            }
            ChromoRule::SchiffOver(factor) => {
                Some(self.schiff_moment(edm_e_cm)? / factor / CM_TO_FM)
            }
            ChromoRule::IsovectorPion { a_1 } => {
                let g_1 = self.schiff_moment(edm_e_cm)? / (a_1 * G_PI_NN);
                Some(g_1 / QUARK_CHROMO_FACTOR)
            }
        }
    }
}

const NEUTRON: Conversion = Conversion {
    schiff: None,
    theta: ThetaRule::EdmOver(NEUTRON_THETA_FACTOR_E_FM * (1e2 / 1e15)),
    chromo: ChromoRule::EdmOver(0.55),
};

const HG: Conversion = Conversion {
    schiff: None,
    theta: ThetaRule::EffectiveHg(HgEquivalence::IDENTITY),
    chromo: ChromoRule::EffectiveHg(HgEquivalence::IDENTITY),
};

// Chupp2015 Table V.
const XE_AS_HG: HgEquivalence = HgEquivalence {
    multiplier: 10.0,
    divisor: 1.0,
};

const XE: Conversion = Conversion {
    schiff: None,
    theta: ThetaRule::EffectiveHg(XE_AS_HG),
    chromo: ChromoRule::EffectiveHg(XE_AS_HG),
};

// Cho1991 Table VII: S < 4e-10 e*fm^3 for d(TlF) < 2.9e-23 e*cm.
// Flambaum2020a Eq. 17 (theta) and Eq. 18, S ~ (12 d_d + 9 d_u) e*fm^2, taken as 10.
const TLF: Conversion = Conversion {
    schiff: Some(SchiffRoute::Empirical {
        ratio: 4e-10 / 2.9e-23,
    }),
    theta: ThetaRule::SchiffOver(0.027),
    chromo: ChromoRule::SchiffOver(10.0),
};

// Dzuba2002a Eq. 16 for kappa_s, Flambaum2019 Eq. 11 for S = 1.0 theta e*fm^3,
// Engel2013 Table 13 for a_1.
const RA: Conversion = Conversion {
    schiff: Some(SchiffRoute::AtomicKappa { kappa_s: 8.5e-4 }),
    theta: ThetaRule::SchiffOver(1.0),
    chromo: ChromoRule::IsovectorPion { a_1: 6.0 },
};

// Flambaum2020a Tables III and IV; Dzuba2007 Eq. 9 for the 0.6x Hg equivalence.
const YB: Conversion = Conversion {
    schiff: Some(SchiffRoute::AtomicKappa { kappa_s: 1.88e-4 }),
    theta: ThetaRule::SchiffOver(0.005),
    chromo: ChromoRule::EffectiveHg(HgEquivalence {
        multiplier: 1.0,
        divisor: 0.6,
    }),
};

/// Returns the conversion bundle of a hadronic system, or `None` for the electron.
pub fn hadronic_conversion(system: System) -> Option<&'static Conversion> {
    match system {
        System::Neutron => Some(&NEUTRON),
        System::Hg => Some(&HG),
        System::Xe => Some(&XE),
        System::TlF => Some(&TLF),
        System::Ra => Some(&RA),
        System::Yb => Some(&YB),
        System::Electron => None,
    }
}

/// Bound on chromo-EDM d_u - d_d in cm implied by a Hg-199 EDM bound in e*cm.
pub fn chromo_edm_from_hg(d_hg: f64) -> f64 {
    d_hg * HG_CHROMO_FACTOR
}
