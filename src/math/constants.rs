//! This module defines the physical constants and unit factors used throughout the edmlimits library.
//!
//! The SI constants stand in for an external constants service and follow CODATA 2018. The
//! length and energy factors are the fixed conversions between e*cm, e*fm, and natural units.

/// Reduced Planck constant in J*s.
pub const HBAR: f64 = 1.054_571_817e-34;

/// Elementary charge in C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Vacuum electric permittivity in F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Bohr radius in m.
pub const BOHR_RADIUS: f64 = 5.291_772_109_03e-11;

/// One femtometre in metres.
pub const FEMTOMETRE: f64 = 1e-15;

/// Conversion factor from centimetres to femtometres.
///
/// Written as `1e15 / 1e2` so the product with an e*cm value matches the conventional
/// two-step conversion bit for bit.
pub const CM_TO_FM: f64 = 1e15 / 1e2;

/// The product hbar*c in MeV*fm, rounded as in the natural-unit conversions.
///
/// A length of `x` fm corresponds to `x / 197` inverse MeV.
pub const HBAR_C_MEV_FM: f64 = 197.0;

/// Conversion factor from MeV to TeV, written as MeV to eV followed by eV to TeV.
pub const MEV_TO_TEV: f64 = (1.0 / 1e-6) * (1e-12 / 1.0);

/// Fine structure constant, in the rounded form used by the one-loop mass estimate.
pub const FINE_STRUCTURE: f64 = 1.0 / 137.0;
