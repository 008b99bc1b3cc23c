//! This module defines the closed set of measured EDM systems.
//!
//! Each system tag identifies the experiment class that produced a limit and selects the
//! conversion coefficients applied to it. The string form of a tag matches the file stem
//! used for its measurement table.

use crate::error::EdmError;
use std::fmt;
use std::str::FromStr;

/// A measured system that reports a permanent electric dipole moment limit.
///
/// The six hadronic systems constrain theta_QCD and quark chromo-EDMs; the electron
/// constrains new-particle masses directly through loop-level estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum System {
    /// The free neutron.
    Neutron,
    /// The diamagnetic atom mercury-199.
    Hg,
    /// The diamagnetic atom xenon-129.
    Xe,
    /// The thallium fluoride molecule.
    TlF,
    /// The octupole-deformed atom radium-225.
    Ra,
    /// The diamagnetic atom ytterbium-171.
    Yb,
    /// The electron, measured in paramagnetic atoms and molecules.
    Electron,
}

impl System {
    /// All hadronic systems, in the order their tables are conventionally listed.
    pub const HADRONIC: [System; 6] = [
        System::Neutron,
        System::Hg,
        System::Xe,
        System::TlF,
        System::Ra,
        System::Yb,
    ];

    /// Returns the tag used for this system in data files and reports.
    pub const fn tag(self) -> &'static str {
        match self {
            System::Neutron => "neutron",
            System::Hg => "Hg",
            System::Xe => "Xe",
            System::TlF => "TlF",
            System::Ra => "Ra",
            System::Yb => "Yb",
            System::Electron => "electron",
        }
    }

    /// Returns `true` for systems with a theta_QCD and chromo-EDM channel.
    pub const fn is_hadronic(self) -> bool {
        !matches!(self, System::Electron)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for System {
    type Err = EdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutron" => Ok(System::Neutron),
            "Hg" => Ok(System::Hg),
            "Xe" => Ok(System::Xe),
            "TlF" => Ok(System::TlF),
            "Ra" => Ok(System::Ra),
            "Yb" => Ok(System::Yb),
            "electron" => Ok(System::Electron),
            _ => Err(EdmError::UnknownSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_through_from_str() {
        for system in System::HADRONIC.into_iter().chain([System::Electron]) {
            assert_eq!(system.tag().parse::<System>().unwrap(), system);
            assert_eq!(system.to_string(), system.tag());
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let result = "hg".parse::<System>();
        assert!(matches!(result, Err(EdmError::UnknownSystem(ref s)) if s == "hg"));
    }

    #[test]
    fn test_only_electron_is_not_hadronic() {
        assert!(System::HADRONIC.iter().all(|s| s.is_hadronic()));
        assert!(!System::Electron.is_hadronic());
    }
}
