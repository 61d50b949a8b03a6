//! Device family vocabulary
//!
//! A family groups every device that shares one communication protocol
//! implementation. Codes are `(vendor group << 16) | index` and are never
//! reused; new families are appended to their group.

use std::fmt;
use std::str::FromStr;

/// Identifies which protocol implementation a device uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// No family (returned for absent descriptors)
    Null,
    /// Suunto Solution
    SuuntoSolution,
    /// Suunto Eon and Solution Alpha/Nitrox
    SuuntoEon,
    /// Suunto Vyper and siblings (Spyder, Stinger, Cobra, ...)
    SuuntoVyper,
    /// Suunto Vyper 2, Cobra 2/3, Vyper Air, HelO2
    SuuntoVyper2,
    /// Suunto D9 series
    SuuntoD9,
    /// Suunto EON Steel
    SuuntoEonSteel,
    /// Uwatec Aladin
    UwatecAladin,
    /// Uwatec Memomouse
    UwatecMemomouse,
    /// Uwatec Smart and Galileo (infrared)
    UwatecSmart,
    /// Scubapro/Uwatec Meridian
    UwatecMeridian,
    /// Scubapro G2
    UwatecG2,
    /// Reefnet Sensus
    ReefnetSensus,
    /// Reefnet Sensus Pro
    ReefnetSensusPro,
    /// Reefnet Sensus Ultra
    ReefnetSensusUltra,
    /// Oceanic VT Pro
    OceanicVtPro,
    /// Oceanic Veo 250
    OceanicVeo250,
    /// Oceanic Atom 2.0
    OceanicAtom2,
    /// Mares Nemo
    MaresNemo,
    /// Mares Puck
    MaresPuck,
    /// Mares Darwin
    MaresDarwin,
    /// Mares Icon HD
    MaresIconHd,
    /// Heinrichs Weikamp OSTC
    HwOstc,
    /// Heinrichs Weikamp Frog
    HwFrog,
    /// Heinrichs Weikamp OSTC 3
    HwOstc3,
    /// Cressi Edy
    CressiEdy,
    /// Cressi Leonardo
    CressiLeonardo,
    /// Zeagle N2iTiON3
    ZeagleN2ition3,
    /// Atomic Aquatics Cobalt
    AtomicsCobalt,
    /// Shearwater Predator
    ShearwaterPredator,
    /// Shearwater Petrel
    ShearwaterPetrel,
    /// Dive Rite NiTek Q
    DiveriteNitekQ,
    /// Citizen Hyper Aqualand
    CitizenAqualand,
    /// DiveSystem iDive
    DivesystemIDive,
    /// Cochran Commander
    CochranCommander,
}

/// Error returned when a family code or name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownFamily {
    #[error("unknown family code: 0x{0:08X}")]
    Code(u32),
    #[error("unknown family: {0}")]
    Name(String),
}

impl Family {
    /// Every non-null family, in code order
    pub const ALL: [Family; 34] = [
        Family::SuuntoSolution,
        Family::SuuntoEon,
        Family::SuuntoVyper,
        Family::SuuntoVyper2,
        Family::SuuntoD9,
        Family::SuuntoEonSteel,
        Family::UwatecAladin,
        Family::UwatecMemomouse,
        Family::UwatecSmart,
        Family::UwatecMeridian,
        Family::UwatecG2,
        Family::ReefnetSensus,
        Family::ReefnetSensusPro,
        Family::ReefnetSensusUltra,
        Family::OceanicVtPro,
        Family::OceanicVeo250,
        Family::OceanicAtom2,
        Family::MaresNemo,
        Family::MaresPuck,
        Family::MaresDarwin,
        Family::MaresIconHd,
        Family::HwOstc,
        Family::HwFrog,
        Family::HwOstc3,
        Family::CressiEdy,
        Family::CressiLeonardo,
        Family::ZeagleN2ition3,
        Family::AtomicsCobalt,
        Family::ShearwaterPredator,
        Family::ShearwaterPetrel,
        Family::DiveriteNitekQ,
        Family::CitizenAqualand,
        Family::DivesystemIDive,
        Family::CochranCommander,
    ];

    /// Stable numeric code of this family
    pub const fn code(&self) -> u32 {
        let (group, index) = match self {
            Family::Null => (0, 0),
            Family::SuuntoSolution => (1, 0),
            Family::SuuntoEon => (1, 1),
            Family::SuuntoVyper => (1, 2),
            Family::SuuntoVyper2 => (1, 3),
            Family::SuuntoD9 => (1, 4),
            Family::SuuntoEonSteel => (1, 5),
            Family::UwatecAladin => (2, 0),
            Family::UwatecMemomouse => (2, 1),
            Family::UwatecSmart => (2, 2),
            Family::UwatecMeridian => (2, 3),
            Family::UwatecG2 => (2, 4),
            Family::ReefnetSensus => (3, 0),
            Family::ReefnetSensusPro => (3, 1),
            Family::ReefnetSensusUltra => (3, 2),
            Family::OceanicVtPro => (4, 0),
            Family::OceanicVeo250 => (4, 1),
            Family::OceanicAtom2 => (4, 2),
            Family::MaresNemo => (5, 0),
            Family::MaresPuck => (5, 1),
            Family::MaresDarwin => (5, 2),
            Family::MaresIconHd => (5, 3),
            Family::HwOstc => (6, 0),
            Family::HwFrog => (6, 1),
            Family::HwOstc3 => (6, 2),
            Family::CressiEdy => (7, 0),
            Family::CressiLeonardo => (7, 1),
            Family::ZeagleN2ition3 => (8, 0),
            Family::AtomicsCobalt => (9, 0),
            Family::ShearwaterPredator => (10, 0),
            Family::ShearwaterPetrel => (10, 1),
            Family::DiveriteNitekQ => (11, 0),
            Family::CitizenAqualand => (12, 0),
            Family::DivesystemIDive => (13, 0),
            Family::CochranCommander => (14, 0),
        };
        (group << 16) | index
    }

    /// Look up a family by its numeric code
    pub fn from_code(code: u32) -> Result<Self, UnknownFamily> {
        if code == 0 {
            return Ok(Family::Null);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.code() == code)
            .ok_or(UnknownFamily::Code(code))
    }

    /// Returns a human-readable name for the family
    pub fn name(&self) -> &'static str {
        match self {
            Family::Null => "Null",
            Family::SuuntoSolution => "Suunto Solution",
            Family::SuuntoEon => "Suunto Eon",
            Family::SuuntoVyper => "Suunto Vyper",
            Family::SuuntoVyper2 => "Suunto Vyper 2",
            Family::SuuntoD9 => "Suunto D9",
            Family::SuuntoEonSteel => "Suunto EON Steel",
            Family::UwatecAladin => "Uwatec Aladin",
            Family::UwatecMemomouse => "Uwatec Memomouse",
            Family::UwatecSmart => "Uwatec Smart",
            Family::UwatecMeridian => "Uwatec Meridian",
            Family::UwatecG2 => "Scubapro G2",
            Family::ReefnetSensus => "Reefnet Sensus",
            Family::ReefnetSensusPro => "Reefnet Sensus Pro",
            Family::ReefnetSensusUltra => "Reefnet Sensus Ultra",
            Family::OceanicVtPro => "Oceanic VT Pro",
            Family::OceanicVeo250 => "Oceanic Veo 250",
            Family::OceanicAtom2 => "Oceanic Atom 2.0",
            Family::MaresNemo => "Mares Nemo",
            Family::MaresPuck => "Mares Puck",
            Family::MaresDarwin => "Mares Darwin",
            Family::MaresIconHd => "Mares Icon HD",
            Family::HwOstc => "Heinrichs Weikamp OSTC",
            Family::HwFrog => "Heinrichs Weikamp Frog",
            Family::HwOstc3 => "Heinrichs Weikamp OSTC 3",
            Family::CressiEdy => "Cressi Edy",
            Family::CressiLeonardo => "Cressi Leonardo",
            Family::ZeagleN2ition3 => "Zeagle N2iTiON3",
            Family::AtomicsCobalt => "Atomic Aquatics Cobalt",
            Family::ShearwaterPredator => "Shearwater Predator",
            Family::ShearwaterPetrel => "Shearwater Petrel",
            Family::DiveriteNitekQ => "Dive Rite NiTek Q",
            Family::CitizenAqualand => "Citizen Hyper Aqualand",
            Family::DivesystemIDive => "DiveSystem iDive",
            Family::CochranCommander => "Cochran Commander",
        }
    }

    /// Short backend name used on the command line (e.g. `vyper`)
    ///
    /// `Null` has no backend.
    pub fn backend_name(&self) -> Option<&'static str> {
        let name = match self {
            Family::Null => return None,
            Family::SuuntoSolution => "solution",
            Family::SuuntoEon => "eon",
            Family::SuuntoVyper => "vyper",
            Family::SuuntoVyper2 => "vyper2",
            Family::SuuntoD9 => "d9",
            Family::SuuntoEonSteel => "eonsteel",
            Family::UwatecAladin => "aladin",
            Family::UwatecMemomouse => "memomouse",
            Family::UwatecSmart => "smart",
            Family::UwatecMeridian => "meridian",
            Family::UwatecG2 => "g2",
            Family::ReefnetSensus => "sensus",
            Family::ReefnetSensusPro => "sensuspro",
            Family::ReefnetSensusUltra => "sensusultra",
            Family::OceanicVtPro => "vtpro",
            Family::OceanicVeo250 => "veo250",
            Family::OceanicAtom2 => "atom2",
            Family::MaresNemo => "nemo",
            Family::MaresPuck => "puck",
            Family::MaresDarwin => "darwin",
            Family::MaresIconHd => "iconhd",
            Family::HwOstc => "ostc",
            Family::HwFrog => "frog",
            Family::HwOstc3 => "ostc3",
            Family::CressiEdy => "edy",
            Family::CressiLeonardo => "leonardo",
            Family::ZeagleN2ition3 => "n2ition3",
            Family::AtomicsCobalt => "cobalt",
            Family::ShearwaterPredator => "predator",
            Family::ShearwaterPetrel => "petrel",
            Family::DiveriteNitekQ => "nitekq",
            Family::CitizenAqualand => "aqualand",
            Family::DivesystemIDive => "idive",
            Family::CochranCommander => "commander",
        };
        Some(name)
    }

    /// Returns true for the null family
    pub fn is_null(&self) -> bool {
        matches!(self, Family::Null)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Family {
    type Error = UnknownFamily;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Family::from_code(code)
    }
}

impl From<Family> for u32 {
    fn from(family: Family) -> Self {
        family.code()
    }
}

/// Parses a backend name (`vyper`) or a full family name (`Suunto Vyper`),
/// ignoring case
impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| {
                f.backend_name()
                    .is_some_and(|b| b.eq_ignore_ascii_case(wanted))
                    || f.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownFamily::Name(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_grouped_by_vendor() {
        assert_eq!(Family::Null.code(), 0);
        assert_eq!(Family::SuuntoSolution.code(), 0x0001_0000);
        assert_eq!(Family::SuuntoEonSteel.code(), 0x0001_0005);
        assert_eq!(Family::UwatecG2.code(), 0x0002_0004);
        assert_eq!(Family::CochranCommander.code(), 0x000E_0000);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<u32> = Family::ALL.iter().map(|f| f.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Family::ALL.len());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Family::from_code(0x0001_0002), Ok(Family::SuuntoVyper));
        assert_eq!(Family::try_from(0), Ok(Family::Null));
        assert_eq!(
            Family::from_code(0x0001_0099),
            Err(UnknownFamily::Code(0x0001_0099))
        );
    }

    #[test]
    fn test_parse_backend_and_full_names() {
        assert_eq!("vyper".parse::<Family>(), Ok(Family::SuuntoVyper));
        assert_eq!("EONSTEEL".parse::<Family>(), Ok(Family::SuuntoEonSteel));
        assert_eq!("Scubapro G2".parse::<Family>(), Ok(Family::UwatecG2));
        assert!("null".parse::<Family>().is_err());
        assert!("".parse::<Family>().is_err());
    }

    #[test]
    fn test_null_has_no_backend() {
        assert!(Family::Null.is_null());
        assert_eq!(Family::Null.backend_name(), None);
        assert!(Family::ALL.iter().all(|f| f.backend_name().is_some()));
    }
}
