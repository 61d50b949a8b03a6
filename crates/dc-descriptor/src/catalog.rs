//! The compiled-in device catalog
//!
//! Model numbers are the numbers reported by the devices themselves. Where a
//! device reports none, an artificial number starting at zero is assigned,
//! and models that aren't told apart share the same number.
//!
//! Rows needing a USB, USB-HID or infrared backend are only present when the
//! build has that backend (see [`crate::capabilities`]). The catalog is only
//! reachable through [`crate::DescriptorIterator`].

use tracing::trace;

use crate::descriptor::Descriptor;
use crate::error::DcError;
use crate::family::Family as F;
use crate::iterator::{BoxedIterator, DcIterator};

static CATALOG: &[Descriptor] = &[
    // Suunto Solution
    Descriptor::new("Suunto", "Solution", F::SuuntoSolution, 0),
    // Suunto Eon
    Descriptor::new("Suunto", "Eon", F::SuuntoEon, 0),
    Descriptor::new("Suunto", "Solution Alpha", F::SuuntoEon, 0),
    Descriptor::new("Suunto", "Solution Nitrox", F::SuuntoEon, 0),
    // Suunto Vyper
    Descriptor::new("Suunto", "Spyder", F::SuuntoVyper, 0x01),
    Descriptor::new("Suunto", "Stinger", F::SuuntoVyper, 0x03),
    Descriptor::new("Suunto", "Mosquito", F::SuuntoVyper, 0x04),
    Descriptor::new("Suunto", "D3", F::SuuntoVyper, 0x05),
    Descriptor::new("Suunto", "Vyper", F::SuuntoVyper, 0x0A),
    Descriptor::new("Suunto", "Vytec", F::SuuntoVyper, 0x0B),
    Descriptor::new("Suunto", "Cobra", F::SuuntoVyper, 0x0C),
    Descriptor::new("Suunto", "Gekko", F::SuuntoVyper, 0x0D),
    Descriptor::new("Suunto", "Zoop", F::SuuntoVyper, 0x16),
    // Suunto Vyper 2
    Descriptor::new("Suunto", "Vyper 2", F::SuuntoVyper2, 0x10),
    Descriptor::new("Suunto", "Cobra 2", F::SuuntoVyper2, 0x11),
    Descriptor::new("Suunto", "Vyper Air", F::SuuntoVyper2, 0x13),
    Descriptor::new("Suunto", "Cobra 3", F::SuuntoVyper2, 0x14),
    Descriptor::new("Suunto", "HelO2", F::SuuntoVyper2, 0x15),
    // Suunto D9
    Descriptor::new("Suunto", "D9", F::SuuntoD9, 0x0E),
    Descriptor::new("Suunto", "D6", F::SuuntoD9, 0x0F),
    Descriptor::new("Suunto", "D4", F::SuuntoD9, 0x12),
    Descriptor::new("Suunto", "D4i", F::SuuntoD9, 0x19),
    Descriptor::new("Suunto", "D6i", F::SuuntoD9, 0x1A),
    Descriptor::new("Suunto", "D9tx", F::SuuntoD9, 0x1B),
    Descriptor::new("Suunto", "DX", F::SuuntoD9, 0x1C),
    Descriptor::new("Suunto", "Vyper Novo", F::SuuntoD9, 0x1D),
    Descriptor::new("Suunto", "Zoop Novo", F::SuuntoD9, 0x1E),
    // Suunto EON Steel
    #[cfg(dc_usbhid)]
    Descriptor::new("Suunto", "EON Steel", F::SuuntoEonSteel, 0),
    // Uwatec Aladin
    Descriptor::new("Uwatec", "Aladin Air Twin", F::UwatecAladin, 0x1C),
    Descriptor::new("Uwatec", "Aladin Sport Plus", F::UwatecAladin, 0x3E),
    Descriptor::new("Uwatec", "Aladin Pro", F::UwatecAladin, 0x3F),
    Descriptor::new("Uwatec", "Aladin Air Z", F::UwatecAladin, 0x44),
    Descriptor::new("Uwatec", "Aladin Air Z O2", F::UwatecAladin, 0xA4),
    Descriptor::new("Uwatec", "Aladin Air Z Nitrox", F::UwatecAladin, 0xF4),
    Descriptor::new("Uwatec", "Aladin Pro Ultra", F::UwatecAladin, 0xFF),
    // Uwatec Memomouse
    Descriptor::new("Uwatec", "Memomouse", F::UwatecMemomouse, 0),
    // Uwatec Smart
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Smart Pro", F::UwatecSmart, 0x10),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Galileo Sol", F::UwatecSmart, 0x11),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Galileo Luna", F::UwatecSmart, 0x11),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Galileo Terra", F::UwatecSmart, 0x11),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Aladin Tec", F::UwatecSmart, 0x12),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Aladin Prime", F::UwatecSmart, 0x12),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Aladin Tec 2G", F::UwatecSmart, 0x13),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Aladin 2G", F::UwatecSmart, 0x13),
    #[cfg(dc_irda)]
    Descriptor::new("Subgear", "XP-10", F::UwatecSmart, 0x13),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Smart Com", F::UwatecSmart, 0x14),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Aladin 2G", F::UwatecSmart, 0x15),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Aladin Tec 3G", F::UwatecSmart, 0x15),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Aladin Sport", F::UwatecSmart, 0x15),
    #[cfg(dc_irda)]
    Descriptor::new("Subgear", "XP-3G", F::UwatecSmart, 0x15),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Smart Tec", F::UwatecSmart, 0x18),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Galileo Trimix", F::UwatecSmart, 0x19),
    #[cfg(dc_irda)]
    Descriptor::new("Uwatec", "Smart Z", F::UwatecSmart, 0x1C),
    #[cfg(dc_irda)]
    Descriptor::new("Subgear", "XP Air", F::UwatecSmart, 0x1C),
    // Scubapro/Uwatec Meridian
    Descriptor::new("Scubapro", "Meridian", F::UwatecMeridian, 0x20),
    Descriptor::new("Scubapro", "Mantis", F::UwatecMeridian, 0x20),
    Descriptor::new("Scubapro", "Chromis", F::UwatecMeridian, 0x24),
    Descriptor::new("Scubapro", "Mantis 2", F::UwatecMeridian, 0x26),
    // Scubapro G2
    #[cfg(dc_usbhid)]
    Descriptor::new("Scubapro", "G2", F::UwatecG2, 0x32),
    // Reefnet
    Descriptor::new("Reefnet", "Sensus", F::ReefnetSensus, 1),
    Descriptor::new("Reefnet", "Sensus Pro", F::ReefnetSensusPro, 2),
    Descriptor::new("Reefnet", "Sensus Ultra", F::ReefnetSensusUltra, 3),
    // Oceanic VT Pro
    Descriptor::new("Aeris", "500 AI", F::OceanicVtPro, 0x4151),
    Descriptor::new("Oceanic", "Versa Pro", F::OceanicVtPro, 0x4155),
    Descriptor::new("Aeris", "Atmos 2", F::OceanicVtPro, 0x4158),
    Descriptor::new("Oceanic", "Pro Plus 2", F::OceanicVtPro, 0x4159),
    Descriptor::new("Aeris", "Atmos AI", F::OceanicVtPro, 0x4244),
    Descriptor::new("Oceanic", "VT Pro", F::OceanicVtPro, 0x4245),
    Descriptor::new("Sherwood", "Wisdom", F::OceanicVtPro, 0x4246),
    Descriptor::new("Aeris", "Elite", F::OceanicVtPro, 0x424F),
    // Oceanic Veo 250
    Descriptor::new("Genesis", "React Pro", F::OceanicVeo250, 0x4247),
    Descriptor::new("Oceanic", "Veo 200", F::OceanicVeo250, 0x424B),
    Descriptor::new("Oceanic", "Veo 250", F::OceanicVeo250, 0x424C),
    Descriptor::new("Seemann", "XP5", F::OceanicVeo250, 0x4251),
    Descriptor::new("Oceanic", "Veo 180", F::OceanicVeo250, 0x4252),
    Descriptor::new("Aeris", "XR-2", F::OceanicVeo250, 0x4255),
    Descriptor::new("Sherwood", "Insight", F::OceanicVeo250, 0x425A),
    Descriptor::new("Hollis", "DG02", F::OceanicVeo250, 0x4352),
    // Oceanic Atom 2.0
    Descriptor::new("Oceanic", "Atom 1.0", F::OceanicAtom2, 0x4250),
    Descriptor::new("Aeris", "Epic", F::OceanicAtom2, 0x4257),
    Descriptor::new("Oceanic", "VT3", F::OceanicAtom2, 0x4258),
    Descriptor::new("Aeris", "Elite T3", F::OceanicAtom2, 0x4259),
    Descriptor::new("Oceanic", "Atom 2.0", F::OceanicAtom2, 0x4342),
    Descriptor::new("Oceanic", "Geo", F::OceanicAtom2, 0x4344),
    Descriptor::new("Aeris", "Manta", F::OceanicAtom2, 0x4345),
    Descriptor::new("Aeris", "XR-1 NX", F::OceanicAtom2, 0x4346),
    Descriptor::new("Oceanic", "Datamask", F::OceanicAtom2, 0x4347),
    Descriptor::new("Aeris", "Compumask", F::OceanicAtom2, 0x4348),
    Descriptor::new("Aeris", "F10", F::OceanicAtom2, 0x434D),
    Descriptor::new("Oceanic", "OC1", F::OceanicAtom2, 0x434E),
    Descriptor::new("Sherwood", "Wisdom 2", F::OceanicAtom2, 0x4350),
    Descriptor::new("Sherwood", "Insight 2", F::OceanicAtom2, 0x4353),
    Descriptor::new("Genesis", "React Pro White", F::OceanicAtom2, 0x4354),
    Descriptor::new("Tusa", "Element II (IQ-750)", F::OceanicAtom2, 0x4357),
    Descriptor::new("Oceanic", "Veo 1.0", F::OceanicAtom2, 0x4358),
    Descriptor::new("Oceanic", "Veo 2.0", F::OceanicAtom2, 0x4359),
    Descriptor::new("Oceanic", "Veo 3.0", F::OceanicAtom2, 0x435A),
    Descriptor::new("Tusa", "Zen (IQ-900)", F::OceanicAtom2, 0x4441),
    Descriptor::new("Tusa", "Zen Air (IQ-950)", F::OceanicAtom2, 0x4442),
    Descriptor::new("Aeris", "Atmos AI 2", F::OceanicAtom2, 0x4443),
    Descriptor::new("Oceanic", "Pro Plus 2.1", F::OceanicAtom2, 0x4444),
    Descriptor::new("Oceanic", "Geo 2.0", F::OceanicAtom2, 0x4446),
    Descriptor::new("Oceanic", "VT4", F::OceanicAtom2, 0x4447),
    Descriptor::new("Oceanic", "OC1", F::OceanicAtom2, 0x4449),
    Descriptor::new("Beuchat", "Voyager 2G", F::OceanicAtom2, 0x444B),
    Descriptor::new("Oceanic", "Atom 3.0", F::OceanicAtom2, 0x444C),
    Descriptor::new("Hollis", "DG03", F::OceanicAtom2, 0x444D),
    Descriptor::new("Oceanic", "OCS", F::OceanicAtom2, 0x4450),
    Descriptor::new("Oceanic", "OC1", F::OceanicAtom2, 0x4451),
    Descriptor::new("Oceanic", "VT 4.1", F::OceanicAtom2, 0x4452),
    Descriptor::new("Aeris", "Epic", F::OceanicAtom2, 0x4453),
    Descriptor::new("Aeris", "Elite T3", F::OceanicAtom2, 0x4455),
    Descriptor::new("Oceanic", "Atom 3.1", F::OceanicAtom2, 0x4456),
    Descriptor::new("Aeris", "A300 AI", F::OceanicAtom2, 0x4457),
    Descriptor::new("Sherwood", "Wisdom 3", F::OceanicAtom2, 0x4458),
    Descriptor::new("Aeris", "A300", F::OceanicAtom2, 0x445A),
    Descriptor::new("Hollis", "TX1", F::OceanicAtom2, 0x4542),
    Descriptor::new("Beuchat", "Mundial 2", F::OceanicAtom2, 0x4543),
    Descriptor::new("Sherwood", "Amphos", F::OceanicAtom2, 0x4545),
    Descriptor::new("Sherwood", "Amphos Air", F::OceanicAtom2, 0x4546),
    Descriptor::new("Oceanic", "Pro Plus 3", F::OceanicAtom2, 0x4548),
    Descriptor::new("Aeris", "F11", F::OceanicAtom2, 0x4549),
    Descriptor::new("Oceanic", "OCi", F::OceanicAtom2, 0x454B),
    Descriptor::new("Aeris", "A300CS", F::OceanicAtom2, 0x454C),
    Descriptor::new("Beuchat", "Mundial 3", F::OceanicAtom2, 0x4550),
    Descriptor::new("Oceanic", "F10", F::OceanicAtom2, 0x4553),
    Descriptor::new("Oceanic", "F11", F::OceanicAtom2, 0x4554),
    Descriptor::new("Subgear", "XP-Air", F::OceanicAtom2, 0x4555),
    Descriptor::new("Sherwood", "Vision", F::OceanicAtom2, 0x4556),
    Descriptor::new("Oceanic", "VTX", F::OceanicAtom2, 0x4557),
    Descriptor::new("Aqualung", "i300", F::OceanicAtom2, 0x4559),
    Descriptor::new("Aqualung", "i750TC", F::OceanicAtom2, 0x455A),
    Descriptor::new("Aqualung", "i450T", F::OceanicAtom2, 0x4641),
    Descriptor::new("Aqualung", "i550", F::OceanicAtom2, 0x4642),
    // Mares Nemo
    Descriptor::new("Mares", "Nemo", F::MaresNemo, 0),
    Descriptor::new("Mares", "Nemo Steel", F::MaresNemo, 0),
    Descriptor::new("Mares", "Nemo Titanium", F::MaresNemo, 0),
    Descriptor::new("Mares", "Nemo Excel", F::MaresNemo, 17),
    Descriptor::new("Mares", "Nemo Apneist", F::MaresNemo, 18),
    // Mares Puck
    Descriptor::new("Mares", "Puck", F::MaresPuck, 7),
    Descriptor::new("Mares", "Puck Air", F::MaresPuck, 19),
    Descriptor::new("Mares", "Nemo Air", F::MaresPuck, 4),
    Descriptor::new("Mares", "Nemo Wide", F::MaresPuck, 1),
    // Mares Darwin
    Descriptor::new("Mares", "Darwin", F::MaresDarwin, 0),
    Descriptor::new("Mares", "M1", F::MaresDarwin, 0),
    Descriptor::new("Mares", "M2", F::MaresDarwin, 0),
    Descriptor::new("Mares", "Darwin Air", F::MaresDarwin, 1),
    Descriptor::new("Mares", "Airlab", F::MaresDarwin, 1),
    // Mares Icon HD
    Descriptor::new("Mares", "Matrix", F::MaresIconHd, 0x0F),
    Descriptor::new("Mares", "Smart", F::MaresIconHd, 0x00_0010),
    Descriptor::new("Mares", "Smart Apnea", F::MaresIconHd, 0x01_0010),
    Descriptor::new("Mares", "Icon HD", F::MaresIconHd, 0x14),
    Descriptor::new("Mares", "Icon HD Net Ready", F::MaresIconHd, 0x15),
    Descriptor::new("Mares", "Puck Pro", F::MaresIconHd, 0x18),
    Descriptor::new("Mares", "Nemo Wide 2", F::MaresIconHd, 0x19),
    Descriptor::new("Mares", "Puck 2", F::MaresIconHd, 0x1F),
    Descriptor::new("Mares", "Quad", F::MaresIconHd, 0x29),
    // Heinrichs Weikamp
    Descriptor::new("Heinrichs Weikamp", "OSTC", F::HwOstc, 0),
    Descriptor::new("Heinrichs Weikamp", "OSTC Mk2", F::HwOstc, 1),
    Descriptor::new("Heinrichs Weikamp", "OSTC 2N", F::HwOstc, 2),
    Descriptor::new("Heinrichs Weikamp", "OSTC 2C", F::HwOstc, 3),
    Descriptor::new("Heinrichs Weikamp", "Frog", F::HwFrog, 0),
    Descriptor::new("Heinrichs Weikamp", "OSTC 2", F::HwOstc3, 0x11),
    Descriptor::new("Heinrichs Weikamp", "OSTC 2", F::HwOstc3, 0x13),
    Descriptor::new("Heinrichs Weikamp", "OSTC 2", F::HwOstc3, 0x1B),
    Descriptor::new("Heinrichs Weikamp", "OSTC 3", F::HwOstc3, 0x0A),
    Descriptor::new("Heinrichs Weikamp", "OSTC 3+", F::HwOstc3, 0x13),
    Descriptor::new("Heinrichs Weikamp", "OSTC 3+", F::HwOstc3, 0x1A),
    Descriptor::new("Heinrichs Weikamp", "OSTC 4", F::HwOstc3, 0x3B),
    Descriptor::new("Heinrichs Weikamp", "OSTC cR", F::HwOstc3, 0x05),
    Descriptor::new("Heinrichs Weikamp", "OSTC cR", F::HwOstc3, 0x07),
    Descriptor::new("Heinrichs Weikamp", "OSTC Sport", F::HwOstc3, 0x12),
    Descriptor::new("Heinrichs Weikamp", "OSTC Sport", F::HwOstc3, 0x13),
    // Cressi Edy
    Descriptor::new("Tusa", "IQ-700", F::CressiEdy, 0x05),
    Descriptor::new("Cressi", "Edy", F::CressiEdy, 0x08),
    // Cressi Leonardo
    Descriptor::new("Cressi", "Leonardo", F::CressiLeonardo, 1),
    Descriptor::new("Cressi", "Giotto", F::CressiLeonardo, 4),
    Descriptor::new("Cressi", "Newton", F::CressiLeonardo, 5),
    Descriptor::new("Cressi", "Drake", F::CressiLeonardo, 6),
    // Zeagle N2iTiON3
    Descriptor::new("Zeagle", "N2iTiON3", F::ZeagleN2ition3, 0),
    Descriptor::new("Apeks", "Quantum X", F::ZeagleN2ition3, 0),
    Descriptor::new("Dive Rite", "NiTek Trio", F::ZeagleN2ition3, 0),
    Descriptor::new("Scubapro", "XTender 5", F::ZeagleN2ition3, 0),
    // Atomic Aquatics Cobalt
    #[cfg(dc_usb)]
    Descriptor::new("Atomic Aquatics", "Cobalt", F::AtomicsCobalt, 0),
    #[cfg(dc_usb)]
    Descriptor::new("Atomic Aquatics", "Cobalt 2", F::AtomicsCobalt, 2),
    // Shearwater Predator
    Descriptor::new("Shearwater", "Predator", F::ShearwaterPredator, 2),
    // Shearwater Petrel family
    Descriptor::new("Shearwater", "Petrel", F::ShearwaterPetrel, 3),
    Descriptor::new("Shearwater", "Petrel 2", F::ShearwaterPetrel, 4),
    Descriptor::new("Shearwater", "Nerd", F::ShearwaterPetrel, 5),
    Descriptor::new("Shearwater", "Perdix", F::ShearwaterPetrel, 6),
    Descriptor::new("Shearwater", "Perdix AI", F::ShearwaterPetrel, 7),
    // Dive Rite NiTek Q
    Descriptor::new("Dive Rite", "NiTek Q", F::DiveriteNitekQ, 0),
    // Citizen Hyper Aqualand
    Descriptor::new("Citizen", "Hyper Aqualand", F::CitizenAqualand, 0),
    // DiveSystem iDive
    Descriptor::new("DiveSystem", "Orca", F::DivesystemIDive, 0x02),
    Descriptor::new("DiveSystem", "iDive Pro", F::DivesystemIDive, 0x03),
    Descriptor::new("DiveSystem", "iDive DAN", F::DivesystemIDive, 0x04),
    Descriptor::new("DiveSystem", "iDive Tech", F::DivesystemIDive, 0x05),
    Descriptor::new("DiveSystem", "iDive Reb", F::DivesystemIDive, 0x06),
    Descriptor::new("DiveSystem", "iDive Stealth", F::DivesystemIDive, 0x07),
    Descriptor::new("DiveSystem", "iDive Free", F::DivesystemIDive, 0x08),
    Descriptor::new("DiveSystem", "iDive Easy", F::DivesystemIDive, 0x09),
    Descriptor::new("DiveSystem", "iDive X3M", F::DivesystemIDive, 0x0A),
    Descriptor::new("DiveSystem", "iDive Deep", F::DivesystemIDive, 0x0B),
    Descriptor::new("DiveSystem", "iX3M Easy", F::DivesystemIDive, 0x22),
    Descriptor::new("DiveSystem", "iX3M Deep", F::DivesystemIDive, 0x23),
    Descriptor::new("DiveSystem", "iX3M Tech+", F::DivesystemIDive, 0x24),
    Descriptor::new("DiveSystem", "iX3M Reb", F::DivesystemIDive, 0x25),
    Descriptor::new("DiveSystem", "iX3M Pro Easy", F::DivesystemIDive, 0x32),
    Descriptor::new("DiveSystem", "iX3M Pro Deep", F::DivesystemIDive, 0x34),
    Descriptor::new("DiveSystem", "iX3M Pro Tech+", F::DivesystemIDive, 0x35),
    Descriptor::new("DiveSystem", "iDive2 Free", F::DivesystemIDive, 0x40),
    Descriptor::new("DiveSystem", "iDive2 Easy", F::DivesystemIDive, 0x42),
    Descriptor::new("DiveSystem", "iDive2 Deep", F::DivesystemIDive, 0x44),
    Descriptor::new("DiveSystem", "iDive2 Tech+", F::DivesystemIDive, 0x45),
    // Cochran Commander
    Descriptor::new("Cochran", "Commander I", F::CochranCommander, 0),
    Descriptor::new("Cochran", "Commander II", F::CochranCommander, 1),
    Descriptor::new("Cochran", "EMC-14", F::CochranCommander, 2),
    Descriptor::new("Cochran", "EMC-16", F::CochranCommander, 3),
    Descriptor::new("Cochran", "EMC-20H", F::CochranCommander, 4),
];

/// Cursor over the device catalog
///
/// Yields `&'static` references into the catalog in insertion order. Each
/// cursor is independent; create a new one to enumerate again.
#[derive(Debug, Clone)]
pub struct DescriptorIterator {
    current: usize,
    done: bool,
}

impl DescriptorIterator {
    /// Create a cursor positioned before the first entry
    pub fn new() -> Self {
        trace!("Creating descriptor cursor over {} entries", CATALOG.len());
        Self {
            current: 0,
            done: false,
        }
    }
}

impl Default for DescriptorIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl DcIterator for DescriptorIterator {
    type Item = &'static Descriptor;

    fn advance(&mut self) -> Result<Option<Self::Item>, DcError> {
        match CATALOG.get(self.current) {
            Some(descriptor) => {
                self.current += 1;
                Ok(Some(descriptor))
            }
            None => {
                if !self.done {
                    trace!("Descriptor cursor done after {} entries", self.current);
                    self.done = true;
                }
                Ok(None)
            }
        }
    }
}

/// Create a descriptor cursor into `out`
///
/// Fails with [`DcError::InvalidArgs`] when no output slot is given, in which
/// case nothing is allocated.
pub fn descriptor_iterator(
    out: Option<&mut Option<BoxedIterator<&'static Descriptor>>>,
) -> Result<(), DcError> {
    let slot = out.ok_or(DcError::InvalidArgs)?;
    *slot = Some(Box::new(DescriptorIterator::new()));
    Ok(())
}

/// All descriptors of this build, in catalog order
pub fn descriptors() -> impl Iterator<Item = &'static Descriptor> {
    // The catalog cursor never fails
    DescriptorIterator::new().items().filter_map(Result::ok)
}
