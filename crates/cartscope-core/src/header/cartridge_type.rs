use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;

use super::table::{UNKNOWN, lookup};

static CARTRIDGE_TYPES: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0x00, "ROM ONLY"),
        (0x01, "MBC1"),
        (0x02, "MBC1+RAM"),
        (0x03, "MBC1+RAM+BATTERY"),
        (0x05, "MBC2"),
        (0x06, "MBC2+BATTERY"),
        (0x08, "ROM+RAM"),
        (0x09, "ROM+RAM+BATTERY"),
        (0x0B, "MMM01"),
        (0x0C, "MMM01+RAM"),
        (0x0D, "MMM01+RAM+BATTERY"),
        (0x0F, "MBC3+TIMER+BATTERY"),
        (0x10, "MBC3+TIMER+RAM+BATTERY"),
        (0x11, "MBC3"),
        (0x12, "MBC3+RAM"),
        (0x13, "MBC3+RAM+BATTERY"),
        (0x19, "MBC5"),
        (0x1A, "MBC5+RAM"),
        (0x1B, "MBC5+RAM+BATTERY"),
        (0x1C, "MBC5+RUMBLE"),
        (0x1D, "MBC5+RUMBLE+RAM"),
        (0x1E, "MBC5+RUMBLE+RAM+BATTERY"),
        (0x20, "MBC6"),
        (0x22, "MBC7+SENSOR+RUMBLE+RAM+BATTERY"),
        (0xFC, "POCKET CAMERA"),
        (0xFD, "BANDAI TAMA5"),
        (0xFE, "HuC3"),
        (0xFF, "HuC1+RAM+BATTERY"),
    ])
});

/// Memory controller and extra hardware declared at 0147.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartridgeType(pub u8);

impl CartridgeType {
    /// Table label, `None` for codes the table does not know.
    pub fn name(self) -> Option<&'static str> {
        lookup(&CARTRIDGE_TYPES, "cartridge type", &self.0)
    }
}

impl fmt::Display for CartridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{UNKNOWN} (0x{:02x})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(CartridgeType(0x00).to_string(), "ROM ONLY");
        assert_eq!(CartridgeType(0x13).to_string(), "MBC3+RAM+BATTERY");
        assert_eq!(CartridgeType(0xFF).name(), Some("HuC1+RAM+BATTERY"));
    }

    #[test]
    fn gaps_in_the_table_fall_back_to_unknown() {
        assert_eq!(CartridgeType(0x04).name(), None);
        assert_eq!(CartridgeType(0x04).to_string(), "Unknown (0x04)");
    }
}
