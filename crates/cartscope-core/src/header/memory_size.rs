use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;

use super::table::{UNKNOWN, lookup};

const KIB: u64 = 1024;
const ROM_BANK: u64 = 16 * KIB;

static ROM_SIZES: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0x00, "32 KiB (2 banks, no banking)"),
        (0x01, "64 KiB (4 banks)"),
        (0x02, "128 KiB (8 banks)"),
        (0x03, "256 KiB (16 banks)"),
        (0x04, "512 KiB (32 banks)"),
        (0x05, "1 MiB (64 banks)"),
        (0x06, "2 MiB (128 banks)"),
        (0x07, "4 MiB (256 banks)"),
        (0x08, "8 MiB (512 banks)"),
        (0x52, "1.1 MiB (72 banks)"),
        (0x53, "1.2 MiB (80 banks)"),
        (0x54, "1.5 MiB (96 banks)"),
    ])
});

static RAM_SIZES: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0x00, "0 (no RAM)"),
        (0x01, "- (unused)"),
        (0x02, "8 KiB (1 bank)"),
        (0x03, "32 KiB (4 banks of 8 KiB each)"),
        (0x04, "128 KiB (16 banks of 8 KiB each)"),
        (0x05, "64 KiB (8 banks of 8 KiB each)"),
    ])
});

/// ROM size code at 0148.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RomSize(pub u8);

impl RomSize {
    pub fn name(self) -> Option<&'static str> {
        lookup(&ROM_SIZES, "rom size", &self.0)
    }

    /// Declared ROM capacity in bytes.
    pub fn bytes(self) -> Option<u64> {
        match self.0 {
            code @ 0x00..=0x08 => Some((32 * KIB) << code),
            0x52 => Some(72 * ROM_BANK),
            0x53 => Some(80 * ROM_BANK),
            0x54 => Some(96 * ROM_BANK),
            _ => None,
        }
    }
}

impl fmt::Display for RomSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{UNKNOWN} (0x{:02x})", self.0),
        }
    }
}

/// External RAM size code at 0149.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RamSize(pub u8);

impl RamSize {
    pub fn name(self) -> Option<&'static str> {
        lookup(&RAM_SIZES, "ram size", &self.0)
    }

    /// Declared external RAM capacity in bytes. Code 0x01 is unused and reports 0.
    pub fn bytes(self) -> Option<u64> {
        match self.0 {
            0x00 | 0x01 => Some(0),
            0x02 => Some(8 * KIB),
            0x03 => Some(32 * KIB),
            0x04 => Some(128 * KIB),
            0x05 => Some(64 * KIB),
            _ => None,
        }
    }
}

impl fmt::Display for RamSize {
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
    fn rom_size_doubles_per_code() {
        assert_eq!(RomSize(0x00).bytes(), Some(32 * 1024));
        assert_eq!(RomSize(0x05).bytes(), Some(1024 * 1024));
        assert_eq!(RomSize(0x08).bytes(), Some(8 * 1024 * 1024));
        assert_eq!(RomSize(0x52).bytes(), Some(72 * 16 * 1024));
        assert_eq!(RomSize(0x09).bytes(), None);
    }

    #[test]
    fn rom_size_reports_description() {
        assert_eq!(RomSize(0x00).to_string(), "32 KiB (2 banks, no banking)");
        assert_eq!(RomSize(0x60).to_string(), "Unknown (0x60)");
    }

    #[test]
    fn ram_size_lookup() {
        assert_eq!(RamSize(0x03).to_string(), "32 KiB (4 banks of 8 KiB each)");
        assert_eq!(RamSize(0x05).bytes(), Some(64 * 1024));
        assert_eq!(RamSize(0x06).name(), None);
        assert_eq!(RamSize(0x06).bytes(), None);
    }
}
