//! Printable summaries of a decoded header.

use std::fmt;

use crate::header::Header;

/// Column the values start at, labels included.
const LABEL_WIDTH: usize = 25;

/// `0x` followed by `value` in lowercase hex, zero padded to `width` digits.
pub fn hexpad(value: impl Into<u64>, width: usize) -> String {
    format!("0x{:0width$x}", value.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Pass,
    Fail,
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        })
    }
}

/// Every header field rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderReport {
    pub logo: Verdict,
    pub title: String,
    pub manufacturer_code: String,
    pub cgb_flag: String,
    pub publisher: String,
    pub sgb_flag: String,
    pub cartridge_type: String,
    pub rom_size: String,
    pub ram_size: String,
    pub destination: String,
    pub mask_rom_version: String,
    pub header_checksum: Verdict,
    pub global_checksum: Verdict,
}

impl HeaderReport {
    pub fn new(header: &Header<'_>) -> Self {
        Self {
            logo: header.verify_logo().into(),
            title: header.title(),
            manufacturer_code: header
                .manufacturer_code()
                .unwrap_or_else(|| "N/A".to_owned()),
            cgb_flag: hexpad(header.cgb_flag(), 2),
            publisher: header.publisher().to_string(),
            sgb_flag: hexpad(header.sgb_flag(), 2),
            cartridge_type: header.cartridge_type().to_string(),
            rom_size: header.rom_size().to_string(),
            ram_size: header.ram_size().to_string(),
            destination: header.destination().to_string(),
            mask_rom_version: hexpad(header.mask_rom_version(), 2),
            header_checksum: header.verify_header_checksum().into(),
            global_checksum: header.verify_global_checksum().into(),
        }
    }

    /// Label/value pairs in print order.
    pub fn lines(&self) -> [(&'static str, String); 13] {
        [
            ("Logo:", self.logo.to_string()),
            ("Title:", self.title.clone()),
            ("Manufacturer code:", self.manufacturer_code.clone()),
            ("CGB flag:", self.cgb_flag.clone()),
            ("Publisher:", self.publisher.clone()),
            ("SGB flag:", self.sgb_flag.clone()),
            ("Cartridge type:", self.cartridge_type.clone()),
            ("ROM size:", self.rom_size.clone()),
            ("RAM size:", self.ram_size.clone()),
            ("Destination code:", self.destination.clone()),
            ("Mask ROM version number:", self.mask_rom_version.clone()),
            ("Header checksum:", self.header_checksum.to_string()),
            ("Global checksum:", self.global_checksum.to_string()),
        ]
    }
}

impl fmt::Display for HeaderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label:<LABEL_WIDTH$} {value}")?;
        }
        Ok(())
    }
}

/// Title and logo check, for a quick "is this a real cartridge" glance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalReport {
    pub logo: Verdict,
    pub title: String,
}

impl MinimalReport {
    pub fn new(header: &Header<'_>) -> Self {
        Self {
            logo: header.verify_logo().into(),
            title: header.title(),
        }
    }
}

impl fmt::Display for MinimalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<LABEL_WIDTH$} {}", "Logo:", self.logo)?;
        writeln!(f, "{:<LABEL_WIDTH$} {}", "Title:", self.title)
    }
}
