//! Cartridge header decoding.
//!
//! Every Game Boy cartridge carries a fixed 80 byte header at `0x0100-0x014F`.
//! It names the game and its publisher, declares the memory controller and
//! ROM/RAM sizes, and stores the boot logo plus two checksums the console (or a
//! curious human) can use to tell whether the dump is intact.
//!
//! # Quick overview
//! - Pass the whole ROM image to [`Header::parse`]. It only checks that the
//!   buffer is long enough; nothing else can fail afterwards.
//! - Call one accessor per field. Table backed fields ([`Publisher`],
//!   [`CartridgeType`], [`RomSize`], [`RamSize`], [`Destination`]) keep the raw
//!   code and render an "Unknown" label when the code is not in their table.
//! - Use [`Header::report`] for a printable summary of everything.

use tracing::debug;

use crate::{
    error::Error,
    report::{HeaderReport, MinimalReport},
};

mod cartridge_type;
mod cgb;
mod checksum;
mod destination;
pub mod layout;
mod licensee;
pub mod logo;
mod memory_size;
mod table;

pub use cartridge_type::CartridgeType;
pub use cgb::{CgbSupport, SGB_SUPPORTED};
pub use checksum::{ChecksumReport, compute_global_checksum, compute_header_checksum};
pub use destination::Destination;
pub use layout::{ByteRange, MIN_ROM_LEN};
pub use licensee::{Publisher, USE_NEW_LICENSEE};
pub use logo::{LogoStyle, NINTENDO_LOGO};
pub use memory_size::{RamSize, RomSize};
pub use table::UNKNOWN;

/// Read-only view of a ROM image's header.
///
/// Borrows the full image: the global checksum covers every byte, not just the
/// header region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header<'a> {
    rom: &'a [u8],
}

impl<'a> Header<'a> {
    /// Wrap a ROM image, rejecting buffers that end before `0x0150`.
    pub fn parse(rom: &'a [u8]) -> Result<Self, Error> {
        if rom.len() < MIN_ROM_LEN {
            return Err(Error::InputTooShort {
                required: MIN_ROM_LEN,
                actual: rom.len(),
            });
        }
        debug!(len = rom.len(), "parsed cartridge header");
        Ok(Self { rom })
    }

    /// The full ROM image this header was parsed from.
    pub fn rom(&self) -> &'a [u8] {
        self.rom
    }

    fn field(&self, range: ByteRange) -> &'a [u8] {
        &self.rom[range.start..=range.end]
    }

    fn byte(&self, range: ByteRange) -> u8 {
        self.rom[range.start]
    }

    pub fn entry_point(&self) -> [u8; 4] {
        let bytes = self.field(layout::ENTRY_POINT);
        [bytes[0], bytes[1], bytes[2], bytes[3]]
    }

    pub fn logo(&self) -> &'a [u8] {
        self.field(layout::LOGO)
    }

    pub fn verify_logo(&self) -> bool {
        logo::matches_reference(self.logo())
    }

    /// The stored logo as text rows, see [`logo::render`].
    pub fn logo_art(&self, style: LogoStyle) -> Vec<String> {
        logo::render(self.logo(), style)
    }

    /// Raw 16 title bytes, padding included.
    pub fn title_bytes(&self) -> &'a [u8] {
        self.field(layout::TITLE)
    }

    /// Title text up to the first NUL byte.
    ///
    /// Colour carts pad a shorter title with NULs and store the CGB flag in the
    /// last byte, so everything from the first NUL on is dropped. Invalid UTF-8
    /// is replaced with U+FFFD rather than rejected.
    pub fn title(&self) -> String {
        let bytes = self.title_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }

    /// Four character manufacturer code; `None` when all four bytes are zero.
    pub fn manufacturer_code(&self) -> Option<String> {
        let bytes = self.field(layout::MANUFACTURER_CODE);
        if bytes.iter().all(|&b| b == 0) {
            return None;
        }
        Some(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn cgb_flag(&self) -> u8 {
        self.byte(layout::CGB_FLAG)
    }

    pub fn cgb_support(&self) -> CgbSupport {
        CgbSupport::from_flag(self.cgb_flag())
    }

    pub fn sgb_flag(&self) -> u8 {
        self.byte(layout::SGB_FLAG)
    }

    pub fn sgb_support(&self) -> bool {
        self.sgb_flag() == SGB_SUPPORTED
    }

    pub fn old_licensee_code(&self) -> u8 {
        self.byte(layout::OLD_LICENSEE_CODE)
    }

    pub fn new_licensee_code(&self) -> [u8; 2] {
        let bytes = self.field(layout::NEW_LICENSEE_CODE);
        [bytes[0], bytes[1]]
    }

    pub fn publisher(&self) -> Publisher {
        Publisher::from_codes(self.old_licensee_code(), self.new_licensee_code())
    }

    pub fn cartridge_type(&self) -> CartridgeType {
        CartridgeType(self.byte(layout::CARTRIDGE_TYPE))
    }

    pub fn rom_size(&self) -> RomSize {
        RomSize(self.byte(layout::ROM_SIZE))
    }

    pub fn ram_size(&self) -> RamSize {
        RamSize(self.byte(layout::RAM_SIZE))
    }

    pub fn destination(&self) -> Destination {
        Destination(self.byte(layout::DESTINATION_CODE))
    }

    pub fn mask_rom_version(&self) -> u8 {
        self.byte(layout::MASK_ROM_VERSION)
    }

    pub fn header_checksum(&self) -> ChecksumReport<u8> {
        ChecksumReport {
            expected: self.byte(layout::HEADER_CHECKSUM),
            computed: checksum::header_checksum_of(self.field(layout::HEADER_CHECKSUM_SPAN)),
        }
    }

    pub fn verify_header_checksum(&self) -> bool {
        self.header_checksum().passed()
    }

    pub fn global_checksum(&self) -> ChecksumReport<u16> {
        let stored = self.field(layout::GLOBAL_CHECKSUM);
        ChecksumReport {
            expected: u16::from_be_bytes([stored[0], stored[1]]),
            computed: checksum::global_checksum_of(self.rom),
        }
    }

    pub fn verify_global_checksum(&self) -> bool {
        self.global_checksum().passed()
    }

    /// Every field, formatted for display.
    pub fn report(&self) -> HeaderReport {
        HeaderReport::new(self)
    }

    /// Title and logo check only.
    pub fn minimal_report(&self) -> MinimalReport {
        MinimalReport::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_rom() -> Vec<u8> {
        let mut rom = vec![0u8; MIN_ROM_LEN];
        rom[0x0104..=0x0133].copy_from_slice(&NINTENDO_LOGO);
        rom
    }

    #[test]
    fn rejects_short_buffers() {
        let rom = vec![0u8; MIN_ROM_LEN - 1];
        let err = Header::parse(&rom).unwrap_err();
        assert!(matches!(
            err,
            Error::InputTooShort {
                required: 0x150,
                actual: 0x14F
            }
        ));
    }

    #[test]
    fn accepts_exactly_the_header_length() {
        let rom = blank_rom();
        let header = Header::parse(&rom).expect("header parses");
        assert!(header.verify_logo());
        assert_eq!(header.rom().len(), 0x150);
    }

    #[test]
    fn title_strips_padding_and_replaces_invalid_bytes() {
        let mut rom = blank_rom();
        rom[0x0134..0x0134 + 5].copy_from_slice(b"HELLO");
        assert_eq!(Header::parse(&rom).expect("parses").title(), "HELLO");

        rom[0x0135] = 0xFF;
        assert_eq!(Header::parse(&rom).expect("parses").title(), "H\u{FFFD}LLO");
    }

    #[test]
    fn colour_title_stops_at_the_padding() {
        let mut rom = blank_rom();
        rom[0x0134..0x0134 + 7].copy_from_slice(b"POKEMON");
        rom[0x0143] = 0x80;
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.title(), "POKEMON");
        assert_eq!(header.title_bytes()[15], 0x80);

        rom[0x0134..=0x0143].copy_from_slice(b"SIXTEEN CHARS!!!");
        assert_eq!(Header::parse(&rom).expect("parses").title(), "SIXTEEN CHARS!!!");
    }

    #[test]
    fn manufacturer_code_all_zero_is_absent() {
        let mut rom = blank_rom();
        rom[0x0134..0x013F].copy_from_slice(b"SOMEGAMEXYZ");
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.manufacturer_code(), None);

        rom[0x013F..=0x0142].copy_from_slice(b"AXVE");
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.manufacturer_code().as_deref(), Some("AXVE"));
    }

    #[test]
    fn cgb_and_sgb_flags_read_their_own_offsets() {
        let mut rom = blank_rom();
        rom[0x0143] = 0x80;
        rom[0x0146] = 0x03;
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.cgb_flag(), 0x80);
        assert_eq!(header.sgb_flag(), 0x03);
        assert_eq!(header.cgb_support(), CgbSupport::Compatible);
        assert!(header.sgb_support());
    }

    #[test]
    fn publisher_switches_on_old_code() {
        let mut rom = blank_rom();
        rom[0x0144..=0x0145].copy_from_slice(b"01");
        rom[0x014B] = 0x33;
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.publisher(), Publisher::New(*b"01"));

        rom[0x014B] = 0x01;
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.publisher(), Publisher::Old(0x01));
    }

    #[test]
    fn table_fields_keep_raw_codes() {
        let mut rom = blank_rom();
        rom[0x0147] = 0x1B;
        rom[0x0148] = 0x05;
        rom[0x0149] = 0x03;
        rom[0x014A] = 0x01;
        rom[0x014C] = 0x02;
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.cartridge_type(), CartridgeType(0x1B));
        assert_eq!(header.rom_size().bytes(), Some(1024 * 1024));
        assert_eq!(header.ram_size(), RamSize(0x03));
        assert_eq!(header.destination(), Destination(0x01));
        assert_eq!(header.mask_rom_version(), 0x02);
    }

    #[test]
    fn global_checksum_reads_big_endian() {
        let mut rom = blank_rom();
        rom[0x014E] = 0x12;
        rom[0x014F] = 0x34;
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.global_checksum().expected, 0x1234);
    }

    #[test]
    fn entry_point_is_the_first_four_header_bytes() {
        let mut rom = blank_rom();
        rom[0x0100..=0x0103].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
        let header = Header::parse(&rom).expect("parses");
        assert_eq!(header.entry_point(), [0x00, 0xC3, 0x50, 0x01]);
    }
}
