//! Byte layout of the cartridge header.
//!
//! Every offset the decoder touches is declared here exactly once. Accessors
//! and checksum routines only ever index the ROM through these ranges.

/// Inclusive byte range within the ROM image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn single(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: both ends are inclusive, so a range covers at least one byte.
    pub const fn is_empty(self) -> bool {
        false
    }

    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// 0100-014F: the whole header.
pub const HEADER_REGION: ByteRange = ByteRange::new(0x0100, 0x014F);
/// 0100-0103: entry point, usually `nop; jp $0150`.
pub const ENTRY_POINT: ByteRange = ByteRange::new(0x0100, 0x0103);
/// 0104-0133: boot logo bitmap.
pub const LOGO: ByteRange = ByteRange::new(0x0104, 0x0133);
/// 0134-0143: title.
pub const TITLE: ByteRange = ByteRange::new(0x0134, 0x0143);
/// 013F-0142: manufacturer code (overlaps the title on later carts).
pub const MANUFACTURER_CODE: ByteRange = ByteRange::new(0x013F, 0x0142);
/// 0143: CGB flag.
pub const CGB_FLAG: ByteRange = ByteRange::single(0x0143);
/// 0144-0145: new licensee code, two ASCII characters.
pub const NEW_LICENSEE_CODE: ByteRange = ByteRange::new(0x0144, 0x0145);
/// 0146: SGB flag.
pub const SGB_FLAG: ByteRange = ByteRange::single(0x0146);
/// 0147: cartridge type.
pub const CARTRIDGE_TYPE: ByteRange = ByteRange::single(0x0147);
/// 0148: ROM size code.
pub const ROM_SIZE: ByteRange = ByteRange::single(0x0148);
/// 0149: RAM size code.
pub const RAM_SIZE: ByteRange = ByteRange::single(0x0149);
/// 014A: destination code.
pub const DESTINATION_CODE: ByteRange = ByteRange::single(0x014A);
/// 014B: old licensee code.
pub const OLD_LICENSEE_CODE: ByteRange = ByteRange::single(0x014B);
/// 014C: mask ROM version number.
pub const MASK_ROM_VERSION: ByteRange = ByteRange::single(0x014C);
/// 014D: header checksum.
pub const HEADER_CHECKSUM: ByteRange = ByteRange::single(0x014D);
/// 014E-014F: global checksum, big-endian.
pub const GLOBAL_CHECKSUM: ByteRange = ByteRange::new(0x014E, 0x014F);

/// Bytes covered by the header checksum (title through mask ROM version).
pub const HEADER_CHECKSUM_SPAN: ByteRange = ByteRange::new(TITLE.start, MASK_ROM_VERSION.end);

/// Smallest buffer the decoder accepts.
pub const MIN_ROM_LEN: usize = HEADER_REGION.end + 1;

/// Named fields in header order. Derived spans such as
/// [`HEADER_CHECKSUM_SPAN`] are not fields and are left out.
pub const FIELDS: [(&str, ByteRange); 15] = [
    ("entry point", ENTRY_POINT),
    ("logo", LOGO),
    ("title", TITLE),
    ("manufacturer code", MANUFACTURER_CODE),
    ("cgb flag", CGB_FLAG),
    ("new licensee code", NEW_LICENSEE_CODE),
    ("sgb flag", SGB_FLAG),
    ("cartridge type", CARTRIDGE_TYPE),
    ("rom size", ROM_SIZE),
    ("ram size", RAM_SIZE),
    ("destination code", DESTINATION_CODE),
    ("old licensee code", OLD_LICENSEE_CODE),
    ("mask rom version", MASK_ROM_VERSION),
    ("header checksum", HEADER_CHECKSUM),
    ("global checksum", GLOBAL_CHECKSUM),
];
