use tracing::trace;

use super::{Header, layout::GLOBAL_CHECKSUM};
use crate::error::Error;

/// Expected value stored in the ROM next to the value recomputed from its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChecksumReport<T> {
    pub expected: T,
    pub computed: T,
}

impl<T: PartialEq> ChecksumReport<T> {
    pub fn passed(&self) -> bool {
        self.expected == self.computed
    }
}

/// Boot ROM header checksum: `x = x - byte - 1` over 0134-014C, wrapping.
pub(crate) fn header_checksum_of(span: &[u8]) -> u8 {
    let checksum = span
        .iter()
        .fold(0u8, |acc, &byte| acc.wrapping_sub(byte).wrapping_sub(1));
    trace!(checksum, "computed header checksum");
    checksum
}

/// 16-bit wrapping sum of every byte except the two at 014E-014F.
pub(crate) fn global_checksum_of(rom: &[u8]) -> u16 {
    let checksum = rom
        .iter()
        .enumerate()
        .filter(|(offset, _)| !GLOBAL_CHECKSUM.contains(*offset))
        .fold(0u16, |acc, (_, &byte)| acc.wrapping_add(byte as u16));
    trace!(checksum, "computed global checksum");
    checksum
}

/// Compute the header checksum of a raw ROM image.
pub fn compute_header_checksum(rom: &[u8]) -> Result<u8, Error> {
    Ok(Header::parse(rom)?.header_checksum().computed)
}

/// Compute the global checksum of a raw ROM image.
pub fn compute_global_checksum(rom: &[u8]) -> Result<u16, Error> {
    Ok(Header::parse(rom)?.global_checksum().computed)
}
