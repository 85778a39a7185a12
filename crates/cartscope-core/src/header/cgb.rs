/// Color hardware support derived from the CGB flag at 0143.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CgbSupport {
    /// Monochrome cartridge; 0143 is still part of the title.
    None,
    /// Runs on both monochrome and color hardware (0x80).
    Compatible,
    /// Color hardware only (0xC0).
    Exclusive,
}

impl CgbSupport {
    pub fn from_flag(flag: u8) -> Self {
        match flag {
            0xC0 => Self::Exclusive,
            0x80 => Self::Compatible,
            _ => Self::None,
        }
    }
}

/// SGB flag value enabling Super Game Boy functions.
pub const SGB_SUPPORTED: u8 = 0x03;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_documented_flag_values() {
        assert_eq!(CgbSupport::from_flag(0x80), CgbSupport::Compatible);
        assert_eq!(CgbSupport::from_flag(0xC0), CgbSupport::Exclusive);
        assert_eq!(CgbSupport::from_flag(0x00), CgbSupport::None);
        assert_eq!(CgbSupport::from_flag(b'E'), CgbSupport::None);
    }
}
