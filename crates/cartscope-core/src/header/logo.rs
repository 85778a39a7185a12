//! The boot logo stored at 0104-0133.
//!
//! The boot ROM refuses to start a cartridge whose copy differs from its own,
//! so an exact match is a cheap integrity marker. The same bytes can be
//! unpacked into the 48x8 bitmap shown on power-up.

/// Reference logo as stored by licensed cartridges.
pub const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// Bytes per half of the logo (one row of tiles).
const HALF_LEN: usize = 24;
/// Pixel rows produced by each half.
const ROWS_PER_HALF: usize = 4;

/// Glyphs used when drawing the logo as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogoStyle {
    pub filled: char,
    pub blank: char,
}

impl Default for LogoStyle {
    fn default() -> Self {
        Self {
            filled: '#',
            blank: ' ',
        }
    }
}

pub fn matches_reference(logo: &[u8]) -> bool {
    logo == NINTENDO_LOGO.as_slice()
}

/// Unpack `logo` into text rows, four per 24-byte half.
///
/// Each pair of bytes covers a 4x4 block: row 0 is the high nibble of the
/// first byte, row 1 its low nibble, rows 2 and 3 the same for the second
/// byte. Bits are drawn MSB first.
pub fn render(logo: &[u8], style: LogoStyle) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 * ROWS_PER_HALF);
    for half in logo.chunks(HALF_LEN) {
        for row in 0..ROWS_PER_HALF {
            let mut line = String::with_capacity(HALF_LEN * 2);
            for pair in half.chunks_exact(2) {
                let byte = pair[row / 2];
                let nibble = if row % 2 == 0 { byte >> 4 } else { byte & 0x0F };
                push_nibble(&mut line, nibble, style);
            }
            lines.push(line);
        }
    }
    lines
}

fn push_nibble(line: &mut String, nibble: u8, style: LogoStyle) {
    for bit in (0..4).rev() {
        line.push(if (nibble >> bit) & 1 != 0 {
            style.filled
        } else {
            style.blank
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_logo_matches_itself() {
        assert!(matches_reference(&NINTENDO_LOGO));
        assert!(!matches_reference(&NINTENDO_LOGO[..47]));
    }

    #[test]
    fn renders_eight_rows_of_48_cells() {
        let lines = render(&NINTENDO_LOGO, LogoStyle::default());
        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert_eq!(line.chars().count(), 48);
        }
    }

    #[test]
    fn first_block_follows_nibble_order() {
        // 0xCE 0xED: rows are C, E, E, D.
        let lines = render(&NINTENDO_LOGO, LogoStyle::default());
        assert_eq!(&lines[0][..4], "##  ");
        assert_eq!(&lines[1][..4], "### ");
        assert_eq!(&lines[2][..4], "### ");
        assert_eq!(&lines[3][..4], "## #");
    }

    #[test]
    fn second_half_starts_at_byte_24() {
        // 0xDC 0xCC: rows are D, C, C, C.
        let lines = render(&NINTENDO_LOGO, LogoStyle::default());
        assert_eq!(&lines[4][..4], "## #");
        assert_eq!(&lines[5][..4], "##  ");
    }

    #[test]
    fn custom_glyphs() {
        let style = LogoStyle {
            filled: '@',
            blank: '.',
        };
        let lines = render(&[0xA5, 0x0F], style);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "@.@.");
        assert_eq!(lines[1], ".@.@");
        assert_eq!(lines[2], "....");
        assert_eq!(lines[3], "@@@@");
    }
}
