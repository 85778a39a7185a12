use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;

use super::table::{UNKNOWN, lookup};
use crate::report::hexpad;

static DESTINATIONS: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0x00, "Japan (and possibly overseas)"),
        (0x01, "Overseas only"),
    ])
});

/// Sales region declared at 014A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination(pub u8);

impl Destination {
    pub fn name(self) -> Option<&'static str> {
        lookup(&DESTINATIONS, "destination", &self.0)
    }
}

/// Formats as `<hex> - <name>`.
impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            hexpad(self.0, 2),
            self.name().unwrap_or(UNKNOWN)
        )
    }
}
