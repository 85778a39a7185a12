pub mod error;
pub mod header;
pub mod report;
pub mod rom;

pub use error::Error;
pub use header::Header;
pub use report::{HeaderReport, MinimalReport, Verdict};
pub use rom::read_rom;
