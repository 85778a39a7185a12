use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Buffer ends before the cartridge header does.
    #[error("cartridge header expected at least {required} bytes, got {actual}")]
    InputTooShort { required: usize, actual: usize },
    /// Wrapper for I/O errors raised while reading ROMs from disk.
    #[error("i/o error while reading ROM: {0}")]
    Io(#[from] std::io::Error),
}
