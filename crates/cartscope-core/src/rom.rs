use std::{fs, path::Path};

use tracing::debug;

use crate::{error::Error, header::MIN_ROM_LEN};

/// Read a ROM image from disk, rejecting files too short to hold a header.
pub fn read_rom<P>(path: P) -> Result<Vec<u8>, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "read ROM image");
    if bytes.len() < MIN_ROM_LEN {
        return Err(Error::InputTooShort {
            required: MIN_ROM_LEN,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_temp(name: &str, len: usize) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cartscope-{}-{name}.gb", std::process::id()));
        fs::write(&path, vec![0u8; len]).expect("write temp ROM");
        path
    }

    #[test]
    fn short_file_is_rejected() {
        let path = write_temp("short", 0x100);
        let result = read_rom(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(
            result,
            Err(Error::InputTooShort {
                required: 0x150,
                actual: 0x100
            })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join(format!("cartscope-{}-missing.gb", std::process::id()));
        assert!(matches!(read_rom(&path), Err(Error::Io(_))));
    }

    #[test]
    fn header_sized_file_is_read_whole() {
        let path = write_temp("exact", 0x150);
        let result = read_rom(&path);
        fs::remove_file(&path).ok();
        assert_eq!(result.expect("file reads").len(), 0x150);
    }
}
