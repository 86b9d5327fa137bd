//! Errors registering source text.

use std::path::PathBuf;

/// Source text the database cannot address with `u32` offsets.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The text is 4 GiB or larger.
    #[error("`{}` is {len} bytes; source files must be smaller than 4 GiB", .path.display())]
    TooLarge {
        /// Path the text was registered under.
        path: PathBuf,
        /// Length of the text in bytes.
        len: usize,
    },

    /// Every file ID is in use.
    #[error("too many source files")]
    TooManyFiles,
}

/// Checks that text of `len` bytes fits `u32` offsets.
pub(crate) fn offset_len(path: &std::path::Path, len: usize) -> Result<u32, SourceError> {
    u32::try_from(len).map_err(|_| SourceError::TooLarge {
        path: path.to_path_buf(),
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn small_text_fits() {
        assert_eq!(offset_len(Path::new("a.kt"), 11).unwrap(), 11);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_text_is_rejected() {
        let len = u32::MAX as usize + 1;
        let err = offset_len(Path::new("big.kt"), len).unwrap_err();
        assert!(matches!(err, SourceError::TooLarge { len: l, .. } if l == len));
        assert_eq!(
            err.to_string(),
            "`big.kt` is 4294967296 bytes; source files must be smaller than 4 GiB"
        );
    }
}
