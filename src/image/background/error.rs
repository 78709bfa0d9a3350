//! Background removal error types.

use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

/// Failures of a single background removal run.
#[derive(Debug, Error)]
pub enum BackgroundError {
    /// Input is missing, unreadable or not a decodable image.
    #[error("failed to decode image `{0}`")]
    Decode(PathBuf, #[source] ImageError),

    /// Output directory or file could not be created, or encoding failed.
    #[error("failed to write image `{0}`")]
    Write(PathBuf, #[source] ImageError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};
    use std::path::PathBuf;

    use image::ImageError;

    use super::BackgroundError;

    #[test]
    fn display_names_path_and_keeps_source() {
        let err = BackgroundError::Decode(
            PathBuf::from("icon.png"),
            ImageError::IoError(Error::new(ErrorKind::NotFound, "no such file")),
        );
        assert_eq!(err.to_string(), "failed to decode image `icon.png`");
        assert!(err.source().is_some());

        let err = BackgroundError::Write(
            PathBuf::from("out/icon.png"),
            ImageError::IoError(Error::new(ErrorKind::PermissionDenied, "denied")),
        );
        assert!(err.to_string().contains("out/icon.png"));
    }
}
