use std::{io, path::PathBuf};
use thiserror::Error;

/// Possible `libpixmap` errors
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error returned if a file cannot be opened for reading or writing
    #[error("unable to open {}: {source}", path.display())]
    Open {
        /// the path that failed to open
        path: PathBuf,
        /// the underlying I/O error
        source: io::Error,
    },
    /// Error returned on a short read or any other stream read failure
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
    /// Error returned if writing to the destination stream fails
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
    /// Error returned if the PPM magic is not the exact token `P6`
    #[error("not a binary P6 portable pixmap")]
    PpmMagic,
    /// Error returned if the PPM header tokens are malformed or not followed
    /// by a single newline byte
    #[error("malformed PPM header")]
    PpmHeader,
    /// Error returned if the PPM max color value is anything but 255
    #[error("unsupported PPM max value {0}, only 255 is supported")]
    PpmMaxValue(u16),
    /// Error returned if declared image dimensions fall outside the
    /// supported `0..=65535` range
    #[error("image dimensions {width}x{height} are out of range")]
    Dimensions {
        /// declared width
        width: i64,
        /// declared height
        height: i64,
    },
    /// Error returned if pixel data does not match the declared
    /// width/height of the image
    #[error("expected {width}x{height} samples, got {samples}")]
    SizeMismatch {
        /// declared width
        width: u16,
        /// declared height
        height: u16,
        /// number of samples actually supplied
        samples: usize,
    },
    /// Error returned if a path's extension maps to no supported format
    #[error("unrecognized image extension: {}", .0.display())]
    UnrecognizedExtension(PathBuf),
    /// Error bubbled up from the delegated JPEG codec
    #[error(transparent)]
    Jpeg(#[from] image::ImageError),
}
