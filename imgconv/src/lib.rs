//! Conversion driver behind the `imgconv` binary
//!
//! [`convert`] resolves both codecs up front, loads the input into a
//! [`libpixmap::Pixmap`], and saves it through the output codec. Every
//! failure maps onto one of the process exit codes via
//! [`ConvertError::exit_code`].

use libpixmap::Format;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

/// Conversion failures, one variant per process exit code
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path's extension maps to no supported format
    #[error("unknown format of the input file {}", .0.display())]
    UnknownInputFormat(PathBuf),
    /// The output path's extension maps to no supported format
    #[error("unknown format of the output file {}", .0.display())]
    UnknownOutputFormat(PathBuf),
    /// The input codec failed to produce a pixel buffer
    #[error("loading failed: {0}")]
    Load(#[source] libpixmap::Error),
    /// The output codec failed to write the pixel buffer
    #[error("saving failed: {0}")]
    Save(#[source] libpixmap::Error),
}

impl ConvertError {
    /// Returns the process exit code reported for this failure
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownInputFormat(_) => 2,
            Self::UnknownOutputFormat(_) => 3,
            Self::Load(_) => 4,
            Self::Save(_) => 5,
        }
    }
}

/// Converts the image at `input` into the format implied by `output`
///
/// Both formats are resolved from their extensions before any file is
/// touched, so an unrecognized output extension fails without reading the
/// input.
///
/// # Errors
///
/// This function errors if either extension is unrecognized, or if the
/// resolved codecs fail to load or save.
#[instrument]
pub fn convert(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let input_format = Format::from_path(input)
        .map_err(|_| ConvertError::UnknownInputFormat(input.to_path_buf()))?;
    let output_format = Format::from_path(output)
        .map_err(|_| ConvertError::UnknownOutputFormat(output.to_path_buf()))?;

    let pixmap = input_format.load(input).map_err(ConvertError::Load)?;
    info!(
        "loaded {}x{} {} image from {}",
        pixmap.width(),
        pixmap.height(),
        input_format.as_str(),
        input.display()
    );

    output_format
        .save(output, &pixmap)
        .map_err(ConvertError::Save)?;
    info!(
        "wrote {} image to {}",
        output_format.as_str(),
        output.display()
    );
    Ok(())
}
