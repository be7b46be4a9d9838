use crate::{bmp, error::Error, jpeg, pixmap::Pixmap, ppm};
use std::{ffi::OsStr, path::Path, str::FromStr};
use strum::{EnumString, IntoStaticStr};
use tracing::debug;

/// The image container formats the library can read and write
///
/// This is a closed set: every format maps to a stateless codec behind
/// [`Format::load`] and [`Format::save`], so callers resolve a format once
/// and never branch on it again.
#[derive(IntoStaticStr, EnumString, Debug, Eq, PartialEq, Copy, Clone)]
pub enum Format {
    /// 24-bit uncompressed Windows bitmap, see [`crate::bmp`]
    #[strum(serialize = "bmp")]
    Bmp,
    /// Binary P6 portable pixmap, see [`crate::ppm`]
    #[strum(serialize = "ppm")]
    Ppm,
    /// JPEG, delegated to an external codec, see [`crate::jpeg`]
    #[strum(serialize = "jpg", serialize = "jpeg")]
    Jpeg,
}

impl Format {
    /// Returns the canonical extension string for this format
    #[must_use]
    pub fn as_str(self) -> &'static str {
        Into::<&'static str>::into(self)
    }

    /// Resolves the format of `path` from its extension
    ///
    /// The match is case-sensitive and exact: `.bmp`, `.ppm`, and
    /// `.jpg`/`.jpeg` resolve; anything else, including uppercase variants
    /// and extensionless paths, does not.
    ///
    /// # Errors
    ///
    /// This function errors if the extension maps to no supported format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        path.extension()
            .and_then(OsStr::to_str)
            .and_then(|ext| Self::from_str(ext).ok())
            .ok_or_else(|| Error::UnrecognizedExtension(path.to_path_buf()))
    }

    /// Loads the file at `path` with this format's codec
    ///
    /// # Errors
    ///
    /// This function errors if the file cannot be opened or decoded; see
    /// the codec modules for the per-format failure modes.
    pub fn load(self, path: impl AsRef<Path>) -> Result<Pixmap, Error> {
        debug!("loading {} as {}", path.as_ref().display(), self.as_str());
        match self {
            Self::Bmp => bmp::load(path),
            Self::Ppm => ppm::load(path),
            Self::Jpeg => jpeg::load(path),
        }
    }

    /// Saves `pixmap` to `path` with this format's codec
    ///
    /// # Errors
    ///
    /// This function errors if the file cannot be opened for writing or the
    /// encode fails; see the codec modules for the per-format failure modes.
    pub fn save(self, path: impl AsRef<Path>, pixmap: &Pixmap) -> Result<(), Error> {
        debug!("saving {} as {}", path.as_ref().display(), self.as_str());
        match self {
            Self::Bmp => bmp::save(path, pixmap),
            Self::Ppm => ppm::save(path, pixmap),
            Self::Jpeg => jpeg::save(path, pixmap),
        }
    }
}
