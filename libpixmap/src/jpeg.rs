//! JPEG support, delegated to the [`image`] crate
//!
//! Unlike the [`crate::bmp`] and [`crate::ppm`] codecs, nothing here touches
//! the wire format: the external codec does all encoding and decoding, and
//! this module only repacks between its buffer types and [`Pixmap`].

use crate::{
    error::Error,
    pixmap::{Color, Pixmap},
};
use image::{codecs::jpeg::JpegEncoder, ExtendedColorType, ImageEncoder, ImageReader};
use std::{fs::File, io::BufReader, path::Path};
use tracing::debug;

/// Tries to read a [`Pixmap`] from the JPEG file at `path`
///
/// # Errors
///
/// This function errors if the file cannot be opened, if the delegated
/// codec rejects the stream, or if the decoded dimensions exceed 65535.
pub fn load(path: impl AsRef<Path>) -> Result<Pixmap, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(Error::Read)?;
    let rgb = reader.decode()?.to_rgb8();
    debug!("delegated codec decoded {}x{} JPEG", rgb.width(), rgb.height());

    let (width, height) = match (u16::try_from(rgb.width()), u16::try_from(rgb.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(Error::Dimensions {
                width: i64::from(rgb.width()),
                height: i64::from(rgb.height()),
            })
        }
    };
    let pixels = rgb
        .pixels()
        .map(|p| Color::new(p[0], p[1], p[2]))
        .collect();
    Pixmap::from_pixels(width, height, pixels)
}

/// Serializes `pixmap` as a JPEG file at `path`
///
/// # Errors
///
/// This function errors if the file cannot be opened for writing, or if the
/// delegated codec fails to encode.
pub fn save(path: impl AsRef<Path>, pixmap: &Pixmap) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw = Vec::with_capacity(pixmap.pixels().len() * 3);
    for pixel in pixmap.pixels() {
        raw.extend_from_slice(&[pixel.r, pixel.g, pixel.b]);
    }
    let encoder = JpegEncoder::new(file);
    encoder.write_image(
        &raw,
        u32::from(pixmap.width()),
        u32::from(pixmap.height()),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
