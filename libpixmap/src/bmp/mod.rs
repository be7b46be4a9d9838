//! Codec for 24-bit uncompressed Windows bitmaps
//!
//! The on-disk layout is a 14-byte file header and a 40-byte info header,
//! both packed little-endian, followed by the pixel rows stored
//! bottom-to-top. Each row holds `width` pixels in B,G,R byte order and is
//! padded with zeroes to a 4-byte boundary.
//!
//! Decoding trusts the headers: the `BM` signature, bit depth, and
//! compression fields are read but not validated, matching the encoders this
//! codec interoperates with. A file of the right byte count but the wrong
//! content decodes into nonsense rather than a clean error; only the
//! declared dimensions are range-checked before the pixel buffer is
//! allocated.

pub(crate) mod header;

use crate::{
    error::Error,
    pixmap::{Color, Pixmap},
};
use header::{stride_for, FileHeader, InfoHeader};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};
use tracing::{debug, trace};

/// Serializes `pixmap` as a 24-bit bottom-up BMP into `w`
///
/// # Errors
///
/// This function errors if the pixel data byte count overflows the header's
/// 32-bit size field, or if any write to `w` fails.
pub fn encode(pixmap: &Pixmap, w: &mut impl Write) -> Result<(), Error> {
    let width = pixmap.width();
    let height = pixmap.height();
    let stride = stride_for(width);
    let data_len = u32::try_from(stride as u64 * u64::from(height)).map_err(|_| {
        Error::Dimensions {
            width: i64::from(width),
            height: i64::from(height),
        }
    })?;

    FileHeader::for_data_len(data_len)
        .write_to(w)
        .map_err(Error::Write)?;
    InfoHeader::for_image(width, height, data_len)
        .write_to(w)
        .map_err(Error::Write)?;

    let pixels = pixmap.pixels();
    let w_px = usize::from(width);
    // padding bytes past 3 * width stay zero
    let mut row_buf = vec![0u8; stride];
    for y in (0..usize::from(height)).rev() {
        let row = &pixels[y * w_px..(y + 1) * w_px];
        for (bgr, pixel) in row_buf.chunks_exact_mut(3).zip(row) {
            bgr[0] = pixel.b;
            bgr[1] = pixel.g;
            bgr[2] = pixel.r;
        }
        w.write_all(&row_buf).map_err(Error::Write)?;
    }
    Ok(())
}

/// Reads a BMP from `r` and decodes it into a [`Pixmap`]
///
/// # Errors
///
/// This function errors if the stream is shorter than the headers plus
/// `stride * height` row bytes, or if the declared dimensions fall outside
/// `0..=65535`.
pub fn decode(r: &mut impl Read) -> Result<Pixmap, Error> {
    let file_header = FileHeader::read_from(r).map_err(Error::Read)?;
    let info = InfoHeader::read_from(r).map_err(Error::Read)?;
    trace!("file header: {file_header:?}");
    trace!("info header: {info:?}");

    let (width, height) = match (u16::try_from(info.width), u16::try_from(info.height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(Error::Dimensions {
                width: i64::from(info.width),
                height: i64::from(info.height),
            })
        }
    };
    let stride = stride_for(width);
    debug!("decoding {width}x{height} BMP, row stride {stride}");

    let w_px = usize::from(width);
    let mut pixels = vec![Color::BLACK; w_px * usize::from(height)];
    let mut row_buf = vec![0u8; stride];
    for y in (0..usize::from(height)).rev() {
        r.read_exact(&mut row_buf).map_err(Error::Read)?;
        let row = &mut pixels[y * w_px..(y + 1) * w_px];
        for (pixel, bgr) in row.iter_mut().zip(row_buf.chunks_exact(3)) {
            *pixel = Color::new(bgr[2], bgr[1], bgr[0]);
        }
    }
    Pixmap::from_pixels(width, height, pixels)
}

/// Tries to read a [`Pixmap`] from the BMP file at `path`
///
/// # Errors
///
/// This function errors if the file cannot be opened, or if decoding fails.
/// See [`decode`] for the decoding errors.
pub fn load(path: impl AsRef<Path>) -> Result<Pixmap, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&mut BufReader::new(file))
}

/// Serializes `pixmap` as a BMP file at `path`
///
/// # Errors
///
/// This function errors if the file cannot be opened for writing, or if any
/// write fails. See [`encode`] for the encoding errors.
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
    let mut writer = BufWriter::new(file);
    encode(pixmap, &mut writer)?;
    writer.flush().map_err(Error::Write)
}
