//! Codec for binary "P6" portable pixmaps
//!
//! The on-disk layout is the ASCII header `P6\n<width> <height>\n255\n`
//! followed by the pixel rows stored top-to-bottom, each row a tight run of
//! R,G,B byte triplets with no padding. Decoding accepts any whitespace run
//! between the header tokens but requires exactly one newline byte between
//! the max color value and the pixel data. Only the `P6` magic with max
//! value 255 is supported; plain-text variants and comment lines are not.

mod header;

use crate::{
    error::Error,
    pixmap::{Color, Pixmap},
};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};
use tracing::debug;

pub(crate) const MAGIC: &str = "P6";
pub(crate) const MAX_VALUE: u16 = 255;

/// Serializes `pixmap` as a binary P6 portable pixmap into `w`
///
/// # Errors
///
/// This function errors if any write to `w` fails.
pub fn encode(pixmap: &Pixmap, w: &mut impl Write) -> Result<(), Error> {
    let width = pixmap.width();
    let height = pixmap.height();
    write!(w, "{MAGIC}\n{width} {height}\n{MAX_VALUE}\n").map_err(Error::Write)?;

    let pixels = pixmap.pixels();
    let w_px = usize::from(width);
    let mut row_buf = vec![0u8; w_px * 3];
    for y in 0..usize::from(height) {
        let row = &pixels[y * w_px..(y + 1) * w_px];
        for (rgb, pixel) in row_buf.chunks_exact_mut(3).zip(row) {
            rgb[0] = pixel.r;
            rgb[1] = pixel.g;
            rgb[2] = pixel.b;
        }
        w.write_all(&row_buf).map_err(Error::Write)?;
    }
    Ok(())
}

/// Reads a binary P6 portable pixmap from `r` and decodes it into a
/// [`Pixmap`]
///
/// # Errors
///
/// This function errors if the magic is not `P6`, the max color value is
/// not 255, the header is otherwise malformed, or the stream holds fewer
/// than `width * height` pixel triplets.
pub fn decode(r: &mut impl Read) -> Result<Pixmap, Error> {
    let mut data = Vec::new();
    let read = r.read_to_end(&mut data).map_err(Error::Read)?;
    debug!("read {read} bytes of PPM data");

    let (pixel_data, header) = header::parse(&data)?;
    debug!("decoding {}x{} PPM", header.width, header.height);

    let expected = usize::from(header.width) * 3 * usize::from(header.height);
    if pixel_data.len() < expected {
        return Err(Error::Read(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "truncated pixel data",
        )));
    }
    // bytes past the declared dimensions are ignored
    let pixels = pixel_data[..expected]
        .chunks_exact(3)
        .map(|rgb| Color::new(rgb[0], rgb[1], rgb[2]))
        .collect();
    Pixmap::from_pixels(header.width, header.height, pixels)
}

/// Tries to read a [`Pixmap`] from the PPM file at `path`
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

/// Serializes `pixmap` as a PPM file at `path`
///
/// # Errors
///
/// This function errors if the file cannot be opened for writing, or if any
/// write fails.
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
