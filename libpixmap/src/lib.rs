//! # libpixmap
//!
//! This library provides an in-memory pixel buffer and byte-exact i/o
//! functionality for two raster image containers: 24-bit uncompressed
//! Windows bitmaps (BMP) and binary "P6" portable pixmaps (PPM). JPEG is
//! supported as well, with the encoding itself delegated to the [`image`]
//! crate.
//!
//! The three codecs never talk to each other. Every load produces a
//! [`Pixmap`], every save consumes one, and [`Format`] resolves a file
//! extension to the codec pair handling it, so a conversion is one load
//! followed by one save.
//!
//! ### Limitations
//!
//! The BMP codec handles exactly the layout it writes: two packed
//! little-endian headers, 24 bits per pixel, no compression, no palette,
//! bottom-up rows padded to 4-byte boundaries. Notably, decoding does not
//! validate the signature or depth fields, so a non-BMP file of sufficient
//! length decodes into garbage rather than a clean error. The PPM codec
//! handles only the binary `P6` variant with max color value 255; plain
//! text variants and `#` comment lines are rejected.
//!
//! ### Usage
//!
//! Encoding a buffer by hand:
//!
//! ```rust
//! use libpixmap::{ppm, Color, Pixmap};
//!
//! let pixmap = Pixmap::filled(2, 1, Color::new(0xff, 0x00, 0x00));
//! let mut encoded = Vec::new();
//! ppm::encode(&pixmap, &mut encoded)?;
//!
//! assert_eq!(encoded, b"P6\n2 1\n255\n\xff\x00\x00\xff\x00\x00");
//! # Ok::<(), libpixmap::Error>(())
//! ```
//!
//! Converting a file between formats by extension:
//!
//! ```rust,no_run
//! use libpixmap::Format;
//!
//! fn main() -> Result<(), libpixmap::Error> {
//!     let pixmap = Format::from_path("sample.ppm")?.load("sample.ppm")?;
//!     Format::from_path("sample.bmp")?.save("sample.bmp", &pixmap)?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

pub mod bmp;
mod error;
mod format;
pub mod jpeg;
mod pixmap;
pub mod ppm;

pub use error::Error;
pub use format::Format;
pub use pixmap::{Color, Pixmap};
