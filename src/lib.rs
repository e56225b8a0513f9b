//! # png2jpeg
//!
//! A PNG to JPEG converter that implements its own codec core: an RFC 1951
//! DEFLATE decoder, a PNG container and filter decoder, and a baseline
//! sequential JPEG (JFIF) encoder with 4:4:4 sampling.
//!
//! No external image or compression libraries are used at runtime. The
//! decoder treats its input as trusted PNG: chunk CRCs and the zlib
//! Adler-32 trailer are skipped, not verified.
//!
//! ## Example
//!
//! ```rust
//! let pixels = vec![255, 0, 0]; // 1x1 red RGB pixel
//! let jpeg = png2jpeg::encode_jpeg(&pixels, 1, 1, 85);
//! assert!(jpeg.starts_with(&[0xFF, 0xD8]));
//! assert!(jpeg.ends_with(&[0xFF, 0xD9]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bits;
pub mod color;
pub mod decode;
pub mod error;
pub mod jpeg;

pub use decode::{decode_png, inflate, RgbImage};
pub use error::{Error, Result};
pub use jpeg::encode_jpeg;
