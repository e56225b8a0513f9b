//! The decode half of the pipeline: PNG container parsing, DEFLATE
//! decompression, and scanline reconstruction.

mod bit_reader;
mod inflate;
mod png;

pub use inflate::inflate;
pub use png::{decode_png, RgbImage};
