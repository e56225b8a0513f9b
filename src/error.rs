//! Error types for the png2jpeg library.

use std::fmt;

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a PNG input.
///
/// The JPEG encoder is infallible for valid pixel buffers, so every
/// failure in the pipeline originates on the decode side and propagates
/// unrecovered to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The first eight bytes are not the PNG signature.
    BadSignature,
    /// IHDR is malformed or requests an encoding we do not support.
    BadHeader(&'static str),
    /// The byte source ran out mid-chunk or mid-bitstream.
    TruncatedInput,
    /// A DEFLATE block header used the reserved block type.
    InvalidBlockType(u8),
    /// A Huffman-coded DEFLATE segment is corrupt.
    InvalidHuffmanCode,
    /// A scanline filter byte outside the defined range 0..=4.
    InvalidFilter(u8),
    /// The inflated IDAT payload is smaller than the filtered image.
    TruncatedPng {
        /// Bytes required for `height` filtered scanlines.
        expected: usize,
        /// Bytes actually produced by the inflater.
        actual: usize,
    },
    /// A palette index points past the end of the PLTE data.
    IndexOutOfRange {
        /// The offending index.
        index: u8,
        /// Number of entries in the palette.
        palette_len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadSignature => write!(f, "not a PNG file (bad signature)"),
            Error::BadHeader(what) => write!(f, "bad PNG header: {what}"),
            Error::TruncatedInput => write!(f, "unexpected end of input"),
            Error::InvalidBlockType(btype) => {
                write!(f, "invalid DEFLATE block type {btype}")
            }
            Error::InvalidHuffmanCode => write!(f, "corrupt DEFLATE stream (invalid Huffman data)"),
            Error::InvalidFilter(filter) => {
                write!(f, "invalid PNG filter type {filter}")
            }
            Error::TruncatedPng { expected, actual } => {
                write!(
                    f,
                    "inflated image data too short: expected {expected} bytes, got {actual}"
                )
            }
            Error::IndexOutOfRange { index, palette_len } => {
                write!(
                    f,
                    "palette index {index} out of range for {palette_len}-entry palette"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
