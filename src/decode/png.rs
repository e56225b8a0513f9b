//! PNG container decoding: chunk walk, scanline reconstruction, and
//! color adaptation to interleaved RGB.

use super::inflate::inflate_zlib;
use crate::error::{Error, Result};

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A decoded image, converted to tightly packed 8-bit RGB.
///
/// This is the handoff type between the PNG decoder and the JPEG
/// encoder; `pixels` always holds exactly `3 * width * height` bytes.
#[derive(Debug, Clone)]
pub struct RgbImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Interleaved RGB bytes in raster order.
    pub pixels: Vec<u8>,
}

/// PNG color types from the specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorType {
    Grayscale = 0,
    Rgb = 2,
    Indexed = 3,
    GrayscaleAlpha = 4,
    Rgba = 6,
}

impl ColorType {
    fn from_byte(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ColorType::Grayscale),
            2 => Ok(ColorType::Rgb),
            3 => Ok(ColorType::Indexed),
            4 => Ok(ColorType::GrayscaleAlpha),
            6 => Ok(ColorType::Rgba),
            _ => Err(Error::BadHeader("unsupported color type")),
        }
    }

    /// Bytes per pixel in the filtered scanline data (bit depth 8).
    fn bytes_per_pixel(self) -> usize {
        match self {
            ColorType::Grayscale | ColorType::Indexed => 1,
            ColorType::GrayscaleAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }
}

struct Ihdr {
    width: u32,
    height: u32,
    color_type: ColorType,
}

/// Decode a PNG image into interleaved 8-bit RGB.
///
/// Accepts non-interlaced, 8-bit-per-channel PNGs of color types 0, 2,
/// 3, 4, and 6. Alpha channels are dropped; grayscale is replicated
/// across the three channels; indexed pixels are resolved through PLTE.
/// Chunk CRCs and the zlib Adler-32 are not verified.
pub fn decode_png(data: &[u8]) -> Result<RgbImage> {
    if data.len() < 8 || data[..8] != PNG_SIGNATURE {
        return Err(Error::BadSignature);
    }

    let mut pos = 8;
    let mut ihdr: Option<Ihdr> = None;
    let mut palette: Option<Vec<u8>> = None;
    let mut idat = Vec::new();

    while pos + 12 <= data.len() {
        let length =
            u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;
        let chunk_type: [u8; 4] = [data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]];

        let data_start = pos + 8;
        let crc_end = data_start
            .checked_add(length)
            .and_then(|end| end.checked_add(4))
            .ok_or(Error::TruncatedInput)?;
        if crc_end > data.len() {
            return Err(Error::TruncatedInput);
        }
        let chunk = &data[data_start..data_start + length];

        if ihdr.is_none() && &chunk_type != b"IHDR" {
            return Err(Error::BadHeader("IHDR must be the first chunk"));
        }

        match &chunk_type {
            b"IHDR" => ihdr = Some(parse_ihdr(chunk)?),
            b"PLTE" => {
                if length % 3 != 0 {
                    return Err(Error::BadHeader("PLTE length not a multiple of 3"));
                }
                palette = Some(chunk.to_vec());
            }
            b"IDAT" => idat.extend_from_slice(chunk),
            b"IEND" => break,
            _ => {} // ancillary chunks are skipped, CRC and all
        }

        pos = crc_end;
    }

    let ihdr = ihdr.ok_or(Error::BadHeader("missing IHDR"))?;

    let filtered = inflate_zlib(&idat)?;
    let raw = unfilter(&ihdr, &filtered)?;
    let pixels = adapt_to_rgb(&ihdr, &raw, palette.as_deref())?;

    debug_assert_eq!(
        pixels.len(),
        3 * ihdr.width as usize * ihdr.height as usize
    );

    Ok(RgbImage {
        width: ihdr.width,
        height: ihdr.height,
        pixels,
    })
}

fn parse_ihdr(chunk: &[u8]) -> Result<Ihdr> {
    if chunk.len() != 13 {
        return Err(Error::BadHeader("IHDR must be 13 bytes"));
    }

    let width = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    let height = u32::from_be_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
    let bit_depth = chunk[8];
    let color_type = ColorType::from_byte(chunk[9])?;

    if width == 0 || height == 0 {
        return Err(Error::BadHeader("zero width or height"));
    }
    if bit_depth != 8 {
        return Err(Error::BadHeader("only bit depth 8 is supported"));
    }
    if chunk[10] != 0 {
        return Err(Error::BadHeader("unknown compression method"));
    }
    if chunk[11] != 0 {
        return Err(Error::BadHeader("unknown filter method"));
    }
    if chunk[12] != 0 {
        return Err(Error::BadHeader("interlaced images are not supported"));
    }

    Ok(Ihdr {
        width,
        height,
        color_type,
    })
}

/// Reverse the per-scanline filters, producing raw channel bytes.
fn unfilter(ihdr: &Ihdr, filtered: &[u8]) -> Result<Vec<u8>> {
    let width = ihdr.width as usize;
    let height = ihdr.height as usize;
    let bpp = ihdr.color_type.bytes_per_pixel();
    let scanline_bytes = width * bpp;

    let expected = height * (1 + scanline_bytes);
    if filtered.len() < expected {
        return Err(Error::TruncatedPng {
            expected,
            actual: filtered.len(),
        });
    }

    let mut current = vec![0u8; scanline_bytes];
    let mut previous = vec![0u8; scanline_bytes];
    let mut raw = Vec::with_capacity(height * scanline_bytes);

    for y in 0..height {
        let row_start = y * (1 + scanline_bytes);
        let filter = filtered[row_start];
        current.copy_from_slice(&filtered[row_start + 1..row_start + 1 + scanline_bytes]);

        unfilter_row(filter, &mut current, &previous, bpp)?;

        raw.extend_from_slice(&current);
        std::mem::swap(&mut current, &mut previous);
    }

    Ok(raw)
}

/// Reconstruct one scanline in place. `prev` is the reconstructed row
/// above, or all zeros for the first row.
fn unfilter_row(filter: u8, row: &mut [u8], prev: &[u8], bpp: usize) -> Result<()> {
    match filter {
        0 => {}
        1 => {
            // Sub
            for x in bpp..row.len() {
                row[x] = row[x].wrapping_add(row[x - bpp]);
            }
        }
        2 => {
            // Up
            for (byte, &above) in row.iter_mut().zip(prev) {
                *byte = byte.wrapping_add(above);
            }
        }
        3 => {
            // Average; the sum needs more than 8 bits before halving.
            for x in 0..row.len() {
                let left = if x >= bpp { u16::from(row[x - bpp]) } else { 0 };
                let above = u16::from(prev[x]);
                row[x] = row[x].wrapping_add(((left + above) / 2) as u8);
            }
        }
        4 => {
            // Paeth
            for x in 0..row.len() {
                let a = if x >= bpp { row[x - bpp] } else { 0 };
                let b = prev[x];
                let c = if x >= bpp { prev[x - bpp] } else { 0 };
                row[x] = row[x].wrapping_add(paeth_predictor(a, b, c));
            }
        }
        other => return Err(Error::InvalidFilter(other)),
    }
    Ok(())
}

/// The Paeth predictor. Ties break in the order a, b, c; this exact
/// order is part of the PNG specification.
#[inline]
fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
    let p = i32::from(a) + i32::from(b) - i32::from(c);
    let pa = (p - i32::from(a)).abs();
    let pb = (p - i32::from(b)).abs();
    let pc = (p - i32::from(c)).abs();

    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

/// Convert raw channel bytes into interleaved RGB, dropping alpha and
/// resolving palette indices.
fn adapt_to_rgb(ihdr: &Ihdr, raw: &[u8], palette: Option<&[u8]>) -> Result<Vec<u8>> {
    let pixel_count = ihdr.width as usize * ihdr.height as usize;

    match ihdr.color_type {
        ColorType::Grayscale => Ok(raw.iter().flat_map(|&g| [g, g, g]).collect()),
        ColorType::Rgb => Ok(raw.to_vec()),
        ColorType::Indexed => {
            let palette = palette.ok_or(Error::BadHeader("indexed image without PLTE"))?;
            let mut pixels = Vec::with_capacity(pixel_count * 3);
            for &index in raw {
                let at = usize::from(index) * 3;
                let entry = palette.get(at..at + 3).ok_or(Error::IndexOutOfRange {
                    index,
                    palette_len: palette.len() / 3,
                })?;
                pixels.extend_from_slice(entry);
            }
            Ok(pixels)
        }
        ColorType::GrayscaleAlpha => Ok(raw
            .chunks_exact(2)
            .flat_map(|pair| [pair[0], pair[0], pair[0]])
            .collect()),
        ColorType::Rgba => Ok(raw
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()),
    }
}
