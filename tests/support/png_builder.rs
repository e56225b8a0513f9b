//! Minimal PNG writer for building decoder fixtures.
//!
//! Produces spec-valid files: chunk CRCs are real (via `flate2::Crc`)
//! and the IDAT payload is a proper zlib stream, so fixtures written to
//! disk also open in external viewers. The decoder under test never
//! checks the CRCs, but correct fixtures keep the tests honest.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

/// The 8-byte PNG signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Append one chunk (length, type, data, CRC over type+data).
pub fn push_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);

    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

/// 13-byte IHDR payload: bit depth 8, no interlace.
pub fn ihdr(width: u32, height: u32, color_type: u8) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = 8; // bit depth
    data[9] = color_type;
    // compression, filter, interlace all zero
    data
}

/// zlib-compress `data` at the default level.
pub fn zlib_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Assemble a PNG from already-filtered scanline data (each row must
/// start with its filter byte).
pub fn build_png(
    width: u32,
    height: u32,
    color_type: u8,
    palette: Option<&[u8]>,
    filtered: &[u8],
) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();
    push_chunk(&mut out, b"IHDR", &ihdr(width, height, color_type));
    if let Some(palette) = palette {
        push_chunk(&mut out, b"PLTE", palette);
    }

    push_chunk(&mut out, b"IDAT", &zlib_compress(filtered));

    push_chunk(&mut out, b"IEND", &[]);
    out
}

/// Bytes per pixel for an 8-bit PNG color type.
pub fn bytes_per_pixel(color_type: u8) -> usize {
    match color_type {
        0 | 3 => 1,
        4 => 2,
        2 => 3,
        6 => 4,
        other => panic!("unsupported color type {other}"),
    }
}

/// Prefix every scanline of `raw` with filter byte 0.
pub fn filter_none(raw: &[u8], width: u32, color_type: u8) -> Vec<u8> {
    let row_bytes = width as usize * bytes_per_pixel(color_type);
    let mut filtered = Vec::with_capacity(raw.len() + raw.len() / row_bytes);
    for row in raw.chunks_exact(row_bytes) {
        filtered.push(0);
        filtered.extend_from_slice(row);
    }
    filtered
}

/// Build a filter-0 PNG straight from raw pixel rows.
pub fn png_from_raw(
    width: u32,
    height: u32,
    color_type: u8,
    palette: Option<&[u8]>,
    raw: &[u8],
) -> Vec<u8> {
    build_png(
        width,
        height,
        color_type,
        palette,
        &filter_none(raw, width, color_type),
    )
}

/// Forward-filter raw scanlines, row `y` using `filters[y]`, producing
/// the filtered stream a PNG encoder would emit.
pub fn filter_rows(raw: &[u8], width: u32, color_type: u8, filters: &[u8]) -> Vec<u8> {
    let bpp = bytes_per_pixel(color_type);
    let row_bytes = width as usize * bpp;
    let mut filtered = Vec::with_capacity(raw.len() + filters.len());
    let mut prev_row: Option<&[u8]> = None;

    for (row, &filter) in raw.chunks_exact(row_bytes).zip(filters) {
        filtered.push(filter);
        for x in 0..row_bytes {
            let a = if x >= bpp { row[x - bpp] } else { 0 };
            let b = prev_row.map_or(0, |p| p[x]);
            let c = if x >= bpp {
                prev_row.map_or(0, |p| p[x - bpp])
            } else {
                0
            };
            let predicted = match filter {
                0 => 0,
                1 => a,
                2 => b,
                3 => (((u16::from(a) + u16::from(b)) / 2) & 0xFF) as u8,
                4 => paeth(a, b, c),
                other => panic!("unsupported filter {other}"),
            };
            filtered.push(row[x].wrapping_sub(predicted));
        }
        prev_row = Some(row);
    }

    filtered
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
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
