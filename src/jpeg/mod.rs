//! Baseline sequential JPEG encoding (JFIF, 4:4:4 sampling).

pub mod dct;
pub mod huffman;
pub mod quantize;

use crate::bits::BitWriter;
use crate::color::rgb_to_ycbcr;

use dct::forward_dct;
use huffman::{encode_block, HuffmanTables};
use quantize::{quantize_block, QuantTables};

const SOI: u16 = 0xFFD8;
const EOI: u16 = 0xFFD9;
const APP0: u16 = 0xFFE0;
const DQT: u16 = 0xFFDB;
const SOF0: u16 = 0xFFC0;
const DHT: u16 = 0xFFC4;
const SOS: u16 = 0xFFDA;

/// Encode tightly packed RGB pixels as a baseline JFIF JPEG.
///
/// The output is a complete JPEG file: JFIF 1.1 APP0, two quantization
/// tables, SOF0 with three components at 4:4:4, the four standard
/// Huffman tables, one interleaved scan, no restart markers. `quality`
/// is silently clamped to 1..=100. Dimensions that are not multiples of
/// 8 are padded by edge replication.
///
/// # Panics
///
/// Panics if `width` or `height` is zero or exceeds 65535 (the SOF0
/// field width), or if `pixels.len()` is not `3 * width * height`.
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be nonzero");
    assert!(
        width <= 65535 && height <= 65535,
        "image dimensions must fit in a JPEG frame header"
    );
    let expected = 3 * width as usize * height as usize;
    assert_eq!(
        pixels.len(),
        expected,
        "pixel buffer must hold 3 * width * height bytes"
    );

    let quant = QuantTables::for_quality(quality);
    let tables = HuffmanTables::new();

    let mut output = Vec::with_capacity(expected / 4 + 1024);
    write_soi(&mut output);
    write_app0(&mut output);
    write_dqt(&mut output, &quant);
    write_sof0(&mut output, width as u16, height as u16);
    write_dht(&mut output);
    write_sos(&mut output);
    encode_scan(
        &mut output,
        pixels,
        width as usize,
        height as usize,
        &quant,
        &tables,
    );
    write_eoi(&mut output);
    output
}

fn write_soi(output: &mut Vec<u8>) {
    output.extend_from_slice(&SOI.to_be_bytes());
}

fn write_eoi(output: &mut Vec<u8>) {
    output.extend_from_slice(&EOI.to_be_bytes());
}

/// JFIF 1.1 APP0: aspect-ratio units, 1:1 density, no thumbnail.
fn write_app0(output: &mut Vec<u8>) {
    output.extend_from_slice(&APP0.to_be_bytes());
    output.extend_from_slice(&16u16.to_be_bytes());
    output.extend_from_slice(b"JFIF\0");
    output.push(1); // version 1.1
    output.push(1);
    output.push(0); // units: none
    output.extend_from_slice(&1u16.to_be_bytes()); // X density
    output.extend_from_slice(&1u16.to_be_bytes()); // Y density
    output.push(0); // thumbnail width
    output.push(0); // thumbnail height
}

/// Two quantization tables, 8-bit precision, entries in zigzag order.
fn write_dqt(output: &mut Vec<u8>, quant: &QuantTables) {
    output.extend_from_slice(&DQT.to_be_bytes());
    output.extend_from_slice(&67u16.to_be_bytes());
    output.push(0x00); // Pq=0, Tq=0: luminance
    output.extend_from_slice(&quant.luminance_zigzag);

    output.extend_from_slice(&DQT.to_be_bytes());
    output.extend_from_slice(&67u16.to_be_bytes());
    output.push(0x01); // Tq=1: chrominance
    output.extend_from_slice(&quant.chrominance_zigzag);
}

/// SOF0: 8-bit precision, three components, all sampled 1x1.
fn write_sof0(output: &mut Vec<u8>, width: u16, height: u16) {
    output.extend_from_slice(&SOF0.to_be_bytes());
    output.extend_from_slice(&17u16.to_be_bytes());
    output.push(8);
    output.extend_from_slice(&height.to_be_bytes());
    output.extend_from_slice(&width.to_be_bytes());
    output.push(3);

    // (component id, quantization table id)
    for (id, table) in [(1u8, 0u8), (2, 1), (3, 1)] {
        output.push(id);
        output.push(0x11); // H=1, V=1
        output.push(table);
    }
}

/// The four standard Huffman tables, each as 16 length counts followed
/// by the symbols.
fn write_dht(output: &mut Vec<u8>) {
    write_huffman_table(output, 0x00, &huffman::DC_LUM_BITS, &huffman::DC_LUM_VALS);
    write_huffman_table(output, 0x01, &huffman::DC_CHROM_BITS, &huffman::DC_CHROM_VALS);
    write_huffman_table(output, 0x10, &huffman::AC_LUM_BITS, &huffman::AC_LUM_VALS);
    write_huffman_table(output, 0x11, &huffman::AC_CHROM_BITS, &huffman::AC_CHROM_VALS);
}

fn write_huffman_table(output: &mut Vec<u8>, class_id: u8, bits: &[u8; 16], vals: &[u8]) {
    output.extend_from_slice(&DHT.to_be_bytes());
    output.extend_from_slice(&((2 + 1 + 16 + vals.len()) as u16).to_be_bytes());
    output.push(class_id);
    output.extend_from_slice(bits);
    output.extend_from_slice(vals);
}

/// SOS: Y uses DC/AC tables 0, Cb and Cr use tables 1.
fn write_sos(output: &mut Vec<u8>) {
    output.extend_from_slice(&SOS.to_be_bytes());
    output.extend_from_slice(&12u16.to_be_bytes());
    output.push(3);
    output.push(1);
    output.push(0x00);
    output.push(2);
    output.push(0x11);
    output.push(3);
    output.push(0x11);
    output.push(0); // Ss
    output.push(63); // Se
    output.push(0); // Ah/Al
}

/// Process the image in 8x8 blocks, raster order, Y then Cb then Cr per
/// block position.
fn encode_scan(
    output: &mut Vec<u8>,
    pixels: &[u8],
    width: usize,
    height: usize,
    quant: &QuantTables,
    tables: &HuffmanTables,
) {
    let mut writer = BitWriter::with_capacity(width * height / 2 + 64);

    // DC predictors for Y, Cb, Cr. They start at zero and, with no
    // restart markers, never reset again.
    let mut prev_y = 0i16;
    let mut prev_cb = 0i16;
    let mut prev_cr = 0i16;

    let padded_width = (width + 7) & !7;
    let padded_height = (height + 7) & !7;

    for block_y in (0..padded_height).step_by(8) {
        for block_x in (0..padded_width).step_by(8) {
            let (mut y_block, mut cb_block, mut cr_block) =
                extract_block(pixels, width, height, block_x, block_y);

            forward_dct(&mut y_block);
            let quantized = quantize_block(&y_block, &quant.luminance);
            prev_y = encode_block(&mut writer, &quantized, prev_y, true, tables);

            forward_dct(&mut cb_block);
            let quantized = quantize_block(&cb_block, &quant.chrominance);
            prev_cb = encode_block(&mut writer, &quantized, prev_cb, false, tables);

            forward_dct(&mut cr_block);
            let quantized = quantize_block(&cr_block, &quant.chrominance);
            prev_cr = encode_block(&mut writer, &quantized, prev_cr, false, tables);
        }
    }

    output.extend_from_slice(&writer.finish());
}

/// Pull an 8x8 tile out of the image as level-shifted YCbCr planes.
/// Out-of-range positions replicate the last row/column.
fn extract_block(
    pixels: &[u8],
    width: usize,
    height: usize,
    block_x: usize,
    block_y: usize,
) -> ([f32; 64], [f32; 64], [f32; 64]) {
    let mut y_block = [0.0f32; 64];
    let mut cb_block = [0.0f32; 64];
    let mut cr_block = [0.0f32; 64];

    for dy in 0..8 {
        let py = (block_y + dy).min(height - 1);
        for dx in 0..8 {
            let px = (block_x + dx).min(width - 1);
            let at = (py * width + px) * 3;

            let (y, cb, cr) = rgb_to_ycbcr(pixels[at], pixels[at + 1], pixels[at + 2]);
            let i = dy * 8 + dx;
            y_block[i] = y;
            cb_block[i] = cb;
            cr_block[i] = cr;
        }
    }

    (y_block, cb_block, cr_block)
}
