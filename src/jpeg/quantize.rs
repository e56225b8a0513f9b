//! JPEG quantization tables and zigzag ordering.

/// Annex K luminance quantization table, natural (row-major) order.
const STD_LUMINANCE: [u8; 64] = [
    16, 11, 10, 16, 24, 40, 51, 61, 12, 12, 14, 19, 26, 58, 60, 55, 14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62, 18, 22, 37, 56, 68, 109, 103, 77, 24, 35, 55, 64, 81, 104, 113,
    92, 49, 64, 78, 87, 103, 121, 120, 101, 72, 92, 95, 98, 112, 100, 103, 99,
];

/// Annex K chrominance quantization table, natural order.
const STD_CHROMINANCE: [u8; 64] = [
    17, 18, 24, 47, 99, 99, 99, 99, 18, 21, 26, 66, 99, 99, 99, 99, 24, 26, 56, 99, 99, 99, 99, 99,
    47, 66, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
];

/// Zigzag scan order: `ZIGZAG[i]` is the natural index of zigzag
/// position `i`.
pub const ZIGZAG: [usize; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10, 17, 24, 32, 25, 18, 11, 4, 5, 12, 19, 26, 33, 40, 48, 41, 34, 27, 20,
    13, 6, 7, 14, 21, 28, 35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51, 58, 59,
    52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
];

/// Quality-scaled quantization tables for one encode.
pub struct QuantTables {
    /// Luminance divisors in zigzag order, exactly as written to DQT.
    pub luminance_zigzag: [u8; 64],
    /// Chrominance divisors in zigzag order, for the second DQT table.
    pub chrominance_zigzag: [u8; 64],
    /// Luminance divisors in natural order, for the quantizer.
    pub luminance: [f32; 64],
    /// Chrominance divisors in natural order.
    pub chrominance: [f32; 64],
}

impl QuantTables {
    /// Build tables for `quality`, silently clamped to 1..=100.
    ///
    /// Uses the libjpeg scaling: below 50 the base tables are scaled up
    /// by 5000/q, above by 200 - 2q, each entry clamped to 1..=255.
    pub fn for_quality(quality: u8) -> Self {
        let q = u32::from(quality.clamp(1, 100));
        let scale = if q < 50 { 5000 / q } else { 200 - 2 * q };

        let scaled = |base: u8| ((u32::from(base) * scale + 50) / 100).clamp(1, 255);

        let mut tables = Self {
            luminance_zigzag: [0; 64],
            chrominance_zigzag: [0; 64],
            luminance: [0.0; 64],
            chrominance: [0.0; 64],
        };

        for i in 0..64 {
            let lum = scaled(STD_LUMINANCE[i]);
            let chrom = scaled(STD_CHROMINANCE[i]);
            tables.luminance[i] = lum as f32;
            tables.chrominance[i] = chrom as f32;
        }
        for (zz, &natural) in ZIGZAG.iter().enumerate() {
            tables.luminance_zigzag[zz] = tables.luminance[natural] as u8;
            tables.chrominance_zigzag[zz] = tables.chrominance[natural] as u8;
        }

        tables
    }
}

/// Quantize an AAN-scaled DCT block against a natural-order table.
///
/// The divisor is `Q[i] * 8` because [`crate::jpeg::dct::forward_dct`] leaves its
/// outputs at 8x the reference transform. Rounding is half away from
/// zero, via truncation of the +-0.5-adjusted quotient.
pub fn quantize_block(coeffs: &[f32; 64], table: &[f32; 64]) -> [i16; 64] {
    let mut out = [0i16; 64];
    for i in 0..64 {
        let scaled = coeffs[i] / (table[i] * 8.0);
        out[i] = if scaled > 0.0 {
            (scaled + 0.5) as i16
        } else {
            (scaled - 0.5) as i16
        };
    }
    out
}

/// Reorder a natural-order block into zigzag sequence.
pub fn zigzag_scan(block: &[i16; 64]) -> [i16; 64] {
    let mut out = [0i16; 64];
    for (zz, &natural) in ZIGZAG.iter().enumerate() {
        out[zz] = block[natural];
    }
    out
}
