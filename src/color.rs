//! Color conversion for the JPEG encoder.

/// Convert one RGB pixel to YCbCr as JFIF defines it, with the luma
/// channel level-shifted by -128.
///
/// All three outputs are centered on zero, ready for the forward DCT:
/// Y lands in [-128, 127] after the shift and Cb/Cr are produced
/// centered already (their +128 bias is never added).
#[inline]
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = f32::from(r);
    let g = f32::from(g);
    let b = f32::from(b);

    let y = 0.299 * r + 0.587 * g + 0.114 * b - 128.0;
    let cb = -0.168_736 * r - 0.331_264 * g + 0.5 * b;
    let cr = 0.5 * r - 0.418_688 * g - 0.081_312 * b;

    (y, cb, cr)
}
