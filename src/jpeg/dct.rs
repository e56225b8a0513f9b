//! Forward DCT for the JPEG encoder.
//!
//! Arai-Agui-Nakajima (AAN) fast DCT, applied to rows and then columns
//! of an 8x8 block. The outputs are uniformly scaled by 8x the reference
//! type-II DCT; the quantizer folds that factor into its divisor instead
//! of descaling here.

// cos(k*pi/16) factors used by the AAN butterflies.
const C2: f32 = 0.923_879_53;
const C4: f32 = 0.707_106_78;
const C6: f32 = 0.382_683_43;

/// Transform an 8x8 block in place.
pub fn forward_dct(block: &mut [f32; 64]) {
    for row in 0..8 {
        dct_1d(block, row * 8, 1);
    }
    for col in 0..8 {
        dct_1d(block, col, 8);
    }
}

/// One 8-point AAN pass over `block` starting at `offset` with the
/// given element `stride` (1 for rows, 8 for columns).
fn dct_1d(block: &mut [f32; 64], offset: usize, stride: usize) {
    let at = |k: usize| offset + k * stride;

    let tmp0 = block[at(0)] + block[at(7)];
    let tmp7 = block[at(0)] - block[at(7)];
    let tmp1 = block[at(1)] + block[at(6)];
    let tmp6 = block[at(1)] - block[at(6)];
    let tmp2 = block[at(2)] + block[at(5)];
    let tmp5 = block[at(2)] - block[at(5)];
    let tmp3 = block[at(3)] + block[at(4)];
    let tmp4 = block[at(3)] - block[at(4)];

    // Even part.
    let tmp10 = tmp0 + tmp3;
    let tmp13 = tmp0 - tmp3;
    let tmp11 = tmp1 + tmp2;
    let tmp12 = tmp1 - tmp2;

    block[at(0)] = tmp10 + tmp11;
    block[at(4)] = tmp10 - tmp11;

    let z1 = (tmp12 + tmp13) * C4;
    block[at(2)] = tmp13 + z1;
    block[at(6)] = tmp13 - z1;

    // Odd part.
    let tmp10 = tmp4 + tmp5;
    let tmp11 = tmp5 + tmp6;
    let tmp12 = tmp6 + tmp7;

    let z5 = (tmp10 - tmp12) * C6;
    let z2 = tmp10 * C2 + z5;
    let z4 = tmp12 * C6 + z5;
    let z3 = tmp11 * C4;

    let z11 = tmp7 + z3;
    let z13 = tmp7 - z3;

    block[at(5)] = z13 + z2;
    block[at(3)] = z13 - z2;
    block[at(1)] = z11 + z4;
    block[at(7)] = z11 - z4;
}
