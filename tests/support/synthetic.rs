//! Deterministic test image generation.

/// Solid RGB image.
pub fn solid_color(width: u32, height: u32, r: u8, g: u8, b: u8) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..width * height {
        pixels.extend_from_slice(&[r, g, b]);
    }
    pixels
}

/// Smooth RGB gradient: red varies with x, green with y, blue with both.
pub fn gradient_rgb(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width.max(1)) as u8;
            let g = ((y * 255) / height.max(1)) as u8;
            let b = (((x + y) * 127) / (width + height).max(1)) as u8;
            pixels.extend_from_slice(&[r, g, b]);
        }
    }
    pixels
}

/// Pseudo-random RGB noise from a simple LCG; deterministic per seed.
pub fn noise(width: u32, height: u32, seed: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    let mut state = seed;
    for _ in 0..width * height * 3 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        pixels.push((state >> 16) as u8);
    }
    pixels
}

/// Black/white checkerboard with the given cell size.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> Vec<u8> {
    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if ((x / cell) + (y / cell)) % 2 == 0 {
                255
            } else {
                0
            };
            pixels.extend_from_slice(&[v, v, v]);
        }
    }
    pixels
}
