//! Various utility functions for WASM-4.

use byteorder::{ByteOrder, LittleEndian};

use crate::wasm4::{FRAMEBUFFER_SIZE, PALETTE_SIZE, SCREEN_SIZE};

/// The palette a cartridge starts with.
pub const DEFAULT_PALETTE: [u32; 4] = [0xe0f8cf, 0x86c06c, 0x306850, 0x071821];

/// The draw colors a cartridge starts with.
pub const DEFAULT_DRAW_COLORS: u16 = 0x1203;

/// Returns the default WASM-4 palette as it is laid out in memory.
pub fn default_palette() -> [u8; PALETTE_SIZE] {
    let mut buf = [0; PALETTE_SIZE];
    LittleEndian::write_u32_into(&DEFAULT_PALETTE, &mut buf);
    buf
}

/// Returns the default WASM-4 draw colors as they are laid out in memory.
pub fn default_draw_colors() -> [u8; 2] {
    DEFAULT_DRAW_COLORS.to_le_bytes()
}

/// Returns an empty WASM-4 framebuffer.
pub fn default_framebuffer() -> [u8; FRAMEBUFFER_SIZE] {
    [0; FRAMEBUFFER_SIZE]
}

/// Expand a 2BPP framebuffer into 24 bit RGB pixels using `palette`.
pub fn framebuffer_to_rgb(framebuffer: &[u8], palette: [u32; 4]) -> Vec<u8> {
    let pixels = (SCREEN_SIZE * SCREEN_SIZE) as usize;
    let mut rgb = Vec::with_capacity(pixels * 3);

    for byte in framebuffer.iter().take(FRAMEBUFFER_SIZE) {
        for n in 0..4 {
            let color = palette[((byte >> (n * 2)) & 0b11) as usize];
            rgb.push((color >> 16) as u8);
            rgb.push((color >> 8) as u8);
            rgb.push(color as u8);
        }
    }

    rgb
}
