//! Framebuffer drawing functions.
//!
//! The framebuffer packs four 2 bit pixels into each byte, the leftmost
//! pixel in the least significant bits. Every function here clips to the
//! screen per pixel, so shapes that are partly off screen draw their
//! visible part and everything else is silently skipped.

use crate::{wasm4::SCREEN_SIZE, Sink, Source};

#[cfg(test)]
mod tests;

mod blit;
mod font;
mod line;
mod oval;
mod rect;
mod text;

pub use blit::{blit, blit_sub, pixel_width_of_flags, sprite_byte_len, BlitFlags, PixelFormat};
pub use line::{hline, line, vline};
pub use oval::oval;
pub use rect::rect;
pub use text::{text, text_utf16, text_utf8, CHAR_SIZE};

use line::{hline_impl, vline_impl};

const DRAW_COLOR_1: u8 = 0;
const DRAW_COLOR_2: u8 = 1;

/// A common trait for index-based framebuffers.
pub(crate) trait Screen {
    type Framebuffer: Source<u8> + Sink<u8> + ?Sized;
    const WIDTH: u32;
    const HEIGHT: u32;
    fn fb(&self) -> &Self::Framebuffer;
    fn fb_mut(&mut self) -> &mut Self::Framebuffer;
}

/// The WASM-4 specific implementation of [`Screen`].
struct Wasm4Screen<'a, B: Sink<u8> + Source<u8> + ?Sized> {
    fb: &'a mut B,
}

impl<'a, B: Sink<u8> + Source<u8> + ?Sized> Screen for Wasm4Screen<'a, B> {
    type Framebuffer = B;
    const WIDTH: u32 = SCREEN_SIZE;
    const HEIGHT: u32 = SCREEN_SIZE;

    fn fb(&self) -> &Self::Framebuffer {
        self.fb
    }

    fn fb_mut(&mut self) -> &mut Self::Framebuffer {
        self.fb
    }
}

/// Set a pixel on the screen to a color in the palette, ignoring
/// coordinates that are off screen.
pub fn set_pixel<T: Source<u8> + Sink<u8> + ?Sized>(fb: &mut T, x: i32, y: i32, color: u8) {
    let mut screen = Wasm4Screen { fb };
    set_pixel_unclipped_impl(&mut screen, x, y, color)
}

/// Get the palette index of the pixel at `x`, `y`.
pub fn get_pixel<T: Source<u8> + ?Sized>(fb: &T, x: i32, y: i32) -> Option<u8> {
    if !on_screen(x, y, SCREEN_SIZE, SCREEN_SIZE) {
        return None;
    }

    let idx = (SCREEN_SIZE as usize * y as usize + x as usize) >> 2;
    let shift = (x & 0x3) << 1;
    fb.item_at(idx).map(|byte| (byte >> shift) & 0x3)
}

/// Callers make sure `x` and `y` are on screen.
pub(crate) fn set_pixel_impl<S: Screen>(s: &mut S, x: i32, y: i32, color: u8) {
    let idx: usize = (S::WIDTH as usize * y as usize + x as usize) >> 2;
    let shift = (x & 0x3) << 1;
    let mask = 0x3 << shift;

    if let Some(fb_byte) = s.fb().item_at(idx) {
        s.fb_mut()
            .set_item_at(idx, ((color & 0x3) << shift) | (fb_byte & !mask));
    }
}

pub(crate) fn set_pixel_unclipped_impl<S: Screen>(s: &mut S, x: i32, y: i32, color: u8) {
    if on_screen(x, y, S::WIDTH, S::HEIGHT) {
        set_pixel_impl(s, x, y, color);
    }
}

fn on_screen(x: i32, y: i32, width: u32, height: u32) -> bool {
    x >= 0 && (x as u32) < width && y >= 0 && (y as u32) < height
}

/// Clears an entire framebuffer.
pub fn clear<T: Sink<u8> + ?Sized>(fb: &mut T) {
    fb.fill(0u8);
}

/// Returns the palette index selected by the draw color at `draw_color_idx`,
/// or `None` if that draw color is transparent.
fn remap_draw_color(draw_color_idx: u8, draw_colors: u16) -> Option<u8> {
    let draw_color = (draw_colors >> (draw_color_idx * 4)) & 0xf;
    if draw_color == 0 {
        None
    } else {
        Some(((draw_color - 1) & 0x3) as u8)
    }
}
