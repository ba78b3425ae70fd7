use crate::{Sink, Source};

use super::{
    blit::{blit_sub_impl, BlitFlags},
    font::{FIRST_CHAR, FONT, LAST_CHAR},
    Wasm4Screen,
};

/// Width and height of a glyph, and the distance the cursor advances.
pub const CHAR_SIZE: u32 = 8;

/// Draw text using the built-in system font.
///
/// One byte per character. A NUL byte ends the string and `\n` moves the
/// cursor back to `x`, one line down. Characters without a glyph leave a
/// gap. Draw color 1 is the glyph, draw color 2 its background.
pub fn text<T: Source<u8> + Sink<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    text: &[u8],
    x: i32,
    y: i32,
) {
    text_impl(fb, draw_colors, text.iter().map(|&c| c as u32), x, y)
}

/// Draw UTF-8 text. See [`text`].
pub fn text_utf8<T: Source<u8> + Sink<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    text: &str,
    x: i32,
    y: i32,
) {
    text_impl(fb, draw_colors, text.chars().map(u32::from), x, y)
}

/// Draw UTF-16 text, one glyph per code unit. See [`text`].
pub fn text_utf16<T: Source<u8> + Sink<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    text: &[u16],
    x: i32,
    y: i32,
) {
    text_impl(fb, draw_colors, text.iter().map(|&c| c as u32), x, y)
}

fn text_impl<T, I>(fb: &mut T, draw_colors: u16, chars: I, x: i32, y: i32)
where
    T: Source<u8> + Sink<u8> + ?Sized,
    I: IntoIterator<Item = u32>,
{
    let mut screen = Wasm4Screen { fb };
    let (mut cur_x, mut cur_y) = (x as i64, y as i64);

    for c in chars {
        match c {
            0 => return,
            0x0a => {
                cur_y += CHAR_SIZE as i64;
                cur_x = x as i64;
            }
            FIRST_CHAR..=LAST_CHAR => {
                // a cursor that has left the i32 range is off screen for good
                if let (Ok(gx), Ok(gy)) = (i32::try_from(cur_x), i32::try_from(cur_y)) {
                    blit_sub_impl(
                        &mut screen,
                        &FONT,
                        (gx, gy),
                        (CHAR_SIZE, CHAR_SIZE),
                        (0, (c - FIRST_CHAR) * CHAR_SIZE),
                        CHAR_SIZE,
                        BlitFlags::default(),
                        draw_colors,
                    );
                }
                cur_x += CHAR_SIZE as i64;
            }
            _ => cur_x += CHAR_SIZE as i64,
        }
    }
}
