use crate::{Sink, Source};

use super::{
    hline_impl, remap_draw_color, vline_impl, Screen, Wasm4Screen, DRAW_COLOR_1, DRAW_COLOR_2,
};

/// Draw a rectangle.
///
/// Draw color 1 fills the rectangle, draw color 2 outlines it.
pub fn rect<T: Source<u8> + Sink<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    rect_impl(
        &mut Wasm4Screen { fb },
        remap_draw_color(DRAW_COLOR_2, draw_colors),
        remap_draw_color(DRAW_COLOR_1, draw_colors),
        x,
        y,
        width,
        height,
    )
}

pub(crate) fn rect_impl<T: Screen>(
    screen: &mut T,
    stroke: Option<u8>,
    fill: Option<u8>,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    if width == 0 || height == 0 {
        return;
    }

    let end_y = y as i64 + height as i64;
    // edges past i32::MAX are off screen either way
    let right = (x as i64 + width as i64 - 1).min(i32::MAX as i64) as i32;
    let bottom = (end_y - 1).min(i32::MAX as i64) as i32;

    if let Some(fill) = fill {
        let start_fy = y.max(0);
        let end_fy = end_y.min(T::HEIGHT as i64) as i32;
        for fy in start_fy..end_fy {
            hline_impl(screen, fill, x, fy, width);
        }
    }

    if let Some(stroke) = stroke {
        hline_impl(screen, stroke, x, y, width);
        hline_impl(screen, stroke, x, bottom, width);
        vline_impl(screen, stroke, x, y, height);
        vline_impl(screen, stroke, right, y, height);
    }
}
