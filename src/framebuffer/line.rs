use crate::{Sink, Source};
use core::mem;

use super::{
    remap_draw_color, set_pixel_impl, set_pixel_unclipped_impl, Screen, Wasm4Screen, DRAW_COLOR_1,
};

/// Draw a line between two points.
///
/// See <https://github.com/aduros/wasm4/blob/main/runtimes/native/src/framebuffer.c>,
/// who in turn took it from <https://github.com/nesbox/TIC-80/blob/master/src/core/draw.c>
pub fn line<T: Source<u8> + Sink<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) {
    if let Some(stroke) = remap_draw_color(DRAW_COLOR_1, draw_colors) {
        line_impl(&mut Wasm4Screen { fb }, stroke, x1, y1, x2, y2);
    }
}

pub(crate) fn line_impl<T: Screen>(
    screen: &mut T,
    stroke_color: u8,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) {
    let (mut x1, mut y1, mut x2, mut y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);

    // always walk downwards, which makes the pixels independent of the
    // order the end points are given in
    if y1 > y2 {
        mem::swap(&mut x1, &mut x2);
        mem::swap(&mut y1, &mut y2);
    }

    let dx = (x2 - x1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let dy = y2 - y1;

    let mut err = (if dx > dy { dx } else { -dy }) / 2;

    // jump to the first step that can be on screen instead of walking the
    // part of the line that leads up to it
    let steps = dx.max(dy);
    if steps > 0 {
        let walk = Walk {
            x: x1,
            y: y1,
            err,
            dx,
            dy,
            sx,
        };
        let reached = |n: i64| {
            let (x, y, _) = walk.after(n);
            y >= 0 && if sx > 0 { x >= 0 } else { x < T::WIDTH as i64 }
        };

        if !reached(0) {
            if !reached(steps) {
                return;
            }
            let (mut lo, mut hi) = (0, steps);
            while lo < hi {
                let mid = lo + (hi - lo) / 2;
                if reached(mid) {
                    hi = mid;
                } else {
                    lo = mid + 1;
                }
            }
            (x1, y1, err) = walk.after(lo);
        }
    }

    loop {
        // x and y only ever move in one direction, so nothing is left to
        // draw once we've walked off the screen on either axis
        if y1 >= T::HEIGHT as i64
            || (sx > 0 && x1 >= T::WIDTH as i64)
            || (sx < 0 && x1 < 0)
        {
            break;
        }

        set_pixel_unclipped_impl(screen, x1 as i32, y1 as i32, stroke_color);

        if x1 == x2 && y1 == y2 {
            break;
        }

        let err2 = err;

        if err2 > -dx {
            err -= dy;
            x1 += sx;
        }

        if err2 < dy {
            err += dx;
            y1 += 1;
        }
    }
}

/// Closed form of the line loop below.
///
/// Along the major axis every step moves one pixel, and the error term
/// stays in `(-dy, 0]` for steep lines and in `[0, dx)` for flat ones, which
/// fixes how many minor axis moves `n` steps have made.
struct Walk {
    x: i64,
    y: i64,
    err: i64,
    dx: i64,
    dy: i64,
    sx: i64,
}

impl Walk {
    /// Position and error term after `n` steps.
    fn after(&self, n: i64) -> (i64, i64, i64) {
        let (n, dx, dy, err) = (n as i128, self.dx as i128, self.dy as i128, self.err as i128);
        let (x, y, sx) = (self.x as i128, self.y as i128, self.sx as i128);

        if dx > dy {
            let t = n * dy - err;
            let moves = div_ceil_positive(t, dx);
            ((x + sx * n) as i64, (y + moves) as i64, (moves * dx - t) as i64)
        } else {
            let t = err + n * dx;
            let moves = div_ceil_positive(t, dy);
            ((x + sx * moves) as i64, (y + n) as i64, (t - moves * dy) as i64)
        }
    }
}

fn div_ceil_positive(n: i128, d: i128) -> i128 {
    if n <= 0 {
        0
    } else {
        (n + d - 1) / d
    }
}

/// Draw a horizontal line.
///
/// Specifically, between `(x, y)` and `(x + len - 1, y)`.
pub fn hline<T: Source<u8> + Sink<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    x: i32,
    y: i32,
    len: u32,
) {
    if let Some(stroke) = remap_draw_color(DRAW_COLOR_1, draw_colors) {
        hline_impl(&mut Wasm4Screen { fb }, stroke, x, y, len);
    }
}

pub(crate) fn hline_impl<T: Screen>(screen: &mut T, stroke: u8, x: i32, y: i32, len: u32) {
    if y < 0 || y >= T::HEIGHT as i32 {
        return;
    }

    let mut start_x = x.max(0);
    let end_x = (x as i64 + len as i64).min(T::WIDTH as i64) as i32;

    if start_x >= end_x {
        return;
    }

    // fill whole bytes at once where the line covers them completely
    let fill_end = end_x - (end_x & 3);
    let fill_start = fill_end.min((start_x + 3) & !3);

    if fill_end - fill_start > 3 {
        for x in start_x..fill_start {
            set_pixel_impl(screen, x, y, stroke);
        }

        let from = ((T::WIDTH as i32 * y + fill_start) >> 2) as usize;
        let to = ((T::WIDTH as i32 * y + fill_end) >> 2) as usize;
        let byte_stroke = (stroke & 0x3) * 0x55;

        for idx in from..to {
            screen.fb_mut().set_item_at(idx, byte_stroke);
        }
        start_x = fill_end;
    }

    for x in start_x..end_x {
        set_pixel_impl(screen, x, y, stroke);
    }
}

/// Draw a vertical line.
///
/// Specifically, between `(x, y)` and `(x, y + len - 1)`.
pub fn vline<T: Source<u8> + Sink<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    x: i32,
    y: i32,
    len: u32,
) {
    if let Some(stroke) = remap_draw_color(DRAW_COLOR_1, draw_colors) {
        vline_impl(&mut Wasm4Screen { fb }, stroke, x, y, len);
    }
}

pub(crate) fn vline_impl<T: Screen>(screen: &mut T, stroke: u8, x: i32, y: i32, len: u32) {
    if x < 0 || x >= T::WIDTH as i32 {
        return;
    }

    let start_y = y.max(0);
    let end_y = (y as i64 + len as i64).min(T::HEIGHT as i64) as i32;

    for y in start_y..end_y {
        set_pixel_impl(screen, x, y, stroke);
    }
}
