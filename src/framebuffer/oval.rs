use crate::{Sink, Source};

use super::{
    hline_impl, remap_draw_color, set_pixel_unclipped_impl, Screen, Wasm4Screen, DRAW_COLOR_1,
    DRAW_COLOR_2,
};

/// Draw an oval (circle).
///
/// An axis parallel ellipse inside the box at `x` and `y` with given `width`
/// and `height`. Draw color 1 fills the oval, draw color 2 outlines it.
/// The algorithm aligns with what is implemented in W4's framebuffer.c
pub fn oval<T: Sink<u8> + Source<u8> + ?Sized>(
    fb: &mut T,
    draw_colors: u16,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    oval_impl(
        &mut Wasm4Screen { fb },
        remap_draw_color(DRAW_COLOR_2, draw_colors),
        remap_draw_color(DRAW_COLOR_1, draw_colors),
        x,
        y,
        width,
        height,
    )
}

/// Midpoint ellipse, scanning along the edge of one quadrant and
/// mirroring each step into the other three.
pub(crate) fn oval_impl<T: Screen>(
    screen: &mut T,
    stroke: Option<u8>,
    fill: Option<u8>,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    if width == 0 || height == 0 || (stroke.is_none() && fill.is_none()) {
        return;
    }

    // boxes entirely off screen draw nothing
    if x as i64 + width as i64 <= 0
        || y as i64 + height as i64 <= 0
        || x >= T::WIDTH as i32
        || y >= T::HEIGHT as i32
    {
        return;
    }

    if width > MAX_EDGE_WALK || height > MAX_EDGE_WALK {
        oval_rows(screen, stroke, fill, x, y, width, height);
        return;
    }

    // the squared radii of a full u32 box overflow i64
    let (x, y) = (x as i128, y as i128);
    let width = width as i128;
    let height = height as i128;

    let mut a = width - 1;
    let b = height - 1;
    // compensates for the precision lost when halving the height
    let mut b1 = b % 2;

    let mut north = y + height / 2;
    let mut west = x;
    let mut east = x + width - 1;
    // for even heights the bottom line starts one above the top line
    let mut south = north - b1;

    let b2 = b * b;
    let a2 = a * a;

    // error increments
    let mut dx = 4 * (1 - a) * b2;
    let mut dy = 4 * (b1 + 1) * a2;
    let mut err = dx + dy + b1 * a2;

    a = 8 * a2;
    b1 = 8 * b2;

    let (screen_width, screen_height) = (T::WIDTH as i128, T::HEIGHT as i128);

    while west <= east {
        // west and east only move inwards while north and south only move
        // outwards, so once a pair is past the screen it stays there
        if west > screen_width || east < -1 || (north >= screen_height && south < 0) {
            return;
        }

        point(screen, stroke, east, north);
        point(screen, stroke, west, north);
        point(screen, stroke, west, south);
        point(screen, stroke, east, south);

        let start = west + 1;
        let len = east - start;

        if let Some(fill) = fill {
            if len > 0 {
                span(screen, fill, start, north, len);
                span(screen, fill, start, south, len);
            }
        }

        let err2 = 2 * err;

        if err2 <= dy {
            north += 1;
            south -= 1;
            dy += a;
            err += dy;
        }

        if err2 >= dx || 2 * err > dy {
            west += 1;
            east -= 1;
            dx += b1;
            err += dx;
        }
    }

    // finish the top and bottom tips of tall, thin ovals
    while north - south < height && (north < screen_height || south >= 0) {
        point(screen, stroke, west - 1, north);
        point(screen, stroke, east + 1, north);
        north += 1;

        point(screen, stroke, west - 1, south);
        point(screen, stroke, east + 1, south);
        south -= 1;
    }
}

/// Boxes wider or taller than this skip the edge walk, which would take
/// one step per pixel of the edge, and are drawn one visible row at a time.
const MAX_EDGE_WALK: u32 = 1 << 16;

/// Scanline ellipse for huge boxes. Each row spans the widest part of the
/// ellipse inside the row, and the pixels not covered by both neighboring
/// rows form the outline.
fn oval_rows<T: Screen>(
    screen: &mut T,
    stroke: Option<u8>,
    fill: Option<u8>,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    let (top, bottom) = (y as i64, y as i64 + height as i64);
    let rx = width as f64 / 2.0;
    let ry = height as f64 / 2.0;
    let cx = x as f64 + rx;
    let cy = y as f64 + ry;

    let extent = |row: i64| -> Option<(i64, i64)> {
        if row < top || row >= bottom {
            return None;
        }
        let (near, far) = (row as f64, (row + 1) as f64);
        let gap = if cy < near {
            near - cy
        } else if cy > far {
            cy - far
        } else {
            0.0
        };
        let dy = gap / ry;
        let half = rx * (1.0 - dy * dy).max(0.0).sqrt();
        let left = (cx - half - 0.5).ceil() as i64;
        let right = (cx + half - 0.5).floor() as i64;
        (left <= right).then_some((left, right))
    };

    for row in top.max(0)..bottom.min(T::HEIGHT as i64) {
        let Some((left, right)) = extent(row) else {
            continue;
        };
        let (inner_left, inner_right) = match (extent(row - 1), extent(row + 1)) {
            (Some((above_left, above_right)), Some((below_left, below_right))) => (
                (left + 1).max(above_left).max(below_left),
                (right - 1).min(above_right).min(below_right),
            ),
            _ => (left + 1, left),
        };

        if inner_left > inner_right {
            run(screen, stroke, row, left, right);
        } else {
            run(screen, stroke, row, left, inner_left - 1);
            run(screen, fill, row, inner_left, inner_right);
            run(screen, stroke, row, inner_right + 1, right);
        }
    }
}

fn run<T: Screen>(screen: &mut T, color: Option<u8>, y: i64, from: i64, to: i64) {
    if let Some(color) = color {
        if from <= to {
            span(screen, color, from as i128, y as i128, (to - from + 1) as i128);
        }
    }
}

fn point<T: Screen>(screen: &mut T, stroke: Option<u8>, x: i128, y: i128) {
    if let (Some(stroke), Ok(x), Ok(y)) = (stroke, i32::try_from(x), i32::try_from(y)) {
        set_pixel_unclipped_impl(screen, x, y, stroke);
    }
}

fn span<T: Screen>(screen: &mut T, fill: u8, x: i128, y: i128, len: i128) {
    let start = x.max(0);
    let end = (x + len).min(T::WIDTH as i128);
    if start < end {
        if let Ok(y) = i32::try_from(y) {
            hline_impl(screen, fill, start as i32, y, (end - start) as u32);
        }
    }
}
