use core::ops::Range;

use crate::{
    wasm4::{BLIT_1BPP, BLIT_2BPP, BLIT_FLIP_X, BLIT_FLIP_Y, BLIT_ROTATE},
    Sink, Source,
};

use super::{remap_draw_color, set_pixel_unclipped_impl, Screen, Wasm4Screen};

/// Bit depth of sprite data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// One bit per pixel, eight pixels per byte.
    #[default]
    Blit1BPP,
    /// Two bits per pixel, four pixels per byte.
    Blit2BPP,
}

impl PixelFormat {
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Blit1BPP => 1,
            Self::Blit2BPP => 2,
        }
    }
}

/// The `flags` argument of `blit` and `blitSub`, decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlitFlags {
    pub format: PixelFormat,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Rotate 90° counter-clockwise. The flips apply to the sprite first,
    /// the turn to the flipped result.
    pub rotate: bool,
}

impl BlitFlags {
    /// Decode blit flags. Bits other than the four known ones are ignored.
    pub fn from_bits(flags: u32) -> Self {
        Self {
            format: if flags & BLIT_2BPP != 0 {
                PixelFormat::Blit2BPP
            } else {
                PixelFormat::Blit1BPP
            },
            flip_x: flags & BLIT_FLIP_X != 0,
            flip_y: flags & BLIT_FLIP_Y != 0,
            rotate: flags & BLIT_ROTATE != 0,
        }
    }

    pub fn bits(&self) -> u32 {
        let mut flags = match self.format {
            PixelFormat::Blit1BPP => BLIT_1BPP,
            PixelFormat::Blit2BPP => BLIT_2BPP,
        };
        if self.flip_x {
            flags |= BLIT_FLIP_X;
        }
        if self.flip_y {
            flags |= BLIT_FLIP_Y;
        }
        if self.rotate {
            flags |= BLIT_ROTATE;
        }
        flags
    }
}

/// Copy a sprite to the framebuffer.
///
/// Each sprite pixel selects a draw color: with 1BPP sprites a 0 bit
/// selects draw color 1 and a 1 bit draw color 2, with 2BPP sprites the
/// values 0 to 3 select draw colors 1 to 4. Pixels whose draw color is 0
/// are transparent.
#[allow(clippy::too_many_arguments)]
pub fn blit<S, T>(
    target: &mut T,
    sprite: &S,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    flags: u32,
    draw_colors: u16,
) where
    S: Source<u8> + ?Sized,
    T: Source<u8> + Sink<u8> + ?Sized,
{
    blit_sub(
        target,
        sprite,
        x,
        y,
        width,
        height,
        0,
        0,
        width,
        flags,
        draw_colors,
    )
}

/// Copy a subregion within a larger sprite atlas to the framebuffer.
///
/// Same as [`blit`], but with three additional parameters: the position
/// of the subregion in the atlas and the atlas width (`stride`) in pixels.
#[allow(clippy::too_many_arguments)]
pub fn blit_sub<S, T>(
    target: &mut T,
    sprite: &S,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    src_x: u32,
    src_y: u32,
    stride: u32,
    flags: u32,
    draw_colors: u16,
) where
    S: Source<u8> + ?Sized,
    T: Source<u8> + Sink<u8> + ?Sized,
{
    blit_sub_impl(
        &mut Wasm4Screen { fb: target },
        sprite,
        (x, y),
        (width, height),
        (src_x, src_y),
        stride,
        BlitFlags::from_bits(flags),
        draw_colors,
    )
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn blit_sub_impl<T, S>(
    screen: &mut T,
    sprite: &S,
    (x, y): (i32, i32),
    (width, height): (u32, u32),
    (src_x, src_y): (u32, u32),
    stride: u32,
    flags: BlitFlags,
    draw_colors: u16,
) where
    T: Screen,
    S: Source<u8> + ?Sized,
{
    // i64 keeps the clipping math free of overflow for any i32/u32 input
    let (x, y) = (x as i64, y as i64);
    let (width, height) = (width as i64, height as i64);

    // flipped sprite, then turned: the turn is a horizontal flip of the
    // source followed by a transposition of the destination
    let flip_x = flags.flip_x != flags.rotate;

    // ranges within the sprite's local coordinates. When rotating, the
    // local x axis runs along the screen's y axis and vice versa.
    let (w_range_x, w_range_y) = if flags.rotate {
        (
            calculate_target_range(y, width, T::HEIGHT as i64),
            calculate_target_range(x, height, T::WIDTH as i64),
        )
    } else {
        (
            calculate_target_range(x, width, T::WIDTH as i64),
            calculate_target_range(y, height, T::HEIGHT as i64),
        )
    };

    for wy in w_range_y {
        for wx in w_range_x.clone() {
            let (tx, ty) = if flags.rotate {
                (x + wy, y + wx)
            } else {
                (x + wx, y + wy)
            };

            let sx = src_x as i64 + if flip_x { width - wx - 1 } else { wx };
            let sy = src_y as i64 + if flags.flip_y { height - wy - 1 } else { wy };

            let color = get_sprite_pixel_draw_color(sprite, flags.format, sx, sy, stride as i64)
                .and_then(|draw_color_idx| remap_draw_color(draw_color_idx, draw_colors));

            if let Some(color) = color {
                set_pixel_unclipped_impl(screen, tx as i32, ty as i32, color)
            }
        }
    }
}

/// Returns the draw color index of a sprite pixel, or `None` if the pixel
/// lies past the end of the sprite data.
fn get_sprite_pixel_draw_color<T: Source<u8> + ?Sized>(
    sprite: &T,
    fmt: PixelFormat,
    x: i64,
    y: i64,
    stride: i64,
) -> Option<u8> {
    let pixel_index = usize::try_from(stride.checked_mul(y)?.checked_add(x)?).ok()?;
    match fmt {
        PixelFormat::Blit1BPP => {
            let byte = sprite.item_at(pixel_index >> 3)?;
            Some((byte >> (7 - (pixel_index & 0x07))) & 0x01)
        }
        PixelFormat::Blit2BPP => {
            let byte = sprite.item_at(pixel_index >> 2)?;
            Some((byte >> (6 - ((pixel_index & 0x03) << 1))) & 0x03)
        }
    }
}

/// Get the pixel width from blit flags parameter.
pub fn pixel_width_of_flags(flags: u32) -> u32 {
    BlitFlags::from_bits(flags).format.bits_per_pixel()
}

/// Number of sprite bytes a `blitSub` call with these arguments can read.
pub fn sprite_byte_len(
    width: u32,
    height: u32,
    src_x: u32,
    src_y: u32,
    stride: u32,
    flags: u32,
) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }

    let last_pixel = (src_y as u64 + height as u64 - 1)
        .saturating_mul(stride as u64)
        .saturating_add(src_x as u64 + width as u64 - 1);
    let bits = last_pixel
        .saturating_add(1)
        .saturating_mul(pixel_width_of_flags(flags) as u64);
    usize::try_from(bits.saturating_add(7) / 8).unwrap_or(usize::MAX)
}

/// The range of sprite-local coordinates along one axis that land on
/// screen, given the target start coordinate and the sprite extent.
fn calculate_target_range(tgt_coord: i64, tgt_extent: i64, clip_end: i64) -> Range<i64> {
    Range {
        start: i64::max(0, tgt_coord) - tgt_coord,
        end: i64::min(tgt_extent, clip_end - tgt_coord),
    }
}
