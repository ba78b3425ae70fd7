use core::mem;
use num_traits::{PrimInt, Unsigned};
use std::fmt::Write;

use crate::wasm4::{BLIT_2BPP, BLIT_FLIP_X, BLIT_FLIP_Y, BLIT_ROTATE, FRAMEBUFFER_SIZE};

use super::{
    blit, blit_sub,
    blit::{blit_sub_impl, BlitFlags, PixelFormat},
    clear, get_pixel, hline, line,
    line::{hline_impl, line_impl, vline_impl},
    oval,
    oval::oval_impl,
    rect,
    rect::rect_impl,
    set_pixel, text, text_utf16, text_utf8, vline, Screen,
};

#[derive(PartialEq)]
struct ArrayScreen<const N: usize, const W: u32> {
    fb: [u8; N],
}

impl<const N: usize, const W: u32> std::fmt::Debug for ArrayScreen<N, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "ArrayScreen(WIDTH:{},HEIGHT:{}). framebuffer:",
            Self::WIDTH,
            Self::HEIGHT
        )?;
        for n in 0..Self::HEIGHT as usize {
            let start = n * Self::WIDTH as usize / 4;
            let end = (n + 1) * Self::WIDTH as usize / 4;
            f.write_str(&as_fb_line(&self.fb()[start..end]))?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl<const N: usize, const W: u32> ArrayScreen<N, W> {
    fn new() -> ArrayScreen<N, W> {
        ArrayScreen::<N, W> { fb: [0u8; N] }
    }

    fn new_with_fb_lines(fb_lines: &[Vec<u8>]) -> ArrayScreen<N, W> {
        let mut s = Self::new();
        for (n, line) in fb_lines.iter().enumerate() {
            let start = n * Self::WIDTH as usize / 4;
            let end = (n + 1) * Self::WIDTH as usize / 4;
            s.fb_mut()[start..end].copy_from_slice(line.as_slice());
        }
        s
    }
}

impl<const N: usize, const W: u32> Screen for ArrayScreen<N, W> {
    type Framebuffer = [u8; N];
    const WIDTH: u32 = W;
    const HEIGHT: u32 = N as u32 * 4 / W;

    fn fb(&self) -> &Self::Framebuffer {
        &self.fb
    }

    fn fb_mut(&mut self) -> &mut Self::Framebuffer {
        &mut self.fb
    }
}

/// Bit layouts the literal helpers below can produce.
#[derive(Clone, Copy)]
enum Layout {
    Sprite(PixelFormat),
    /// 2 bits per pixel, leftmost pixel in the least significant bits.
    Framebuffer,
}

/// create a Vec<u8> of framebuffer data from pixels from an integer literal
fn as_fb_vec<T>(n: T) -> Vec<u8>
where
    T: PrimInt + Unsigned,
{
    as_pix_vec(n, Layout::Framebuffer)
}

/// create a Vec<u8> of 1BPP sprite data from pixels from an integer literal
fn as_b1_vec<T>(n: T) -> Vec<u8>
where
    T: PrimInt + Unsigned,
{
    as_pix_vec(n, Layout::Sprite(PixelFormat::Blit1BPP))
}

/// create a Vec<u8> of 2BPP sprite data from pixels from an integer literal
fn as_b2_vec<T>(n: T) -> Vec<u8>
where
    T: PrimInt + Unsigned,
{
    as_pix_vec(n, Layout::Sprite(PixelFormat::Blit2BPP))
}

/// Spell out pixel rows as integer literals, most significant bits being
/// the leftmost pixels, and convert them into the byte layout `layout`
/// stores them in.
fn as_pix_vec<T>(n: T, layout: Layout) -> Vec<u8>
where
    T: PrimInt + Unsigned,
{
    let (pix_size, reverse_pixel_order) = match layout {
        Layout::Sprite(fmt) => (fmt.bits_per_pixel() as usize, false),
        Layout::Framebuffer => (2, true),
    };

    let mut v = Vec::with_capacity(mem::size_of::<T>());
    let mask = T::from(0xff >> (8 - pix_size)).unwrap();
    for i in 0..mem::size_of::<T>() {
        let mut b = 0u8;
        for j in 0..(8 / pix_size) {
            b <<= pix_size;
            let shift = if reverse_pixel_order {
                j * pix_size
            } else {
                8 - (j + 1) * pix_size
            };
            let pix = n.shr(i * 8 + shift);
            b |= pix.bitand(mask).to_u8().unwrap();
        }
        v.insert(0, b);
    }

    v
}

fn as_fb_line(v: &[u8]) -> String {
    let prefix = "0b";
    let mut s = String::with_capacity(prefix.len() + v.len() * 4 * 3);
    s += prefix;
    for e in v {
        for n in 0..4 {
            s += "_";
            s += &((e >> (2 * n + 1)) & 0b1).to_string();
            s += &((e >> (2 * n)) & 0b1).to_string();
        }
    }
    s
}

fn full_fb() -> Vec<u8> {
    vec![0u8; FRAMEBUFFER_SIZE]
}

#[test]
fn test_as_fb_vec() {
    assert_eq!(vec![0b_10_01_01_10_u8], as_fb_vec(0b_10_01_01_10_u8));

    // leftmost pixels end up in the low bits of the first byte
    assert_eq!(
        vec![0b_11_00_01_11_u8, 0b_10_01_01_10_u8],
        as_fb_vec(0b_11_01_00_11__10_01_01_10_u16)
    );
}

#[test]
fn test_as_b1_vec() {
    assert_eq!(
        vec![0b__0__0__0__0__1__1__1__0_u8],
        as_b1_vec(0b__0__0__0__0__1__1__1__0_u8)
    )
}

#[test]
fn test_as_b2_vec() {
    assert_eq!(
        vec![0b_11_01_00_11_u8, 0b_10_01_01_10_u8],
        as_b2_vec(0b_11_01_00_11__10_01_01_10_u16)
    )
}

#[test]
fn test_as_fb_line() {
    let fb_vec = as_fb_vec(0b_10_10_10_10_11_00_11_11_11_10_11_10_10_10_10_10__u32);
    assert_eq!(
        "0b_10_10_10_10_11_00_11_11_11_10_11_10_10_10_10_10",
        as_fb_line(&fb_vec)
    );
}

#[test]
fn test_blit_flags_decode() {
    let flags = BlitFlags::from_bits(BLIT_2BPP | BLIT_ROTATE | 0xf0);
    assert_eq!(flags.format, PixelFormat::Blit2BPP);
    assert!(flags.rotate);
    assert!(!flags.flip_x && !flags.flip_y);
    assert_eq!(flags.bits(), BLIT_2BPP | BLIT_ROTATE);
}

#[test]
fn test_blit_sub_1byte() {
    let draw_colors = 0x4320;

    let sprite = as_b1_vec(0b__0__0__0__0__1__1__1__0_u8);
    let mut fb = as_fb_vec(0b_00_00_00_00_00_00_00_00_u16);
    let expected_fb = as_fb_vec(0b_00_00_00_00_01_01_01_00_u16);

    blit_sub(&mut fb, &sprite, 0, 0, 8, 1, 0, 0, 8, 0, draw_colors);
    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb));

    // draw color 1 is 0, so the 0 bits of the sprite leave the
    // framebuffer untouched
    let mut fb = as_fb_vec(0b_00_10_10_00_11_11_11_11_u16);
    let expected_fb = as_fb_vec(0b_00_10_10_00_01_01_01_11_u16);

    blit_sub(&mut fb, &sprite, 0, 0, 8, 1, 0, 0, 8, 0, draw_colors);
    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb));
}

#[test]
fn test_blit_1bpp_single_set_bit() {
    let sprite = [0b1000_0000u8];
    let mut fb = as_fb_vec(0b_00_01_10_01_00_01_10_01_u16);
    let expected_fb = as_fb_vec(0b_11_01_10_01_00_01_10_01_u16);

    blit(&mut fb, &sprite, 0, 0, 8, 1, 0, 0x0040);
    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb));
}

#[test]
fn test_blit_sub_1byte_misaligned() {
    let draw_colors = 0x4320;

    // a 2BPP sprite drawn at x=2 straddles two framebuffer bytes
    let sprite = as_b2_vec(0b_10_11_11_10__u8);
    let mut fb = as_fb_vec(0b_00_00_00_00_00_00_00_00__u16);
    let expected_fb = as_fb_vec(0b_00_00_10_11_11_10_00_00__u16);

    blit_sub(&mut fb, &sprite, 2, 0, 4, 1, 0, 0, 8, BLIT_2BPP, draw_colors);

    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb))
}

#[test]
fn test_blit_sub_atlas() {
    let draw_colors = 0x4321;

    let src_x = 3;
    let width = 8 - src_x;
    let sprite = as_b2_vec(0b_00_00_00_01_10_11_01_10_00_00_00_00_00_00_00_00_u32);
    let stride = (sprite.len() * 4) as u32;

    let mut fb = as_fb_vec(0b_00_00_00_00_00_00_00_00_00_00_00_00_00_00_00_00_u32);
    let expected_fb = as_fb_vec(0b_00_00_00_01_10_11_01_10_00_00_00_00_00_00_00_00_u32);
    blit_sub(&mut fb, &sprite, 3, 0, width, 1, src_x, 0, stride, BLIT_2BPP, draw_colors);
    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb));

    // 0 pixels in the sprite select draw color 1, which overwrites
    let mut fb = as_fb_vec(0b_10_10_10_10_10_10_10_10_10_10_10_10_10_10_10_10__u32);
    let expected_fb = as_fb_vec(0b_10_10_10_01_10_11_01_10_10_10_10_10_10_10_10_10__u32);
    blit_sub(&mut fb, &sprite, 3, 0, width, 1, src_x, 0, stride, BLIT_2BPP, draw_colors);
    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb));
}

#[test]
fn test_blit_flip_x() {
    let sprite = as_b2_vec(0b_01_10_11_00_u8);
    let mut fb = as_fb_vec(0b_11_11_11_11_u8);
    let expected_fb = as_fb_vec(0b_00_11_10_01_u8);

    blit(&mut fb, &sprite, 0, 0, 4, 1, BLIT_2BPP | BLIT_FLIP_X, 0x4321);
    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb));
}

#[test]
fn test_blit_flip_y() {
    let mut screen = ArrayScreen::<2, 4>::new();
    let sprite = as_b2_vec(0b_01_01_01_01__10_10_10_10_u16);
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_10_10_10_10_u8),
        as_fb_vec(0b_01_01_01_01_u8),
    ]);

    blit_sub_impl(
        &mut screen,
        &sprite,
        (0, 0),
        (4, 2),
        (0, 0),
        4,
        BlitFlags::from_bits(BLIT_2BPP | BLIT_FLIP_Y),
        0x4321,
    );
    assert_eq!(screen, expected);
}

#[test]
fn test_blit_rotate() {
    // a 2×1 row turned counter-clockwise becomes a 1×2 column with the
    // rightmost pixel on top
    let mut screen = ArrayScreen::<4, 4>::new();
    let sprite = as_b2_vec(0b_01_10_00_00_u8);
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_10_00_00_00_u8),
        as_fb_vec(0b_01_00_00_00_u8),
        as_fb_vec(0b_00_00_00_00_u8),
        as_fb_vec(0b_00_00_00_00_u8),
    ]);

    blit_sub_impl(
        &mut screen,
        &sprite,
        (0, 0),
        (2, 1),
        (0, 0),
        2,
        BlitFlags::from_bits(BLIT_2BPP | BLIT_ROTATE),
        0x4321,
    );
    println!("{:?}", &screen);
    assert_eq!(screen, expected);
}

#[test]
fn test_blit_rotate_with_flips() {
    // 2×2 sprite holding
    //   1 2
    //   3 0
    // flipped first, then turned counter-clockwise
    let sprite = as_b2_vec(0b_01_10_11_00_u8);
    let cases = [
        (BLIT_ROTATE, [0b_10_00_00_00_u8, 0b_01_11_00_00_u8]),
        (BLIT_ROTATE | BLIT_FLIP_X, [0b_01_11_00_00_u8, 0b_10_00_00_00_u8]),
        (BLIT_ROTATE | BLIT_FLIP_Y, [0b_00_10_00_00_u8, 0b_11_01_00_00_u8]),
        (
            BLIT_ROTATE | BLIT_FLIP_X | BLIT_FLIP_Y,
            [0b_11_01_00_00_u8, 0b_00_10_00_00_u8],
        ),
    ];

    for (flags, [row0, row1]) in cases {
        let mut screen = ArrayScreen::<4, 4>::new();
        let expected = ArrayScreen::new_with_fb_lines(&[
            as_fb_vec(row0),
            as_fb_vec(row1),
            as_fb_vec(0b_00_00_00_00_u8),
            as_fb_vec(0b_00_00_00_00_u8),
        ]);

        blit_sub_impl(
            &mut screen,
            &sprite,
            (0, 0),
            (2, 2),
            (0, 0),
            2,
            BlitFlags::from_bits(BLIT_2BPP | flags),
            0x4321,
        );
        assert_eq!(screen, expected, "flags {flags:#x}");
    }
}

#[test]
fn test_blit_rotate_flip_x_keeps_sprite_order_down_the_column() {
    let mut fb = full_fb();
    let sprite = as_b2_vec(0b_01_10_00_00_u8);
    blit(&mut fb, &sprite, 0, 0, 2, 1, BLIT_2BPP | BLIT_ROTATE | BLIT_FLIP_X, 0x4321);

    assert_eq!(get_pixel(&fb, 0, 0), Some(1));
    assert_eq!(get_pixel(&fb, 0, 1), Some(2));
    assert_eq!(get_pixel(&fb, 1, 0), Some(0));
}

#[test]
fn test_blit_rotate_clips_swapped_axes() {
    // a 1×4 column rotated is 4 wide and 1 high, so only one row is
    // visible at y=3 on a 4×4 screen
    let mut screen = ArrayScreen::<4, 4>::new();
    let sprite = as_b2_vec(0b_01_10_11_01_u8);
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_00_00_00_00_u8),
        as_fb_vec(0b_00_00_00_00_u8),
        as_fb_vec(0b_00_00_00_00_u8),
        as_fb_vec(0b_01_10_11_01_u8),
    ]);

    blit_sub_impl(
        &mut screen,
        &sprite,
        (0, 3),
        (1, 4),
        (0, 0),
        1,
        BlitFlags::from_bits(BLIT_2BPP | BLIT_ROTATE),
        0x4321,
    );
    println!("{:?}", &screen);
    assert_eq!(screen, expected);
}

#[test]
fn test_blit_clips_negative_coordinates() {
    let mut screen = ArrayScreen::<2, 4>::new();
    let sprite = as_b2_vec(0b_01_10_11_01__10_10_10_10_u16);
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_10_10_00_00_u8),
        as_fb_vec(0b_00_00_00_00_u8),
    ]);

    // the first row lands at y=-1 and the first two columns at x<0
    blit_sub_impl(
        &mut screen,
        &sprite,
        (-2, -1),
        (4, 2),
        (0, 0),
        4,
        BlitFlags::from_bits(BLIT_2BPP),
        0x4321,
    );
    assert_eq!(screen, expected);
}

#[test]
fn test_blit_short_sprite_reads_as_transparent() {
    let mut fb = as_fb_vec(0b_11_11_11_11__11_11_11_11_u16);
    let expected_fb = as_fb_vec(0b_01_10_11_00__11_11_11_11_u16);

    // the sprite claims 8 pixels but only holds 4
    blit(&mut fb, &as_b2_vec(0b_01_10_11_00_u8), 0, 0, 8, 1, BLIT_2BPP, 0x4321);
    assert_eq!(as_fb_line(&expected_fb), as_fb_line(&fb));
}

#[test]
fn test_blit_far_away_is_noop() {
    let mut fb = full_fb();
    let sprite = [0xffu8; 8];
    blit(&mut fb, &sprite, i32::MIN, i32::MAX, u32::MAX, u32::MAX, 0, 0x4321);
    blit(&mut fb, &sprite, i32::MAX, 0, 8, 8, BLIT_ROTATE, 0x4321);
    assert!(fb.iter().all(|&b| b == 0));
}

#[test]
fn test_blit_equals_blit_sub_at_origin() {
    let sprite: Vec<u8> = (0u8..32).map(|n| n.wrapping_mul(37)).collect();
    for flags in [0, BLIT_2BPP, BLIT_FLIP_X | BLIT_FLIP_Y, BLIT_2BPP | BLIT_ROTATE] {
        let mut a = full_fb();
        let mut b = full_fb();
        blit(&mut a, &sprite, 5, 7, 16, 8, flags, 0x4321);
        blit_sub(&mut b, &sprite, 5, 7, 16, 8, 0, 0, 16, flags, 0x4321);
        assert_eq!(a, b, "flags {flags:#x}");
    }
}

#[test]
fn test_blit_flip_x_twice_restores_image() {
    let sprite = as_b2_vec(0b_00_01_10_11__11_01_00_10__01_01_10_10__11_00_00_01_u32);
    let (width, height) = (8, 2);

    let mut plain = full_fb();
    blit(&mut plain, &sprite, 10, 20, width, height, BLIT_2BPP, 0x4321);

    let mut flipped = full_fb();
    blit(&mut flipped, &sprite, 10, 20, width, height, BLIT_2BPP | BLIT_FLIP_X, 0x4321);

    // read the flipped image back as a 2BPP sprite; with draw colors
    // 0x4321 every palette slot maps back to the sprite value
    let mut readback = vec![0u8; (width * height / 4) as usize];
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let slot = get_pixel(&flipped, 10 + x, 20 + y).unwrap();
            let i = (y * width as i32 + x) as usize;
            readback[i >> 2] |= slot << (6 - ((i & 3) << 1));
        }
    }

    let mut restored = full_fb();
    blit(&mut restored, &readback, 10, 20, width, height, BLIT_2BPP | BLIT_FLIP_X, 0x4321);
    assert_eq!(plain, restored);
}

#[test]
fn test_hline() {
    let mut screen = ArrayScreen::<4, 8>::new();
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_00_11_11_11_11_11_11_00__u16),
        as_fb_vec(0b_11_11_11_11_11_11_00_00__u16),
    ]);

    hline_impl(&mut screen, 3, 1, 0, 6);
    hline_impl(&mut screen, 3, -1, 1, 7);

    println!("{:?}", &screen);
    assert_eq!(screen, expected);
}

#[test]
fn test_hline_fills_whole_bytes() {
    let mut fb = full_fb();
    hline(&mut fb, 0x3, 2, 1, 13);

    let row = &fb[40..80];
    assert_eq!(row[0], 0b_10_10_00_00);
    assert_eq!(&row[1..3], &[0b_10_10_10_10, 0b_10_10_10_10]);
    assert_eq!(row[3], 0b_00_10_10_10);
    assert!(row[4..].iter().all(|&b| b == 0));
}

#[test]
fn test_vline() {
    let mut screen = ArrayScreen::<7, 4>::new();
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_00_00_00_00__u8),
        as_fb_vec(0b_11_00_11_00__u8),
        as_fb_vec(0b_11_00_11_00__u8),
        as_fb_vec(0b_11_00_11_00__u8),
        as_fb_vec(0b_00_00_11_00__u8),
        as_fb_vec(0b_11_00_11_00__u8),
        as_fb_vec(0b_00_00_11_00__u8),
    ]);

    vline_impl(&mut screen, 3, 2, 1, 6);
    vline_impl(&mut screen, 3, 0, 1, 3);
    vline_impl(&mut screen, 3, 0, 5, 1);

    println!("{:?}", &screen);
    assert_eq!(screen, expected);
}

#[test]
fn test_line() {
    let mut screen = ArrayScreen::<18, 8>::new();
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_11_00_00_00_00_00_00_00__u16),
        as_fb_vec(0b_00_11_00_00_00_00_11_00__u16),
        as_fb_vec(0b_00_00_11_00_00_00_11_00__u16),
        as_fb_vec(0b_00_00_00_11_00_00_11_00__u16),
        as_fb_vec(0b_00_00_00_00_00_00_00_11__u16),
        as_fb_vec(0b_00_11_00_00_00_00_00_11__u16),
        as_fb_vec(0b_00_11_00_00_00_00_00_11__u16),
        as_fb_vec(0b_11_00_00_00_11_11_11_00__u16),
        as_fb_vec(0b_11_00_00_00_00_00_00_00__u16),
    ]);

    line_impl(&mut screen, 3, -1, -1, 3, 3);
    line_impl(&mut screen, 3, 0, 8, 1, 5);
    line_impl(&mut screen, 3, 6, 1, 7, 6);
    line_impl(&mut screen, 3, 4, 7, 6, 7);

    println!("{:?}", &screen);
    assert_eq!(screen, expected);
}

#[test]
fn test_line_endpoint_order_is_irrelevant() {
    let segments = [
        (0, 0, 159, 159),
        (3, 90, 120, 4),
        (-30, 10, 200, 70),
        (80, -5, 81, 300),
        (10, 10, 10, 10),
    ];
    for (x1, y1, x2, y2) in segments {
        let mut a = full_fb();
        let mut b = full_fb();
        line(&mut a, 0x2, x1, y1, x2, y2);
        line(&mut b, 0x2, x2, y2, x1, y1);
        assert_eq!(a, b, "({x1}, {y1}) - ({x2}, {y2})");
    }
}

#[test]
fn test_lines_crossing_the_screen() {
    let mut fb = full_fb();
    line(&mut fb, 0x4, -1000, -1000, 1000, 1000);
    assert_eq!(get_pixel(&fb, 0, 0), Some(3));
    assert_eq!(get_pixel(&fb, 159, 159), Some(3));

    vline(&mut fb, 0x4, 5, -10, u32::MAX);
    assert_eq!(get_pixel(&fb, 5, 159), Some(3));
    hline(&mut fb, 0x4, i32::MAX, 3, u32::MAX);
    assert_eq!(get_pixel(&fb, 7, 3), Some(0));
}

#[test]
fn test_line_from_far_off_screen() {
    let lit = |fb: &[u8]| {
        (0..160)
            .flat_map(|y| (0..160).map(move |x| (x, y)))
            .filter(|&(x, y)| get_pixel(fb, x, y) == Some(3))
            .collect::<Vec<_>>()
    };

    let mut fb = full_fb();
    line(&mut fb, 0x4, 10, i32::MIN, 10, 10);
    assert_eq!(lit(&fb), (0..=10).map(|y| (10, y)).collect::<Vec<_>>());

    let mut fb = full_fb();
    line(&mut fb, 0x4, i32::MIN, 5, 159, 5);
    line(&mut fb, 0x4, i32::MAX, 7, 0, 7);
    let rows: Vec<_> = [5, 7]
        .into_iter()
        .flat_map(|y| (0..160).map(move |x| (x, y)))
        .collect();
    let mut got = lit(&fb);
    got.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(got, rows);

    let mut a = full_fb();
    let mut b = full_fb();
    line(&mut a, 0x4, -1000, -1000, 20, 20);
    line(&mut b, 0x4, 0, 0, 20, 20);
    assert_eq!(a, b);

    // nothing of this one ever reaches the screen
    let mut fb = full_fb();
    line(&mut fb, 0x4, i32::MIN, i32::MIN, -1, i32::MAX);
    assert!(fb.iter().all(|&b| b == 0));
}

#[test]
fn test_rect_fill_and_outline() {
    let mut screen = ArrayScreen::<12, 8>::new();
    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_00_00_00_00_00_00_00_00__u16),
        as_fb_vec(0b_00_10_10_10_10_00_00_00__u16),
        as_fb_vec(0b_00_10_01_01_10_00_00_00__u16),
        as_fb_vec(0b_00_10_01_01_10_00_00_00__u16),
        as_fb_vec(0b_00_10_10_10_10_00_00_00__u16),
        as_fb_vec(0b_00_00_00_00_00_00_00_00__u16),
    ]);

    rect_impl(&mut screen, Some(2), Some(1), 1, 1, 4, 4);

    println!("{:?}", &screen);
    assert_eq!(screen, expected);
}

#[test]
fn test_rect_partially_off_screen() {
    let mut fb = full_fb();
    rect(&mut fb, 0x32, -2, -2, 4, 4);

    assert_eq!(get_pixel(&fb, 0, 0), Some(1));
    assert_eq!(get_pixel(&fb, 1, 0), Some(2));
    assert_eq!(get_pixel(&fb, 0, 1), Some(2));
    assert_eq!(get_pixel(&fb, 1, 1), Some(2));
    assert_eq!(get_pixel(&fb, 2, 0), Some(0));
    assert_eq!(get_pixel(&fb, 0, 2), Some(0));
}

#[test]
fn test_rect_zero_area() {
    let mut fb = full_fb();
    rect(&mut fb, 0x4321, 10, 10, 0, 5);
    rect(&mut fb, 0x4321, 10, 10, 5, 0);
    assert!(fb.iter().all(|&b| b == 0));
}

#[test]
fn test_oval_small_circular() {
    // 8x5 pixels, with 4 pix/byte, that's 2 bytes/row, 10 bytes in total
    let mut screen = ArrayScreen::<10, 8>::new();
    oval_impl(&mut screen, Some(3), None, 0, 0, 5, 5);

    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_00_11_11_11_00_00_00_00__u16),
        as_fb_vec(0b_11_00_00_00_11_00_00_00__u16),
        as_fb_vec(0b_11_00_00_00_11_00_00_00__u16),
        as_fb_vec(0b_11_00_00_00_11_00_00_00__u16),
        as_fb_vec(0b_00_11_11_11_00_00_00_00__u16),
    ]);

    assert_eq!(screen, expected);
}

#[test]
fn test_oval_small_filled() {
    let mut screen = ArrayScreen::<10, 8>::new();
    oval_impl(&mut screen, Some(2), Some(1), 0, 0, 5, 5);

    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_00_10_10_10_00_00_00_00__u16),
        as_fb_vec(0b_10_01_01_01_10_00_00_00__u16),
        as_fb_vec(0b_10_01_01_01_10_00_00_00__u16),
        as_fb_vec(0b_10_01_01_01_10_00_00_00__u16),
        as_fb_vec(0b_00_10_10_10_00_00_00_00__u16),
    ]);

    println!("{:?}", &screen);
    assert_eq!(screen, expected);
}

#[test]
fn test_oval_slim_horizontal() {
    // 8x3 pixels, with 4 pix/byte, that's 2 bytes/row, 6 bytes in total
    let mut screen = ArrayScreen::<6, 8>::new();
    oval_impl(&mut screen, Some(3), None, 0, 0, 8, 3);

    let expected = ArrayScreen::new_with_fb_lines(&[
        as_fb_vec(0b_00_00_11_11_11_11_00_00__u16),
        as_fb_vec(0b_11_11_00_00_00_00_11_11__u16),
        as_fb_vec(0b_00_00_11_11_11_11_00_00__u16),
    ]);

    assert_eq!(screen, expected);
}

#[test]
fn test_oval_huge_box_stays_in_bounds() {
    let mut fb = full_fb();
    oval(&mut fb, 0x21, -1000, -1000, 2160, 2160);
    oval(&mut fb, 0x21, 100, 100, 0, 50);
    assert_eq!(fb.len(), FRAMEBUFFER_SIZE);
}

#[test]
fn test_oval_edge_walk_leaves_the_screen_early() {
    let mut fb = full_fb();
    oval(&mut fb, 0x21, -60000, 0, 65536, 40);

    assert!((0..40).any(|y| get_pixel(&fb, 80, y) == Some(1)));
    for y in 40..160 {
        assert!((0..160).all(|x| get_pixel(&fb, x, y) == Some(0)));
    }
}

#[test]
fn test_oval_flat_box_wider_than_the_screen() {
    // only the left tip reaches the screen, on the two middle rows
    let mut fb = full_fb();
    oval(&mut fb, 0x21, 0, 0, u32::MAX, 20);

    for y in 0..160 {
        let expected = if y == 9 || y == 10 { Some(1) } else { Some(0) };
        for x in 0..160 {
            assert_eq!(get_pixel(&fb, x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_oval_covering_the_screen() {
    let mut fb = full_fb();
    oval(&mut fb, 0x0034, i32::MIN, i32::MIN, u32::MAX, u32::MAX);
    assert!(fb.iter().all(|&b| b == 0xff));

    // the screen sits in the empty corner of the same box moved to the origin
    let mut fb = full_fb();
    oval(&mut fb, 0x0034, 0, 0, u32::MAX, u32::MAX);
    assert!(fb.iter().all(|&b| b == 0));
}

#[test]
fn test_transparent_draw_colors_write_nothing() {
    let mut fb = vec![0b_10_01_11_00u8; FRAMEBUFFER_SIZE];
    let before = fb.clone();
    let sprite = [0xa5u8; 16];

    blit(&mut fb, &sprite, 3, 3, 8, 8, 0, 0x0000);
    blit(&mut fb, &sprite, 3, 3, 8, 8, BLIT_2BPP, 0x0000);
    line(&mut fb, 0x0, 0, 0, 159, 100);
    hline(&mut fb, 0x0, 0, 5, 160);
    vline(&mut fb, 0x0, 5, 0, 160);
    rect(&mut fb, 0x0, 1, 1, 50, 50);
    oval(&mut fb, 0x0, 1, 1, 50, 50);
    text(&mut fb, 0x0, b"hello", 0, 0);

    assert_eq!(fb, before);
}

#[test]
fn test_text_ink_and_background() {
    // '!' has ink in columns 3 and 4 of its top row
    let mut fb = full_fb();
    text(&mut fb, 0x0002, b"!", 0, 0);
    assert_eq!(get_pixel(&fb, 3, 0), Some(1));
    assert_eq!(get_pixel(&fb, 4, 0), Some(1));
    assert_eq!(get_pixel(&fb, 0, 0), Some(0));
    assert_eq!(get_pixel(&fb, 3, 7), Some(0));

    let mut fb = full_fb();
    text(&mut fb, 0x0030, b"!", 0, 0);
    assert_eq!(get_pixel(&fb, 0, 0), Some(2));
    assert_eq!(get_pixel(&fb, 3, 0), Some(0));
    assert_eq!(get_pixel(&fb, 7, 7), Some(2));
    assert_eq!(get_pixel(&fb, 8, 0), Some(0));
}

#[test]
fn test_text_newline_and_unsupported_chars() {
    let mut fb = full_fb();
    text(&mut fb, 0x0002, b"\x01!\n!", 16, 0);

    // the unsupported character still advances the cursor
    assert_eq!(get_pixel(&fb, 16 + 8 + 3, 0), Some(1));
    assert_eq!(get_pixel(&fb, 16 + 3, 0), Some(0));
    // the newline returns to x=16, one line down
    assert_eq!(get_pixel(&fb, 16 + 3, 8), Some(1));
}

#[test]
fn test_text_stops_at_nul() {
    let mut fb = full_fb();
    text(&mut fb, 0x0002, b"\0!", 0, 0);
    assert!(fb.iter().all(|&b| b == 0));
}

#[test]
fn test_text_utf8_and_utf16() {
    let mut expected = full_fb();
    text(&mut expected, 0x0002, b"\xe9!", 0, 0);
    // the bowl of 'é' starts in row 2
    assert_eq!(get_pixel(&expected, 1, 2), Some(1));
    assert_eq!(get_pixel(&expected, 8 + 3, 0), Some(1));

    let mut fb = full_fb();
    text_utf8(&mut fb, 0x0002, "é!", 0, 0);
    assert_eq!(fb, expected);

    let mut fb = full_fb();
    let units: Vec<u16> = "é!".encode_utf16().collect();
    text_utf16(&mut fb, 0x0002, &units, 0, 0);
    assert_eq!(fb, expected);

    // past Latin-1 nothing is drawn, but the cursor still moves
    let mut fb = full_fb();
    text_utf8(&mut fb, 0x0002, "✓!", 0, 0);
    let mut expected = full_fb();
    text(&mut expected, 0x0002, b" !", 0, 0);
    assert_eq!(fb, expected);
}

#[test]
fn test_text_button_glyphs() {
    // X button: a disc with the X cut out of it
    let mut fb = full_fb();
    text(&mut fb, 0x0002, b"\x80", 0, 0);
    assert_eq!(get_pixel(&fb, 0, 0), Some(0));
    assert_eq!(get_pixel(&fb, 2, 0), Some(1));
    assert_eq!(get_pixel(&fb, 2, 2), Some(0));
    assert_eq!(get_pixel(&fb, 3, 2), Some(1));

    // control codes without a glyph draw nothing
    let mut fb = full_fb();
    text(&mut fb, 0x0002, b"\x7f\x82\x9f", 0, 0);
    assert!(fb.iter().all(|&b| b == 0));
}

#[test]
fn test_set_get_clear() {
    let mut fb = full_fb();
    set_pixel(&mut fb, 5, 1, 3);
    set_pixel(&mut fb, -1, 0, 3);
    set_pixel(&mut fb, 160, 0, 3);
    assert_eq!(get_pixel(&fb, 5, 1), Some(3));
    assert_eq!(fb[(160 + 5) / 4], 0b_00_00_11_00);
    assert_eq!(get_pixel(&fb, 160, 0), None);
    assert_eq!(fb.iter().filter(|&&b| b != 0).count(), 1);

    clear(&mut fb);
    assert!(fb.iter().all(|&b| b == 0));
}
