//! Built-in 8×8 font covering character codes 0x20 to 0xff.
//!
//! Printable ASCII and Latin-1 glyph rows come from the public domain
//! font8x8 by Daniel Hepper, where bit 0 is the leftmost pixel and a set
//! bit is ink. 0x80 to 0x87 hold the gamepad button and arrow glyphs, the
//! other control codes are blank.

/// Index of the first glyph in the atlas.
pub(crate) const FIRST_CHAR: u32 = 0x20;
/// Index of the last glyph in the atlas.
pub(crate) const LAST_CHAR: u32 = 0xff;

const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR + 1) as usize;

#[rustfmt::skip]
const GLYPHS: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3c, 0x3c, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x36, 0x36, 0x7f, 0x36, 0x7f, 0x36, 0x36, 0x00], // #
    [0x0c, 0x3e, 0x03, 0x1e, 0x30, 0x1f, 0x0c, 0x00], // $
    [0x00, 0x63, 0x33, 0x18, 0x0c, 0x66, 0x63, 0x00], // %
    [0x1c, 0x36, 0x1c, 0x6e, 0x3b, 0x33, 0x6e, 0x00], // &
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x18, 0x0c, 0x06, 0x06, 0x06, 0x0c, 0x18, 0x00], // (
    [0x06, 0x0c, 0x18, 0x18, 0x18, 0x0c, 0x06, 0x00], // )
    [0x00, 0x66, 0x3c, 0xff, 0x3c, 0x66, 0x00, 0x00], // *
    [0x00, 0x0c, 0x0c, 0x3f, 0x0c, 0x0c, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c, 0x06], // ,
    [0x00, 0x00, 0x00, 0x3f, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c, 0x00], // .
    [0x60, 0x30, 0x18, 0x0c, 0x06, 0x03, 0x01, 0x00], // /
    [0x3e, 0x63, 0x73, 0x7b, 0x6f, 0x67, 0x3e, 0x00], // 0
    [0x0c, 0x0e, 0x0c, 0x0c, 0x0c, 0x0c, 0x3f, 0x00], // 1
    [0x1e, 0x33, 0x30, 0x1c, 0x06, 0x33, 0x3f, 0x00], // 2
    [0x1e, 0x33, 0x30, 0x1c, 0x30, 0x33, 0x1e, 0x00], // 3
    [0x38, 0x3c, 0x36, 0x33, 0x7f, 0x30, 0x78, 0x00], // 4
    [0x3f, 0x03, 0x1f, 0x30, 0x30, 0x33, 0x1e, 0x00], // 5
    [0x1c, 0x06, 0x03, 0x1f, 0x33, 0x33, 0x1e, 0x00], // 6
    [0x3f, 0x33, 0x30, 0x18, 0x0c, 0x0c, 0x0c, 0x00], // 7
    [0x1e, 0x33, 0x33, 0x1e, 0x33, 0x33, 0x1e, 0x00], // 8
    [0x1e, 0x33, 0x33, 0x3e, 0x30, 0x18, 0x0e, 0x00], // 9
    [0x00, 0x0c, 0x0c, 0x00, 0x00, 0x0c, 0x0c, 0x00], // :
    [0x00, 0x0c, 0x0c, 0x00, 0x00, 0x0c, 0x0c, 0x06], // ;
    [0x18, 0x0c, 0x06, 0x03, 0x06, 0x0c, 0x18, 0x00], // <
    [0x00, 0x00, 0x3f, 0x00, 0x00, 0x3f, 0x00, 0x00], // =
    [0x06, 0x0c, 0x18, 0x30, 0x18, 0x0c, 0x06, 0x00], // >
    [0x1e, 0x33, 0x30, 0x18, 0x0c, 0x00, 0x0c, 0x00], // ?
    [0x3e, 0x63, 0x7b, 0x7b, 0x7b, 0x03, 0x1e, 0x00], // @
    [0x0c, 0x1e, 0x33, 0x33, 0x3f, 0x33, 0x33, 0x00], // A
    [0x3f, 0x66, 0x66, 0x3e, 0x66, 0x66, 0x3f, 0x00], // B
    [0x3c, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3c, 0x00], // C
    [0x1f, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1f, 0x00], // D
    [0x7f, 0x46, 0x16, 0x1e, 0x16, 0x46, 0x7f, 0x00], // E
    [0x7f, 0x46, 0x16, 0x1e, 0x16, 0x06, 0x0f, 0x00], // F
    [0x3c, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7c, 0x00], // G
    [0x33, 0x33, 0x33, 0x3f, 0x33, 0x33, 0x33, 0x00], // H
    [0x1e, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // I
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1e, 0x00], // J
    [0x67, 0x66, 0x36, 0x1e, 0x36, 0x66, 0x67, 0x00], // K
    [0x0f, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7f, 0x00], // L
    [0x63, 0x77, 0x7f, 0x7f, 0x6b, 0x63, 0x63, 0x00], // M
    [0x63, 0x67, 0x6f, 0x7b, 0x73, 0x63, 0x63, 0x00], // N
    [0x1c, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1c, 0x00], // O
    [0x3f, 0x66, 0x66, 0x3e, 0x06, 0x06, 0x0f, 0x00], // P
    [0x1e, 0x33, 0x33, 0x33, 0x3b, 0x1e, 0x38, 0x00], // Q
    [0x3f, 0x66, 0x66, 0x3e, 0x36, 0x66, 0x67, 0x00], // R
    [0x1e, 0x33, 0x07, 0x0e, 0x38, 0x33, 0x1e, 0x00], // S
    [0x3f, 0x2d, 0x0c, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // T
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3f, 0x00], // U
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1e, 0x0c, 0x00], // V
    [0x63, 0x63, 0x63, 0x6b, 0x7f, 0x77, 0x63, 0x00], // W
    [0x63, 0x63, 0x36, 0x1c, 0x1c, 0x36, 0x63, 0x00], // X
    [0x33, 0x33, 0x33, 0x1e, 0x0c, 0x0c, 0x1e, 0x00], // Y
    [0x7f, 0x63, 0x31, 0x18, 0x4c, 0x66, 0x7f, 0x00], // Z
    [0x1e, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1e, 0x00], // [
    [0x03, 0x06, 0x0c, 0x18, 0x30, 0x60, 0x40, 0x00], // \
    [0x1e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1e, 0x00], // ]
    [0x08, 0x1c, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff], // _
    [0x0c, 0x0c, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x1e, 0x30, 0x3e, 0x33, 0x6e, 0x00], // a
    [0x07, 0x06, 0x06, 0x3e, 0x66, 0x66, 0x3b, 0x00], // b
    [0x00, 0x00, 0x1e, 0x33, 0x03, 0x33, 0x1e, 0x00], // c
    [0x38, 0x30, 0x30, 0x3e, 0x33, 0x33, 0x6e, 0x00], // d
    [0x00, 0x00, 0x1e, 0x33, 0x3f, 0x03, 0x1e, 0x00], // e
    [0x1c, 0x36, 0x06, 0x0f, 0x06, 0x06, 0x0f, 0x00], // f
    [0x00, 0x00, 0x6e, 0x33, 0x33, 0x3e, 0x30, 0x1f], // g
    [0x07, 0x06, 0x36, 0x6e, 0x66, 0x66, 0x67, 0x00], // h
    [0x0c, 0x00, 0x0e, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // i
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1e], // j
    [0x07, 0x06, 0x66, 0x36, 0x1e, 0x36, 0x67, 0x00], // k
    [0x0e, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // l
    [0x00, 0x00, 0x33, 0x7f, 0x7f, 0x6b, 0x63, 0x00], // m
    [0x00, 0x00, 0x1f, 0x33, 0x33, 0x33, 0x33, 0x00], // n
    [0x00, 0x00, 0x1e, 0x33, 0x33, 0x33, 0x1e, 0x00], // o
    [0x00, 0x00, 0x3b, 0x66, 0x66, 0x3e, 0x06, 0x0f], // p
    [0x00, 0x00, 0x6e, 0x33, 0x33, 0x3e, 0x30, 0x78], // q
    [0x00, 0x00, 0x3b, 0x6e, 0x66, 0x06, 0x0f, 0x00], // r
    [0x00, 0x00, 0x3e, 0x03, 0x1e, 0x30, 0x1f, 0x00], // s
    [0x08, 0x0c, 0x3e, 0x0c, 0x0c, 0x2c, 0x18, 0x00], // t
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6e, 0x00], // u
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1e, 0x0c, 0x00], // v
    [0x00, 0x00, 0x63, 0x6b, 0x7f, 0x7f, 0x36, 0x00], // w
    [0x00, 0x00, 0x63, 0x36, 0x1c, 0x36, 0x63, 0x00], // x
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3e, 0x30, 0x1f], // y
    [0x00, 0x00, 0x3f, 0x19, 0x0c, 0x26, 0x3f, 0x00], // z
    [0x38, 0x0c, 0x0c, 0x07, 0x0c, 0x0c, 0x38, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0x07, 0x0c, 0x0c, 0x38, 0x0c, 0x0c, 0x07, 0x00], // }
    [0x6e, 0x3b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // DEL
    [0x3c, 0x7e, 0xdb, 0xe7, 0xe7, 0xdb, 0x7e, 0x3c], // X button
    [0x3c, 0x7e, 0xc3, 0xef, 0xf7, 0xc3, 0x7e, 0x3c], // Z button
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x04, 0x06, 0x7f, 0x7f, 0x06, 0x04, 0x00], // left
    [0x00, 0x20, 0x60, 0xfe, 0xfe, 0x60, 0x20, 0x00], // right
    [0x18, 0x3c, 0x7e, 0x18, 0x18, 0x18, 0x18, 0x00], // up
    [0x18, 0x18, 0x18, 0x18, 0x7e, 0x3c, 0x18, 0x00], // down
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // no-break space
    [0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00], // ¡
    [0x18, 0x18, 0x7e, 0x03, 0x03, 0x7e, 0x18, 0x18], // ¢
    [0x1c, 0x36, 0x26, 0x0f, 0x06, 0x67, 0x3f, 0x00], // £
    [0x00, 0x00, 0x63, 0x3e, 0x36, 0x3e, 0x63, 0x00], // ¤
    [0x33, 0x33, 0x1e, 0x3f, 0x0c, 0x3f, 0x0c, 0x0c], // ¥
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // ¦
    [0x7c, 0xc6, 0x1c, 0x36, 0x36, 0x1c, 0x33, 0x1e], // §
    [0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ¨
    [0x3c, 0x42, 0x99, 0x85, 0x85, 0x99, 0x42, 0x3c], // ©
    [0x3c, 0x36, 0x36, 0x7c, 0x00, 0x00, 0x00, 0x00], // ª
    [0x00, 0xcc, 0x66, 0x33, 0x66, 0xcc, 0x00, 0x00], // «
    [0x00, 0x00, 0x00, 0x3f, 0x30, 0x30, 0x00, 0x00], // ¬
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // soft hyphen
    [0x3c, 0x42, 0x9d, 0xa5, 0x9d, 0xa5, 0x42, 0x3c], // ®
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ¯
    [0x1c, 0x36, 0x36, 0x1c, 0x00, 0x00, 0x00, 0x00], // °
    [0x18, 0x18, 0x7e, 0x18, 0x18, 0x00, 0x7e, 0x00], // ±
    [0x1c, 0x30, 0x18, 0x0c, 0x3c, 0x00, 0x00, 0x00], // ²
    [0x1c, 0x30, 0x18, 0x30, 0x1c, 0x00, 0x00, 0x00], // ³
    [0x18, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ´
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3e, 0x06, 0x03], // µ
    [0xfe, 0xdb, 0xdb, 0xde, 0xd8, 0xd8, 0xd8, 0x00], // ¶
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00], // ·
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x0c, 0x1e], // ¸
    [0x08, 0x0c, 0x08, 0x1c, 0x00, 0x00, 0x00, 0x00], // ¹
    [0x1c, 0x36, 0x36, 0x1c, 0x00, 0x00, 0x00, 0x00], // º
    [0x00, 0x33, 0x66, 0xcc, 0x66, 0x33, 0x00, 0x00], // »
    [0xc3, 0x63, 0x33, 0xbd, 0xec, 0xf6, 0xf3, 0x03], // ¼
    [0xc3, 0x63, 0x33, 0x7b, 0xcc, 0x66, 0x33, 0xf0], // ½
    [0x03, 0xc4, 0x63, 0xb4, 0xdb, 0xac, 0xe6, 0x80], // ¾
    [0x0c, 0x00, 0x0c, 0x06, 0x03, 0x33, 0x1e, 0x00], // ¿
    [0x07, 0x00, 0x1e, 0x33, 0x33, 0x3f, 0x33, 0x00], // À
    [0x70, 0x00, 0x1e, 0x33, 0x33, 0x3f, 0x33, 0x00], // Á
    [0x1e, 0x00, 0x1e, 0x33, 0x33, 0x3f, 0x33, 0x00], // Â
    [0x6e, 0x3b, 0x00, 0x1e, 0x33, 0x3f, 0x33, 0x00], // Ã
    [0x33, 0x00, 0x1e, 0x33, 0x33, 0x3f, 0x33, 0x00], // Ä
    [0x0c, 0x0c, 0x1e, 0x33, 0x33, 0x3f, 0x33, 0x00], // Å
    [0x7c, 0x36, 0x33, 0x7f, 0x33, 0x33, 0x73, 0x00], // Æ
    [0x1e, 0x33, 0x03, 0x33, 0x1e, 0x18, 0x30, 0x1e], // Ç
    [0x07, 0x00, 0x3f, 0x06, 0x1e, 0x06, 0x3f, 0x00], // È
    [0x38, 0x00, 0x3f, 0x06, 0x1e, 0x06, 0x3f, 0x00], // É
    [0x0c, 0x12, 0x3f, 0x06, 0x1e, 0x06, 0x3f, 0x00], // Ê
    [0x36, 0x00, 0x3f, 0x06, 0x1e, 0x06, 0x3f, 0x00], // Ë
    [0x07, 0x00, 0x1e, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // Ì
    [0x38, 0x00, 0x1e, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // Í
    [0x0c, 0x12, 0x00, 0x1e, 0x0c, 0x0c, 0x1e, 0x00], // Î
    [0x33, 0x00, 0x1e, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // Ï
    [0x3f, 0x66, 0x6f, 0x6f, 0x66, 0x66, 0x3f, 0x00], // Ð
    [0x3f, 0x00, 0x33, 0x37, 0x3f, 0x3b, 0x33, 0x00], // Ñ
    [0x0e, 0x00, 0x18, 0x3c, 0x66, 0x3c, 0x18, 0x00], // Ò
    [0x70, 0x00, 0x18, 0x3c, 0x66, 0x3c, 0x18, 0x00], // Ó
    [0x3c, 0x66, 0x18, 0x3c, 0x66, 0x3c, 0x18, 0x00], // Ô
    [0x6e, 0x3b, 0x00, 0x3e, 0x63, 0x63, 0x3e, 0x00], // Õ
    [0xc3, 0x18, 0x3c, 0x66, 0x66, 0x3c, 0x18, 0x00], // Ö
    [0x00, 0x36, 0x1c, 0x08, 0x1c, 0x36, 0x00, 0x00], // ×
    [0x5c, 0x36, 0x73, 0x7b, 0x6f, 0x36, 0x1d, 0x00], // Ø
    [0x0e, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1e, 0x00], // Ù
    [0x70, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1e, 0x00], // Ú
    [0x3c, 0x66, 0x00, 0x66, 0x66, 0x66, 0x3c, 0x00], // Û
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1e, 0x00], // Ü
    [0x70, 0x00, 0x33, 0x33, 0x1e, 0x0c, 0x1e, 0x00], // Ý
    [0x0f, 0x06, 0x3e, 0x66, 0x66, 0x3e, 0x06, 0x0f], // Þ
    [0x00, 0x1e, 0x33, 0x1f, 0x33, 0x1f, 0x03, 0x03], // ß
    [0x07, 0x00, 0x1e, 0x30, 0x3e, 0x33, 0x7e, 0x00], // à
    [0x38, 0x00, 0x1e, 0x30, 0x3e, 0x33, 0x7e, 0x00], // á
    [0x7e, 0xc3, 0x3c, 0x60, 0x7c, 0x66, 0xfc, 0x00], // â
    [0x6e, 0x3b, 0x1e, 0x30, 0x3e, 0x33, 0x7e, 0x00], // ã
    [0x33, 0x00, 0x1e, 0x30, 0x3e, 0x33, 0x7e, 0x00], // ä
    [0x0c, 0x0c, 0x1e, 0x30, 0x3e, 0x33, 0x7e, 0x00], // å
    [0x00, 0x00, 0xfe, 0x30, 0xfe, 0x33, 0xfe, 0x00], // æ
    [0x00, 0x00, 0x1e, 0x03, 0x03, 0x1e, 0x30, 0x1c], // ç
    [0x07, 0x00, 0x1e, 0x33, 0x3f, 0x03, 0x1e, 0x00], // è
    [0x38, 0x00, 0x1e, 0x33, 0x3f, 0x03, 0x1e, 0x00], // é
    [0x7e, 0xc3, 0x3c, 0x66, 0x7e, 0x06, 0x3c, 0x00], // ê
    [0x33, 0x00, 0x1e, 0x33, 0x3f, 0x03, 0x1e, 0x00], // ë
    [0x07, 0x00, 0x0e, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // ì
    [0x1c, 0x00, 0x0e, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // í
    [0x3e, 0x63, 0x1c, 0x18, 0x18, 0x18, 0x3c, 0x00], // î
    [0x33, 0x00, 0x0e, 0x0c, 0x0c, 0x0c, 0x1e, 0x00], // ï
    [0x1b, 0x0e, 0x1b, 0x30, 0x3e, 0x33, 0x1e, 0x00], // ð
    [0x00, 0x1f, 0x00, 0x1f, 0x33, 0x33, 0x33, 0x00], // ñ
    [0x00, 0x07, 0x00, 0x1e, 0x33, 0x33, 0x1e, 0x00], // ò
    [0x00, 0x38, 0x00, 0x1e, 0x33, 0x33, 0x1e, 0x00], // ó
    [0x1e, 0x33, 0x00, 0x1e, 0x33, 0x33, 0x1e, 0x00], // ô
    [0x6e, 0x3b, 0x00, 0x1e, 0x33, 0x33, 0x1e, 0x00], // õ
    [0x00, 0x33, 0x00, 0x1e, 0x33, 0x33, 0x1e, 0x00], // ö
    [0x18, 0x18, 0x00, 0x7e, 0x00, 0x18, 0x18, 0x00], // ÷
    [0x00, 0x60, 0x3c, 0x76, 0x7e, 0x6e, 0x3c, 0x06], // ø
    [0x00, 0x07, 0x00, 0x33, 0x33, 0x33, 0x7e, 0x00], // ù
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x33, 0x7e, 0x00], // ú
    [0x1e, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7e, 0x00], // û
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7e, 0x00], // ü
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x3e, 0x30, 0x1f], // ý
    [0x00, 0x00, 0x06, 0x3e, 0x66, 0x3e, 0x06, 0x00], // þ
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x3e, 0x30, 0x1f], // ÿ
];

/// Turns the glyph table into a 1BPP atlas, eight pixels wide and one glyph
/// after another. Rows are mirrored so the leftmost pixel is the most
/// significant bit, and inverted so ink samples as 0 (draw color 1).
const fn build_atlas() -> [u8; GLYPH_COUNT * 8] {
    let mut atlas = [0u8; GLYPH_COUNT * 8];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let mut row = 0;
        while row < 8 {
            atlas[glyph * 8 + row] = !GLYPHS[glyph][row].reverse_bits();
            row += 1;
        }
        glyph += 1;
    }
    atlas
}

pub(crate) static FONT: [u8; GLYPH_COUNT * 8] = build_atlas();
