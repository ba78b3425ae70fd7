//! The cartridge side of the console.
//!
//! A [`System`] is handed to a native [`Cartridge`](crate::Cartridge) for
//! the duration of one callback. Its methods are the WASM-4 functions, and
//! its getters and setters are the registers as the cartridge may use them.

use crate::{
    audio::{AudioInterface, ToneSpec},
    disk::Disk,
    framebuffer,
    memory::{CartRegisters, Memory},
    trace::Tracer,
};

/// Mouse state of the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mouse {
    pub x: i16,
    pub y: i16,
    /// Bitmask of [`MOUSE_LEFT`](crate::wasm4::MOUSE_LEFT),
    /// [`MOUSE_RIGHT`](crate::wasm4::MOUSE_RIGHT) and
    /// [`MOUSE_MIDDLE`](crate::wasm4::MOUSE_MIDDLE).
    pub buttons: u8,
}

pub struct System<'a, B = Box<[u8]>> {
    mem: &'a mut Memory<B>,
    regs: &'a CartRegisters,
    disk: &'a mut Disk,
    audio: &'a AudioInterface,
    tracer: &'a mut dyn Tracer,
}

impl<'a, B: AsRef<[u8]> + AsMut<[u8]>> System<'a, B> {
    pub fn new(
        mem: &'a mut Memory<B>,
        regs: &'a CartRegisters,
        disk: &'a mut Disk,
        audio: &'a AudioInterface,
        tracer: &'a mut dyn Tracer,
    ) -> Self {
        Self {
            mem,
            regs,
            disk,
            audio,
            tracer,
        }
    }

    pub fn palette(&self) -> [u32; 4] {
        self.regs.palette.get(self.mem)
    }

    pub fn set_palette(&mut self, palette: [u32; 4]) {
        self.regs.palette.set(self.mem, palette)
    }

    pub fn draw_colors(&self) -> u16 {
        self.regs.draw_colors.get(self.mem)
    }

    pub fn set_draw_colors(&mut self, draw_colors: u16) {
        self.regs.draw_colors.set(self.mem, draw_colors)
    }

    /// Buttons held on gamepad `idx` (0 to 3). Out of range gamepads have
    /// nothing pressed.
    pub fn gamepad(&self, idx: usize) -> u8 {
        self.regs
            .gamepads
            .get(idx)
            .map_or(0, |gamepad| gamepad.get(self.mem))
    }

    pub fn gamepads(&self) -> [u8; 4] {
        self.regs.gamepads.map(|gamepad| gamepad.get(self.mem))
    }

    pub fn mouse(&self) -> Mouse {
        Mouse {
            x: self.regs.mouse_x.get(self.mem),
            y: self.regs.mouse_y.get(self.mem),
            buttons: self.regs.mouse_buttons.get(self.mem),
        }
    }

    pub fn system_flags(&self) -> u8 {
        self.regs.system_flags.get(self.mem)
    }

    pub fn set_system_flags(&mut self, flags: u8) {
        self.regs.system_flags.set(self.mem, flags)
    }

    pub fn netplay(&self) -> u8 {
        self.regs.netplay.get(self.mem)
    }

    pub fn framebuffer(&self) -> &[u8] {
        self.regs.framebuffer.slice(self.mem)
    }

    pub fn framebuffer_mut(&mut self) -> &mut [u8] {
        self.regs.framebuffer.slice_mut(self.mem)
    }

    /// Copy a sprite to the framebuffer. See [`framebuffer::blit`].
    #[allow(clippy::too_many_arguments)]
    pub fn blit(&mut self, sprite: &[u8], x: i32, y: i32, width: u32, height: u32, flags: u32) {
        let draw_colors = self.draw_colors();
        framebuffer::blit(
            self.framebuffer_mut(),
            sprite,
            x,
            y,
            width,
            height,
            flags,
            draw_colors,
        )
    }

    /// Copy part of a sprite atlas to the framebuffer. See [`framebuffer::blit_sub`].
    #[allow(clippy::too_many_arguments)]
    pub fn blit_sub(
        &mut self,
        sprite: &[u8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        src_x: u32,
        src_y: u32,
        stride: u32,
        flags: u32,
    ) {
        let draw_colors = self.draw_colors();
        framebuffer::blit_sub(
            self.framebuffer_mut(),
            sprite,
            x,
            y,
            width,
            height,
            src_x,
            src_y,
            stride,
            flags,
            draw_colors,
        )
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let draw_colors = self.draw_colors();
        framebuffer::line(self.framebuffer_mut(), draw_colors, x1, y1, x2, y2)
    }

    pub fn hline(&mut self, x: i32, y: i32, len: u32) {
        let draw_colors = self.draw_colors();
        framebuffer::hline(self.framebuffer_mut(), draw_colors, x, y, len)
    }

    pub fn vline(&mut self, x: i32, y: i32, len: u32) {
        let draw_colors = self.draw_colors();
        framebuffer::vline(self.framebuffer_mut(), draw_colors, x, y, len)
    }

    pub fn oval(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let draw_colors = self.draw_colors();
        framebuffer::oval(self.framebuffer_mut(), draw_colors, x, y, width, height)
    }

    pub fn rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let draw_colors = self.draw_colors();
        framebuffer::rect(self.framebuffer_mut(), draw_colors, x, y, width, height)
    }

    pub fn text(&mut self, text: &str, x: i32, y: i32) {
        let draw_colors = self.draw_colors();
        framebuffer::text_utf8(self.framebuffer_mut(), draw_colors, text, x, y)
    }

    /// Draw text given as bytes, one character per byte.
    pub fn text_bytes(&mut self, text: &[u8], x: i32, y: i32) {
        let draw_colors = self.draw_colors();
        framebuffer::text(self.framebuffer_mut(), draw_colors, text, x, y)
    }

    pub fn text_utf16(&mut self, text: &[u16], x: i32, y: i32) {
        let draw_colors = self.draw_colors();
        framebuffer::text_utf16(self.framebuffer_mut(), draw_colors, text, x, y)
    }

    /// Play a sound given as the packed arguments of `tone`.
    pub fn tone(&self, frequency: u32, duration: u32, volume: u32, flags: u32) {
        self.audio.tone(frequency, duration, volume, flags)
    }

    pub fn play(&self, spec: ToneSpec) {
        self.audio.play(spec)
    }

    /// Read the save disk into `dest`, returning the number of bytes read.
    pub fn diskr(&self, dest: &mut [u8]) -> u32 {
        self.disk.read(dest, dest.len()) as u32
    }

    /// Replace the save disk with `src`, returning the number of bytes
    /// written.
    pub fn diskw(&mut self, src: &[u8]) -> u32 {
        self.disk.write(src, src.len()) as u32
    }

    pub fn trace(&mut self, msg: &str) {
        self.tracer.trace(msg)
    }
}
