//! The shared 64KB memory and typed accessors for its registers.
//!
//! Every register is a [`Register`] bound to a fixed address and width.
//! The address is checked once, when the register is built; reads and
//! writes through it can't leave the register's bytes afterwards.
//!
//! Whether a side of the console may write a register is part of its
//! type: [`CartRegisters`] exposes the gamepads as [`ReadOnly`] while
//! [`HostRegisters`] exposes them as [`ReadWrite`], and so on.

use core::{fmt, marker::PhantomData};

use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

use crate::{
    utils,
    wasm4::{
        DRAW_COLORS_ADDR, FRAMEBUFFER_ADDR, FRAMEBUFFER_SIZE, GAMEPAD1_ADDR, GAMEPAD2_ADDR,
        GAMEPAD3_ADDR, GAMEPAD4_ADDR, MEMORY_SIZE, MOUSE_BUTTONS_ADDR, MOUSE_X_ADDR,
        MOUSE_Y_ADDR, NETPLAY_ADDR, PALETTE_ADDR, PALETTE_SIZE, SYSTEM_FLAGS_ADDR,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("{width} byte field at {addr:#06x} does not fit into {size} bytes of memory")]
    OutOfBounds {
        addr: usize,
        width: usize,
        size: usize,
    },
    #[error("memory is {len} bytes, at least {size} bytes are required")]
    TooSmall { len: usize, size: usize },
}

/// A value stored in memory with a fixed width.
pub trait Field: Copy {
    const WIDTH: usize;

    /// Decode from exactly [`WIDTH`](Field::WIDTH) bytes.
    fn read(bytes: &[u8]) -> Self;

    /// Encode into exactly [`WIDTH`](Field::WIDTH) bytes.
    fn write(self, bytes: &mut [u8]);
}

impl Field for u8 {
    const WIDTH: usize = 1;

    fn read(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn write(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }
}

impl Field for u16 {
    const WIDTH: usize = 2;

    fn read(bytes: &[u8]) -> Self {
        LittleEndian::read_u16(bytes)
    }

    fn write(self, bytes: &mut [u8]) {
        LittleEndian::write_u16(bytes, self)
    }
}

impl Field for i16 {
    const WIDTH: usize = 2;

    fn read(bytes: &[u8]) -> Self {
        LittleEndian::read_i16(bytes)
    }

    fn write(self, bytes: &mut [u8]) {
        LittleEndian::write_i16(bytes, self)
    }
}

impl Field for u32 {
    const WIDTH: usize = 4;

    fn read(bytes: &[u8]) -> Self {
        LittleEndian::read_u32(bytes)
    }

    fn write(self, bytes: &mut [u8]) {
        LittleEndian::write_u32(bytes, self)
    }
}

impl Field for [u32; 4] {
    const WIDTH: usize = PALETTE_SIZE;

    fn read(bytes: &[u8]) -> Self {
        let mut palette = [0; 4];
        LittleEndian::read_u32_into(bytes, &mut palette);
        palette
    }

    fn write(self, bytes: &mut [u8]) {
        LittleEndian::write_u32_into(&self, bytes)
    }
}

mod private {
    pub trait Sealed {}
}

/// Access mode of a [`Register`] or [`Region`].
pub trait Access: private::Sealed {}

/// The owning side only reads this register.
#[derive(Debug, Clone, Copy)]
pub enum ReadOnly {}

/// The owning side reads and writes this register.
#[derive(Debug, Clone, Copy)]
pub enum ReadWrite {}

impl private::Sealed for ReadOnly {}
impl private::Sealed for ReadWrite {}
impl Access for ReadOnly {}
impl Access for ReadWrite {}

fn check_bounds(addr: usize, width: usize) -> Result<(), MemoryError> {
    match addr.checked_add(width) {
        Some(end) if end <= MEMORY_SIZE => Ok(()),
        _ => Err(MemoryError::OutOfBounds {
            addr,
            width,
            size: MEMORY_SIZE,
        }),
    }
}

/// A typed view of one field of the memory map.
pub struct Register<T, A> {
    addr: usize,
    _marker: PhantomData<fn() -> (T, A)>,
}

impl<T, A> Clone for Register<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for Register<T, A> {}

impl<T: Field, A> fmt::Debug for Register<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Register")
            .field("addr", &format_args!("{:#06x}", self.addr))
            .field("width", &T::WIDTH)
            .finish()
    }
}

impl<T: Field, A: Access> Register<T, A> {
    /// Bind a register to `addr`.
    ///
    /// Fails if the field doesn't fit into the memory at that address.
    pub fn new(addr: usize) -> Result<Self, MemoryError> {
        check_bounds(addr, T::WIDTH)?;

        Ok(Self {
            addr,
            _marker: PhantomData,
        })
    }

    pub fn addr(&self) -> usize {
        self.addr
    }

    pub fn get<B: AsRef<[u8]>>(&self, mem: &Memory<B>) -> T {
        T::read(&mem.bytes()[self.addr..self.addr + T::WIDTH])
    }
}

impl<T: Field> Register<T, ReadWrite> {
    pub fn set<B: AsRef<[u8]> + AsMut<[u8]>>(&self, mem: &mut Memory<B>, value: T) {
        value.write(&mut mem.bytes_mut()[self.addr..self.addr + T::WIDTH])
    }
}

/// A view of a fixed range of bytes in the memory map, like the framebuffer.
pub struct Region<A> {
    addr: usize,
    len: usize,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Clone for Region<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Region<A> {}

impl<A> fmt::Debug for Region<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("addr", &format_args!("{:#06x}", self.addr))
            .field("len", &self.len)
            .finish()
    }
}

impl<A: Access> Region<A> {
    pub fn new(addr: usize, len: usize) -> Result<Self, MemoryError> {
        check_bounds(addr, len)?;

        Ok(Self {
            addr,
            len,
            _marker: PhantomData,
        })
    }

    pub fn addr(&self) -> usize {
        self.addr
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn slice<'a, B: AsRef<[u8]>>(&self, mem: &'a Memory<B>) -> &'a [u8] {
        &mem.bytes()[self.addr..self.addr + self.len]
    }
}

impl Region<ReadWrite> {
    pub fn slice_mut<'a, B: AsRef<[u8]> + AsMut<[u8]>>(
        &self,
        mem: &'a mut Memory<B>,
    ) -> &'a mut [u8] {
        &mut mem.bytes_mut()[self.addr..self.addr + self.len]
    }
}

/// The registers as seen by the cartridge.
#[derive(Debug, Clone, Copy)]
pub struct CartRegisters {
    pub palette: Register<[u32; 4], ReadWrite>,
    pub draw_colors: Register<u16, ReadWrite>,
    pub gamepads: [Register<u8, ReadOnly>; 4],
    pub mouse_x: Register<i16, ReadOnly>,
    pub mouse_y: Register<i16, ReadOnly>,
    pub mouse_buttons: Register<u8, ReadOnly>,
    pub system_flags: Register<u8, ReadWrite>,
    pub netplay: Register<u8, ReadOnly>,
    pub framebuffer: Region<ReadWrite>,
}

impl CartRegisters {
    pub fn new() -> Result<Self, MemoryError> {
        Ok(Self {
            palette: Register::new(PALETTE_ADDR)?,
            draw_colors: Register::new(DRAW_COLORS_ADDR)?,
            gamepads: [
                Register::new(GAMEPAD1_ADDR)?,
                Register::new(GAMEPAD2_ADDR)?,
                Register::new(GAMEPAD3_ADDR)?,
                Register::new(GAMEPAD4_ADDR)?,
            ],
            mouse_x: Register::new(MOUSE_X_ADDR)?,
            mouse_y: Register::new(MOUSE_Y_ADDR)?,
            mouse_buttons: Register::new(MOUSE_BUTTONS_ADDR)?,
            system_flags: Register::new(SYSTEM_FLAGS_ADDR)?,
            netplay: Register::new(NETPLAY_ADDR)?,
            framebuffer: Region::new(FRAMEBUFFER_ADDR, FRAMEBUFFER_SIZE)?,
        })
    }
}

/// The registers as seen by the host.
#[derive(Debug, Clone, Copy)]
pub struct HostRegisters {
    pub palette: Register<[u32; 4], ReadOnly>,
    pub draw_colors: Register<u16, ReadOnly>,
    pub gamepads: [Register<u8, ReadWrite>; 4],
    pub mouse_x: Register<i16, ReadWrite>,
    pub mouse_y: Register<i16, ReadWrite>,
    pub mouse_buttons: Register<u8, ReadWrite>,
    pub system_flags: Register<u8, ReadOnly>,
    pub netplay: Register<u8, ReadWrite>,
    pub framebuffer: Region<ReadOnly>,
}

impl HostRegisters {
    pub fn new() -> Result<Self, MemoryError> {
        Ok(Self {
            palette: Register::new(PALETTE_ADDR)?,
            draw_colors: Register::new(DRAW_COLORS_ADDR)?,
            gamepads: [
                Register::new(GAMEPAD1_ADDR)?,
                Register::new(GAMEPAD2_ADDR)?,
                Register::new(GAMEPAD3_ADDR)?,
                Register::new(GAMEPAD4_ADDR)?,
            ],
            mouse_x: Register::new(MOUSE_X_ADDR)?,
            mouse_y: Register::new(MOUSE_Y_ADDR)?,
            mouse_buttons: Register::new(MOUSE_BUTTONS_ADDR)?,
            system_flags: Register::new(SYSTEM_FLAGS_ADDR)?,
            netplay: Register::new(NETPLAY_ADDR)?,
            framebuffer: Region::new(FRAMEBUFFER_ADDR, FRAMEBUFFER_SIZE)?,
        })
    }
}

/// The linear memory shared by host and cartridge.
///
/// Usually owns its bytes, but can also wrap memory owned by someone else,
/// such as the linear memory of a WebAssembly instance.
pub struct Memory<B = Box<[u8]>> {
    bytes: B,
}

impl Memory {
    /// Allocate a memory, initialized the way the host does before `start()`.
    pub fn new() -> Self {
        let mut mem = Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        };
        mem.init_defaults();
        mem
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AsRef<[u8]>> Memory<B> {
    /// Use `bytes` as memory. Anything past [`MEMORY_SIZE`] is ignored.
    pub fn wrap(bytes: B) -> Result<Self, MemoryError> {
        let len = bytes.as_ref().len();
        if len < MEMORY_SIZE {
            return Err(MemoryError::TooSmall {
                len,
                size: MEMORY_SIZE,
            });
        }

        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes.as_ref()[..MEMORY_SIZE]
    }

    /// Read `len` bytes at `addr`, or `None` if they're not all in memory.
    pub fn get(&self, addr: usize, len: usize) -> Option<&[u8]> {
        self.bytes().get(addr..addr.checked_add(len)?)
    }

    /// Read the bytes of a NUL-terminated string starting at `addr`.
    ///
    /// Stops at the end of memory if there's no terminator.
    pub fn cstr_at(&self, addr: usize) -> &[u8] {
        let tail = self.bytes().get(addr..).unwrap_or_default();
        let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        &tail[..end]
    }

    pub fn into_inner(self) -> B {
        self.bytes
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Memory<B> {
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes.as_mut()[..MEMORY_SIZE]
    }

    /// Write the default palette and draw colors and clear the framebuffer.
    pub fn init_defaults(&mut self) {
        let bytes = self.bytes_mut();
        bytes[PALETTE_ADDR..PALETTE_ADDR + PALETTE_SIZE].copy_from_slice(&utils::default_palette());
        bytes[DRAW_COLORS_ADDR..DRAW_COLORS_ADDR + 2].copy_from_slice(&utils::default_draw_colors());
        self.clear_framebuffer();
    }

    /// Zero the framebuffer, as the host does before each `update()`.
    ///
    /// The host's own [`HostRegisters::framebuffer`] is read only, clearing
    /// is the one write it makes there.
    pub fn clear_framebuffer(&mut self) {
        self.bytes_mut()[FRAMEBUFFER_ADDR..FRAMEBUFFER_ADDR + FRAMEBUFFER_SIZE].fill(0);
    }
}

impl<B> fmt::Debug for Memory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory").finish_non_exhaustive()
    }
}
