#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod audio;
pub mod disk;
pub mod framebuffer;
pub mod memory;
pub mod runtime;
pub mod system;
pub mod trace;
pub mod utils;
pub mod wasm4;

#[cfg(feature = "wasmi")]
pub mod wasmi_backend;

#[doc(inline)]
pub use crate::{
    audio::{AudioCommand, AudioInterface, ToneSpec},
    disk::{DebugDisk, Disk, DiskManager, FileDisk, MemoryDisk},
    memory::{CartRegisters, HostRegisters, Memory, MemoryError},
    runtime::{run_headless, Cartridge, Runtime, RuntimeConfig},
    system::{Mouse, System},
    trace::{LogTracer, Tracer},
};

#[cfg(feature = "wasmi")]
#[doc(inline)]
pub use crate::wasmi_backend::WasmiBackend;

/// Common trait for console hosts that run a cartridge.
pub trait Backend {
    /// Call the cart's `start()` function.
    /// See [Callbacks](https://wasm4.org/docs/reference/functions#callbacks)
    fn call_start(&mut self);
    /// Call the cart's `update()` function, clearing the framebuffer first
    /// unless the cart set [`SYSTEM_PRESERVE_FRAMEBUFFER`](wasm4::SYSTEM_PRESERVE_FRAMEBUFFER).
    fn call_update(&mut self);
    /// Read the content of the [FRAMEBUFFER](https://wasm4.org/docs/reference/memory#framebuffer)
    /// and [PALETTE](https://wasm4.org/docs/reference/memory#palette) memory regions.
    fn read_screen(&self, framebuffer: &mut [u8; wasm4::FRAMEBUFFER_SIZE], palette: &mut [u32; 4]);
    /// Provide the content of the [SYSTEM_FLAGS](https://wasm4.org/docs/reference/memory#system_flags) register.
    fn read_system_flags(&self) -> u8;
    /// Set the [GAMEPADS](https://wasm4.org/docs/reference/memory#gamepads)
    /// registers. Gamepad 1 is the lowest byte.
    fn set_gamepad(&mut self, gamepad: u32);
    /// Set the [MOUSE_X](https://wasm4.org/docs/reference/memory#mouse_x),
    /// [MOUSE_Y](https://wasm4.org/docs/reference/memory#mouse_y) and
    /// [MOUSE_BUTTONS](https://wasm4.org/docs/reference/memory#mouse_buttons)
    /// registers.
    fn set_mouse(&mut self, x: i16, y: i16, buttons: u8);
    /// Set the [NETPLAY](https://wasm4.org/docs/reference/memory#netplay) register.
    fn set_netplay(&mut self, netplay: u8);
    /// Take the disk contents if the cart wrote to its disk since the last call.
    fn write_save_cache(&mut self) -> Option<Vec<u8>>;
    /// Replace the disk contents the cart reads from.
    fn set_save_cache(&mut self, data: &[u8]);
}

/// Common trait for reading from game memory.
///
/// A [`Source<T>`] reads from a memory subregion that is defined by the
/// Source's provider. For instance, a [`Source<u8>`] provided for reading
/// the frame buffer covers the frame buffer but no other regions, and
/// offset 0 marks the first framebuffer byte.
pub trait Source<T>
where
    T: Copy,
{
    /// Read memory at the specified offset, relative to the start
    /// of the memory subregion the [`Source<T>`] covers.
    fn item_at(&self, offset: usize) -> Option<T>;

    /// Like [`item_at`](Source::item_at), but reads multiple values.
    fn items_at<const L: usize>(&self, offset: usize) -> Option<[T; L]>;
}

impl<T: Copy> Source<T> for [T] {
    fn item_at(&self, offset: usize) -> Option<T> {
        self.get(offset).copied()
    }

    fn items_at<const L: usize>(&self, offset: usize) -> Option<[T; L]> {
        self.get(offset..offset.checked_add(L)?)
            .and_then(|s| s.try_into().ok())
    }
}

impl<T: Copy> Source<T> for Vec<T> {
    fn item_at(&self, offset: usize) -> Option<T> {
        self.as_slice().item_at(offset)
    }

    fn items_at<const L: usize>(&self, offset: usize) -> Option<[T; L]> {
        self.as_slice().items_at(offset)
    }
}

impl<const N: usize, T: Copy> Source<T> for [T; N] {
    fn item_at(&self, offset: usize) -> Option<T> {
        self.as_slice().item_at(offset)
    }

    fn items_at<const L: usize>(&self, offset: usize) -> Option<[T; L]> {
        self.as_slice().items_at(offset)
    }
}

/// Common trait for writing to game memory.
///
/// Like [`Source<T>`], a [`Sink<T>`] may only cover a specific memory subregion.
/// Writes outside of that subregion are ignored.
pub trait Sink<T>
where
    T: Copy,
{
    /// Write memory at the specified offset, relative to the start
    /// of the memory subregion the [`Sink<T>`] covers.
    fn set_item_at(&mut self, offset: usize, item: T);

    /// Fill the entire memory subregion with `item`.
    fn fill(&mut self, item: T);
}

impl<T: Copy> Sink<T> for [T] {
    fn set_item_at(&mut self, offset: usize, item: T) {
        if let Some(slot) = self.get_mut(offset) {
            *slot = item;
        }
    }

    fn fill(&mut self, item: T) {
        <[T]>::fill(self, item)
    }
}

impl<T: Copy> Sink<T> for Vec<T> {
    fn set_item_at(&mut self, offset: usize, item: T) {
        self.as_mut_slice().set_item_at(offset, item)
    }

    fn fill(&mut self, item: T) {
        <[T]>::fill(self, item)
    }
}

impl<const N: usize, T: Copy> Sink<T> for [T; N] {
    fn set_item_at(&mut self, offset: usize, item: T) {
        self.as_mut_slice().set_item_at(offset, item)
    }

    fn fill(&mut self, item: T) {
        <[T]>::fill(self, item)
    }
}
