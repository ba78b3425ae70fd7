//! Persistent storage.
//!
//! Each cartridge owns one save disk of at most 1024 bytes. [`Disk`] is the
//! in-memory copy the `diskr`/`diskw` primitives operate on, and a
//! [`DiskManager`] loads and stores it between sessions.

use anyhow::Context;
use std::{
    cell::RefCell,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::wasm4::STORAGE_SIZE;

/// The in-memory save disk of a running cartridge.
#[derive(Clone)]
pub struct Disk {
    data: [u8; STORAGE_SIZE],
    len: usize,
    dirty: bool,
}

impl Disk {
    /// An empty disk.
    pub fn new() -> Self {
        Self {
            data: [0; STORAGE_SIZE],
            len: 0,
            dirty: false,
        }
    }

    /// A disk holding `bytes`. Anything past the disk size is dropped.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut disk = Self::new();
        let len = bytes.len().min(STORAGE_SIZE);
        disk.data[..len].copy_from_slice(&bytes[..len]);
        disk.len = len;
        disk
    }

    /// Copy up to `count` stored bytes into `dest`, returning how many
    /// bytes were copied.
    pub fn read(&self, dest: &mut [u8], count: usize) -> usize {
        let n = count.min(dest.len()).min(self.len);
        dest[..n].copy_from_slice(&self.data[..n]);
        n
    }

    /// Replace the stored bytes with up to `count` bytes of `src`,
    /// returning how many bytes were stored.
    pub fn write(&mut self, src: &[u8], count: usize) -> usize {
        let n = count.min(src.len()).min(STORAGE_SIZE);
        self.data[..n].copy_from_slice(&src[..n]);
        self.len = n;
        self.dirty = true;
        n
    }

    pub fn contents(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the disk was written since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disk")
            .field("len", &self.len)
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Common trait for accessing game disks.
pub trait DiskManager {
    /// Retrieve disk bytes from the system's store.
    fn read(&self) -> anyhow::Result<Vec<u8>>;

    /// Write disk bytes to the system's store.
    fn write(&self, contents: &[u8]) -> anyhow::Result<()>;
}

/// A `DiskManager` which saves the disk at `/path/to/cart/{cart_name}.disk`.
#[derive(Debug, Clone)]
pub struct FileDisk(PathBuf);

impl FileDisk {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The disk stored next to the cartridge file.
    pub fn beside_cart(cart_location: &Path) -> Self {
        Self(cart_location.with_extension("disk"))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl DiskManager for FileDisk {
    fn read(&self) -> anyhow::Result<Vec<u8>> {
        let mut bytes = match fs::read(&self.0) {
            Ok(bytes) => bytes,
            // a cartridge that never saved starts with an empty disk
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read disk {}", self.0.display()))
            }
        };

        bytes.truncate(STORAGE_SIZE);
        Ok(bytes)
    }

    fn write(&self, contents: &[u8]) -> anyhow::Result<()> {
        fs::write(&self.0, contents)
            .with_context(|| format!("failed to write disk {}", self.0.display()))
    }
}

/// A `DiskManager` keeping the disk in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryDisk(RefCell<Vec<u8>>);

impl MemoryDisk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &[u8]) -> Self {
        Self(RefCell::new(contents.to_vec()))
    }

    pub fn contents(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }
}

impl DiskManager for MemoryDisk {
    fn read(&self) -> anyhow::Result<Vec<u8>> {
        let mut bytes = self.0.borrow().clone();
        bytes.truncate(STORAGE_SIZE);
        Ok(bytes)
    }

    fn write(&self, contents: &[u8]) -> anyhow::Result<()> {
        *self.0.borrow_mut() = contents.to_vec();
        Ok(())
    }
}

/// A `DiskManager` that stores nothing and logs a warning for every
/// `read()`/`write()`.
pub struct DebugDisk;

impl DiskManager for DebugDisk {
    fn read(&self) -> anyhow::Result<Vec<u8>> {
        log::warn!("DebugDisk used, no save disk read.");
        Ok(Vec::new())
    }

    fn write(&self, _contents: &[u8]) -> anyhow::Result<()> {
        log::warn!("DebugDisk used, no save disk written.");
        Ok(())
    }
}
