//! Running cartridges written in Rust, in process.

use std::time::Instant;

use anyhow::Context;
use log::{debug, error};

use crate::{
    audio::AudioInterface,
    disk::{Disk, DiskManager},
    memory::{CartRegisters, HostRegisters, Memory},
    system::System,
    trace::{LogTracer, Tracer},
    utils::{DEFAULT_DRAW_COLORS, DEFAULT_PALETTE},
    wasm4::{FRAMEBUFFER_SIZE, SYSTEM_PRESERVE_FRAMEBUFFER},
    Backend,
};

/// A game. The counterpart of the `start` and `update` exports of a
/// WebAssembly cartridge.
pub trait Cartridge {
    /// Called once, before the first frame.
    fn start(&mut self, _sys: &mut System<'_>) {}

    /// Called once per frame.
    fn update(&mut self, sys: &mut System<'_>);
}

impl<C: Cartridge + ?Sized> Cartridge for Box<C> {
    fn start(&mut self, sys: &mut System<'_>) {
        (**self).start(sys)
    }

    fn update(&mut self, sys: &mut System<'_>) {
        (**self).update(sys)
    }
}

/// How a [`Runtime`] sets up the console.
pub struct RuntimeConfig {
    /// Palette written before `start()`.
    pub palette: [u32; 4],
    /// Draw colors written before `start()`.
    pub draw_colors: u16,
    /// Receives the cartridge's `trace` output.
    pub tracer: Box<dyn Tracer>,
    /// Receives the cartridge's tones.
    pub audio: AudioInterface,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
            draw_colors: DEFAULT_DRAW_COLORS,
            tracer: Box::new(LogTracer),
            audio: AudioInterface::disconnected(),
        }
    }
}

/// The console, running a native [`Cartridge`].
pub struct Runtime<C> {
    cart: C,
    mem: Memory,
    cart_regs: CartRegisters,
    host_regs: HostRegisters,
    disk: Disk,
    audio: AudioInterface,
    tracer: Box<dyn Tracer>,
    frame: u64,
}

impl<C: Cartridge> Runtime<C> {
    pub fn new(cart: C, config: RuntimeConfig) -> anyhow::Result<Self> {
        let cart_regs = CartRegisters::new().context("cartridge registers")?;
        let host_regs = HostRegisters::new().context("host registers")?;

        let mut mem = Memory::new();
        cart_regs.palette.set(&mut mem, config.palette);
        cart_regs.draw_colors.set(&mut mem, config.draw_colors);

        Ok(Self {
            cart,
            mem,
            cart_regs,
            host_regs,
            disk: Disk::new(),
            audio: config.audio,
            tracer: config.tracer,
            frame: 0,
        })
    }

    pub fn memory(&self) -> &Memory {
        &self.mem
    }

    pub fn cartridge(&self) -> &C {
        &self.cart
    }

    pub fn cartridge_mut(&mut self) -> &mut C {
        &mut self.cart
    }

    pub fn disk(&self) -> &Disk {
        &self.disk
    }

    /// Number of `update()` calls so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    fn with_system(&mut self, f: impl FnOnce(&mut C, &mut System<'_>)) {
        let Self {
            cart,
            mem,
            cart_regs,
            disk,
            audio,
            tracer,
            ..
        } = self;
        let mut sys = System::new(mem, cart_regs, disk, audio, tracer.as_mut());
        f(cart, &mut sys);
    }
}

impl<C: Cartridge> Backend for Runtime<C> {
    fn call_start(&mut self) {
        debug!("calling start()");
        self.with_system(|cart, sys| cart.start(sys));
    }

    fn call_update(&mut self) {
        if self.host_regs.system_flags.get(&self.mem) & SYSTEM_PRESERVE_FRAMEBUFFER == 0 {
            self.mem.clear_framebuffer();
        }

        self.with_system(|cart, sys| cart.update(sys));
        self.audio.update();
        self.frame += 1;
    }

    fn read_screen(&self, framebuffer: &mut [u8; FRAMEBUFFER_SIZE], palette: &mut [u32; 4]) {
        framebuffer.copy_from_slice(self.host_regs.framebuffer.slice(&self.mem));
        *palette = self.host_regs.palette.get(&self.mem);
    }

    fn read_system_flags(&self) -> u8 {
        self.host_regs.system_flags.get(&self.mem)
    }

    fn set_gamepad(&mut self, gamepad: u32) {
        for (register, buttons) in self.host_regs.gamepads.iter().zip(gamepad.to_le_bytes()) {
            register.set(&mut self.mem, buttons);
        }
    }

    fn set_mouse(&mut self, x: i16, y: i16, buttons: u8) {
        self.host_regs.mouse_x.set(&mut self.mem, x);
        self.host_regs.mouse_y.set(&mut self.mem, y);
        self.host_regs.mouse_buttons.set(&mut self.mem, buttons);
    }

    fn set_netplay(&mut self, netplay: u8) {
        self.host_regs.netplay.set(&mut self.mem, netplay);
    }

    fn write_save_cache(&mut self) -> Option<Vec<u8>> {
        self.disk
            .take_dirty()
            .then(|| self.disk.contents().to_vec())
    }

    fn set_save_cache(&mut self, data: &[u8]) {
        self.disk = Disk::from_bytes(data);
    }
}

/// Run `frames` frames of a cartridge without presenting them.
///
/// The disk is loaded from `disk` before `start()` and stored back after
/// every frame the cartridge wrote to it.
pub fn run_headless<B: Backend + ?Sized>(
    backend: &mut B,
    disk: &dyn DiskManager,
    frames: u64,
) -> anyhow::Result<()> {
    let save = disk.read().context("failed to load save disk")?;
    backend.set_save_cache(&save);

    let start = Instant::now();
    backend.call_start();

    for _ in 0..frames {
        backend.call_update();

        if let Some(data) = backend.write_save_cache() {
            if let Err(err) = disk.write(&data) {
                error!("{err:#}");
            }
        }
    }

    debug!(
        "ran {frames} frames in {} ms",
        Instant::now().saturating_duration_since(start).as_millis()
    );

    Ok(())
}
