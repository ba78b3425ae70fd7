//! Running WebAssembly cartridges with [wasmi](https://docs.rs/wasmi).

use anyhow::anyhow;
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, error};
use wasmi::{Caller, Engine, Func, Instance, Linker, MemoryType, Module, Store};

use crate::{
    audio::AudioInterface,
    disk::Disk,
    framebuffer::sprite_byte_len,
    memory::{CartRegisters, HostRegisters, Memory},
    runtime::RuntimeConfig,
    system::System,
    trace::{self, Tracer},
    wasm4::{FRAMEBUFFER_SIZE, SYSTEM_PRESERVE_FRAMEBUFFER},
    Backend,
};

/// Everything the host functions need besides the linear memory.
struct HostState {
    cart_regs: CartRegisters,
    disk: Disk,
    audio: AudioInterface,
    tracer: Box<dyn Tracer>,
}

impl HostState {
    fn system<'a, B: AsRef<[u8]> + AsMut<[u8]>>(&'a mut self, mem: &'a mut Memory<B>) -> System<'a, B> {
        System::new(
            mem,
            &self.cart_regs,
            &mut self.disk,
            &self.audio,
            self.tracer.as_mut(),
        )
    }
}

/// A WebAssembly cartridge, interpreted by wasmi.
pub struct WasmiBackend {
    store: Store<HostState>,
    memory: wasmi::Memory,
    host_regs: HostRegisters,
    start: Func,
    update: Func,
    frame: u64,
}

impl WasmiBackend {
    /// Load a cartridge with the default configuration.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::new(bytes, RuntimeConfig::default())
    }

    /// Instantiate a cartridge, link the WASM-4 imports and run its
    /// `_start`/`_initialize` exports if present.
    ///
    /// Fails if the module is invalid, imports something the console
    /// doesn't provide, or lacks a `start` or `update` export.
    pub fn new(bytes: &[u8], config: RuntimeConfig) -> anyhow::Result<Self> {
        let engine = Engine::default();
        let module = Module::new(&engine, bytes)
            .map_err(|err| anyhow!("failed to parse cartridge: {err}"))?;

        let state = HostState {
            cart_regs: CartRegisters::new()?,
            disk: Disk::new(),
            audio: config.audio,
            tracer: config.tracer,
        };
        let host_regs = HostRegisters::new()?;

        let mut store = Store::new(&engine, state);
        let ty = MemoryType::new(1, Some(1)).map_err(|err| anyhow!("{err}"))?;
        let memory = wasmi::Memory::new(&mut store, ty).map_err(|err| anyhow!("{err}"))?;

        {
            let (data, state) = memory.data_and_store_mut(&mut store);
            let mut mem = Memory::wrap(data)?;
            mem.init_defaults();
            state.cart_regs.palette.set(&mut mem, config.palette);
            state.cart_regs.draw_colors.set(&mut mem, config.draw_colors);
        }

        let mut linker = <Linker<HostState>>::new(&engine);
        linker
            .define("env", "memory", memory)
            .map_err(|err| anyhow!("{err}"))?;

        let env: [(&str, Func); 17] = [
            ("blit", blit(&mut store, memory)),
            ("blitSub", blit_sub(&mut store, memory)),
            ("line", line(&mut store, memory)),
            ("hline", hline(&mut store, memory)),
            ("vline", vline(&mut store, memory)),
            ("oval", oval(&mut store, memory)),
            ("rect", rect(&mut store, memory)),
            ("text", text(&mut store, memory)),
            ("textUtf8", text_utf8(&mut store, memory)),
            ("textUtf16", text_utf16(&mut store, memory)),
            ("tone", tone(&mut store)),
            ("diskr", diskr(&mut store, memory)),
            ("diskw", diskw(&mut store, memory)),
            ("trace", trace(&mut store, memory)),
            ("traceUtf8", trace_utf8(&mut store, memory)),
            ("traceUtf16", trace_utf16(&mut store, memory)),
            ("tracef", tracef(&mut store, memory)),
        ];

        for (name, func) in env {
            linker
                .define("env", name, func)
                .map_err(|err| anyhow!("{err}"))?;
        }

        let instance = linker
            .instantiate(&mut store, &module)
            .map_err(|err| anyhow!("failed to instantiate cartridge: {err}"))?
            .start(&mut store)
            .map_err(|err| anyhow!("failed to instantiate cartridge: {err}"))?;

        let start = export(&instance, &store, "start")?;
        let update = export(&instance, &store, "update")?;

        // WASI entry points, unrelated to the WASM-4 start callback
        for name in ["_start", "_initialize"] {
            if let Some(func) = instance.get_func(&store, name) {
                debug!("calling {name}()");
                func.call(&mut store, &[], &mut [])
                    .map_err(|err| anyhow!("error calling '{name}': {err}"))?;
            }
        }

        Ok(Self {
            store,
            memory,
            host_regs,
            start,
            update,
            frame: 0,
        })
    }

    /// Number of `update()` calls so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn disk(&self) -> &Disk {
        &self.store.data().disk
    }

    fn memory(&self) -> Option<Memory<&[u8]>> {
        Memory::wrap(self.memory.data(&self.store))
            .map_err(|err| error!("{err}"))
            .ok()
    }

    fn memory_mut(&mut self) -> Option<Memory<&mut [u8]>> {
        Memory::wrap(self.memory.data_mut(&mut self.store))
            .map_err(|err| error!("{err}"))
            .ok()
    }
}

fn export(instance: &Instance, store: &Store<HostState>, name: &str) -> anyhow::Result<Func> {
    instance
        .get_func(store, name)
        .ok_or_else(|| anyhow!("the cartridge does not export a '{name}' function"))
}

impl Backend for WasmiBackend {
    fn call_start(&mut self) {
        debug!("calling start()");
        if let Err(err) = self.start.call(&mut self.store, &[], &mut []) {
            error!("error calling 'start': {err}");
        }
    }

    fn call_update(&mut self) {
        if self.read_system_flags() & SYSTEM_PRESERVE_FRAMEBUFFER == 0 {
            if let Some(mut mem) = self.memory_mut() {
                mem.clear_framebuffer();
            }
        }

        if let Err(err) = self.update.call(&mut self.store, &[], &mut []) {
            error!("error calling 'update': {err}");
        }

        self.store.data().audio.update();
        self.frame += 1;
    }

    fn read_screen(&self, framebuffer: &mut [u8; FRAMEBUFFER_SIZE], palette: &mut [u32; 4]) {
        if let Some(mem) = self.memory() {
            framebuffer.copy_from_slice(self.host_regs.framebuffer.slice(&mem));
            *palette = self.host_regs.palette.get(&mem);
        }
    }

    fn read_system_flags(&self) -> u8 {
        self.memory()
            .map_or(0, |mem| self.host_regs.system_flags.get(&mem))
    }

    fn set_gamepad(&mut self, gamepad: u32) {
        let regs = self.host_regs;
        if let Some(mut mem) = self.memory_mut() {
            for (register, buttons) in regs.gamepads.iter().zip(gamepad.to_le_bytes()) {
                register.set(&mut mem, buttons);
            }
        }
    }

    fn set_mouse(&mut self, x: i16, y: i16, buttons: u8) {
        let regs = self.host_regs;
        if let Some(mut mem) = self.memory_mut() {
            regs.mouse_x.set(&mut mem, x);
            regs.mouse_y.set(&mut mem, y);
            regs.mouse_buttons.set(&mut mem, buttons);
        }
    }

    fn set_netplay(&mut self, netplay: u8) {
        let regs = self.host_regs;
        if let Some(mut mem) = self.memory_mut() {
            regs.netplay.set(&mut mem, netplay);
        }
    }

    fn write_save_cache(&mut self) -> Option<Vec<u8>> {
        let disk = &mut self.store.data_mut().disk;
        disk.take_dirty().then(|| disk.contents().to_vec())
    }

    fn set_save_cache(&mut self, data: &[u8]) {
        self.store.data_mut().disk = Disk::from_bytes(data);
    }
}

/// Run `f` on the cartridge's memory. Nothing happens if the memory is
/// smaller than the memory map.
fn with_memory<R>(
    memory: wasmi::Memory,
    caller: &mut Caller<'_, HostState>,
    f: impl FnOnce(&mut Memory<&mut [u8]>, &mut HostState) -> R,
) -> Option<R> {
    let (data, state) = memory.data_and_store_mut(caller);
    match Memory::wrap(data) {
        Ok(mut mem) => Some(f(&mut mem, state)),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

/// Up to `len` bytes at `ptr`, cut off at the end of memory.
fn bytes_at<B: AsRef<[u8]>>(mem: &Memory<B>, ptr: u32, len: usize) -> &[u8] {
    let tail = mem.bytes().get(ptr as usize..).unwrap_or_default();
    &tail[..tail.len().min(len)]
}

fn blit(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>,
              ptr: u32,
              x: i32,
              y: i32,
              width: u32,
              height: u32,
              flags: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                let len = sprite_byte_len(width, height, 0, 0, width, flags);
                let sprite = bytes_at(mem, ptr, len).to_vec();
                state.system(mem).blit(&sprite, x, y, width, height, flags);
            });
        },
    )
}

fn blit_sub(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>,
              ptr: u32,
              x: i32,
              y: i32,
              width: u32,
              height: u32,
              src_x: u32,
              src_y: u32,
              stride: u32,
              flags: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                let len = sprite_byte_len(width, height, src_x, src_y, stride, flags);
                let sprite = bytes_at(mem, ptr, len).to_vec();
                state
                    .system(mem)
                    .blit_sub(&sprite, x, y, width, height, src_x, src_y, stride, flags);
            });
        },
    )
}

fn line(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, x1: i32, y1: i32, x2: i32, y2: i32| {
            with_memory(memory, &mut caller, |mem, state| {
                state.system(mem).line(x1, y1, x2, y2)
            });
        },
    )
}

fn hline(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, x: i32, y: i32, len: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                state.system(mem).hline(x, y, len)
            });
        },
    )
}

fn vline(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, x: i32, y: i32, len: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                state.system(mem).vline(x, y, len)
            });
        },
    )
}

fn oval(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, x: i32, y: i32, width: u32, height: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                state.system(mem).oval(x, y, width, height)
            });
        },
    )
}

fn rect(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, x: i32, y: i32, width: u32, height: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                state.system(mem).rect(x, y, width, height)
            });
        },
    )
}

fn text(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, ptr: u32, x: i32, y: i32| {
            with_memory(memory, &mut caller, |mem, state| {
                let text = mem.cstr_at(ptr as usize).to_vec();
                state.system(mem).text_bytes(&text, x, y);
            });
        },
    )
}

fn text_utf8(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, ptr: u32, len: u32, x: i32, y: i32| {
            with_memory(memory, &mut caller, |mem, state| {
                let text = String::from_utf8_lossy(bytes_at(mem, ptr, len as usize)).into_owned();
                state.system(mem).text(&text, x, y);
            });
        },
    )
}

fn text_utf16(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, ptr: u32, len: u32, x: i32, y: i32| {
            with_memory(memory, &mut caller, |mem, state| {
                let units: Vec<u16> = bytes_at(mem, ptr, len as usize)
                    .chunks_exact(2)
                    .map(LittleEndian::read_u16)
                    .collect();
                state.system(mem).text_utf16(&units, x, y);
            });
        },
    )
}

fn tone(store: &mut Store<HostState>) -> Func {
    Func::wrap(
        store,
        |caller: Caller<'_, HostState>, frequency: u32, duration: u32, volume: u32, flags: u32| {
            caller.data().audio.tone(frequency, duration, volume, flags)
        },
    )
}

fn diskr(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, dest: u32, size: u32| -> u32 {
            with_memory(memory, &mut caller, |mem, state| {
                let dest = mem.bytes_mut().get_mut(dest as usize..).unwrap_or_default();
                state.disk.read(dest, size as usize) as u32
            })
            .unwrap_or(0)
        },
    )
}

fn diskw(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, src: u32, size: u32| -> u32 {
            with_memory(memory, &mut caller, |mem, state| {
                let src = bytes_at(mem, src, size as usize);
                state.disk.write(src, size as usize) as u32
            })
            .unwrap_or(0)
        },
    )
}

fn trace(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, ptr: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                let msg = trace::cstr_to_string(mem.cstr_at(ptr as usize));
                state.tracer.trace(&msg);
            });
        },
    )
}

fn trace_utf8(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, ptr: u32, len: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                let msg = String::from_utf8_lossy(bytes_at(mem, ptr, len as usize));
                state.tracer.trace(&msg);
            });
        },
    )
}

fn trace_utf16(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, ptr: u32, len: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                let msg = trace::decode_utf16(bytes_at(mem, ptr, len as usize));
                state.tracer.trace(&msg);
            });
        },
    )
}

fn tracef(store: &mut Store<HostState>, memory: wasmi::Memory) -> Func {
    Func::wrap(
        store,
        move |mut caller: Caller<'_, HostState>, fmt: u32, args: u32| {
            with_memory(memory, &mut caller, |mem, state| {
                let fmt = trace::cstr_to_string(mem.cstr_at(fmt as usize));
                let args = mem.bytes().get(args as usize..).unwrap_or_default();
                let msg = trace::tracef(&fmt, args, mem.bytes());
                state.tracer.trace(&msg);
            });
        },
    )
}
