use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use argh::FromArgs;
use log::{debug, info};
use w4_mmio::{
    audio::{AudioCommand, AudioCommandPoller},
    utils, wasm4, AudioInterface, Backend, FileDisk, RuntimeConfig, WasmiBackend,
};

#[derive(FromArgs)]
#[argh(description = "Run wasm4 compatible games without a window.")]
struct Args {
    #[argh(positional)]
    path: PathBuf,
    #[argh(
        option,
        short = 'f',
        default = "60",
        description = "number of frames to run"
    )]
    frames: u64,
    #[argh(
        option,
        short = 'd',
        description = "save disk location, defaults to the cart path with a .disk extension"
    )]
    disk: Option<PathBuf>,
    #[argh(
        option,
        short = 's',
        description = "write the last frame to this file as a binary PPM image"
    )]
    screenshot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    pretty_env_logger::init();

    let wasm_bytes = fs::read(&args.path)
        .with_context(|| format!("failed to read game {}", args.path.display()))?;

    let (audio, mut commands) = AudioInterface::channel();
    let config = RuntimeConfig {
        audio,
        ..RuntimeConfig::default()
    };
    let mut backend = WasmiBackend::new(&wasm_bytes, config)?;

    let disk = match args.disk {
        Some(path) => FileDisk::new(path),
        None => FileDisk::beside_cart(&args.path),
    };
    debug!("using save disk {}", disk.path().display());

    w4_mmio::run_headless(&mut backend, &disk, args.frames)?;

    let mut tones = 0;
    while let Some(cmd) = commands.poll() {
        if let AudioCommand::Tone(spec) = cmd {
            debug!("tone {spec:?}");
            tones += 1;
        }
    }
    info!("{} frames, {tones} tones", backend.frame_count());

    if let Some(path) = args.screenshot {
        let mut framebuffer = utils::default_framebuffer();
        let mut palette = [0; 4];
        backend.read_screen(&mut framebuffer, &mut palette);
        write_ppm(&path, &framebuffer, palette)?;
    }

    Ok(())
}

fn write_ppm(path: &Path, framebuffer: &[u8], palette: [u32; 4]) -> anyhow::Result<()> {
    let mut image = format!("P6\n{0} {0}\n255\n", wasm4::SCREEN_SIZE).into_bytes();
    image.extend(utils::framebuffer_to_rgb(framebuffer, palette));

    fs::File::create(path)
        .and_then(|mut file| file.write_all(&image))
        .with_context(|| format!("failed to write screenshot {}", path.display()))
}
