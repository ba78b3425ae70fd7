//! The `tone` primitive.
//!
//! Cartridges describe a sound with four packed integers. [`ToneSpec`]
//! decodes them into named fields, and [`AudioInterface`] hands decoded
//! tones to whatever synthesizer the host runs, without ever blocking the
//! frame callback.

use log::warn;
use std::sync::mpsc;

use crate::wasm4::{
    TONE_MODE1, TONE_MODE2, TONE_MODE3, TONE_MODE4, TONE_NOISE, TONE_NOTE_MODE, TONE_PAN_LEFT,
    TONE_PAN_RIGHT, TONE_PULSE1, TONE_PULSE2, TONE_TRIANGLE,
};

/// Volumes are percentages.
pub const MAX_VOLUME: u8 = 100;

const CHANNEL_MASK: u32 = 0b00_00_11;
const MODE_MASK: u32 = 0b00_11_00;
const PAN_MASK: u32 = 0b11_00_00;

/// The four sound generators of the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToneChannel {
    #[default]
    Pulse1,
    Pulse2,
    Triangle,
    Noise,
}

impl ToneChannel {
    pub fn from_tone_flags(flags: u32) -> Self {
        match flags & CHANNEL_MASK {
            TONE_PULSE1 => Self::Pulse1,
            TONE_PULSE2 => Self::Pulse2,
            TONE_TRIANGLE => Self::Triangle,
            _ => Self::Noise,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::Pulse1 => TONE_PULSE1,
            Self::Pulse2 => TONE_PULSE2,
            Self::Triangle => TONE_TRIANGLE,
            Self::Noise => TONE_NOISE,
        }
    }
}

/// Duty cycle of the pulse channels. Ignored by the other channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DutyCycle {
    /// 12.5%
    #[default]
    Eighth,
    /// 25%
    Quarter,
    /// 50%
    Half,
    /// 75%
    ThreeQuarters,
}

impl DutyCycle {
    pub fn from_tone_flags(flags: u32) -> Self {
        match flags & MODE_MASK {
            TONE_MODE1 => Self::Eighth,
            TONE_MODE2 => Self::Quarter,
            TONE_MODE3 => Self::Half,
            _ => Self::ThreeQuarters,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::Eighth => TONE_MODE1,
            Self::Quarter => TONE_MODE2,
            Self::Half => TONE_MODE3,
            Self::ThreeQuarters => TONE_MODE4,
        }
    }

    /// Fraction of a period the pulse is high.
    pub fn ratio(self) -> f32 {
        match self {
            Self::Eighth => 0.125,
            Self::Quarter => 0.25,
            Self::Half => 0.5,
            Self::ThreeQuarters => 0.75,
        }
    }
}

/// Stereo placement of a tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pan {
    #[default]
    Center,
    Left,
    Right,
}

impl Pan {
    /// Both pan bits set is not a valid placement and plays centered.
    pub fn from_tone_flags(flags: u32) -> Self {
        match flags & PAN_MASK {
            TONE_PAN_LEFT => Pan::Left,
            TONE_PAN_RIGHT => Pan::Right,
            _ => Pan::Center,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Pan::Center => 0,
            Pan::Left => TONE_PAN_LEFT,
            Pan::Right => TONE_PAN_RIGHT,
        }
    }
}

/// ADSR envelope, every phase in frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Envelope {
    pub attack: u8,
    pub decay: u8,
    pub sustain: u8,
    pub release: u8,
}

impl Envelope {
    pub fn from_duration(duration: u32) -> Self {
        let [sustain, release, decay, attack] = duration.to_le_bytes();
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    pub fn duration(&self) -> u32 {
        u32::from_le_bytes([self.sustain, self.release, self.decay, self.attack])
    }

    /// Length of the whole envelope in frames.
    pub fn total_frames(&self) -> u32 {
        self.attack as u32 + self.decay as u32 + self.sustain as u32 + self.release as u32
    }
}

/// A decoded `tone` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToneSpec {
    /// Frequency in Hz, or note and pitch bend in note mode.
    pub start_freq: u16,
    /// Frequency to slide to over the envelope. 0 means no slide.
    pub end_freq: u16,
    pub envelope: Envelope,
    /// Sustain volume, 0 to 100.
    pub volume: u8,
    /// Attack peak volume, 0 to 100. 0 means 100.
    pub peak_volume: u8,
    pub channel: ToneChannel,
    pub duty: DutyCycle,
    pub pan: Pan,
    /// Frequencies are MIDI notes with a pitch bend in 1/256 semitones.
    pub note_mode: bool,
}

impl ToneSpec {
    pub fn decode(frequency: u32, duration: u32, volume: u32, flags: u32) -> Self {
        Self {
            start_freq: (frequency & 0xffff) as u16,
            end_freq: (frequency >> 16) as u16,
            envelope: Envelope::from_duration(duration),
            volume: (volume & 0xff) as u8,
            peak_volume: ((volume >> 8) & 0xff) as u8,
            channel: ToneChannel::from_tone_flags(flags),
            duty: DutyCycle::from_tone_flags(flags),
            pan: Pan::from_tone_flags(flags),
            note_mode: flags & TONE_NOTE_MODE != 0,
        }
    }

    /// The `(frequency, duration, volume, flags)` arguments of `tone`.
    pub fn encode(&self) -> (u32, u32, u32, u32) {
        let frequency = self.start_freq as u32 | (self.end_freq as u32) << 16;
        let volume = self.volume as u32 | (self.peak_volume as u32) << 8;
        let mut flags = self.channel.bits() | self.duty.bits() | self.pan.bits();
        if self.note_mode {
            flags |= TONE_NOTE_MODE;
        }
        (frequency, self.envelope.duration(), volume, flags)
    }

    /// Start frequency in Hz.
    pub fn start_hz(&self) -> f32 {
        self.to_hz(self.start_freq)
    }

    /// End frequency in Hz, if the tone slides.
    pub fn end_hz(&self) -> Option<f32> {
        (self.end_freq != 0).then(|| self.to_hz(self.end_freq))
    }

    /// Sustain volume, clamped to 100.
    pub fn sustain_volume(&self) -> u8 {
        self.volume.min(MAX_VOLUME)
    }

    /// Peak volume, clamped to 100.
    pub fn peak_volume(&self) -> u8 {
        match self.peak_volume {
            0 => MAX_VOLUME,
            v => v.min(MAX_VOLUME),
        }
    }

    fn to_hz(&self, freq: u16) -> f32 {
        if self.note_mode {
            let [note, bend] = freq.to_le_bytes();
            note_frequency(note, bend)
        } else {
            freq as f32
        }
    }
}

/// Frequency of a MIDI note, bent up by `bend`/256 semitones.
pub fn note_frequency(note: u8, bend: u8) -> f32 {
    let semitones = note as f32 - 69.0 + bend as f32 / 256.0;
    440.0 * (semitones / 12.0).exp2()
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Tone(ToneSpec),
    NextFrame,
}

/// Receiving end of the audio commands, as seen by a synthesizer.
pub trait AudioCommandPoller {
    fn poll(&mut self) -> Option<AudioCommand>;
}

impl AudioCommandPoller for mpsc::Receiver<AudioCommand> {
    fn poll(&mut self) -> Option<AudioCommand> {
        self.try_recv().ok()
    }
}

/// Sending end of the audio commands, as seen by the cartridge.
///
/// A disconnected interface drops every command.
#[derive(Debug, Clone, Default)]
pub struct AudioInterface {
    command_sender: Option<mpsc::Sender<AudioCommand>>,
}

impl AudioInterface {
    /// Create an interface together with the receiver a synthesizer
    /// polls commands from.
    pub fn channel() -> (Self, mpsc::Receiver<AudioCommand>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                command_sender: Some(tx),
            },
            rx,
        )
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.command_sender.is_some()
    }

    fn do_send(&self, cmd: AudioCommand) {
        if let Some(tx) = &self.command_sender {
            if let Err(e) = tx.send(cmd) {
                warn!("sending command to audio processor failed ({})", e);
            }
        }
    }

    /// Play a tone given as the packed arguments of `tone`.
    pub fn tone(&self, frequency: u32, duration: u32, volume: u32, flags: u32) {
        self.play(ToneSpec::decode(frequency, duration, volume, flags));
    }

    pub fn play(&self, spec: ToneSpec) {
        self.do_send(AudioCommand::Tone(spec));
    }

    /// Mark the end of a frame.
    pub fn update(&self) {
        self.do_send(AudioCommand::NextFrame);
    }
}
