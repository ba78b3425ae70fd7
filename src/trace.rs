//! The `trace` primitives.

use byteorder::{ByteOrder, LittleEndian};
use log::error;

use crate::Source;

/// Receives the debug messages of a cartridge.
pub trait Tracer {
    fn trace(&mut self, msg: &str);
}

/// Forwards messages to the `log` crate at info level, target `cart`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&mut self, msg: &str) {
        log::info!(target: "cart", "{msg}");
    }
}

/// Collects messages, mostly useful in tests.
impl Tracer for Vec<String> {
    fn trace(&mut self, msg: &str) {
        self.push(msg.to_owned());
    }
}

/// Decode a C string. Each byte is one character (Latin-1).
pub fn cstr_to_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect()
}

/// Decode little endian UTF-16, replacing invalid code units. A trailing
/// odd byte is ignored.
pub fn decode_utf16(bytes: &[u8]) -> String {
    let units = bytes.chunks_exact(2).map(LittleEndian::read_u16);
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

fn arg(args: &[u8], idx: usize, width: usize) -> Option<&[u8]> {
    args.get(idx..idx.checked_add(width)?)
}

/// Format a string the way the `tracef` primitive does.
///
/// Arguments:
/// - `fmt: &str`: the format string (with '%' characters).
/// - `args: &[u8]`: bytes containing argument values after the argument pointer.
/// - `mem: impl Source<u8>`: a reference to the cart's memory. This is used to access inserted strings.
///
/// Supported are `%c`, `%d`, `%x`, `%s`, `%f` and `%%`. Unknown
/// directives print nothing. Formatting stops at the first argument that
/// doesn't fit into `args`.
pub fn tracef<T: Source<u8> + ?Sized>(fmt: &str, args: &[u8], mem: &T) -> String {
    let mut arg_idx = 0;
    let mut fmt = fmt.chars();

    let mut output = String::new();

    while let Some(ch) = fmt.next() {
        if ch == '\0' {
            break;
        }

        if ch != '%' {
            output.push(ch);
            continue;
        }

        let Some(ch) = fmt.next() else {
            break;
        };

        match ch {
            '%' => output.push('%'),
            'c' => {
                let Some(bytes) = arg(args, arg_idx, 4) else {
                    error!("failed to read char at {arg_idx}");
                    break;
                };
                let val = LittleEndian::read_u32(bytes);
                output.push(char::from_u32(val).unwrap_or(char::REPLACEMENT_CHARACTER));
                arg_idx += 4;
            }
            'd' | 'x' => {
                let Some(bytes) = arg(args, arg_idx, 4) else {
                    error!("failed to read i32 at {arg_idx}");
                    break;
                };
                let val = LittleEndian::read_i32(bytes);
                if ch == 'd' {
                    output.push_str(&val.to_string());
                } else {
                    output.push_str(&format!("{val:x}"));
                }
                arg_idx += 4;
            }
            's' => {
                let Some(bytes) = arg(args, arg_idx, 4) else {
                    error!("failed to read ptr at {arg_idx}");
                    break;
                };
                let mut str_ptr = LittleEndian::read_u32(bytes) as usize;

                while let Some(byte) = mem.item_at(str_ptr) {
                    if byte == 0 {
                        break;
                    }
                    output.push(char::from(byte));
                    str_ptr += 1;
                }
                arg_idx += 4;
            }
            'f' => {
                let Some(bytes) = arg(args, arg_idx, 8) else {
                    error!("failed to read f64 at {arg_idx}");
                    break;
                };
                output.push_str(&LittleEndian::read_f64(bytes).to_string());
                arg_idx += 8;
            }
            _ => {}
        }
    }

    output
}
