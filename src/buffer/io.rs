//! Reading buffers from streams and printing them

use std::io::{BufRead, Read, Write};

use crate::error::Result;

use super::alloc::{BufferAllocator, Global};
use super::utf8;
use super::Buffer;

impl Buffer {
    /// Read one line, keeping its trailing `'\n'`
    ///
    /// Reading stops after a newline, at a NUL byte (which is consumed but not
    /// stored) or at end of input. Returns `Ok(None)` when the input was
    /// already exhausted.
    pub fn read_line<R: BufRead>(reader: &mut R, capacity: usize) -> Result<Option<Buffer>> {
        Self::read_line_in(reader, capacity, &mut Global)
    }

    pub fn read_line_in<R: BufRead, A: BufferAllocator>(
        reader: &mut R,
        capacity: usize,
        alloc: &mut A,
    ) -> Result<Option<Buffer>> {
        let mut line = Buffer::with_capacity_in(capacity, alloc)?;
        let mut saw_input = false;

        loop {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            saw_input = true;

            match available.iter().position(|&b| b == b'\n' || b == 0) {
                Some(at) => {
                    let stop = available[at];
                    let keep = if stop == b'\n' { at + 1 } else { at };
                    line.append_bytes_in(&available[..keep], alloc)?;
                    reader.consume(at + 1);
                    break;
                }
                None => {
                    let taken = available.len();
                    line.append_bytes_in(available, alloc)?;
                    reader.consume(taken);
                }
            }
        }

        Ok(saw_input.then_some(line))
    }

    /// Read everything left in `reader`
    pub fn read_all<R: Read>(mut reader: R) -> Result<Buffer> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Buffer::from_bytes(&bytes)?)
    }

    /// Write the content with control characters escaped
    pub fn write_escaped<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for seq in utf8::sequences(self.as_bytes()) {
            match seq {
                b"\n" => out.write_all(b"\\n")?,
                b"\t" => out.write_all(b"\\t")?,
                b"\r" => out.write_all(b"\\r")?,
                b"'" => out.write_all(b"\\'")?,
                b"\\" => out.write_all(b"\\\\")?,
                b"\x07" => out.write_all(b"\\a")?,
                b"\x08" => out.write_all(b"\\b")?,
                b"\x1b" => out.write_all(b"\\e")?,
                b"\x0c" => out.write_all(b"\\f")?,
                b"\x0b" => out.write_all(b"\\v")?,
                other => out.write_all(other)?,
            }
        }
        Ok(())
    }

    /// Write escaped when `is_terminal`, raw otherwise
    pub fn write_term<W: Write>(&self, out: &mut W, is_terminal: bool) -> std::io::Result<()> {
        if is_terminal {
            self.write_escaped(out)
        } else {
            out.write_all(self.as_bytes())
        }
    }
}
