//! Character I/O ports.
//!
//! The interpreter core never touches `Stdin`/`Stdout` directly — `OUT`
//! and `IN` are wired to a [`CharSink`]/[`CharSource`] pair the host
//! provides. This is the same separation the donor crate draws between
//! its instruction cycle and `Emulator::update_devices`, generalized into
//! a trait so the §8 end-to-end scenarios can run against an in-memory
//! buffer instead of real stdio.

use std::io::{self, Read, Write};

/// Destination for bytes written by the `OUT` opcode.
pub trait CharSink {
    /// Write one byte.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Flush any buffering. The interpreter calls this before reporting a
    /// `Halt` state, per the spec's "flush before reporting HALT" rule.
    fn flush(&mut self) -> io::Result<()>;
}

/// Source of bytes read by the `IN` opcode. Returns `None` on EOF.
pub trait CharSource {
    /// Read one byte, or `None` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// [`CharSink`] backed by any [`Write`] implementor (e.g. `Stdout`).
pub struct WriteSink<W: Write>(pub W);

impl<W: Write> CharSink for WriteSink<W> {
    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.0.write_all(&[byte])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// [`CharSource`] backed by any [`Read`] implementor (e.g. `Stdin`).
pub struct ReadSource<R: Read>(pub R);

impl<R: Read> CharSource for ReadSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.0.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    //! In-memory ports for exercising §8 scenarios without real stdio.
    use super::*;

    #[derive(Default)]
    pub struct VecSink(pub Vec<u8>);

    impl CharSink for VecSink {
        fn write_byte(&mut self, byte: u8) -> io::Result<()> {
            self.0.push(byte);
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub struct SliceSource<'a> {
        bytes: &'a [u8],
        pos: usize,
    }

    impl<'a> SliceSource<'a> {
        pub fn new(bytes: &'a [u8]) -> Self {
            Self { bytes, pos: 0 }
        }
    }

    impl CharSource for SliceSource<'_> {
        fn read_byte(&mut self) -> io::Result<Option<u8>> {
            if self.pos >= self.bytes.len() {
                return Ok(None);
            }
            let b = self.bytes[self.pos];
            self.pos += 1;
            Ok(Some(b))
        }
    }
}
