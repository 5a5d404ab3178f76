use crate::domain::model::Channel;
use crate::domain::ports::ByteSink;
use crate::utils::error::{Result, WriteError};
use std::io::{self, Write};

/// Routes the standard output channel to `out` and the error channel to `err`.
#[derive(Debug, Clone, Default)]
pub struct StreamPair<O, E> {
    out: O,
    err: E,
}

/// The process's own standard streams.
pub type StdStreams = StreamPair<io::Stdout, io::Stderr>;

impl StdStreams {
    pub fn std() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

/// In-memory streams, handy for capturing what a writer produced.
pub type BufferStreams = StreamPair<Vec<u8>, Vec<u8>>;

impl<O, E> StreamPair<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

// One write call per emission; a partial write is reported, not resumed.
fn emit_to<W: Write>(target: &mut W, channel: Channel, bytes: &[u8]) -> Result<()> {
    let written = target
        .write(bytes)
        .and_then(|n| target.flush().map(|()| n))
        .map_err(|source| WriteError::Io { channel, source })?;

    if written < bytes.len() {
        return Err(WriteError::ShortWrite {
            channel,
            written,
            expected: bytes.len(),
        });
    }
    Ok(())
}

impl<O: Write + Send, E: Write + Send> ByteSink for StreamPair<O, E> {
    fn emit(&mut self, channel: Channel, bytes: &[u8]) -> Result<()> {
        match channel {
            Channel::Stdout => emit_to(&mut self.out, channel, bytes),
            Channel::Stderr => emit_to(&mut self.err, channel, bytes),
        }
    }
}
