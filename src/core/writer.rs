use crate::domain::model::{Channel, ERROR_MESSAGE, GREETING};
use crate::domain::ports::ByteSink;
use crate::utils::error::Result;

/// Writes single bytes and fixed literals to the standard channels.
///
/// The plain operations are fire-and-forget: a failed write is logged at
/// `debug` and dropped. The `try_` variants hand the failure back instead.
pub struct ByteWriter<S: ByteSink> {
    sink: S,
}

impl<S: ByteSink> ByteWriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    pub fn try_write_bytes(&mut self, channel: Channel, bytes: &[u8]) -> Result<()> {
        tracing::trace!(%channel, len = bytes.len(), "emitting bytes");
        self.sink.emit(channel, bytes)
    }

    /// Writes exactly one byte to standard output.
    pub fn try_write_char(&mut self, c: u8) -> Result<()> {
        self.try_write_bytes(Channel::Stdout, &[c])
    }

    pub fn try_write_greeting(&mut self) -> Result<()> {
        self.try_write_bytes(Channel::Stdout, GREETING)
    }

    pub fn try_write_error(&mut self) -> Result<()> {
        self.try_write_bytes(Channel::Stderr, ERROR_MESSAGE)
    }

    pub fn write_bytes(&mut self, channel: Channel, bytes: &[u8]) {
        if let Err(e) = self.try_write_bytes(channel, bytes) {
            tracing::debug!("Ignoring failed write: {}", e);
        }
    }

    pub fn write_char(&mut self, c: u8) {
        self.write_bytes(Channel::Stdout, &[c]);
    }

    pub fn write_greeting(&mut self) {
        self.write_bytes(Channel::Stdout, GREETING);
    }

    pub fn write_error(&mut self) {
        self.write_bytes(Channel::Stderr, ERROR_MESSAGE);
    }
}
