use crate::domain::model::Channel;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Write to {channel} failed: {source}")]
    Io {
        channel: Channel,
        #[source]
        source: std::io::Error,
    },

    #[error("Short write to {channel}: {written} of {expected} bytes")]
    ShortWrite {
        channel: Channel,
        written: usize,
        expected: usize,
    },
}

impl WriteError {
    pub fn channel(&self) -> Channel {
        match self {
            WriteError::Io { channel, .. } | WriteError::ShortWrite { channel, .. } => *channel,
        }
    }
}

pub type Result<T> = std::result::Result<T, WriteError>;
