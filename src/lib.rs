pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, LogFormat};

pub use crate::adapters::{BufferStreams, StdStreams, StreamPair};
pub use crate::core::{program, writer::ByteWriter};
pub use crate::domain::model::{Channel, ERROR_MESSAGE, GREETING};
pub use crate::domain::ports::ByteSink;
pub use crate::utils::error::{Result, WriteError};
