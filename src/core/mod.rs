pub mod program;
pub mod writer;

pub use crate::domain::model::{Channel, ERROR_MESSAGE, GREETING};
pub use crate::domain::ports::ByteSink;
pub use crate::utils::error::Result;
