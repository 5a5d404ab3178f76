use crate::domain::model::Channel;
use crate::utils::error::Result;

/// The byte-emission primitive: push `bytes` out on `channel`.
///
/// Implementations write all of `bytes` and make them visible on the channel
/// before returning, or report why they could not.
pub trait ByteSink: Send {
    fn emit(&mut self, channel: Channel, bytes: &[u8]) -> Result<()>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn emit(&mut self, channel: Channel, bytes: &[u8]) -> Result<()> {
        (**self).emit(channel, bytes)
    }
}
