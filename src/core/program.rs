use crate::core::writer::ByteWriter;
use crate::domain::model::Channel;
use crate::domain::ports::ByteSink;

/// Runs the demonstration sequence: a character, the greeting, then the
/// error message. Never fails; write errors are dropped by the writer.
pub fn run<S: ByteSink>(writer: &mut ByteWriter<S>) {
    tracing::debug!("Writing character");
    writer.write_char(b'A');
    writer.write_bytes(Channel::Stdout, b"\n");

    tracing::debug!("Writing greeting");
    writer.write_greeting();
    writer.write_bytes(Channel::Stdout, b"\n");

    tracing::debug!("Writing error message");
    writer.write_error();
}
