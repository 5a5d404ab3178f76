use ft_write::{
    program, BufferStreams, ByteSink, ByteWriter, Channel, Result, StreamPair, WriteError,
    ERROR_MESSAGE, GREETING,
};
use std::io::{self, Write};

struct Closed;

impl Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn test_channels_stay_separate() {
    let mut writer = ByteWriter::new(BufferStreams::default());

    writer.write_char(b'A');
    assert_eq!(writer.sink().out().as_slice(), b"A");
    assert!(writer.sink().err().is_empty());

    writer.write_greeting();
    assert_eq!(writer.sink().out().len(), 1 + GREETING.len());
    assert!(writer.sink().err().is_empty());

    writer.write_error();
    assert_eq!(writer.sink().out().len(), 1 + GREETING.len());
    assert_eq!(writer.sink().err().as_slice(), ERROR_MESSAGE);
}

#[test]
fn test_program_survives_closed_stdout() {
    let mut writer = ByteWriter::new(StreamPair::new(Closed, Vec::new()));
    program::run(&mut writer);

    let (_, err) = writer.into_inner().into_parts();
    assert_eq!(err, b"Error\n");
}

#[test]
fn test_program_survives_closed_stderr() {
    let mut writer = ByteWriter::new(StreamPair::new(Vec::new(), Closed));
    program::run(&mut writer);

    let (out, _) = writer.into_inner().into_parts();
    assert_eq!(out, b"A\nErgis Hasani\n");
}

#[test]
fn test_checked_write_reports_channel() {
    let mut writer = ByteWriter::new(StreamPair::new(Closed, Vec::new()));

    match writer.try_write_char(b'A') {
        Err(WriteError::Io { channel, source }) => {
            assert_eq!(channel, Channel::Stdout);
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(writer.try_write_error().is_ok());
}

/// A sink keyed by raw descriptor numbers, as a low-level caller would see them.
#[derive(Default)]
struct DescriptorLog(Vec<(i32, usize)>);

impl ByteSink for DescriptorLog {
    fn emit(&mut self, channel: Channel, bytes: &[u8]) -> Result<()> {
        self.0.push((channel.descriptor(), bytes.len()));
        Ok(())
    }
}

#[test]
fn test_program_emission_order_by_descriptor() {
    let mut writer = ByteWriter::new(DescriptorLog::default());
    program::run(&mut writer);

    assert_eq!(
        writer.into_inner().0,
        vec![(1, 1), (1, 1), (1, 12), (1, 1), (2, 6)]
    );
}
