use std::fmt;

/// The name string written by `write_greeting`.
pub const GREETING: &[u8] = b"Ergis Hasani";

/// The literal written to standard error by `write_error`.
pub const ERROR_MESSAGE: &[u8] = b"Error\n";

/// An output destination, identified by its fixed descriptor number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Stdout,
    Stderr,
}

impl Channel {
    pub const fn descriptor(self) -> i32 {
        match self {
            Channel::Stdout => 1,
            Channel::Stderr => 2,
        }
    }

    pub fn from_descriptor(fd: i32) -> Option<Self> {
        match fd {
            1 => Some(Channel::Stdout),
            2 => Some(Channel::Stderr),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Stdout => f.write_str("stdout"),
            Channel::Stderr => f.write_str("stderr"),
        }
    }
}
