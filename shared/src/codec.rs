//! Newline-terminated line codec
//!
//! Every command is framed as:
//! ```text
//! [ N bytes: ASCII command ][ 1 byte: '\n' ]
//! ```
//!
//! There is no length prefix, escaping or checksum; the sketch on the board
//! reads up to the terminator.

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

use crate::Command;

/// Line terminator appended to every command
pub const TERMINATOR: u8 = b'\n';

/// Errors raised when building a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Command is empty")]
    EmptyCommand,

    #[error("Command contains a line break: {0:?}")]
    EmbeddedNewline(String),

    #[error("Command is not ASCII: {0:?}")]
    NonAscii(String),
}

/// Encode a command into a newline-terminated byte buffer
pub fn encode(command: &Command) -> Bytes {
    let mut buf = BytesMut::with_capacity(command.framed_len());
    encode_into(command, &mut buf);
    buf.freeze()
}

/// Append a newline-terminated command to a provided buffer
pub fn encode_into(command: &Command, buf: &mut BytesMut) {
    buf.reserve(command.framed_len());
    buf.put_slice(command.as_str().as_bytes());
    buf.put_u8(TERMINATOR);
}
