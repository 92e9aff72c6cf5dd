//! Command text sent to the buzzer

use std::borrow::Cow;
use std::fmt;

use crate::codec::{CodecError, TERMINATOR};

/// A validated, newline-free ASCII command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    text: Cow<'static, str>,
}

impl Command {
    /// Play the "ba dum tss" tone sequence
    pub const BEEP: Command = Command {
        text: Cow::Borrowed("BEEP"),
    };

    /// Validate `text` as a command.
    ///
    /// Empty text is rejected rather than sent as a bare newline.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Result<Self, CodecError> {
        let text = text.into();

        if text.is_empty() {
            return Err(CodecError::EmptyCommand);
        }
        if !text.is_ascii() {
            return Err(CodecError::NonAscii(text.into_owned()));
        }
        if text.bytes().any(|b| b == TERMINATOR || b == b'\r') {
            return Err(CodecError::EmbeddedNewline(text.into_owned()));
        }

        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of bytes on the wire, terminator included
    pub fn framed_len(&self) -> usize {
        self.text.len() + 1
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
