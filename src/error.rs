//! Fatal error kinds of a send session

use buzzer_shared::Command;
use std::io;
use thiserror::Error;

/// Errors that end a send session
#[derive(Error, Debug)]
pub enum SenderError {
    /// The device is absent, permission was denied, or another process holds it
    #[error("Failed to open serial port {port}: {source}")]
    PortOpen {
        port: String,
        #[source]
        source: io::Error,
    },

    /// The transport refused the bytes after the connection was established
    #[error("Failed to send command {command}: {source}")]
    Write {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl SenderError {
    pub fn port_open(port: impl Into<String>, source: io::Error) -> Self {
        Self::PortOpen {
            port: port.into(),
            source,
        }
    }

    pub fn write(command: &Command, source: io::Error) -> Self {
        Self::Write {
            command: command.to_string(),
            source,
        }
    }
}
