//! Scope-bound ownership of an open port

use crate::transport::traits::CommandStream;
use std::io;
use tracing::{debug, info};

/// Holds the open stream and releases it exactly once.
///
/// `release` closes the stream explicitly; if the guard is dropped on an
/// early exit instead, dropping the inner stream still frees the device.
pub struct PortGuard<S: CommandStream> {
    stream: S,
    port: String,
    closed: bool,
}

impl<S: CommandStream> PortGuard<S> {
    pub fn new(stream: S, port: impl Into<String>) -> Self {
        Self {
            stream,
            port: port.into(),
            closed: false,
        }
    }

    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Close the stream and drop the guard
    pub async fn release(mut self) -> io::Result<()> {
        self.closed = true;
        self.stream.close().await?;
        info!("Serial connection closed");
        Ok(())
    }
}

impl<S: CommandStream> Drop for PortGuard<S> {
    fn drop(&mut self) {
        if !self.closed {
            debug!("{} dropped without an explicit close", self.port);
            info!("Serial connection closed");
        }
    }
}
