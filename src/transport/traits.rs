//! Transport trait abstraction for the serial backend

use async_trait::async_trait;
use std::io;
use tokio::io::AsyncWrite;

/// An open byte stream that commands can be written to
#[async_trait]
pub trait CommandStream: AsyncWrite + Send + Unpin + 'static {
    /// Flush and close the stream
    async fn close(&mut self) -> io::Result<()>;
}

/// Factory for opening the port
#[async_trait]
pub trait PortConnector: Send + Sync {
    /// The stream type this connector produces
    type Stream: CommandStream;

    /// Attempt to open the port, returning a stream on success
    async fn open(&self) -> io::Result<Self::Stream>;

    /// Device name of the port
    fn name(&self) -> &str;
}
