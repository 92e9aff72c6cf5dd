//! Serial port transport implementation

use crate::config::SerialConfig;
use crate::transport::traits::{CommandStream, PortConnector};
use async_trait::async_trait;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;
use tokio_serial::SerialStream;
use tracing::debug;

/// Serial stream wrapper implementing CommandStream
pub struct SerialTransportStream {
    inner: SerialStream,
}

impl SerialTransportStream {
    pub fn new(stream: SerialStream) -> Self {
        Self { inner: stream }
    }
}

impl AsyncWrite for SerialTransportStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.inner).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_shutdown(cx)
    }
}

#[async_trait]
impl CommandStream for SerialTransportStream {
    async fn close(&mut self) -> io::Result<()> {
        tokio::io::AsyncWriteExt::shutdown(&mut self.inner).await
    }
}

/// Connector opening the configured serial device
pub struct SerialConnector {
    config: SerialConfig,
}

impl SerialConnector {
    pub fn new(config: SerialConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PortConnector for SerialConnector {
    type Stream = SerialTransportStream;

    async fn open(&self) -> io::Result<Self::Stream> {
        debug!(
            "Opening {} ({} baud, {:?}, {:?}, {:?})",
            self.config.port,
            self.config.baud_rate,
            self.config.data_bits,
            self.config.parity,
            self.config.stop_bits
        );
        let stream = SerialStream::open(&self.config.builder())?;
        Ok(SerialTransportStream::new(stream))
    }

    fn name(&self) -> &str {
        &self.config.port
    }
}

/// Names of the serial devices currently present on this machine
pub fn available_ports() -> Result<Vec<String>, tokio_serial::Error> {
    let ports = tokio_serial::available_ports()?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}
