//! In-memory transport that records what a session does to the port

use crate::transport::traits::{CommandStream, PortConnector};
use async_trait::async_trait;
use bytes::BytesMut;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;
use tokio::time::Instant;

/// Everything observed on the mock port
#[derive(Debug, Clone, Default)]
pub struct Probe {
    pub open_attempts: usize,
    pub opened_at: Option<Instant>,
    pub write_attempts: usize,
    pub first_write_at: Option<Instant>,
    pub written: BytesMut,
    pub closed: bool,
    pub released_at: Option<Instant>,
}

pub struct MockStream {
    probe: Arc<Mutex<Probe>>,
    fail_writes: bool,
    fail_close: bool,
}

impl AsyncWrite for MockStream {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let mut probe = self.probe.lock().unwrap();
        probe.write_attempts += 1;
        probe.first_write_at.get_or_insert_with(Instant::now);

        if self.fail_writes {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "device disconnected",
            )));
        }
        probe.written.extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[async_trait]
impl CommandStream for MockStream {
    async fn close(&mut self) -> io::Result<()> {
        self.probe.lock().unwrap().closed = true;
        if self.fail_close {
            return Err(io::Error::new(io::ErrorKind::Other, "close failed"));
        }
        Ok(())
    }
}

impl Drop for MockStream {
    fn drop(&mut self) {
        self.probe.lock().unwrap().released_at = Some(Instant::now());
    }
}

/// Connector whose open and write behavior is scripted per test
#[derive(Default)]
pub struct MockConnector {
    probe: Arc<Mutex<Probe>>,
    fail_open: bool,
    fail_writes: bool,
    fail_close: bool,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_close() -> Self {
        Self {
            fail_close: true,
            ..Self::default()
        }
    }

    /// Snapshot of what has happened so far
    pub fn probe(&self) -> Probe {
        self.probe.lock().unwrap().clone()
    }
}

#[async_trait]
impl PortConnector for MockConnector {
    type Stream = MockStream;

    async fn open(&self) -> io::Result<Self::Stream> {
        let mut probe = self.probe.lock().unwrap();
        probe.open_attempts += 1;

        if self.fail_open {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such device"));
        }
        probe.opened_at = Some(Instant::now());

        Ok(MockStream {
            probe: self.probe.clone(),
            fail_writes: self.fail_writes,
            fail_close: self.fail_close,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
