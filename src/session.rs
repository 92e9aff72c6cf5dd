//! Startup sequence: open, warm up, send, settle, release

use crate::config::SerialConfig;
use crate::error::SenderError;
use crate::sender::send_command;
use crate::transport::{PortConnector, PortGuard};
use buzzer_shared::Command;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Run one send session against the port `connector` opens.
///
/// The port is released before this returns, on every path past a
/// successful open.
pub async fn run<C: PortConnector>(
    connector: &C,
    config: &SerialConfig,
    command: &Command,
) -> Result<(), SenderError> {
    let stream = connector
        .open()
        .await
        .map_err(|e| SenderError::port_open(connector.name(), e))?;
    let mut port = PortGuard::new(stream, connector.name());

    info!(
        "Connected to buzzer on {} ({} baud)",
        connector.name(),
        config.baud_rate
    );

    // Opening the port resets the board; let it boot
    sleep(config.warm_up).await;

    info!("Playing tone sequence...");

    let sent = send_command(port.stream_mut(), command).await;
    if let Err(e) = sent {
        if let Err(close_err) = port.release().await {
            debug!("Close after failed write also failed: {}", close_err);
        }
        return Err(e);
    }

    sleep(config.settle).await;
    info!("Tone sequence initiated");

    // The payload is already on the wire; a failed close does not undo it
    if let Err(e) = port.release().await {
        warn!("Failed to close {}: {}", connector.name(), e);
    }
    Ok(())
}
