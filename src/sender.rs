//! Command Sender
//!
//! Writes one newline-terminated command to an open stream.

use crate::error::SenderError;
use buzzer_shared::{codec, Command};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Frame `command` and write it in a single write + flush.
///
/// Does not wait afterwards; the settle delay belongs to the caller.
pub async fn send_command<S>(stream: &mut S, command: &Command) -> Result<(), SenderError>
where
    S: AsyncWrite + Unpin + ?Sized,
{
    let frame = codec::encode(command);
    debug!("Writing {} bytes: {:?}", frame.len(), frame);

    stream
        .write_all(&frame)
        .await
        .map_err(|e| SenderError::write(command, e))?;
    stream
        .flush()
        .await
        .map_err(|e| SenderError::write(command, e))?;

    info!("Sent command: {}", command);
    Ok(())
}
