mod config;
mod error;
mod sender;
mod session;
mod transport;

use buzzer_shared::Command;
use config::SerialConfig;
use error::SenderError;
use std::process::ExitCode;
use transport::SerialConnector;

use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = SerialConfig::default();
    let connector = SerialConnector::new(config.clone());

    info!("Buzzer beep starting: {}", config.port);

    let result = session::run(&connector, &config, &Command::BEEP).await;
    if let Err(e) = &result {
        error!("{}", e);
        if let SenderError::PortOpen { .. } = e {
            log_port_hint(&config);
        }
    }
    ExitCode::from(exit_code(&result))
}

/// Process exit status for a finished session
fn exit_code(result: &Result<(), SenderError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(SenderError::PortOpen { .. }) | Err(SenderError::Write { .. }) => 1,
    }
}

/// Tell the operator where the board might be instead
fn log_port_hint(config: &SerialConfig) {
    match transport::available_ports() {
        Ok(ports) if ports.is_empty() => {
            warn!("No serial ports found; check that the board is plugged in");
        }
        Ok(ports) => {
            warn!(
                "{} not usable; serial ports present: {}",
                config.port,
                ports.join(", ")
            );
        }
        Err(e) => debug!("Could not enumerate serial ports: {}", e),
    }
}
