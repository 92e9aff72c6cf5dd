//! Serial link configuration

use buzzer_shared::link;
use std::time::Duration;
use tokio_serial::{DataBits, FlowControl, Parity, SerialPortBuilder, StopBits};

/// Configuration for the serial connection to the buzzer board
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Device name (e.g., "/dev/ttyACM0" or "COM6")
    pub port: String,
    /// Line speed in baud
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    pub flow_control: FlowControl,
    /// Timeout applied to port I/O
    pub timeout: Duration,
    /// Delay after open before the first write
    pub warm_up: Duration,
    /// Delay after a successful write before the port is released
    pub settle: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: link::DEFAULT_PORT.into(),
            baud_rate: link::BAUD_RATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            flow_control: FlowControl::None,
            timeout: Duration::from_millis(link::PORT_TIMEOUT_MS),
            warm_up: Duration::from_millis(link::WARM_UP_MS),
            settle: Duration::from_millis(link::SETTLE_MS),
        }
    }
}

impl SerialConfig {
    /// Port builder carrying the line settings of this configuration
    pub fn builder(&self) -> SerialPortBuilder {
        tokio_serial::new(&self.port, self.baud_rate)
            .data_bits(self.data_bits)
            .parity(self.parity)
            .stop_bits(self.stop_bits)
            .flow_control(self.flow_control)
            .timeout(self.timeout)
    }
}
