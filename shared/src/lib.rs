//! Buzzer Shared Protocol Types
//!
//! This crate provides the command type and line codec for talking to the
//! buzzer microcontroller over a serial line.

pub mod codec;
pub mod command;

pub use codec::CodecError;
pub use command::Command;

/// Fixed parameters of the serial link
pub mod link {
    /// Baud rate the microcontroller sketch listens at
    pub const BAUD_RATE: u32 = 9600;

    /// Pause after opening the port so the board can finish its boot sequence
    pub const WARM_UP_MS: u64 = 2000;

    /// Pause after a successful write before the port is released
    pub const SETTLE_MS: u64 = 1000;

    /// Read/write timeout applied to the port itself
    pub const PORT_TIMEOUT_MS: u64 = 1000;

    /// Device name the board enumerates as
    #[cfg(windows)]
    pub const DEFAULT_PORT: &str = "COM6";

    /// Device name the board enumerates as
    #[cfg(not(windows))]
    pub const DEFAULT_PORT: &str = "/dev/ttyACM0";
}
