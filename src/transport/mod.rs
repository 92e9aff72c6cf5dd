pub mod guard;
pub mod serial;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use guard::PortGuard;
pub use serial::{available_ports, SerialConnector};
pub use traits::PortConnector;
