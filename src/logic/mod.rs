pub mod address;
pub mod client;
pub mod poller;

pub use address::{AddressError, normalize_address};
pub use client::{ClientError, DeviceClient};
pub use poller::{SharedState, control_task};
