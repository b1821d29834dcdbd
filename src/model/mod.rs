pub mod app_state;
pub mod command;
pub mod device;

pub use app_state::AppState;
pub use command::{Direction, Key};
pub use device::{Device, DeviceId, ProbeStatus};
