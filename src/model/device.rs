use std::fmt;

/// Stable identifier assigned to a device when it is registered.
///
/// Rows, removals, and in-flight probe results are matched by id rather
/// than by address string, so two entries with the same display string
/// stay unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub(crate) u64);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One registered presentation device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    /// Normalized base URL, e.g. `http://192.168.0.10:8080`.
    pub address: String,
}

/// Outcome of the most recent health probe for a device.
///
/// `Unknown` only before the first probe completes; after that every
/// polling cycle overwrites the value with `Ok` or `Error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProbeStatus {
    #[default]
    Unknown,
    Ok,
    Error,
}
