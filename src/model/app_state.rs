use std::collections::HashMap;

use super::device::{Device, DeviceId, ProbeStatus};

/// The sole piece of application state, shared between the UI thread and
/// the control task. In-memory only; nothing survives a restart.
#[derive(Default)]
pub struct AppState {
    /// Registered devices, in insertion order. Addresses need not be unique.
    pub devices: Vec<Device>,
    pub statuses: HashMap<DeviceId, ProbeStatus>,
    next_id: u64,
}

impl AppState {
    /// Registers an already-normalized address and seeds its status as
    /// `Unknown` (empty status cell until the first probe lands).
    pub fn add_device(&mut self, address: String) -> DeviceId {
        let id = DeviceId(self.next_id);
        self.next_id += 1;
        self.statuses.insert(id, ProbeStatus::Unknown);
        self.devices.push(Device { id, address });
        id
    }

    /// Removes exactly the device with the given id, together with its
    /// status entry. Other devices are untouched even if they share the
    /// same address string.
    pub fn remove_device(&mut self, id: DeviceId) {
        self.devices.retain(|d| d.id != id);
        self.statuses.remove(&id);
    }

    /// Applies a probe outcome. A late result for a device that was
    /// removed mid-flight is silently dropped.
    pub fn apply_probe(&mut self, id: DeviceId, status: ProbeStatus) {
        if let Some(slot) = self.statuses.get_mut(&id) {
            *slot = status;
        }
    }

    /// Snapshot of (id, address) pairs for one polling or broadcast cycle.
    pub fn snapshot(&self) -> Vec<(DeviceId, String)> {
        self.devices
            .iter()
            .map(|d| (d.id, d.address.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
