use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use super::client::DeviceClient;
use crate::model::{AppState, Direction, ProbeStatus};

pub type SharedState = Arc<Mutex<AppState>>;

/// Background task driving health polling and command broadcast.
///
/// Each interval tick launches one independent probe per registered
/// device; each `Direction` received from the UI fans out one key-press
/// request per device. The task runs until the shutdown flag flips or the
/// UI side hangs up, so a torn-down view never keeps polling.
pub async fn control_task(
    state: SharedState,
    client: DeviceClient,
    poll_interval: Duration,
    mut commands: mpsc::UnboundedReceiver<Direction>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticks = tokio::time::interval(poll_interval);

    loop {
        tokio::select! {
            _ = ticks.tick() => poll_devices(&state, &client),
            command = commands.recv() => match command {
                Some(direction) => broadcast(&state, &client, direction),
                None => break,
            },
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    break;
                }
            }
        }
    }
}

/// Launches one probe per device. Results are applied by id, so a device
/// removed mid-flight is ignored; one slow or dead device never affects
/// the others.
fn poll_devices(state: &SharedState, client: &DeviceClient) {
    let devices = state
        .lock()
        .expect("state lock for poll snapshot")
        .snapshot();
    if devices.is_empty() {
        return;
    }

    let probes: Vec<_> = devices
        .into_iter()
        .map(|(id, address)| {
            let client = client.clone();
            let state = Arc::clone(state);
            tokio::spawn(async move {
                let status = match client.check_health(&address).await {
                    Ok(()) => ProbeStatus::Ok,
                    Err(err) => {
                        warn!(%address, %id, error = %err, "health check failed");
                        ProbeStatus::Error
                    }
                };
                state
                    .lock()
                    .expect("state lock for probe result")
                    .apply_probe(id, status);
            })
        })
        .collect();

    // Await completion off the main loop so a slow device never delays
    // the next tick.
    tokio::spawn(async move {
        let _ = join_all(probes).await;
    });
}

/// Sends one key-press request per device. Outcomes are logged and never
/// fed back into application state.
fn broadcast(state: &SharedState, client: &DeviceClient, direction: Direction) {
    let devices = state
        .lock()
        .expect("state lock for broadcast snapshot")
        .snapshot();
    let key = direction.key();

    let sends: Vec<_> = devices
        .into_iter()
        .map(|(_, address)| {
            let client = client.clone();
            tokio::spawn(async move {
                match client.press_key(&address, key).await {
                    Ok(body) => info!(%address, ?key, %body, "key press accepted"),
                    Err(err) => warn!(%address, ?key, error = %err, "key press failed"),
                }
            })
        })
        .collect();

    tokio::spawn(async move {
        let _ = join_all(sends).await;
    });
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
