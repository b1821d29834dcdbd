use super::*;

#[test]
fn test_add_assigns_unique_ids_and_unknown_status() {
    let mut state = AppState::default();
    let a = state.add_device("http://a.example".to_string());
    let b = state.add_device("http://b.example".to_string());

    assert_ne!(a, b);
    assert_eq!(state.devices.len(), 2);
    assert_eq!(state.statuses[&a], ProbeStatus::Unknown);
    assert_eq!(state.statuses[&b], ProbeStatus::Unknown);
}

#[test]
fn test_duplicate_addresses_get_distinct_entries() {
    let mut state = AppState::default();
    let first = state.add_device("http://twin.example".to_string());
    let second = state.add_device("http://twin.example".to_string());

    assert_ne!(first, second);
    assert_eq!(state.devices.len(), 2);
}

#[test]
fn test_remove_targets_exactly_one_entry() {
    // Two entries with the same display string: removal by id must be
    // unambiguous.
    let mut state = AppState::default();
    let first = state.add_device("http://twin.example".to_string());
    let second = state.add_device("http://twin.example".to_string());
    state.apply_probe(second, ProbeStatus::Ok);

    state.remove_device(first);

    assert_eq!(state.devices.len(), 1);
    assert_eq!(state.devices[0].id, second);
    assert!(!state.statuses.contains_key(&first));
    assert_eq!(state.statuses[&second], ProbeStatus::Ok);
}

#[test]
fn test_apply_probe_updates_only_target() {
    let mut state = AppState::default();
    let a = state.add_device("http://a.example".to_string());
    let b = state.add_device("http://b.example".to_string());

    state.apply_probe(a, ProbeStatus::Error);

    assert_eq!(state.statuses[&a], ProbeStatus::Error);
    assert_eq!(state.statuses[&b], ProbeStatus::Unknown);
}

#[test]
fn test_late_probe_for_removed_device_is_dropped() {
    let mut state = AppState::default();
    let id = state.add_device("http://gone.example".to_string());
    state.remove_device(id);

    // Simulates a probe that was in flight when the row was deleted.
    state.apply_probe(id, ProbeStatus::Ok);

    assert!(state.statuses.is_empty());
    assert!(state.devices.is_empty());
}

#[test]
fn test_snapshot_preserves_insertion_order() {
    let mut state = AppState::default();
    let a = state.add_device("http://one.example".to_string());
    let b = state.add_device("http://two.example".to_string());

    let snapshot = state.snapshot();
    assert_eq!(
        snapshot,
        vec![
            (a, "http://one.example".to_string()),
            (b, "http://two.example".to_string()),
        ]
    );
}
