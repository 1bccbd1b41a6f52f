//! Snapshot-level context helpers.

use serde_json::Value;

/// Best-effort capture time of a snapshot: the `modified` field of the
/// first Items entry. Snapshots without one report "unknown".
pub fn extract_time(snapshot: &Value) -> String {
    snapshot
        .get("Items")
        .and_then(|items| items.get(0))
        .and_then(|item| item.get("modified"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}
