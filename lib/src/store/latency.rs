// lib/src/store/latency.rs

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-operation artificial delay, in milliseconds, applied before each store
/// call to simulate a remote backend. Tests use [`StoreLatency::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreLatency {
    pub get_all_ms: u64,
    pub get_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl Default for StoreLatency {
    fn default() -> Self {
        StoreLatency {
            get_all_ms: 300,
            get_by_id_ms: 200,
            create_ms: 400,
            update_ms: 400,
            delete_ms: 300,
        }
    }
}

impl StoreLatency {
    /// Zero delay everywhere.
    pub fn none() -> Self {
        StoreLatency {
            get_all_ms: 0,
            get_by_id_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
        }
    }

    pub(crate) async fn pause(ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
