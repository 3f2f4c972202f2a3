// lib/src/store/mod.rs

//! The record store: one in-memory collection per entity type, keyed by a
//! store-assigned integer id, behind an async CRUD seam.

pub mod clinic;
pub mod latency;
pub mod memory;
pub mod record;

pub use clinic::ClinicStores;
pub use latency::StoreLatency;
pub use memory::MemoryStore;
pub use record::{Record, RecordStore};
