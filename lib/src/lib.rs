// lib/src/lib.rs

//! Clinic core: in-memory record stores with simulated backend latency, the
//! derived views the screens render, and the check-in workflow that keeps the
//! appointment and queue status vocabularies loosely in sync.

pub mod config;
pub mod store;
pub mod views;
pub mod workflow;

pub use config::ClinicConfig;
pub use store::{ClinicStores, MemoryStore, Record, RecordStore, StoreLatency};
