// lib/src/store/memory.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use models::errors::{ClinicError, ClinicResult};

use super::latency::StoreLatency;
use super::record::{Record, RecordStore};

#[derive(Debug)]
struct Inner<T> {
    records: BTreeMap<i32, T>,
    next_id: i32,
}

/// In-memory implementation of [`RecordStore`].
///
/// Records live in a `BTreeMap` keyed by id, so `get_all` returns them in
/// ascending id order. Ids come from a counter seeded at `max(existing) + 1`
/// and are never reused, even after the highest id is deleted. The write lock
/// is held only for the duration of a single mutation, so one awaited caller
/// always observes its own writes on the next read.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
    latency: StoreLatency,
}

impl<T: Record> MemoryStore<T> {
    pub fn new(latency: StoreLatency) -> Self {
        MemoryStore {
            inner: Arc::new(RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            })),
            latency,
        }
    }

    /// Seeds the store with existing records, e.g. demo fixtures.
    pub fn with_records(records: Vec<T>, latency: StoreLatency) -> Self {
        let records: BTreeMap<i32, T> = records.into_iter().map(|r| (r.id(), r)).collect();
        let next_id = records.keys().next_back().copied().unwrap_or(0) + 1;
        MemoryStore {
            inner: Arc::new(RwLock::new(Inner { records, next_id })),
            latency,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn get_all(&self) -> ClinicResult<Vec<T>> {
        StoreLatency::pause(self.latency.get_all_ms).await;
        let inner = self.inner.read().await;
        Ok(inner.records.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> ClinicResult<Option<T>> {
        StoreLatency::pause(self.latency.get_by_id_ms).await;
        let inner = self.inner.read().await;
        Ok(inner.records.get(&id).cloned())
    }

    async fn create(&self, draft: T::Draft) -> ClinicResult<T> {
        StoreLatency::pause(self.latency.create_ms).await;
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = T::from_draft(id, draft, Utc::now());
        inner.records.insert(id, record.clone());
        log::debug!("created {} {}", T::ENTITY, id);
        Ok(record)
    }

    async fn update(&self, id: i32, patch: T::Patch) -> ClinicResult<T> {
        StoreLatency::pause(self.latency.update_ms).await;
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or_else(|| ClinicError::not_found(T::ENTITY, id))?;
        record.apply(patch);
        log::debug!("updated {} {}", T::ENTITY, id);
        Ok(record.clone())
    }

    async fn delete(&self, id: i32) -> ClinicResult<bool> {
        StoreLatency::pause(self.latency.delete_ms).await;
        let mut inner = self.inner.write().await;
        if inner.records.remove(&id).is_none() {
            return Err(ClinicError::not_found(T::ENTITY, id));
        }
        log::debug!("deleted {} {}", T::ENTITY, id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{NewPatient, Patient, PatientPatch};

    fn store() -> MemoryStore<Patient> {
        MemoryStore::new(StoreLatency::none())
    }

    fn draft(first: &str, last: &str) -> NewPatient {
        NewPatient {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: Some("555-0100".to_string()),
            ..NewPatient::default()
        }
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_starting_at_one() {
        let store = store();
        let a = store.create(draft("Sarah", "Johnson")).await.unwrap();
        let b = store.create(draft("Miguel", "Alvarez")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn should_not_reuse_an_id_after_deleting_the_highest() {
        let store = store();
        store.create(draft("Sarah", "Johnson")).await.unwrap();
        let b = store.create(draft("Miguel", "Alvarez")).await.unwrap();
        assert!(store.delete(b.id).await.unwrap());
        let c = store.create(draft("Priya", "Patel")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn should_seed_the_counter_past_existing_records() {
        let existing = vec![Patient {
            id: 7,
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            date_of_birth: None,
            phone: None,
            email: None,
            address: None,
            emergency_contact: None,
            notes: None,
            created_at: Utc::now(),
        }];
        let store = MemoryStore::with_records(existing, StoreLatency::none());
        let created = store.create(draft("Miguel", "Alvarez")).await.unwrap();
        assert_eq!(created.id, 8);
    }

    #[tokio::test]
    async fn should_change_exactly_the_patched_fields() {
        let store = store();
        let created = store.create(draft("Sarah", "Johnson")).await.unwrap();
        let updated = store
            .update(
                created.id,
                PatientPatch {
                    phone: Some("555-0199".to_string()),
                    ..PatientPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.phone.as_deref(), Some("555-0199"));
        assert_eq!(updated.first_name, "Sarah");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn should_fail_update_and_delete_with_not_found_on_a_missing_id() {
        let store = store();
        let err = store.update(42, PatientPatch::default()).await.unwrap_err();
        assert!(err.is_not_found());
        let err = store.delete(42).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn should_return_none_after_delete() {
        let store = store();
        let created = store.create(draft("Sarah", "Johnson")).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(store.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_hand_out_copies_that_do_not_alias_storage() {
        let store = store();
        let created = store.create(draft("Sarah", "Johnson")).await.unwrap();
        let mut copy = store.get_all().await.unwrap();
        copy[0].first_name = "Changed".to_string();
        let reread = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(reread.first_name, "Sarah");
    }

    #[tokio::test]
    async fn should_observe_a_write_on_the_next_read() {
        let store = store();
        let created = store.create(draft("Sarah", "Johnson")).await.unwrap();
        store
            .update(
                created.id,
                PatientPatch {
                    notes: Some("allergic to penicillin".to_string()),
                    ..PatientPatch::default()
                },
            )
            .await
            .unwrap();
        let reread = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(reread.notes.as_deref(), Some("allergic to penicillin"));
    }
}
