use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::Cell;
use thiserror::Error;

use super::fields::ContactFields;
use crate::config;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write submissions: {0}")]
    Write(String),
    #[error("failed to encode submissions: {0}")]
    Serialize(String),
}

/// Key-value storage the submission log is kept in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's origin-scoped `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub instagram: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    fn new(fields: &ContactFields, submitted_at: DateTime<Utc>) -> Self {
        SubmissionRecord {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            instagram: fields.instagram.clone(),
            message: fields.message.clone(),
            submitted_at,
        }
    }
}

/// Append-only log of accepted contact submissions.
///
/// The stored value is a JSON array. Missing or undecodable data reads as an
/// empty log. Entries this version cannot decode are carried over untouched
/// on the next append so other readers of the key keep their data.
pub struct SubmissionLog<S, C = SystemClock> {
    storage: S,
    clock: C,
    last_stamp: Cell<Option<DateTime<Utc>>>,
}

impl<S: KeyValueStore, C: Clock> SubmissionLog<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        SubmissionLog {
            storage,
            clock,
            last_stamp: Cell::new(None),
        }
    }

    fn entries(&self) -> Vec<Value> {
        let raw = match self.storage.get(config::SUBMISSIONS_KEY) {
            Ok(Some(raw)) => raw,
            _ => return Vec::new(),
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            _ => Vec::new(),
        }
    }

    /// Decodable records in append order.
    #[cfg(test)]
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.entries()
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()
    }

    /// Stamps `fields` with the current time and appends the record.
    ///
    /// The stamp never goes below the last one this log assigned, so a clock
    /// that steps backwards still yields a non-decreasing sequence. Stamps
    /// already in storage from other sessions do not hold it back.
    pub fn append(&self, fields: &ContactFields) -> Result<SubmissionRecord, StorageError> {
        let mut entries = self.entries();

        let now = self.clock.now();
        let submitted_at = match self.last_stamp.get() {
            Some(last) if last > now => last,
            _ => now,
        };

        let record = SubmissionRecord::new(fields, submitted_at);
        let entry =
            serde_json::to_value(&record).map_err(|e| StorageError::Serialize(e.to_string()))?;
        entries.push(entry);

        let encoded =
            serde_json::to_string(&entries).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(config::SUBMISSIONS_KEY, &encoded)?;
        self.last_stamp.set(Some(submitted_at));
        Ok(record)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use chrono::Duration;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory storage; clones share the same map.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
        reject_writes: Rc<Cell<bool>>,
    }

    impl MemoryStorage {
        pub fn rejecting_writes() -> Self {
            let storage = MemoryStorage::default();
            storage.reject_writes.set(true);
            storage
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn put_raw(&self, key: &str, value: &str) {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.reject_writes.get() {
                return Err(StorageError::Write("QuotaExceededError".to_string()));
            }
            self.put_raw(key, value);
            Ok(())
        }
    }

    /// Clock that advances one second per reading unless moved by hand.
    #[derive(Clone)]
    pub struct ManualClock {
        now: Rc<Cell<DateTime<Utc>>>,
    }

    impl ManualClock {
        pub fn starting_at(rfc3339: &str) -> Self {
            let start = DateTime::parse_from_rfc3339(rfc3339)
                .expect("valid timestamp")
                .with_timezone(&Utc);
            ManualClock { now: Rc::new(Cell::new(start)) }
        }

        pub fn rewind(&self, seconds: i64) {
            self.now.set(self.now.get() - Duration::seconds(seconds));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            let now = self.now.get();
            self.now.set(now + Duration::seconds(1));
            now
        }
    }
}
