// Mock implementations for testing
//
// Provides a scriptable ContactStore that records every call, so handler
// tests can assert both on the response and on what reached the store.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::ContactStore;
use crate::domains::contacts::{ContactFields, ContactRecord, StoreError, StoreResult};

// =============================================================================
// Mock Contact Store
// =============================================================================

/// A call received by [`MockContactStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(ContactFields),
    ReadAll,
    Update(String, ContactFields),
    Delete(String),
}

/// Scriptable store double.
///
/// Unless told otherwise every operation succeeds: `create` and `update`
/// echo the fields back as the record, `read_all` returns whatever was seeded.
#[derive(Clone, Default)]
pub struct MockContactStore {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    returned: Arc<Mutex<Option<ContactRecord>>>,
    failing: Arc<Mutex<bool>>,
    ping_delay: Arc<Mutex<Option<Duration>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl MockContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the list returned by `read_all`.
    pub fn with_records(self, records: Vec<ContactRecord>) -> Self {
        *self.records.lock().unwrap() = records;
        self
    }

    /// Fix the record returned by `create` and `update`.
    pub fn with_returned(self, record: ContactRecord) -> Self {
        *self.returned.lock().unwrap() = Some(record);
        self
    }

    /// Make every operation fail.
    pub fn failing(self) -> Self {
        *self.failing.lock().unwrap() = true;
        self
    }

    /// Make `ping` sleep before answering.
    pub fn with_ping_delay(self, delay: Duration) -> Self {
        *self.ping_delay.lock().unwrap() = Some(delay);
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failing(&self) -> StoreResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(StoreError::Unavailable("mock store set to fail".to_string()));
        }
        Ok(())
    }

    fn record(&self, call: StoreCall) -> StoreResult<()> {
        self.calls.lock().unwrap().push(call);
        self.check_failing()
    }

    fn record_for(&self, fields: ContactFields) -> ContactRecord {
        self.returned
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(ContactRecord::Object(fields))
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn create(&self, fields: ContactFields) -> StoreResult<ContactRecord> {
        self.record(StoreCall::Create(fields.clone()))?;
        Ok(self.record_for(fields))
    }

    async fn read_all(&self) -> StoreResult<Vec<ContactRecord>> {
        self.record(StoreCall::ReadAll)?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn update(&self, id: &str, fields: ContactFields) -> StoreResult<ContactRecord> {
        self.record(StoreCall::Update(id.to_string(), fields.clone()))?;
        Ok(self.record_for(fields))
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.record(StoreCall::Delete(id.to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        let delay = *self.ping_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check_failing()
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
