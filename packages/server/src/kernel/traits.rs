// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only. HTTP handlers hold an
// `Arc<dyn ContactStore>` and never know which backend is behind it.

use async_trait::async_trait;

use crate::domains::contacts::{ContactFields, ContactRecord, StoreResult};

// =============================================================================
// Contact Store Trait (Infrastructure - persistence)
// =============================================================================

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist a new contact built from `fields` and return the stored record.
    async fn create(&self, fields: ContactFields) -> StoreResult<ContactRecord>;

    /// Return every stored contact, oldest first.
    async fn read_all(&self) -> StoreResult<Vec<ContactRecord>>;

    /// Merge `fields` into the contact identified by `id`.
    ///
    /// `id` is the raw path segment; parsing it is the store's job.
    async fn update(&self, id: &str, fields: ContactFields) -> StoreResult<ContactRecord>;

    /// Remove the contact identified by `id`.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Cheap reachability check used by the health endpoint.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
