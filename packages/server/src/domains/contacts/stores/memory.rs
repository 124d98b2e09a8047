//! In-process contact store.
//!
//! Used when no `DATABASE_URL` is configured. Contents are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::common::ContactId;
use crate::domains::contacts::{Contact, ContactFields, ContactRecord, StoreError, StoreResult};
use crate::kernel::ContactStore;

#[derive(Default)]
pub struct InMemoryContactStore {
    // Insertion order doubles as read_all order.
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_id(id: &str) -> StoreResult<ContactId> {
    ContactId::parse(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn create(&self, fields: ContactFields) -> StoreResult<ContactRecord> {
        let contact = Contact::new(fields);
        self.contacts.write().await.push(contact.clone());
        Ok(contact.into_record())
    }

    async fn read_all(&self) -> StoreResult<Vec<ContactRecord>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().cloned().map(Contact::into_record).collect())
    }

    async fn update(&self, id: &str, fields: ContactFields) -> StoreResult<ContactRecord> {
        let contact_id = parse_id(id)?;
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        contact.apply(fields);
        Ok(contact.clone().into_record())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let contact_id = parse_id(id)?;
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != contact_id);
        if contacts.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
