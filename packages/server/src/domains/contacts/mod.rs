pub mod error;
pub mod models;
pub mod stores;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use models::{Contact, ContactFields, ContactRecord};
pub use stores::{InMemoryContactStore, PostgresContactStore};
