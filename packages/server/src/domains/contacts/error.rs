use thiserror::Error;

/// Failures raised by a contact store.
///
/// The HTTP layer logs these and answers with a fixed message, so the
/// variants exist for diagnostics only.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid contact id: {0}")]
    InvalidId(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
