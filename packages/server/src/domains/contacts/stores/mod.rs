pub mod memory;
pub mod postgres;

pub use memory::InMemoryContactStore;
pub use postgres::PostgresContactStore;
