// Contacts API - Core
//
// CRUD HTTP surface for contact records. Handlers live under server/routes,
// persistence sits behind the ContactStore trait in kernel/traits.rs.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
