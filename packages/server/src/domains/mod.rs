// Domain modules
pub mod contacts;
