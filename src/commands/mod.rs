//! Command implementations for docker-call

pub mod call;
pub mod plugin_metadata;
pub mod version;
