pub mod agents;
pub mod auth;
pub mod chat;
pub mod enquiries;
pub mod properties;
pub mod saved_properties;
pub mod users;
