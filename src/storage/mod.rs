/// Storage configuration
pub mod config;
/// Key/value token stores
pub mod token_store;
