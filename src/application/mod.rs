/// Endpoint client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouping the endpoint operations
pub mod interfaces;
/// Navigation routes and host integration traits
pub mod navigation;
