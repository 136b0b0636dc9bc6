/// Operation execution and batch runner
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Request descriptors for every resource and operation
pub mod operations;
/// Page-number and message cursor pagination drivers
pub mod pagination;
/// Service implementations
pub mod services;
