/// Access token lifecycle
pub mod auth;
/// Client facade exposing every resource service
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Module containing the resource service implementations
pub mod services;
