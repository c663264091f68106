//! Infrastructure Services
//!
//! - **client**: HTTP client for the employee filtering view
//! - **config**: Endpoint and page element configuration
//!
//! The services are WASM-first, using async traits without Send/Sync bounds.

pub mod client;
pub mod config;
