//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **page**: Access to the hosting page (origin, embedded competence options)

pub mod console_macros;
pub mod page;

pub use page::*;
