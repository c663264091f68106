//! Employee filtering by competence
//!
//! Selecting competences issues a request to the filtering view; the answer
//! replaces the displayed employee list. Requests are numbered so an answer
//! that arrives after a newer request was issued is dropped instead of
//! overwriting fresher results.

pub mod generation;
pub mod trigger;
pub mod types;

pub use generation::{Generation, GenerationGuard};
pub use trigger::FilterTrigger;
pub use types::*;
