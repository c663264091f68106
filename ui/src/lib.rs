//! This crate contains the UI components and client services for filtering
//! employees by competence.

pub mod app;
pub use app::EmployeeFilter;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
