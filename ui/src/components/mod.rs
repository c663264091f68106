//! User Interface Components
//!
//! - **forms**: The competence multi-select
//! - **display**: The filtered employee list and the loading indicator

pub mod display;
pub mod forms;
