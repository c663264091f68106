// Client-side access to the employee filtering view
//
// This module provides:
// - Wire types for competences and filtered employees
// - The EmployeeDirectory seam and its HTTP implementation
// - Error types for failed filter requests

pub mod employee_client;
pub mod errors;
pub mod types;

pub use employee_client::{EmployeeDirectory, EmployeeFilterClient};
pub use errors::{FilterError, FilterResult};
pub use types::{CompetenceGroup, CompetenceOption, CompetenceSelection, FilteredEmployee};
