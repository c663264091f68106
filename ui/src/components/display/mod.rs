pub mod employee_list;
pub mod loading_indicator;

pub use employee_list::FilteredEmployeeList;
pub use loading_indicator::LoadingIndicator;
