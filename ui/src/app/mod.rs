pub mod employee_filter;

pub use employee_filter::EmployeeFilter;
