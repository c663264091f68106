use dioxus::prelude::*;

use crate::services::client::FilteredEmployee;

#[derive(Props, PartialEq, Clone)]
pub struct FilteredEmployeeListProps {
    pub element_id: String,
    pub employees: Vec<FilteredEmployee>,
}

/// The result container: one list item per employee, in server order.
///
/// Names are rendered as text nodes, so markup in a name is shown verbatim.
#[component]
pub fn FilteredEmployeeList(props: FilteredEmployeeListProps) -> Element {
    rsx! {
        ul {
            id: "{props.element_id}",
            class: "filtered-employees",
            for employee in props.employees.iter() {
                li {
                    class: "filtered-employee",
                    "{employee.name}"
                }
            }
        }
    }
}
