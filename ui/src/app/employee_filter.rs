use crate::{console_debug, console_error, console_info, console_warn};
use dioxus::prelude::*;

use crate::components::display::{FilteredEmployeeList, LoadingIndicator};
use crate::components::forms::CompetenceSelect;
use crate::features::filter::{FilterAction, FilterState, FilterTrigger};
use crate::services::client::EmployeeFilterClient;
use crate::utils::read_competence_groups;

const EMPLOYEE_FILTER_CSS: Asset = asset!("/assets/styling/employee_filter.css");

#[derive(Props, PartialEq, Clone)]
pub struct EmployeeFilterProps {
    /// Client for the filtering view; its config also names the page elements
    pub client: EmployeeFilterClient,
}

#[component]
pub fn EmployeeFilter(props: EmployeeFilterProps) -> Element {
    let config = props.client.config().clone();
    let trigger = FilterTrigger::new(props.client.clone());

    let mut state = use_signal(|| {
        let mut initial = FilterState::default();
        match read_competence_groups(&config.options_element_id) {
            Ok(Some(groups)) => {
                console_info!("[Employee Filter] Loaded {} competence groups", groups.len());
                initial.reduce_in_place(FilterAction::SetCompetenceGroups(groups));
            }
            Ok(None) => console_warn!(
                "[Employee Filter] No #{} element, no competences offered",
                config.options_element_id
            ),
            Err(e) => console_error!("[Employee Filter] {:#}", e),
        }
        initial
    });

    let dispatch = EventHandler::new(move |action: FilterAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    // Each run gets a fresh generation; only the newest answer is shown
    let run_filter = EventHandler::new(move |_: ()| {
        let (generation, selection) = state.with_mut(|s| s.begin_request());
        console_debug!(
            "[Employee Filter] Request {} for {} competences",
            generation,
            selection.len()
        );
        let trigger = trigger.clone();
        spawn(async move {
            let action = trigger.run(generation, selection).await;
            dispatch.call(action);
        });
    });

    let current = state.read();

    rsx! {
        document::Link { rel: "stylesheet", href: EMPLOYEE_FILTER_CSS }

        div {
            class: "employee-filter",

            h2 {
                class: "filter-title",
                "Filter employees by competence"
            }

            CompetenceSelect {
                element_id: config.select_element_id.clone(),
                groups: current.groups.clone(),
                selection: current.selection.clone(),
                on_toggle: move |id: String| {
                    dispatch.call(FilterAction::ToggleCompetence(id));
                    run_filter.call(());
                }
            }

            div {
                class: "button-section",
                button {
                    class: "filter-button",
                    onclick: move |_| run_filter.call(()),
                    "Filter"
                }
            }

            if current.is_loading() {
                LoadingIndicator {
                    message: "Filtering employees...".to_string(),
                    pending: current.in_flight,
                }
            }

            FilteredEmployeeList {
                element_id: config.results_element_id.clone(),
                employees: current.employees.clone(),
            }
        }
    }
}
