// Core state for the employee filter - no dioxus imports needed here
use tracing::debug;

use super::generation::{Generation, GenerationGuard};
use crate::services::client::{
    CompetenceGroup, CompetenceSelection, FilterError, FilteredEmployee,
};

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum FilterAction {
    SetCompetenceGroups(Vec<CompetenceGroup>),
    ToggleCompetence(String),
    ResponseReceived {
        generation: Generation,
        employees: Vec<FilteredEmployee>,
    },
    RequestFailed {
        generation: Generation,
        error: FilterError,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub groups: Vec<CompetenceGroup>,
    pub selection: CompetenceSelection,
    /// What the result container shows
    pub employees: Vec<FilteredEmployee>,
    pub generations: GenerationGuard,
    pub in_flight: usize,
}

impl FilterState {
    /// Register a new request for the current selection.
    ///
    /// Every request issued before this one becomes stale.
    pub fn begin_request(&mut self) -> (Generation, CompetenceSelection) {
        let generation = self.generations.issue();
        self.in_flight += 1;
        (generation, self.selection.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn reduce_in_place(&mut self, action: FilterAction) {
        match action {
            FilterAction::SetCompetenceGroups(groups) => {
                self.groups = groups;
            }
            FilterAction::ToggleCompetence(id) => {
                self.selection = self.selection.toggled(&self.groups, &id);
            }
            FilterAction::ResponseReceived {
                generation,
                employees,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.generations.is_current(generation) {
                    self.employees = employees;
                } else {
                    debug!(
                        "Discarding stale filter response {} (latest is {})",
                        generation,
                        self.generations.latest()
                    );
                }
            }
            FilterAction::RequestFailed { generation, .. } => {
                // The displayed list stays as it was
                self.in_flight = self.in_flight.saturating_sub(1);
                debug!("Filter request {} failed, keeping current list", generation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees(names: &[&str]) -> Vec<FilteredEmployee> {
        names
            .iter()
            .map(|n| FilteredEmployee {
                name: n.to_string(),
            })
            .collect()
    }

    fn names(state: &FilterState) -> Vec<&str> {
        state.employees.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_response_replaces_prior_contents() {
        let mut state = FilterState {
            employees: employees(&["Old"]),
            ..Default::default()
        };
        let (generation, _) = state.begin_request();
        state.reduce_in_place(FilterAction::ResponseReceived {
            generation,
            employees: employees(&["A", "B"]),
        });
        assert_eq!(names(&state), vec!["A", "B"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_empty_response_clears_container() {
        let mut state = FilterState {
            employees: employees(&["Old"]),
            ..Default::default()
        };
        let (generation, _) = state.begin_request();
        state.reduce_in_place(FilterAction::ResponseReceived {
            generation,
            employees: Vec::new(),
        });
        assert!(state.employees.is_empty());
    }

    #[test]
    fn test_failure_leaves_contents_unchanged() {
        let mut state = FilterState {
            employees: employees(&["Kept"]),
            ..Default::default()
        };
        let (generation, _) = state.begin_request();
        assert!(state.is_loading());
        state.reduce_in_place(FilterAction::RequestFailed {
            generation,
            error: FilterError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            },
        });
        assert_eq!(names(&state), vec!["Kept"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = FilterState::default();
        let (first, _) = state.begin_request();
        let (second, _) = state.begin_request();
        assert_eq!(state.in_flight, 2);

        state.reduce_in_place(FilterAction::ResponseReceived {
            generation: second,
            employees: employees(&["Newer"]),
        });
        state.reduce_in_place(FilterAction::ResponseReceived {
            generation: first,
            employees: employees(&["Older"]),
        });

        assert_eq!(names(&state), vec!["Newer"]);
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_begin_request_snapshots_selection() {
        let mut state = FilterState::default();
        state.selection = CompetenceSelection::new(vec!["4".to_string()]);
        let (_, selection) = state.begin_request();
        state.selection = CompetenceSelection::default();
        assert_eq!(selection.values(), ["4"]);
    }
}
