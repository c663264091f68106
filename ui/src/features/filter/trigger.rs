use tracing::{debug, error};

use super::generation::Generation;
use super::types::FilterAction;
use crate::services::client::{CompetenceSelection, EmployeeDirectory};

/// Sends one selection to the directory and turns the outcome into an action.
///
/// The directory is handed in by the owner, so the trigger never looks up
/// page elements or globals on its own. Applying the returned action (and
/// deciding whether it is stale) is left to `FilterState`.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterTrigger<D> {
    directory: D,
}

impl<D: EmployeeDirectory> FilterTrigger<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    #[cfg(test)]
    fn directory(&self) -> &D {
        &self.directory
    }

    pub async fn run(&self, generation: Generation, selection: CompetenceSelection) -> FilterAction {
        match self.directory.filter_employees(&selection).await {
            Ok(employees) => {
                debug!(
                    "Filter request {} returned {} employees",
                    generation,
                    employees.len()
                );
                FilterAction::ResponseReceived {
                    generation,
                    employees,
                }
            }
            Err(err) => {
                error!("Error filtering employees (request {}): {}", generation, err);
                FilterAction::RequestFailed {
                    generation,
                    error: err,
                }
            }
        }
    }
}
