// Wire and page types for the employee filter - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// An employee as returned by the filter endpoint.
///
/// Only `name` is rendered; any other fields the server sends are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilteredEmployee {
    pub name: String,
}

/// A selectable competence
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompetenceOption {
    pub id: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Competences grouped under a heading, as the page lays them out
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompetenceGroup {
    pub name: String,
    #[serde(default)]
    pub competences: Vec<CompetenceOption>,
}

impl CompetenceGroup {
    /// Competences that may be offered in the control
    pub fn active_competences(&self) -> impl Iterator<Item = &CompetenceOption> {
        self.competences.iter().filter(|c| c.active)
    }
}

/// Currently chosen competence ids, in the order the control displays them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CompetenceSelection(Vec<String>);

impl CompetenceSelection {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|v| v == id)
    }

    /// Flip one competence on or off.
    ///
    /// The result is rebuilt from `groups` so it stays in display order no
    /// matter in which order the user clicked. Ids not offered by `groups`
    /// are dropped.
    pub fn toggled(&self, groups: &[CompetenceGroup], id: &str) -> Self {
        let turning_on = !self.contains(id);
        let values = groups
            .iter()
            .flat_map(|g| g.active_competences())
            .filter(|c| {
                if c.id == id {
                    turning_on
                } else {
                    self.contains(&c.id)
                }
            })
            .map(|c| c.id.clone())
            .collect();
        Self(values)
    }
}
