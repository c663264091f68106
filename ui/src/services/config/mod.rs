use tracing::warn;

use crate::utils::page_origin;

/// Origin used when no browser location is available (native builds, tests)
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Where and how the employee filter talks to the server and the page.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Scheme, host and port the endpoint path is resolved against
    pub origin: String,
    /// Path of the filtering view
    pub endpoint_path: String,
    /// Query parameter repeated once per selected competence
    pub query_param: String,
    /// Id of the JSON script element carrying the competence options
    pub options_element_id: String,
    /// Id of the competence multi-select control
    pub select_element_id: String,
    /// Id of the result container
    pub results_element_id: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            endpoint_path: "/filter-employees/".to_string(),
            query_param: "competences".to_string(),
            options_element_id: "competence-options".to_string(),
            select_element_id: "id_competences".to_string(),
            results_element_id: "filtered-employees".to_string(),
        }
    }
}

impl FilterConfig {
    /// Defaults with the origin of the page the app is served from
    pub fn for_page() -> Self {
        match page_origin() {
            Some(origin) => Self::default().with_origin(origin),
            None => {
                warn!("No page origin available, using {}", DEFAULT_ORIGIN);
                Self::default()
            }
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = FilterConfig::default();
        assert_eq!(config.endpoint_path, "/filter-employees/");
        assert_eq!(config.query_param, "competences");
        assert_eq!(config.select_element_id, "id_competences");
        assert_eq!(config.results_element_id, "filtered-employees");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_for_page_falls_back_without_browser() {
        let config = FilterConfig::for_page();
        assert_eq!(config.origin, DEFAULT_ORIGIN);
        assert_eq!(config.endpoint_path, "/filter-employees/");
    }

    #[test]
    fn test_with_origin_keeps_other_fields() {
        let config = FilterConfig::default().with_origin("https://staff.example.com");
        assert_eq!(config.origin, "https://staff.example.com");
        assert_eq!(config.endpoint_path, "/filter-employees/");
    }
}
