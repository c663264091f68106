use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use super::errors::{FilterError, FilterResult};
use super::types::{CompetenceSelection, FilteredEmployee};
use crate::services::config::FilterConfig;

/// Anything that can answer "which employees have these competences".
#[async_trait(?Send)]
pub trait EmployeeDirectory {
    async fn filter_employees(
        &self,
        selection: &CompetenceSelection,
    ) -> FilterResult<Vec<FilteredEmployee>>;
}

/// HTTP client for the server-side filtering view
#[derive(Clone, Debug)]
pub struct EmployeeFilterClient {
    http_client: Client,
    config: FilterConfig,
}

impl EmployeeFilterClient {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Full request URL for a selection.
    ///
    /// Each selected id becomes its own `competences=<id>` pair, in selection
    /// order. An empty selection yields the bare endpoint.
    pub fn filter_url(&self, selection: &CompetenceSelection) -> FilterResult<Url> {
        build_filter_url(&self.config, selection)
    }
}

// Clients are interchangeable when they point at the same place
impl PartialEq for EmployeeFilterClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

#[async_trait(?Send)]
impl EmployeeDirectory for EmployeeFilterClient {
    #[instrument(skip(self), fields(count = selection.len()), err)]
    async fn filter_employees(
        &self,
        selection: &CompetenceSelection,
    ) -> FilterResult<Vec<FilteredEmployee>> {
        let url = self.filter_url(selection)?;
        debug!("Filtering employees: {}", url);

        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FilterError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FilterError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        decode_employees(&body)
    }
}

pub(crate) fn build_filter_url(
    config: &FilterConfig,
    selection: &CompetenceSelection,
) -> FilterResult<Url> {
    let invalid = |message: String| FilterError::InvalidEndpoint {
        endpoint: format!("{}{}", config.origin, config.endpoint_path),
        message,
    };

    let base = Url::parse(&config.origin).map_err(|e| invalid(e.to_string()))?;
    let mut url = base
        .join(&config.endpoint_path)
        .map_err(|e| invalid(e.to_string()))?;

    if !selection.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for value in selection.values() {
            pairs.append_pair(&config.query_param, value);
        }
    }

    Ok(url)
}

/// Parse a response body into employees, keeping server order
pub(crate) fn decode_employees(body: &str) -> FilterResult<Vec<FilteredEmployee>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(values: &[&str]) -> CompetenceSelection {
        CompetenceSelection::new(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_empty_selection_targets_bare_endpoint() {
        let client = EmployeeFilterClient::new(FilterConfig::default());
        let url = client.filter_url(&CompetenceSelection::default()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/filter-employees/");
    }

    #[test]
    fn test_selection_repeats_query_param_in_order() {
        let client = EmployeeFilterClient::new(FilterConfig::default());
        let url = client.filter_url(&selection(&["12", "3", "7"])).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/filter-employees/?competences=12&competences=3&competences=7"
        );

        let values: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "competences")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(values, vec!["12", "3", "7"]);
    }

    #[test]
    fn test_selection_values_are_percent_encoded() {
        let client = EmployeeFilterClient::new(FilterConfig::default());
        let url = client.filter_url(&selection(&["a&b=c"])).unwrap();
        assert_eq!(url.query(), Some("competences=a%26b%3Dc"));
    }

    #[test]
    fn test_invalid_origin_is_reported() {
        let config = FilterConfig::default().with_origin("not a url");
        let err = build_filter_url(&config, &CompetenceSelection::default()).unwrap_err();
        assert!(matches!(err, FilterError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_decode_keeps_server_order() {
        let employees = decode_employees(r#"[{"name":"A"},{"name":"B"}]"#).unwrap();
        let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_employees("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array_and_missing_name() {
        assert!(matches!(
            decode_employees(r#"{"error":"nope"}"#),
            Err(FilterError::MalformedPayload { .. })
        ));
        assert!(matches!(
            decode_employees(r#"[{"city":"Gdańsk"}]"#),
            Err(FilterError::MalformedPayload { .. })
        ));
        assert!(matches!(
            decode_employees("<html>"),
            Err(FilterError::MalformedPayload { .. })
        ));
    }
}
