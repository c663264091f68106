//! Reading what the hosting page provides
//!
//! The server renders the competence options into the page as a JSON script
//! element; the app reads it once at startup. Off the browser there is no
//! page, so every lookup comes back empty.

use anyhow::{Context, Result};

use crate::services::client::CompetenceGroup;

/// `window.location.origin`, if running in a browser
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

/// Text of the element with the given id, if present
#[cfg(target_arch = "wasm32")]
pub fn element_text(element_id: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|e| e.text_content())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_text(_element_id: &str) -> Option<String> {
    None
}

/// Competence groups embedded in the page.
///
/// `Ok(None)` means the element is missing, so the page offers no
/// competences at all.
pub fn read_competence_groups(element_id: &str) -> Result<Option<Vec<CompetenceGroup>>> {
    match element_text(element_id) {
        Some(text) => parse_competence_groups(&text)
            .map(Some)
            .with_context(|| format!("Invalid competence options in #{}", element_id)),
        None => Ok(None),
    }
}

pub fn parse_competence_groups(text: &str) -> Result<Vec<CompetenceGroup>> {
    let groups: Vec<CompetenceGroup> =
        serde_json::from_str(text.trim()).context("Failed to parse competence groups")?;
    Ok(groups)
}
