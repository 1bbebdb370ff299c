//! Structural checks over a site table.
//!
//! The loader hands tables over as-is; these checks exist for tooling that
//! wants to vet a profile before it is shipped.

use serde::Serialize;
use url::Url;

use crate::{Error, SiteRecord, SiteRegistry};

/// A single problem found in one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Id of the offending site
    pub id: String,
    /// Field that failed: `id`, `name`, `api` or `detail`
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Check every site and return all problems found, in table order.
pub fn validate_registry(registry: &SiteRegistry) -> Vec<ValidationIssue> {
    registry.iter().flat_map(validate_site).collect()
}

/// Check one site.
pub fn validate_site(site: &SiteRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let issue = |field: &'static str, message: String| ValidationIssue {
        id: site.id.clone(),
        field,
        message,
    };

    if site.id.trim().is_empty() {
        issues.push(issue("id", "id must not be empty".to_string()));
    }
    if site.name.trim().is_empty() {
        issues.push(issue("name", "name must not be empty".to_string()));
    }
    if let Err(e) = parse_absolute_url(&site.api_url) {
        issues.push(issue("api", e.to_string()));
    }
    if let Some(detail) = &site.detail_url {
        if let Err(e) = parse_absolute_url(detail) {
            issues.push(issue("detail", e.to_string()));
        }
    }

    issues
}

/// Parse `raw` and require an absolute http(s) URL with a host.
pub fn parse_absolute_url(raw: &str) -> crate::Result<Url> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidUrl("empty URL".to_string()));
    }
    let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "{raw}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::InvalidUrl(format!("{raw}: missing host")));
    }
    Ok(url)
}
