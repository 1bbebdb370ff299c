use serde::{Deserialize, Serialize};

/// One API site: a remote content-index endpoint plus its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    /// Short unique key, e.g. `"yinghua"`
    pub id: String,
    /// Base endpoint of the remote API
    pub api_url: String,
    /// Human-readable label, may be non-ASCII
    pub name: String,
    /// Alternate lookup endpoint, only set for some sites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
}

impl SiteRecord {
    /// Record without a detail endpoint.
    pub fn new(id: &str, api_url: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            api_url: api_url.to_string(),
            name: name.to_string(),
            detail_url: None,
        }
    }

    /// Set the detail endpoint.
    pub fn with_detail(mut self, detail_url: &str) -> Self {
        self.detail_url = Some(detail_url.to_string());
        self
    }

    /// Host wire form of this record (id becomes the map key).
    pub fn to_wire(&self) -> WireSite {
        WireSite {
            api: self.api_url.clone(),
            name: self.name.clone(),
            detail: self.detail_url.clone(),
        }
    }

    pub(crate) fn from_wire(id: String, wire: WireSite) -> Self {
        Self {
            id,
            api_url: wire.api,
            name: wire.name,
            detail_url: wire.detail,
        }
    }
}

impl std::fmt::Display for SiteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})\n   {}", self.name, self.id, self.api_url)
    }
}

/// Record shape exchanged with the host: `{ api, name, detail? }`.
///
/// Field names are part of the host contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSite {
    /// Base endpoint of the remote API
    pub api: String,
    /// Human-readable label
    pub name: String,
    /// Alternate lookup endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
