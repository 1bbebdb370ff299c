//! Host-owned site catalogue.
//!
//! [`SiteCatalog`] is the host side of the loader contract. It accepts tables
//! through [`SiteAggregator`] and folds them into one ordered catalogue:
//! ids already present keep their slot and take the incoming record, new ids
//! are appended.

use crate::{SiteAggregator, SiteRecord, SiteRegistry};

/// Ordered catalogue built from every table handed to the host.
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    sites: SiteRegistry,
    merges: usize,
}

/// Counts from a single merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Ids that were not in the catalogue before
    pub added: usize,
    /// Ids whose record was overwritten in place
    pub replaced: usize,
}

impl SiteCatalog {
    /// Empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of host sites.
    pub const fn with_sites(sites: SiteRegistry) -> Self {
        Self { sites, merges: 0 }
    }

    /// Merge a table into the catalogue.
    pub fn merge(&mut self, incoming: SiteRegistry) -> MergeStats {
        let mut stats = MergeStats::default();
        for site in incoming {
            let id = site.id.clone();
            if self.sites.upsert(site).is_some() {
                tracing::debug!("Replaced catalogue entry '{}'", id);
                stats.replaced += 1;
            } else {
                stats.added += 1;
            }
        }
        self.merges += 1;
        tracing::info!(
            "Merged site table: {} added, {} replaced, {} total",
            stats.added,
            stats.replaced,
            self.sites.len()
        );
        stats
    }

    /// Current contents in catalogue order.
    pub const fn registry(&self) -> &SiteRegistry {
        &self.sites
    }

    /// Look up a site by id.
    pub fn get(&self, id: &str) -> Option<&SiteRecord> {
        self.sites.get(id)
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the catalogue holds no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// How many tables have been merged so far.
    pub const fn merge_count(&self) -> usize {
        self.merges
    }

    /// Consume the catalogue, keeping its contents.
    pub fn into_registry(self) -> SiteRegistry {
        self.sites
    }
}

impl SiteAggregator for SiteCatalog {
    fn extend_sites(&mut self, sites: SiteRegistry) {
        self.merge(sites);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{LoadOutcome, load, profiles::customer_sites};

    fn host_defaults() -> SiteRegistry {
        SiteRegistry::from_records(vec![
            SiteRecord::new("heimuer", "https://heimuer.example/api.php/provide/vod", "黑木耳"),
            SiteRecord::new("ffzy", "https://old.ffzy.example/api.php/provide/vod", "非凡影视"),
        ])
        .unwrap()
    }

    #[test]
    fn test_merge_into_empty_catalog() {
        let mut catalog = SiteCatalog::new();
        let stats = catalog.merge(customer_sites());

        assert_eq!(stats.added, 13);
        assert_eq!(stats.replaced, 0);
        assert_eq!(catalog.registry(), &customer_sites());
        assert_eq!(catalog.merge_count(), 1);
    }

    #[test]
    fn test_merge_replaces_in_place_and_appends() {
        let mut catalog = SiteCatalog::with_sites(host_defaults());
        let stats = catalog.merge(customer_sites());

        assert_eq!(stats.replaced, 1);
        assert_eq!(stats.added, 12);

        let ids: Vec<_> = catalog.registry().ids().take(3).collect();
        assert_eq!(ids, vec!["heimuer", "ffzy", "yinghua"]);

        let ffzy = catalog.get("ffzy").unwrap();
        assert_eq!(ffzy.name, "非凡资源");
        assert_eq!(ffzy.detail_url.as_deref(), Some("https://www.ffzy.tv"));
    }

    #[test]
    fn test_catalog_as_load_target() {
        let mut catalog = SiteCatalog::with_sites(host_defaults());

        let outcome = load(Some(&mut catalog), None);

        assert!(matches!(outcome, LoadOutcome::Merged { sites: 13, .. }));
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.merge_count(), 1);
    }

    #[test]
    fn test_repeated_merge_is_stable() {
        let mut catalog = SiteCatalog::new();
        catalog.merge(customer_sites());
        let stats = catalog.merge(customer_sites());

        assert_eq!(stats.added, 0);
        assert_eq!(stats.replaced, 13);
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.into_registry(), customer_sites());
    }
}
