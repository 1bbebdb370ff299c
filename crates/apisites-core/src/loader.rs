//! Registration of a site table with its host.
//!
//! The host supplies its hooks explicitly: a [`SiteAggregator`] that takes
//! ownership of the table and merges it into the host catalogue, and an
//! optional [`RefreshHook`] fired after a successful merge. A missing
//! aggregator is not fatal; it is logged as [`Error::MissingDependency`] and
//! the load completes without calling anything.
//!
//! ```rust
//! use apisites_core::{SiteRegistry, load};
//!
//! let mut received: Option<SiteRegistry> = None;
//! let mut refreshes = 0;
//! let mut aggregate = |sites: SiteRegistry| received = Some(sites);
//! let mut refresh = || refreshes += 1;
//!
//! let outcome = load(Some(&mut aggregate), Some(&mut refresh));
//! assert!(outcome.is_merged());
//! assert_eq!(refreshes, 1);
//! assert!(received.is_some());
//! ```

use crate::profiles::customer_sites;
use crate::{Error, SiteRegistry};

/// Host hook that merges a site table into the host-owned catalogue.
pub trait SiteAggregator {
    /// Receive the table. Ownership passes to the host.
    fn extend_sites(&mut self, sites: SiteRegistry);
}

/// Optional host hook fired after a successful merge.
pub trait RefreshHook {
    /// Re-render whatever the host shows from its catalogue.
    fn refresh(&mut self);
}

impl<F> SiteAggregator for F
where
    F: FnMut(SiteRegistry),
{
    fn extend_sites(&mut self, sites: SiteRegistry) {
        self(sites);
    }
}

impl<F> RefreshHook for F
where
    F: FnMut(),
{
    fn refresh(&mut self) {
        self();
    }
}

/// What a load did. Holds no reference to the handed-off table.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The aggregator received the table.
    Merged {
        /// Number of sites handed to the aggregator
        sites: usize,
        /// Whether the refresh hook ran
        refreshed: bool,
    },
    /// Nothing was called; the reported error explains why.
    Skipped(Error),
}

impl LoadOutcome {
    /// Whether the table reached the aggregator.
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

/// Register the built-in site table with the host.
pub fn load(
    aggregator: Option<&mut dyn SiteAggregator>,
    refresh: Option<&mut dyn RefreshHook>,
) -> LoadOutcome {
    load_registry(customer_sites(), aggregator, refresh)
}

/// Register an explicit site table with the host.
///
/// Calls the aggregator exactly once when present, then the refresh hook
/// when present. Without an aggregator neither hook is called.
pub fn load_registry(
    sites: SiteRegistry,
    aggregator: Option<&mut dyn SiteAggregator>,
    refresh: Option<&mut dyn RefreshHook>,
) -> LoadOutcome {
    let Some(aggregator) = aggregator else {
        let err = Error::MissingDependency(
            "site aggregation hook must be registered before loading sites".to_string(),
        );
        tracing::error!(category = err.category(), "{err}");
        return LoadOutcome::Skipped(err);
    };

    let count = sites.len();
    tracing::debug!("Handing {} sites to the aggregation hook", count);
    aggregator.extend_sites(sites);

    let refreshed = match refresh {
        Some(hook) => {
            hook.refresh();
            true
        },
        None => {
            tracing::debug!("No refresh hook registered, skipping");
            false
        },
    };

    LoadOutcome::Merged {
        sites: count,
        refreshed,
    }
}
