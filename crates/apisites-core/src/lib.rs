//! # apisites-core
//!
//! Ordered tables of remote content-index API sites and their registration
//! with a host application.
//!
//! ## Architecture
//!
//! - **Types**: [`SiteRecord`] and its host wire form
//! - **Registry**: [`SiteRegistry`], an insertion-ordered map keyed by site id
//! - **Profiles**: the built-in site table plus user-defined snapshots on disk
//! - **Loader**: [`load`] hands a table to an injected [`SiteAggregator`] and
//!   fires an optional [`RefreshHook`]
//! - **Catalog**: [`SiteCatalog`], a host-side aggregator
//! - **Configuration**: default profile and profile directory
//! - **Error Handling**: one [`Error`] enum with categories
//!
//! ## Quick Start
//!
//! ```rust
//! use apisites_core::{LoadOutcome, SiteCatalog, load};
//!
//! let mut catalog = SiteCatalog::new();
//! let outcome = load(Some(&mut catalog), None);
//!
//! assert!(matches!(outcome, LoadOutcome::Merged { refreshed: false, .. }));
//! assert_eq!(
//!     catalog.get("ffzy").and_then(|s| s.detail_url.as_deref()),
//!     Some("https://www.ffzy.tv")
//! );
//! ```

/// Host-side catalogue that aggregates site tables
pub mod catalog;
/// Configuration management
pub mod config;
/// Error types and result aliases
pub mod error;
/// Registration of site tables through injected hooks
pub mod loader;
/// Built-in and on-disk site table snapshots
pub mod profiles;
/// Ordered site registry
pub mod registry;
/// Core data types
pub mod types;
/// Structural checks for site tables
pub mod validate;

pub use catalog::{MergeStats, SiteCatalog};
pub use config::{Config, DefaultsConfig, PathsConfig};
pub use error::{Error, Result};
pub use loader::{LoadOutcome, RefreshHook, SiteAggregator, load, load_registry};
pub use registry::{SiteRegistry, SiteSearchResult};
pub use types::{SiteRecord, WireSite};
pub use validate::{ValidationIssue, validate_registry};
