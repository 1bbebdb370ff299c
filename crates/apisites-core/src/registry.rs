use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{SiteRecord, WireSite};
use crate::{Error, Result};

/// Ordered mapping from site id to [`SiteRecord`].
///
/// Iteration follows insertion order and ids are unique. On the wire the
/// registry is a map of `id -> { api, name, detail? }` in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteRegistry {
    pub(crate) sites: Vec<SiteRecord>,
}

impl SiteRegistry {
    /// Empty registry.
    pub const fn new() -> Self {
        Self { sites: Vec::new() }
    }

    /// Build a registry from records, failing on the first repeated id.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = SiteRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record)?;
        }
        Ok(registry)
    }

    /// Append a record. Ids already present are rejected.
    pub fn insert(&mut self, record: SiteRecord) -> Result<()> {
        if self.contains(&record.id) {
            return Err(Error::DuplicateSite(record.id));
        }
        self.sites.push(record);
        Ok(())
    }

    /// Insert or replace by id. A replaced record keeps its original position.
    ///
    /// Returns the previous record when one was replaced.
    pub fn upsert(&mut self, record: SiteRecord) -> Option<SiteRecord> {
        match self.sites.iter_mut().find(|s| s.id == record.id) {
            Some(slot) => Some(std::mem::replace(slot, record)),
            None => {
                self.sites.push(record);
                None
            },
        }
    }

    /// Look up a site by id.
    pub fn get(&self, id: &str) -> Option<&SiteRecord> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// Like [`get`](Self::get) but reports a missing id as [`Error::NotFound`].
    pub fn require(&self, id: &str) -> Result<&SiteRecord> {
        self.get(id)
            .ok_or_else(|| Error::NotFound(format!("site '{id}'")))
    }

    /// Whether `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.sites.iter().any(|s| s.id == id)
    }

    /// Sites in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SiteRecord> {
        self.sites.iter()
    }

    /// Site ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|s| s.id.as_str())
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the registry holds no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Search sites using fuzzy matching against id, display name and API URL.
    ///
    /// API URL matches score at half weight, so an id or name hit outranks
    /// the same hit inside a host name.
    pub fn search(&self, query: &str) -> Vec<SiteSearchResult> {
        let matcher = SkimMatcherV2::default();
        let query = query.trim().to_lowercase();

        let mut results = Vec::new();

        for site in &self.sites {
            let candidates = [
                ("id", matcher.fuzzy_match(&site.id.to_lowercase(), &query)),
                ("name", matcher.fuzzy_match(&site.name.to_lowercase(), &query)),
                (
                    "api",
                    matcher
                        .fuzzy_match(&site.api_url.to_lowercase(), &query)
                        .map(|score| score / 2),
                ),
            ];

            let mut max_score = 0;
            let mut best_match_field = "id";
            for (field, score) in candidates {
                if let Some(score) = score.filter(|s| *s > max_score) {
                    max_score = score;
                    best_match_field = field;
                }
            }

            if max_score > 0 {
                results.push(SiteSearchResult {
                    site: site.clone(),
                    score: max_score,
                    match_field: best_match_field.to_string(),
                });
            }
        }

        // Stable sort keeps table order among equal scores
        results.sort_by(|a, b| b.score.cmp(&a.score));

        results
    }

    /// Parse a registry from its JSON wire form.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a registry from TOML where each site is a table named by its id.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render the JSON wire form, pretty-printed.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a SiteRegistry {
    type Item = &'a SiteRecord;
    type IntoIter = std::slice::Iter<'a, SiteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}

impl IntoIterator for SiteRegistry {
    type Item = SiteRecord;
    type IntoIter = std::vec::IntoIter<SiteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.into_iter()
    }
}

impl Serialize for SiteRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sites.len()))?;
        for site in &self.sites {
            map.serialize_entry(&site.id, &site.to_wire())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SiteRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = SiteRegistry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of site id to { api, name, detail? }")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut registry = SiteRegistry::new();
        while let Some((id, wire)) = access.next_entry::<String, WireSite>()? {
            registry
                .insert(SiteRecord::from_wire(id, wire))
                .map_err(serde::de::Error::custom)?;
        }
        Ok(registry)
    }
}

/// Search result from a registry lookup
#[derive(Debug, Clone)]
pub struct SiteSearchResult {
    /// The matching site
    pub site: SiteRecord,
    /// Skim score of the best field
    pub score: i64,
    /// Which field matched best: `id`, `name` or `api`
    pub match_field: String,
}
