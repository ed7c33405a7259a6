use crate::dataset::{Dataset, Representative};
use crate::engine;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default cap on fallback-search results.
pub const DEFAULT_LIMIT: usize = 20;

/// Options that affect resolution behavior.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of fallback-search results. Direct postcode hits are
    /// always a single result and are never truncated.
    pub limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }
}

/// Where a match came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSource {
    /// Direct postcode resolution. Authoritative: the query was
    /// postcode-shaped, the area was mapped, and the constituency had a
    /// representative.
    Postcode { area: String, constituency: String },
    /// Weighted fallback search, with the computed score.
    Search { score: u32 },
}

/// One matched representative with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub representative: Representative,
    pub source: MatchSource,
}

/// Result from [`Resolver::resolve`] and [`Resolver::resolve_with`].
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The raw query as given.
    pub query: String,
    /// Matches in rank order: one authoritative postcode hit, or ranked
    /// fallback results, or empty.
    pub matches: Vec<Match>,
    /// Total elapsed time spent resolving.
    pub elapsed: Duration,
}

/// Resolution facade over an immutable dataset snapshot.
///
/// Cheap to clone; clones share the snapshot. Every resolution call is a
/// pure function over that snapshot, so a single `Resolver` may be used from
/// any number of threads without locking.
#[derive(Debug, Clone)]
pub struct Resolver {
    dataset: Arc<Dataset>,
}

impl Resolver {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Resolve `query` with default [`Options`].
    ///
    /// The postcode path is tried first and short-circuits on success;
    /// otherwise the weighted fallback search runs on the raw query. No
    /// input makes this fail: unparseable, unmapped, or empty queries
    /// degrade to a (possibly empty) fallback result.
    ///
    /// # Example
    /// ```
    /// use mplocate::{Dataset, Representative, Resolver};
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let areas: HashMap<String, String> =
    ///     [("BS5".to_string(), "Bristol East".to_string())].into_iter().collect();
    /// let reps = vec![Representative {
    ///     id: "MP1".to_string(),
    ///     name: "Kerry McCarthy".to_string(),
    ///     display_name: "Kerry McCarthy MP".to_string(),
    ///     constituency: "Bristol East".to_string(),
    ///     party: "Labour".to_string(),
    ///     postcodes: vec!["BS5 1AA".to_string()],
    ///     email: None,
    ///     phone: None,
    ///     website: None,
    /// }];
    /// let resolver = Resolver::new(Arc::new(Dataset::new(areas, reps).unwrap()));
    ///
    /// let res = resolver.resolve("bs5 1aa");
    /// assert_eq!(res.matches.len(), 1);
    /// assert_eq!(res.matches[0].representative.name, "Kerry McCarthy");
    /// ```
    pub fn resolve(&self, query: &str) -> Resolution {
        self.resolve_with(query, &Options::default())
    }

    /// Resolve `query` with explicit [`Options`].
    pub fn resolve_with(&self, query: &str, options: &Options) -> Resolution {
        let start = Instant::now();

        let matches = match engine::resolve_direct(&self.dataset, query) {
            Some(hit) => vec![hit],
            None => engine::search(&self.dataset, query, options.limit),
        };

        Resolution { query: query.to_string(), matches, elapsed: start.elapsed() }
    }

    /// The snapshot this resolver reads from.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
