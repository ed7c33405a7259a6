//! Dataset loading and validation.
//!
//! The engine consumes two externally-produced JSON snapshots:
//!
//! - an **area map**: a flat object of postcode-area → constituency-name
//!   strings (`{"BS5": "Bristol East", ...}`);
//! - a **representative set**: an ordered array of representative records.
//!
//! Both are read fully into an immutable [`Dataset`] at startup and never
//! mutated afterwards; every resolution call borrows the same snapshot.
//! Replacing a dataset is a wholesale swap through [`DatasetHandle`], so
//! in-flight lookups keep the snapshot they started with.
//!
//! ## Validation
//!
//! The source data is known to contain duplicate constituency entries. The
//! strict constructor ([`Dataset::new`]) rejects such a set with
//! [`LoadError::DuplicateConstituency`]; the lenient constructor
//! ([`Dataset::new_lenient`]) keeps the first record per constituency and
//! reports the rest as [`DataWarning`]s for the caller to surface.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use thiserror::Error;

use crate::postcode;

/// Unified error for dataset loading and validation.
///
/// Resolution itself never fails; only getting a dataset into memory can.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Filesystem errors while reading a dataset file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON that does not parse or does not match the expected shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two representative records claim the same constituency.
    #[error("duplicate constituency {constituency:?}: records {first_id:?} and {second_id:?}")]
    DuplicateConstituency { constituency: String, first_id: String, second_id: String },
}

/// A data-quality finding from lenient loading. Non-fatal; the dataset is
/// still usable with first-match semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    /// A later record's constituency collides with an earlier one; the later
    /// record is unreachable through direct resolution.
    DuplicateConstituency { constituency: String, kept_id: String, dropped_id: String },
}

impl std::fmt::Display for DataWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataWarning::DuplicateConstituency { constituency, kept_id, dropped_id } => {
                write!(
                    f,
                    "duplicate constituency {constituency:?}: keeping {kept_id:?}, {dropped_id:?} is shadowed"
                )
            }
        }
    }
}

/// One elected representative, as stored in the dataset.
///
/// Only `id` and `name` are required in the input JSON; everything else
/// defaults so a sparse or malformed record never breaks field matching.
/// Contact fields are carried for callers but play no part in resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Representative {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub constituency: String,
    #[serde(default)]
    pub party: String,
    /// Postcodes associated with the constituency, in dataset order. Used
    /// only as an auxiliary matching signal by the fallback scorer.
    #[serde(default)]
    pub postcodes: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Immutable in-memory snapshot of both input datasets.
#[derive(Debug)]
pub struct Dataset {
    areas: HashMap<String, String>,
    representatives: Vec<Representative>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate constituencies.
    ///
    /// Area-map keys are normalized (upper-cased, whitespace stripped) so
    /// they compare exactly against extracted area codes.
    pub fn new(
        areas: HashMap<String, String>,
        representatives: Vec<Representative>,
    ) -> Result<Self, LoadError> {
        reject_duplicates(&representatives)?;
        Ok(Self::assemble(areas, representatives))
    }

    /// Build a dataset keeping the first record per constituency, reporting
    /// later collisions as warnings instead of failing.
    pub fn new_lenient(
        areas: HashMap<String, String>,
        representatives: Vec<Representative>,
    ) -> (Self, Vec<DataWarning>) {
        let mut warnings = Vec::new();
        let mut seen: HashMap<String, String> = HashMap::new();
        for rep in &representatives {
            if rep.constituency.is_empty() {
                continue;
            }
            match seen.get(&rep.constituency) {
                Some(kept_id) => warnings.push(DataWarning::DuplicateConstituency {
                    constituency: rep.constituency.clone(),
                    kept_id: kept_id.clone(),
                    dropped_id: rep.id.clone(),
                }),
                None => {
                    seen.insert(rep.constituency.clone(), rep.id.clone());
                }
            }
        }
        (Self::assemble(areas, representatives), warnings)
    }

    fn assemble(areas: HashMap<String, String>, representatives: Vec<Representative>) -> Self {
        let areas =
            areas.into_iter().map(|(area, constituency)| (postcode::normalize(&area), constituency)).collect();
        Self { areas, representatives }
    }

    /// Load both dataset files. `strict` selects between [`Dataset::new`]
    /// and [`Dataset::new_lenient`] duplicate handling.
    pub fn from_files(
        areas_path: impl AsRef<Path>,
        reps_path: impl AsRef<Path>,
        strict: bool,
    ) -> Result<(Self, Vec<DataWarning>), LoadError> {
        let areas: HashMap<String, String> = read_json(areas_path.as_ref())?;
        let representatives: Vec<Representative> = read_json(reps_path.as_ref())?;
        if strict {
            Ok((Self::new(areas, representatives)?, Vec::new()))
        } else {
            Ok(Self::new_lenient(areas, representatives))
        }
    }

    /// Look up the constituency for an extracted area code. Exact match
    /// only; the caller is expected to pass [`postcode::extract_area`]
    /// output.
    pub fn constituency(&self, area: &str) -> Option<&str> {
        self.areas.get(area).map(String::as_str)
    }

    /// First representative whose constituency equals `constituency`
    /// exactly. Constituency names are canonical in the source data, so the
    /// comparison is case-sensitive.
    pub fn representative_for(&self, constituency: &str) -> Option<&Representative> {
        self.representatives.iter().find(|rep| rep.constituency == constituency)
    }

    /// All representatives, in dataset order.
    pub fn representatives(&self) -> &[Representative] {
        &self.representatives
    }

    /// Number of area-map entries.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Constituencies referenced by the area map that no representative
    /// covers. Direct resolution through these areas will find a
    /// constituency but no representative; surfacing them at load time
    /// turns a silent per-query miss into a visible dataset defect.
    pub fn unrepresented_constituencies(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .areas
            .values()
            .filter(|constituency| self.representative_for(constituency).is_none())
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

fn reject_duplicates(representatives: &[Representative]) -> Result<(), LoadError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for rep in representatives {
        if rep.constituency.is_empty() {
            continue;
        }
        if let Some(first_id) = seen.insert(&rep.constituency, &rep.id) {
            return Err(LoadError::DuplicateConstituency {
                constituency: rep.constituency.clone(),
                first_id: first_id.to_string(),
                second_id: rep.id.clone(),
            });
        }
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.display().to_string(), source })?;
    serde_json::from_str(&text)
        .map_err(|source| LoadError::Json { path: path.display().to_string(), source })
}

/// Shared handle to the current dataset snapshot.
///
/// Readers take a cheap [`Arc`] clone and keep it for the duration of a
/// resolution call; [`DatasetHandle::swap`] replaces the snapshot wholesale,
/// so no reader ever observes a partially-updated dataset.
#[derive(Debug)]
pub struct DatasetHandle {
    current: RwLock<Arc<Dataset>>,
}

impl DatasetHandle {
    pub fn new(dataset: Dataset) -> Self {
        Self { current: RwLock::new(Arc::new(dataset)) }
    }

    /// The current snapshot. The returned `Arc` stays valid across swaps.
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.current.read().expect("dataset lock poisoned").clone()
    }

    /// Replace the snapshot. In-flight readers keep their old `Arc`.
    pub fn swap(&self, dataset: Dataset) {
        *self.current.write().expect("dataset lock poisoned") = Arc::new(dataset);
    }
}
