//! Resolve a UK postcode (or free-text query) to the elected Member of
//! Parliament for that constituency.
//!
//! The pipeline is strictly one-way: raw query → normalize → extract the
//! outward area code → area-to-constituency map → constituency-to-MP scan.
//! Any `None` along that path routes the original query to a weighted
//! multi-field fallback search instead. See `src/engine.rs` for the full
//! picture.
//!
//! Both input datasets are loaded once into an immutable [`Dataset`]
//! snapshot; resolution never mutates anything and never fails a query.

#[macro_use]
mod macros;

mod api;
mod dataset;
mod engine;

pub mod postcode;

pub use api::{DEFAULT_LIMIT, Match, MatchSource, Options, Resolution, Resolver};
pub use dataset::{DataWarning, Dataset, DatasetHandle, LoadError, Representative};
pub use engine::{W_CONSTITUENCY_EXACT, W_FIELD_CONTAINS, W_POSTCODE_CONTAINS, W_POSTCODE_PREFIX, score};
