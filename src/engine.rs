//! Resolution engine.
//!
//! This module is the internal entry point for turning a raw query into
//! representative matches. The public facade (`src/api.rs`) wraps it.
//!
//! ## How the parts work together
//!
//! Resolving a query is a two-stage pipeline with an authoritative fast
//! path:
//!
//! ```text
//! raw query ── postcode::normalize ──┐
//!                                    │
//!                postcode::extract_area      (postcode.rs)
//!                                    │
//!                     Dataset::constituency  ──┐
//!                                    │         │ any step None
//!                Dataset::representative_for   │
//!                                    │         v
//!                            single Match   score::search   (engine/score.rs)
//!                          (authoritative)  on the raw query
//!                                    │         │
//!                                    v         v
//!                                  Vec<Match> (ranked)
//! ```
//!
//! The direct path short-circuits: a postcode that maps to a represented
//! constituency returns exactly one match and fallback search never runs.
//! Every failure along the direct path is a routing decision, not an error;
//! the engine never fails a query.
//!
//! ## Responsibilities by module
//!
//! - `resolve.rs`: the direct postcode path
//!   (normalize → area → constituency → representative).
//! - `score.rs`: the weighted multi-field fallback scorer and ranking.

mod resolve;
mod score;

pub(crate) use resolve::resolve_direct;
pub(crate) use score::search;

pub use score::{W_CONSTITUENCY_EXACT, W_FIELD_CONTAINS, W_POSTCODE_CONTAINS, W_POSTCODE_PREFIX, score};
