//! Direct postcode resolution.
//!
//! The authoritative path: normalize the query, extract an area code, look
//! the area up in the constituency map, then scan the representative set for
//! that constituency. Any `None` along the way sends the caller to fallback
//! search; nothing here can fail a query.

use crate::api::{Match, MatchSource};
use crate::dataset::Dataset;
use crate::postcode;

/// Resolve a raw query through the postcode path.
///
/// Returns the single authoritative match, or `None` when the query is not
/// postcode-shaped, the area is unmapped, or the constituency has no
/// representative in the dataset (a known cross-dataset inconsistency, see
/// `Dataset::unrepresented_constituencies`).
pub(crate) fn resolve_direct(dataset: &Dataset, raw: &str) -> Option<Match> {
    let normalized = postcode::normalize(raw);
    let area = postcode::extract_area(&normalized)?;
    let constituency = dataset.constituency(area)?;
    let representative = dataset.representative_for(constituency);

    if std::env::var_os("MPLOCATE_DEBUG").is_some() {
        eprintln!(
            "[resolve] raw={raw:?} area={area:?} constituency={constituency:?} found={}",
            representative.is_some()
        );
    }

    let representative = representative?.clone();
    Some(Match {
        representative,
        source: MatchSource::Postcode { area: area.to_string(), constituency: constituency.to_string() },
    })
}
