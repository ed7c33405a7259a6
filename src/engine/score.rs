//! Weighted fallback search.
//!
//! When direct postcode resolution fails, every representative is scored
//! against the raw query across several fields. The weights encode match
//! priority, not incidental tuning:
//!
//! ```text
//! exact constituency        +200   beats everything
//! postcode contains query   +100   postcode evidence over text evidence
//! postcode starts with it    +50   additional; prefix beats mere containment
//! each text field contains   +10   name, display name, constituency, party
//! ```
//!
//! A representative that matches nothing scores 0 and is excluded from the
//! results entirely. Ties keep dataset order (the sort is stable).

use crate::api::{Match, MatchSource};
use crate::dataset::{Dataset, Representative};

/// Query equals the constituency name, case-insensitively.
pub const W_CONSTITUENCY_EXACT: u32 = 200;
/// Some associated postcode contains the query.
pub const W_POSTCODE_CONTAINS: u32 = 100;
/// Additional bonus: some associated postcode starts with the query, so
/// area-style queries like `BS5` outrank coincidental substring hits.
pub const W_POSTCODE_PREFIX: u32 = 50;
/// Per searchable text field containing the query.
pub const W_FIELD_CONTAINS: u32 = 10;

/// Score one representative against a query.
///
/// `query` must already be trimmed and lower-cased; all comparisons here are
/// against lower-cased field values, so the whole function is
/// case-insensitive. A score of 0 means "no field matched".
pub fn score(query: &str, representative: &Representative) -> u32 {
    if query.is_empty() {
        return 0;
    }

    let mut total = 0;

    if representative.constituency.to_lowercase() == query {
        total += W_CONSTITUENCY_EXACT;
    }

    let postcodes = &representative.postcodes;
    if postcodes.iter().any(|p| p.to_lowercase().contains(query)) {
        total += W_POSTCODE_CONTAINS;
        if postcodes.iter().any(|p| p.to_lowercase().starts_with(query)) {
            total += W_POSTCODE_PREFIX;
        }
    }

    let fields = [
        &representative.name,
        &representative.display_name,
        &representative.constituency,
        &representative.party,
    ];
    for field in fields {
        if field.to_lowercase().contains(query) {
            total += W_FIELD_CONTAINS;
        }
    }

    total
}

/// Rank the whole representative set against a raw query.
///
/// The query is trimmed and lower-cased here; an empty query yields no
/// results (the empty string is a substring of everything and must not match
/// everything). Zero-score entries are dropped, the rest are ordered by
/// descending score with dataset-order ties, capped at `limit`.
pub(crate) fn search(dataset: &Dataset, raw_query: &str, limit: usize) -> Vec<Match> {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &Representative)> = dataset
        .representatives()
        .iter()
        .filter_map(|rep| {
            let s = score(&query, rep);
            (s > 0).then_some((s, rep))
        })
        .collect();

    // Stable: equal scores keep dataset order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(s, rep)| Match { representative: rep.clone(), source: MatchSource::Search { score: s } })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn rep(id: &str, name: &str, constituency: &str, party: &str, postcodes: &[&str]) -> Representative {
        Representative {
            id: id.to_string(),
            name: name.to_string(),
            display_name: name.to_string(),
            constituency: constituency.to_string(),
            party: party.to_string(),
            postcodes: postcodes.iter().map(|p| p.to_string()).collect(),
            email: None,
            phone: None,
            website: None,
        }
    }

    fn dataset(reps: Vec<Representative>) -> Dataset {
        Dataset::new(HashMap::new(), reps).unwrap()
    }

    #[test]
    fn exact_constituency_scores_exact_weight_plus_field_hit() {
        let r = rep("MP1", "Kerry McCarthy", "Bristol East", "Labour", &[]);
        // Exact equality also counts as a substring hit on the constituency field.
        assert_eq!(score("bristol east", &r), W_CONSTITUENCY_EXACT + W_FIELD_CONTAINS);
    }

    #[test]
    fn postcode_containment_and_prefix_are_separate_bonuses() {
        let prefix = rep("MP1", "A", "X", "Y", &["BS5 1AA"]);
        assert_eq!(score("bs5", &prefix), W_POSTCODE_CONTAINS + W_POSTCODE_PREFIX);

        let contains_only = rep("MP2", "A", "X", "Y", &["AABS5"]);
        assert_eq!(score("bs5", &contains_only), W_POSTCODE_CONTAINS);
    }

    #[test]
    fn each_text_field_contributes_ten() {
        // "bristol" appears in name, display name and constituency.
        let r = rep("MP1", "Bristol Smith", "Bristol East", "Labour", &[]);
        assert_eq!(score("bristol", &r), 3 * W_FIELD_CONTAINS);

        let party_only = rep("MP2", "A", "X", "Labour", &[]);
        assert_eq!(score("labour", &party_only), W_FIELD_CONTAINS);
    }

    #[test]
    fn scoring_is_case_insensitive_over_fields() {
        let r = rep("MP1", "Kerry McCarthy", "Bristol East", "Labour", &["BS5 1AA"]);
        assert_eq!(score("bs5", &r), score("bs5", &r));
        assert!(score("kerry", &r) > 0);
        assert!(score("mccarthy", &r) > 0);
    }

    #[test]
    fn empty_query_scores_zero() {
        let r = rep("MP1", "Kerry McCarthy", "Bristol East", "Labour", &["BS5"]);
        assert_eq!(score("", &r), 0);
    }

    #[test]
    fn missing_fields_score_zero_without_panicking() {
        let sparse = Representative {
            id: "MP9".to_string(),
            name: String::new(),
            display_name: String::new(),
            constituency: String::new(),
            party: String::new(),
            postcodes: Vec::new(),
            email: None,
            phone: None,
            website: None,
        };
        assert_eq!(score("bristol", &sparse), 0);
    }

    #[test]
    fn search_excludes_zero_scores() {
        let ds = dataset(vec![
            rep("MP1", "Kerry McCarthy", "Bristol East", "Labour", &["BS5"]),
            rep("MP2", "Jacob Rees-Mogg", "North East Somerset", "Conservative", &["BA3"]),
        ]);
        let results = search(&ds, "labour", 20);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].representative.id, "MP1");
    }

    #[test]
    fn search_orders_by_descending_score() {
        let ds = dataset(vec![
            // Party hit only: 10.
            rep("MP1", "A", "Northfield", "Bristolian Party", &[]),
            // Exact constituency + field hit: 210.
            rep("MP2", "B", "Bristol East", "Labour", &[]),
            // Constituency substring hit only: 10.
            rep("MP3", "C", "Bristol South", "Labour", &[]),
            // Postcode prefix + constituency substring: 160.
            rep("MP4", "D", "Bristol West", "Green", &["BRISTOL1"]),
        ]);
        let results = search(&ds, "Bristol East", 20);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].representative.id, "MP2");

        let results = search(&ds, "bristol", 20);
        let ids: Vec<&str> = results.iter().map(|m| m.representative.id.as_str()).collect();
        assert_eq!(ids, vec!["MP4", "MP1", "MP2", "MP3"]);
        for pair in results.windows(2) {
            let (a, b) = (&pair[0].source, &pair[1].source);
            match (a, b) {
                (MatchSource::Search { score: sa }, MatchSource::Search { score: sb }) => {
                    assert!(sa >= sb, "ordering violated: {sa} < {sb}");
                }
                other => panic!("unexpected sources: {other:?}"),
            }
        }
    }

    #[test]
    fn ties_keep_dataset_order() {
        let ds = dataset(vec![
            rep("MP1", "A", "Seat One", "Labour", &[]),
            rep("MP2", "B", "Seat Two", "Labour", &[]),
            rep("MP3", "C", "Seat Three", "Labour", &[]),
        ]);
        let ids: Vec<String> =
            search(&ds, "Labour", 20).into_iter().map(|m| m.representative.id).collect();
        assert_eq!(ids, vec!["MP1", "MP2", "MP3"]);
    }

    #[test]
    fn search_caps_results_at_limit() {
        let reps: Vec<Representative> =
            (0..30).map(|i| rep(&format!("MP{i}"), "A", &format!("Seat {i}"), "Labour", &[])).collect();
        let results = search(&dataset(reps), "labour", 20);
        assert_eq!(results.len(), 20);
    }

    #[test]
    fn search_trims_and_lowercases_the_query() {
        let ds = dataset(vec![rep("MP1", "Kerry McCarthy", "Bristol East", "Labour", &["BS5"])]);
        assert_eq!(search(&ds, "  BRISTOL EAST  ", 20).len(), 1);
        assert!(search(&ds, "   ", 20).is_empty());
        assert!(search(&ds, "", 20).is_empty());
    }
}
