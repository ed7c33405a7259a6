//! Postcode normalization and area extraction.
//!
//! UK postcodes split into an *outward* code (the area/district, e.g. `BS5`
//! or `SW1A`) and an *inward* code (`1AA`). The resolution engine only ever
//! keys on the outward portion, so this module reduces arbitrary user input
//! to that form:
//!
//! ```text
//! "bs5 1aa"  ── normalize ──▶ "BS51AA" ── extract_area ──▶ Some("BS5")
//! "BS5"      ── normalize ──▶ "BS5"    ── extract_area ──▶ Some("BS5")
//! "Labour"   ── normalize ──▶ "LABOUR" ── extract_area ──▶ None
//! ```
//!
//! Both functions are pure and total: nothing here returns an error or
//! panics. Input that is not postcode-shaped yields `None`, which the caller
//! treats as "route to fallback search", not as a failure.

/// Canonicalize raw user input for postcode matching: strip all whitespace
/// and upper-case what remains.
///
/// Empty and whitespace-only input normalizes to the empty string, which
/// then fails [`extract_area`] cleanly.
///
/// # Example
/// ```
/// use mplocate::postcode::normalize;
///
/// assert_eq!(normalize(" bs5 1aa "), "BS51AA");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_ascii_uppercase()).collect()
}

/// Extract the outward area code from a normalized postcode string.
///
/// Two patterns are tried in order, so a user can type either a full
/// postcode (`BS51AA`) or a bare area code (`BS5`) and get the same area:
///
/// 1. full outward+inward form — the outward capture is returned;
/// 2. outward form alone — returned as-is.
///
/// Anything else yields `None`. The outward form is 1–2 letters, 1–2
/// digits, and an optional trailing letter (`SW1A`).
pub fn extract_area(postcode: &str) -> Option<&str> {
    let full = regex!(r"^([A-Z]{1,2}[0-9]{1,2}[A-Z]?)[0-9][A-Z]{2}$");
    if let Some(caps) = full.captures(postcode) {
        return caps.get(1).map(|m| m.as_str());
    }

    let area_only = regex!(r"^[A-Z]{1,2}[0-9]{1,2}[A-Z]?$");
    area_only.is_match(postcode).then_some(postcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_whitespace_and_uppercases() {
        let cases: Vec<(&str, &str)> = vec![
            ("BS51AA", "bs5 1aa"),
            ("BS51AA", " BS5  1AA "),
            ("BS51AA", "bs5\t1aa"),
            ("SW1A0AA", "sw1a 0aa"),
            ("BS5", "bs5"),
            ("", ""),
            ("", "   "),
            ("!!!", "!!!"),
        ];
        for (expected, input) in cases {
            assert_eq!(normalize(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["bs5 1aa", "  SW1A 0AA", "", "   ", "Bristol East", "!!!", "zz99"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn extract_area_accepts_full_postcodes_and_bare_areas() {
        // Array of (expected_area, normalized_input)
        let cases: Vec<(Option<&str>, &str)> = vec![
            (Some("BS5"), "BS51AA"),
            (Some("BS5"), "BS5"),
            (Some("M1"), "M11AA"),
            (Some("M1"), "M1"),
            (Some("SW1A"), "SW1A0AA"),
            (Some("SW1A"), "SW1A"),
            (Some("EC1A"), "EC1A1BB"),
            (Some("W1A"), "W1A0AX"),
            (Some("CR2"), "CR26XH"),
            (Some("DN55"), "DN551PT"),
            (Some("DN55"), "DN55"),
            // Unmapped but syntactically valid areas still extract.
            (Some("ZZ99"), "ZZ99"),
            (None, ""),
            (None, "LABOUR"),
            (None, "BRISTOLEAST"),
            (None, "!!!"),
            (None, "123"),
            // Inward code alone is not an area.
            (None, "1AA"),
            // Trailing garbage after a full postcode.
            (None, "BS51AAX"),
        ];
        for (expected, input) in cases {
            assert_eq!(extract_area(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn extract_area_is_deterministic() {
        for input in ["BS51AA", "SW1A0AA", "ZZ99", "LABOUR", ""] {
            assert_eq!(extract_area(input), extract_area(input), "input {input:?}");
        }
    }

    #[test]
    fn full_and_area_queries_agree() {
        let pairs = [("BS51AA", "BS5"), ("SW1A0AA", "SW1A"), ("M11AA", "M1")];
        for (full, area) in pairs {
            assert_eq!(extract_area(full), extract_area(area), "pair {full:?}/{area:?}");
        }
    }
}
