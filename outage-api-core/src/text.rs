//! Text-field mapping rules for nullable and multi-value columns.
//!
//! Upstream extraction writes empty strings where nothing was extracted, so
//! blank normalization runs once, here, at the mapping boundary. The split
//! rules intentionally preserve the upstream encoding quirks: house numbers
//! are a plain comma split with no trimming, and house ranges drop a single
//! trailing `-` per entry.

/// Normalize a nullable text column: an empty string means "not extracted"
/// and becomes `None`, indistinguishable from SQL NULL.
pub fn normalize_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Split a house-numbers column on `,`. No trimming: whitespace around
/// entries is preserved exactly as stored.
pub fn split_house_numbers(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_owned).collect()
}

/// Split a house-ranges column on `;`, stripping one trailing `-` from each
/// entry (open-ended ranges are stored as `12-`).
pub fn split_house_ranges(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|entry| entry.strip_suffix('-').unwrap_or(entry).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_becomes_absent() {
        assert_eq!(normalize_blank(Some(String::new())), None);
        assert_eq!(normalize_blank(None), None);
        assert_eq!(
            normalize_blank(Some("Lenina".to_owned())),
            Some("Lenina".to_owned())
        );
    }

    #[test]
    fn whitespace_is_not_blank() {
        // Only the exact empty string is normalized, matching NULLIF(x, '').
        assert_eq!(normalize_blank(Some(" ".to_owned())), Some(" ".to_owned()));
    }

    #[test]
    fn house_numbers_split_preserves_whitespace() {
        assert_eq!(split_house_numbers("1, 2,3"), vec!["1", " 2", "3"]);
    }

    #[test]
    fn house_numbers_single_value() {
        assert_eq!(split_house_numbers("17"), vec!["17"]);
    }

    #[test]
    fn house_ranges_strip_trailing_dash() {
        assert_eq!(split_house_ranges("12-;34-56"), vec!["12", "34-56"]);
    }

    #[test]
    fn house_ranges_strip_only_one_dash() {
        assert_eq!(split_house_ranges("12--"), vec!["12-"]);
    }
}
