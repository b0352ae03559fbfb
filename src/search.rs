//! Free-text search over the catalog.
//!
//! Turns the raw `?q=` value into a filter the catalog store applies to
//! product and category names. Matching is plain inclusion on Unicode
//! lowercase, so "ELECTRÓNICA" finds "Electrónica"; result order is whatever
//! the store's default ordering is.

/// Substring filter built from a user-supplied term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    /// Trimmed term as typed
    pub term: String,
    /// Lowercased term used for matching
    needle: String,
}

impl SearchFilter {
    /// Whether `text` contains the term, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    /// Whether any of the given names contains the term
    pub fn matches_any<'a>(&self, texts: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        texts.into_iter().flatten().any(|text| self.matches(text))
    }
}

/// Build a filter from a raw query string
///
/// Blank or missing input means "no filter".
pub fn build_filter(raw: Option<&str>) -> Option<SearchFilter> {
    let term = raw.map(str::trim).filter(|t| !t.is_empty())?;

    Some(SearchFilter {
        term: term.to_string(),
        needle: term.to_lowercase(),
    })
}

/// The term to echo back to a listing page
pub fn echoed_term(filter: Option<&SearchFilter>) -> &str {
    filter.map_or("", |f| f.term.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_no_filter() {
        assert_eq!(build_filter(None), None);
        assert_eq!(build_filter(Some("")), None);
        assert_eq!(build_filter(Some("   \t")), None);
        assert_eq!(echoed_term(None), "");
    }

    #[test]
    fn test_term_is_trimmed() {
        let filter = build_filter(Some("  mouse ")).unwrap();
        assert_eq!(filter.term, "mouse");
        assert_eq!(echoed_term(Some(&filter)), "mouse");
        assert!(filter.matches("Mouse Gamer"));
        assert!(!filter.matches("Teclado"));
    }

    #[test]
    fn test_case_folding_covers_accents() {
        let filter = build_filter(Some("ELECTRÓNICA")).unwrap();
        assert!(filter.matches("Electrónica"));

        let filter = build_filter(Some("ñandú")).unwrap();
        assert!(filter.matches("Peluche Ñandú"));
        assert!(!filter.matches("Nandu"));
    }

    #[test]
    fn test_wildcards_are_literal() {
        let filter = build_filter(Some("50%_off")).unwrap();
        assert!(filter.matches("Cupón 50%_OFF"));
        assert!(!filter.matches("Cupón 50 off"));
        assert!(!build_filter(Some("%")).unwrap().matches("Cable USB"));
    }

    #[test]
    fn test_matches_any_skips_missing_names() {
        let filter = build_filter(Some("audio")).unwrap();
        assert!(filter.matches_any([Some("Parlante"), Some("Audio")]));
        assert!(!filter.matches_any([Some("Parlante"), None]));
    }
}
