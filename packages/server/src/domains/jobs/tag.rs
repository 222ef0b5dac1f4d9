//! Search keyword / tag normalization.

/// Replace every space with a hyphen; nothing else is touched.
///
/// Applied to scrape keywords before they go into the search URL and
/// before they are stored as a listing's tag, and to tag filters on reads.
pub fn normalize_tag(raw: &str) -> String {
    raw.replace(' ', "-")
}
