//! DOM queries over fetched HTML.

use scraper::{Html, Selector};
use tracing::warn;

/// Text content of the first node matching `selector`, or `None` when
/// nothing matches.
///
/// The text of every descendant text node is concatenated, so a script
/// element yields its raw source.
pub fn query_text(document: &str, selector: &str) -> Option<String> {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(e) => {
            warn!(selector = %selector, error = %e, "Invalid CSS selector");
            return None;
        }
    };

    let document = Html::parse_document(document);
    document
        .select(&selector)
        .next()
        .map(|node| node.text().collect::<String>())
}
