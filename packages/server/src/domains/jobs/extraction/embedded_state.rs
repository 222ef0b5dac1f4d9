//! Recovery of the JSON object embedded in the search page's state script.
//!
//! The script text is a run of JavaScript assignments:
//!
//! ```text
//! window.SEEK_CONFIG = {...};
//! window.SEEK_REDUX_DATA = {...};
//! window.SEEK_APP_CONFIG = {...};
//! ```
//!
//! The listings live in the second assignment. We cut the text on `};`,
//! put the closing brace back, take the second statement and parse whatever
//! follows its ` = `. This depends on the page keeping that statement
//! order and on `};` never appearing inside the first object; a
//! balanced-brace scanner can replace [`recover_state_json`] without
//! touching its callers.

use serde_json::Value;

use super::error::{ExtractionError, Result};

/// Statement terminator the state text is cut on.
const STATEMENT_END: &str = "};";

/// Separator between the assigned name and the object literal.
const ASSIGNMENT: &str = " = ";

/// Index of the statement holding the search results.
const RESULTS_STATEMENT: usize = 1;

/// Pull the search-results JSON object out of raw state script text.
pub fn recover_state_json(raw: &str) -> Result<Value> {
    let statements: Vec<String> = raw
        .split(STATEMENT_END)
        .map(|fragment| format!("{fragment}}}"))
        .collect();

    let statement = statements.get(RESULTS_STATEMENT).ok_or_else(|| {
        ExtractionError::MalformedState(format!(
            "expected at least {} `{}`-separated statements, found {}",
            RESULTS_STATEMENT + 1,
            STATEMENT_END,
            statements.len()
        ))
    })?;

    let pieces: Vec<&str> = statement.split(ASSIGNMENT).collect();
    let literal = pieces.get(1).ok_or_else(|| {
        ExtractionError::MalformedState(format!(
            "statement {RESULTS_STATEMENT} has no `{}` assignment",
            ASSIGNMENT.trim()
        ))
    })?;

    serde_json::from_str(literal).map_err(|e| {
        ExtractionError::MalformedState(format!("object literal is not valid JSON: {e}"))
    })
}
