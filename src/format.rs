use log::trace;

use crate::config::{EMPTY_PLACEHOLDER, VALUE_PREFIX};

/// Formats a single string value.
///
/// Empty input yields `"empty"`; anything else is returned behind the
/// `"value: "` prefix, unmodified.
pub fn format_value(input: &str) -> String {
    trace!("Formatting value of {} bytes", input.len());

    if input.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    format!("{VALUE_PREFIX}{input}")
}
