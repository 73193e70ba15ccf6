/// Returned by `format_value` when its input is empty.
pub const EMPTY_PLACEHOLDER: &str = "empty";

/// Prepended to non-empty input by `format_value`.
pub const VALUE_PREFIX: &str = "value: ";

/// Sits between a record's name and its value.
pub const FIELD_SEPARATOR: &str = ": ";
