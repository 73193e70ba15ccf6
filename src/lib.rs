pub mod config;
pub mod format;
pub mod record;

pub use format::format_value;
pub use record::{describe_all, load_records, Record};
