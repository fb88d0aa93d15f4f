pub mod errors;
pub mod format;
pub mod table;

pub use errors::{Result, SparklineError};
pub use format::{format_percent_change, format_price};
pub use table::Table;
