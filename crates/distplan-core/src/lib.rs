pub mod config;
pub mod record;
pub mod types;

pub use config::DistplanConfig;
pub use record::{RecordError, parse_records, read_records};
pub use types::*;
