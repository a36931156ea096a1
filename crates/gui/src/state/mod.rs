pub mod collection;
pub mod messages;

pub use collection::{BenchCollection, DataSource};
pub use messages::{AppMessage, LogEntry, LogLevel};
