//! Finished-game records and where they go

mod record;
mod sink;

pub use record::HistoryRecord;
pub use sink::{HistoryError, HistorySink, JsonlHistory, MemoryHistory};
