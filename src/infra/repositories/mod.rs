pub mod snapshot;
pub mod memory_record_store;
pub mod sqlite_record_store;
