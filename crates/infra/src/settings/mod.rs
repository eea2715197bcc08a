//! Settings store adapters.
//!
//! The settings store is the only persistence in the system: a flat
//! string-to-string table holding the onboarding flag and the daily like
//! counter. The SQLite adapter is the production backend; the in-memory
//! adapter backs tests and throwaway demo runs.

mod memory;
mod sqlite;

pub use memory::MemorySettingsStore;
pub use sqlite::SqliteSettingsStore;
