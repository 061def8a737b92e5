//! SQLite DSN helpers.

mod dsn;
mod path;

pub use dsn::{absolutize_dsn, is_memory_dsn};
pub(crate) use path::prepare_sqlite_path;
