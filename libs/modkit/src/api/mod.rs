//! REST helpers shared by module handlers.

pub mod pagination;
pub mod problem;
pub mod request_id;
