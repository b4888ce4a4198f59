//! Database initialization and credential queries

pub mod init;
pub mod users;

pub use init::*;
pub use users::*;
