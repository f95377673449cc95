//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - Repository implementations

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::DatabasePool;
pub use mysql::{MySqlBookRepository, MySqlTokenRepository, MySqlUserRepository};
