//! Book catalogue service

mod service;

#[cfg(test)]
mod tests;

pub use service::{BookService, FETCH_FAILED_MESSAGE};
