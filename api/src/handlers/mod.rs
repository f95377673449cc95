pub mod error;

pub use error::{auth_error_response, book_error_response};
