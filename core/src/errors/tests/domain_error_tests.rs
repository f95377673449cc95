use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_validation_displays_bare_message() {
    let error = DomainError::validation("The name field is required.");
    assert_eq!(error.to_string(), "The name field is required.");
}

#[test]
fn test_not_found_names_resource() {
    let error = DomainError::not_found("Book");
    assert_eq!(error.to_string(), "Book not found");
    assert!(error.is_not_found());
}

#[test]
fn test_auth_errors_are_transparent() {
    let error: DomainError = AuthError::UserNotFound.into();
    assert_eq!(error.to_string(), "User does not exists");

    let error: DomainError = AuthError::PasswordMismatch.into();
    assert_eq!(error.to_string(), "Password mismatch");
}

#[test]
fn test_token_error_conversion() {
    let error: DomainError = TokenError::TokenRevoked.into();
    assert_eq!(error, DomainError::Token(TokenError::TokenRevoked));
    assert!(!error.is_not_found());
}
