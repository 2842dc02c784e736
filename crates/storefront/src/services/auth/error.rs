//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// Sign-in is currently mocked and always succeeds; these variants describe
/// what a real credential check would report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong password or unknown email.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Signup with an email that is already registered.
    #[error("user already exists")]
    UserAlreadyExists,
}
