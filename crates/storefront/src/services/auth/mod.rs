//! Authentication state (mocked).
//!
//! Login and signup simulate a remote call: they wait for a fixed delay and
//! then sign the shopper in with a freshly generated user ID. Credentials are
//! never checked and duplicate emails are accepted. The signed-in user is
//! persisted under [`keys::USER`] and restored on startup.

mod error;

pub use error::AuthError;

use std::time::Duration;

use secrecy::SecretString;
use tracing::{debug, info, instrument};

use atelier_core::UserId;

use crate::deferred::Deferred;
use crate::models::User;
use crate::storage::{Storage, keys};

/// Simulated round-trip time for login and signup.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// The shopper's sign-in state.
#[derive(Debug)]
pub struct Auth {
    user: Option<User>,
    storage: Storage,
    delay: Duration,
}

impl Auth {
    /// Restore the signed-in user from storage, if any.
    #[must_use]
    pub fn load(storage: Storage, delay: Duration) -> Self {
        let user: Option<User> = storage.load(keys::USER);
        debug!(signed_in = user.is_some(), "auth state loaded");

        Self {
            user,
            storage,
            delay,
        }
    }

    /// The signed-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether someone is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    // =========================================================================
    // Password Authentication
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Never fails; the result type leaves room for a real credential check.
    #[instrument(skip(self, _password))]
    pub async fn login(&mut self, email: &str, _password: &SecretString) -> Result<User, AuthError> {
        let user = self.issue(email, None).await;
        info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Never fails; the result type leaves room for a real account service.
    #[instrument(skip(self, _password))]
    pub async fn signup(
        &mut self,
        email: &str,
        _password: &SecretString,
        name: Option<&str>,
    ) -> Result<User, AuthError> {
        let user = self.issue(email, name).await;
        info!(user_id = %user.id, "signed up");
        Ok(user)
    }

    /// Sign out and forget the persisted user.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "signed out");
        }
        self.storage.remove(keys::USER);
    }

    /// Wait out the simulated round trip, then store a new user record.
    async fn issue(&mut self, email: &str, name: Option<&str>) -> User {
        let email = email.to_owned();
        let name = name.map(str::to_owned);

        let user = Deferred::after(self.delay, move || User {
            id: UserId::generate(),
            email,
            name,
        })
        .await;

        self.storage.save(keys::USER, &user);
        self.user = Some(user.clone());
        user
    }
}
