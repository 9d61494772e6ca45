use crate::utils::Redact;
use std::fmt::{Debug, Formatter};

/// Credential that holds the Omniture username and shared secret.
#[derive(Default, Clone)]
pub struct Credential {
    /// Omniture API username in `user:Company` form.
    pub username: String,
    /// Shared secret associated with the username.
    pub secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Check if the credential is complete enough to sign a request.
    pub fn is_valid(&self) -> bool {
        !self.username.is_empty() && !self.secret.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &Redact::from(&self.username))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}
