// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity attached to every request.
//!
//! Authentication happens upstream. By the time a request reaches a handler
//! the caller's login name has been placed in a request header; this module
//! only checks that the value is usable and carries it for logging.

use thiserror::Error;

/// Maximum accepted length of a caller identity.
pub const MAX_IDENTITY_LENGTH: usize = 128;

/// Reasons a supplied identity is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// No identity was supplied.
    #[error("request carries no authenticated user")]
    Missing,
    /// The identity is longer than `MAX_IDENTITY_LENGTH`.
    #[error("authenticated user name exceeds {MAX_IDENTITY_LENGTH} characters")]
    TooLong,
    /// The identity contains control characters.
    #[error("authenticated user name contains control characters")]
    InvalidCharacters,
}

/// The pre-authenticated caller of an API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestActor {
    /// The caller's login name.
    pub login_name: String,
}

impl RequestActor {
    /// Builds an actor from an upstream-supplied identity.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is empty, too long, or contains
    /// control characters.
    pub fn from_identity(identity: &str) -> Result<Self, IdentityError> {
        let trimmed: &str = identity.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Missing);
        }
        if trimmed.chars().count() > MAX_IDENTITY_LENGTH {
            return Err(IdentityError::TooLong);
        }
        if trimmed.chars().any(char::is_control) {
            return Err(IdentityError::InvalidCharacters);
        }
        Ok(Self {
            login_name: trimmed.to_string(),
        })
    }
}
