// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity tests.

use crate::{ApiError, IdentityError, MAX_IDENTITY_LENGTH, RequestActor};

#[test]
fn test_identity_is_trimmed() {
    let actor: RequestActor = RequestActor::from_identity("  dispatcher \t").unwrap();
    assert_eq!(actor.login_name, "dispatcher");
}

#[test]
fn test_blank_identity_is_missing() {
    assert_eq!(
        RequestActor::from_identity("   ").unwrap_err(),
        IdentityError::Missing
    );
}

#[test]
fn test_identity_length_limit() {
    let at_limit: String = "a".repeat(MAX_IDENTITY_LENGTH);
    let over_limit: String = "a".repeat(MAX_IDENTITY_LENGTH + 1);

    assert!(RequestActor::from_identity(&at_limit).is_ok());
    assert_eq!(
        RequestActor::from_identity(&over_limit).unwrap_err(),
        IdentityError::TooLong
    );
}

#[test]
fn test_identity_rejects_control_characters() {
    assert_eq!(
        RequestActor::from_identity("dis\u{7}patcher").unwrap_err(),
        IdentityError::InvalidCharacters
    );
}

#[test]
fn test_identity_error_is_authentication_failure() {
    let api_err: ApiError = ApiError::from(IdentityError::Missing);
    assert!(matches!(api_err, ApiError::AuthenticationFailed { .. }));
}
