// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity extraction for the server.
//!
//! Authentication is performed by the proxy in front of this server, which
//! forwards the caller's login name in `X-Authenticated-User`. Write
//! endpoints take the `Actor` extractor so every mutation is attributed.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use crew_schedule_api::{IdentityError, RequestActor};
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// Header carrying the upstream-authenticated login name.
pub const IDENTITY_HEADER: &str = "X-Authenticated-User";

/// Extractor for the pre-authenticated caller.
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if:
/// - The identity header is missing
/// - The header value is not visible ASCII
/// - The identity is blank, too long, or contains control characters
pub struct Actor(pub RequestActor);

impl FromRequestParts<AppState> for Actor {
    type Rejection = IdentityRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw: &str = parts
            .headers
            .get(IDENTITY_HEADER)
            .ok_or_else(|| {
                debug!("Missing identity header");
                IdentityRejection::Invalid(IdentityError::Missing)
            })?
            .to_str()
            .map_err(|_| {
                warn!("Identity header is not valid text");
                IdentityRejection::Unreadable
            })?;

        let actor: RequestActor = RequestActor::from_identity(raw).map_err(|e| {
            warn!(error = %e, "Identity rejected");
            IdentityRejection::Invalid(e)
        })?;

        Ok(Self(actor))
    }
}

/// Identity extraction errors, rendered as 401 responses.
#[derive(Debug)]
pub enum IdentityRejection {
    /// The header value could not be read as text.
    Unreadable,
    /// The identity failed validation.
    Invalid(IdentityError),
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::Unreadable => format!("{IDENTITY_HEADER} header is not valid text"),
            Self::Invalid(err) => format!("Authentication failed: {err}"),
        };
        let body: axum::Json<ErrorResponse> = axum::Json(ErrorResponse {
            error: true,
            message,
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
