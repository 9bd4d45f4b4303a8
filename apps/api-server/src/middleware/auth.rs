//! Authentication middleware and extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};
use std::sync::Arc;

use agora_core::domain::Principal;
use agora_core::ports::{AuthError, TokenClaims, TokenService};

use crate::observability::RequestId;

/// Authenticated user identity extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.principal().id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Identity(Principal);

impl Identity {
    /// The principal passed to the post service.
    pub fn principal(&self) -> Principal {
        self.0
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        tracing::debug!(
            user_id = %claims.user_id,
            email = %claims.email,
            roles = ?claims.roles,
            "Request authenticated"
        );
        Self(claims.principal())
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError {
    pub cause: AuthError,
    pub request_id: Option<String>,
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use agora_shared::ErrorResponse;

        let error = match &self.cause {
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                .with_detail("Your authentication token has expired. Please login again."),
            AuthError::InvalidToken(msg) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
            }
            AuthError::MissingAuth => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Please provide a valid Bearer token in the Authorization header."),
        };
        let error = match &self.request_id {
            Some(id) => error.with_request_id(id.clone()),
            None => error,
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AuthenticationError> {
    let reject = |cause: AuthError| AuthenticationError {
        cause,
        request_id: RequestId::of(req),
    };

    // Get token service from app data
    let token_service = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| {
            tracing::error!("TokenService not found in app data");
            reject(AuthError::InvalidToken(
                "Server configuration error".to_string(),
            ))
        })?;

    // Extract Bearer token from Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| reject(AuthError::MissingAuth))?;

    let auth_str = auth_header.to_str().map_err(|_| {
        reject(AuthError::InvalidToken(
            "Invalid authorization header".to_string(),
        ))
    })?;

    // Parse "Bearer <token>"
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| reject(AuthError::InvalidToken("Expected Bearer token".to_string())))?;

    let claims = token_service.validate_token(token).map_err(|e| {
        tracing::debug!(error = %e, "Bearer token rejected");
        reject(e)
    })?;

    Ok(Identity::from(claims))
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
