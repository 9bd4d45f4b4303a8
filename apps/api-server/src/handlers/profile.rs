//! Profile handlers. A profile is the precondition for deleting posts.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use agora_core::domain::Profile;
use agora_core::error::DomainError;
use agora_shared::dto::ProfileRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/profile
pub async fn current(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user_id = identity.principal().id;
    let profile = state
        .profiles
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| DomainError::profile_not_found(user_id))?;

    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/profile
///
/// Creates the caller's profile, or updates the handle of the existing one.
pub async fn upsert(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ProfileRequest>,
) -> AppResult<HttpResponse> {
    let handle = body.into_inner().handle.trim().to_string();
    if handle.is_empty() {
        return Err(AppError::Validation(
            [("handle".to_string(), "Profile handle is required".to_string())].into(),
        ));
    }

    let user_id = identity.principal().id;
    let profile = match state.profiles.find_by_user_id(user_id).await? {
        Some(existing) => Profile { handle, ..existing },
        None => Profile::new(user_id, handle, Utc::now()),
    };

    let saved = state.profiles.save(profile).await?;
    tracing::info!(user_id = %saved.user_id, handle = %saved.handle, "Profile saved");

    Ok(HttpResponse::Ok().json(saved))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use agora_core::domain::PostPolicy;
    use agora_core::ports::TokenService;
    use agora_infra::{JwtConfig, JwtTokenService};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn test_profile_upsert_keeps_identity() {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test".to_string(),
        }));
        let state = AppState::in_memory(PostPolicy::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(tokens.clone()))
                .configure(configure_routes),
        )
        .await;
        let token = tokens
            .generate_token(Uuid::new_v4(), "bob@example.com", vec![])
            .unwrap();
        let auth = (header::AUTHORIZATION, format!("Bearer {token}"));

        let req = test::TestRequest::get()
            .uri("/api/profile")
            .insert_header(auth.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let upsert = |handle: &str| {
            test::TestRequest::post()
                .uri("/api/profile")
                .insert_header(auth.clone())
                .set_json(json!({ "handle": handle }))
                .to_request()
        };
        let first: Value = test::call_and_read_body_json(&app, upsert("bob")).await;
        let second: Value = test::call_and_read_body_json(&app, upsert("bobby")).await;
        assert_eq!(first["id"], second["id"]);
        assert_eq!(second["handle"], "bobby");

        let resp = test::call_service(&app, upsert("   ")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
