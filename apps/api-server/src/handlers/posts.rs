//! Post handlers - thin adapters over `PostService`.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use agora_core::domain::PostInput;
use agora_shared::dto::{DeleteResponse, MessageResponse, PostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_input(req: PostRequest) -> PostInput {
    PostInput {
        text: req.text,
        name: req.name,
        avatar: req.avatar,
    }
}

/// GET /api/posts/test
pub async fn test() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        msg: "posts res.json".to_string(),
    })
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create(&identity.principal(), to_input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete(&identity.principal(), path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}

/// POST /api/posts/like/{id}
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .like(&identity.principal(), path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/unlike/{id}
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .unlike(&identity.principal(), path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .add_comment(
            &identity.principal(),
            path.into_inner(),
            to_input(body.into_inner()),
        )
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn remove_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let post = state
        .posts
        .remove_comment(&identity.principal(), post_id, comment_id)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}
