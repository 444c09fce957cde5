use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::posts::{Post, PostInput};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/posts", tag = "posts",
    responses(
        (status = 200, description = "Posts retrieved successfully.", body = [crate::openapi::PostDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Post>> {
    let store = state.posts.read().await;
    Json(store.find_all().to_vec())
}

#[utoipa::path(
    get, path = "/posts/{id}", tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post retrieved successfully.", body = crate::openapi::PostDoc),
        (status = 404, description = "Post not found.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<u64>) -> Result<Json<Post>, JsonApiError> {
    let store = state.posts.read().await;
    let post = store.find_one(id)?;
    Ok(Json(post.clone()))
}

#[utoipa::path(
    post, path = "/posts", tag = "posts",
    request_body = crate::openapi::PostInputDoc,
    responses(
        (status = 201, description = "Post created successfully.", body = crate::openapi::PostDoc),
        (status = 422, description = "Post title already exists.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<PostInput>,
) -> Result<(StatusCode, Json<Post>), JsonApiError> {
    let post = state.posts.write().await.create(input)?;
    info!(id = post.id, title = %post.title, "created post");
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put, path = "/posts/{id}", tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    request_body = crate::openapi::PostInputDoc,
    responses(
        (status = 200, description = "Post updated successfully.", body = crate::openapi::PostDoc),
        (status = 404, description = "Post not found.", body = crate::openapi::ErrorBodyDoc),
        (status = 422, description = "Post title already exists.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, JsonApiError> {
    let post = state.posts.write().await.update(id, input)?;
    info!(id = post.id, "updated post");
    Ok(Json(post))
}

#[utoipa::path(
    delete, path = "/posts/{id}", tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted successfully."),
        (status = 404, description = "Post not found.", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<u64>) -> Result<StatusCode, JsonApiError> {
    state.posts.write().await.delete(id)?;
    info!(id, "deleted post");
    Ok(StatusCode::NO_CONTENT)
}
