use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use common::types::Msg;
use models::{NewPost, Post};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Serialize, Debug)]
pub struct PostCreated {
    pub message: String,
    pub id: String,
}

pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list().await)
}

pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<Json<PostCreated>, ApiError> {
    let Json(input) = payload?;
    let id = state.posts.create(input).await;
    Ok(Json(PostCreated { message: "post created".into(), id }))
}

/// Same as [`create_post`] but answers with the short `{"msg"}` envelope.
pub async fn publish_post(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<Json<Msg>, ApiError> {
    let Json(input) = payload?;
    state.posts.create(input).await;
    Ok(Json(Msg::new("post published")))
}
