use axum::{extract::rejection::JsonRejection, extract::State, Json};

use common::types::Msg;
use models::{NewUser, User};

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<Msg>, ApiError> {
    let Json(input) = payload?;
    state.users.register(input).await?;
    Ok(Json(Msg::new("registration successful")))
}

// Not tied to the caller: returns the first registered user until sessions exist.
pub async fn me(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    let user = state.users.current_user().await?;
    Ok(Json(user))
}
