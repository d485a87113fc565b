use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, PublicUser, SignInRequest, SignUpRequest},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::AppError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/SignUp", post(sign_up))
        .route("/SignIn", post(sign_in))
}

#[instrument(skip(state, payload))]
async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::DuplicateEmail);
    }

    let hash = hash_password(&payload.pass)?;
    let user = User::create(&state.db, &payload, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

#[instrument(skip(state, payload))]
async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "sign-in unknown email");
            AppError::UserNotFound
        })?;

    if !verify_password(&payload.pass, &user.password_hash)? {
        warn!(user_id = %user.id, "sign-in invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user)?;

    info!(user_id = %user.id, email = %user.email, "user signed in");
    Ok(Json(AuthResponse {
        token,
        user: PublicUser::from(user),
    }))
}
