use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::user::{
        AuthResponse, CreateUserRequest, LoginRequest, UpdateUserPasswordRequest,
        UpdateUserPasswordRequestWithUserId, UserResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    req.validate()?;

    let user = registry.user_repository().create(req.into()).await?;
    let access_token = registry.auth_repository().create_token(user.user_id).await?;
    tracing::info!(user_id = %user.user_id, role = user.role.as_ref(), "registered user");

    Ok((StatusCode::CREATED, Json(AuthResponse::new(user, access_token))))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    req.validate()?;

    let user_id = registry
        .auth_repository()
        .verify_user(&req.email.trim().to_lowercase(), &req.password)
        .await?;
    let user = registry
        .user_repository()
        .find_current_user(user_id)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    let access_token = registry.auth_repository().create_token(user_id).await?;

    Ok(Json(AuthResponse::new(user, access_token)))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.user))
}

pub async fn change_password(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateUserPasswordRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .user_repository()
        .update_password(UpdateUserPasswordRequestWithUserId::new(user.id(), req).into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
