use axum::{
    extract::{Extension, State},
    routing::post,
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};
use crate::dto::common::ApiResponse;
use crate::models::auth::UserInfo;
use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas (sin middleware de autenticación)
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Rutas protegidas de gestión de usuarios
pub fn create_user_router() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}

fn controller(state: &AppState) -> AuthController<UserRepository> {
    AuthController::new(UserRepository::new(state.pool.clone()), state.jwt.clone())
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = controller(&state).login(request).await?;
    Ok(Json(response))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let response = controller(&state).create_user(&user, request).await?;
    Ok(Json(response))
}
