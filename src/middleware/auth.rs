//! Middleware de autenticación
//!
//! Extrae el Bearer token del header Authorization, lo valida y deja
//! el `UserInfo` en las extensiones del request. Los handlers reciben
//! el usuario como contexto explícito, nunca como estado global.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Se espera un Bearer token".to_string()))?;

    let user_info = state.jwt.get_user_info(token)?;

    request.extensions_mut().insert(user_info);
    Ok(next.run(request).await)
}
