//! Controller de autenticación y gestión de usuarios

use bcrypt::{hash, verify, DEFAULT_COST};
use std::sync::Arc;
use validator::Validate;

use crate::dto::auth_dto::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};
use crate::dto::common::ApiResponse;
use crate::models::auth::{UserInfo, UserRole};
use crate::models::user::NewUser;
use crate::repositories::UserStore;
use crate::services::authorization_service::{self, Capability};
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{AppError, AppResult};

pub struct AuthController<U> {
    users: U,
    jwt: Arc<JwtService>,
}

impl<U: UserStore> AuthController<U> {
    pub fn new(users: U, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        // Mensaje único para usuario inexistente y password incorrecta
        let invalid = || AppError::Unauthorized("Credenciales inválidas".to_string());

        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(invalid)?;

        if !user.active || !verify(&request.password, &user.password_hash)? {
            return Err(invalid());
        }

        let role = UserRole::from_str(&user.role)
            .ok_or_else(|| AppError::Internal(format!("Rol desconocido: '{}'", user.role)))?;

        let user_info = UserInfo {
            id: user.id,
            username: user.username,
            role,
        };

        let (token, expires_at) = self.jwt.generate_access_token(&user_info)?;

        tracing::info!(username = %user_info.username, role = role.as_str(), "Login exitoso");

        Ok(LoginResponse {
            token,
            user: user_info,
            expires_at,
        })
    }

    pub async fn create_user(
        &self,
        user: &UserInfo,
        request: CreateUserRequest,
    ) -> AppResult<ApiResponse<UserResponse>> {
        authorization_service::require(user, Capability::ManageUsers)?;
        request.validate()?;

        let role = UserRole::from_str(&request.role).ok_or_else(|| {
            AppError::Validation(format!(
                "Rol inválido: '{}' (se espera administrator | mechanic | driver)",
                request.role
            ))
        })?;

        let password_hash = hash(&request.password, DEFAULT_COST)?;

        let created = self
            .users
            .create(NewUser {
                username: request.username,
                full_name: request.full_name,
                password_hash,
                role: role.as_str().to_string(),
            })
            .await?;

        tracing::info!(username = %created.username, role = role.as_str(), "Usuario creado");

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Usuario creado exitosamente".to_string(),
        ))
    }
}
