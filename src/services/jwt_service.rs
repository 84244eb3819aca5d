//! Servicio JWT
//!
//! Emisión y validación de tokens de acceso firmados con HS256.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::env;
use uuid::Uuid;

use crate::models::auth::{JwtClaims, UserInfo, UserRole};
use crate::utils::errors::AppError;

/// Configuración JWT
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl JwtConfig {
    pub fn new() -> Self {
        let secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "fleet-dev-secret-change-in-production".to_string());
        let hours = env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Self {
            secret,
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(hours),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        let config = JwtConfig::new();
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Genera un token de acceso para un usuario autenticado
    pub fn generate_access_token(
        &self,
        user_info: &UserInfo,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + self.config.access_token_duration;

        let claims = JwtClaims {
            sub: user_info.id.to_string(),
            username: user_info.username.clone(),
            role: user_info.role.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Error generando token: {}", e)))?;

        Ok((token, exp))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Token inválido: {}", e)))
    }

    /// Obtiene información completa del usuario desde el token
    pub fn get_user_info(&self, token: &str) -> Result<UserInfo, AppError> {
        let claims = self.validate_token(token)?;

        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Token inválido: sub malformado".to_string()))?;
        let role = UserRole::from_str(&claims.role)
            .ok_or_else(|| AppError::Unauthorized("Token inválido: rol desconocido".to_string()))?;

        Ok(UserInfo {
            id,
            username: claims.username,
            role,
        })
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_info(role: UserRole) -> UserInfo {
        UserInfo {
            id: Uuid::new_v4(),
            username: "test_user".to_string(),
            role,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new();
        let user = user_info(UserRole::Mechanic);

        let (token, expires_at) = jwt_service.generate_access_token(&user).unwrap();
        assert!(!token.is_empty());
        assert!(expires_at > Utc::now());

        let decoded = jwt_service.get_user_info(&token).unwrap();
        assert_eq!(decoded.id, user.id);
        assert_eq!(decoded.username, "test_user");
        assert_eq!(decoded.role, UserRole::Mechanic);
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let jwt_service = JwtService::new();
        let result = jwt_service.validate_token("not-a-token");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
