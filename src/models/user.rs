//! Modelo de User
//!
//! Usuarios del sistema con uno de los tres perfiles:
//! Administrador, Mecánico o Motorista.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Usuario - mapea a la tabla `users`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Perfil almacenado como texto: administrator | mechanic | driver
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Datos para crear un usuario nuevo (solo Administrador)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
}
