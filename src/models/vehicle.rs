//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del registro de flota.
//! Mapea exactamente a la tabla `vehicles` con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - una fila por vehículo físico de la flota
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Kilometraje actual, solo avanza vía lecturas de odómetro aceptadas
    pub current_mileage: i64,
    /// Ciclo de revisión preventiva (ej: cada 10.000 km)
    pub review_interval_km: i64,
    /// Kilometraje en la última revisión preventiva
    pub mileage_at_last_review: i64,
    /// Soft-delete: los vehículos con historial nunca se borran físicamente
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Campos mutables de un vehículo (solo Administrador)
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub plate: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub review_interval_km: Option<i64>,
}

/// Datos para registrar un vehículo nuevo
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub review_interval_km: i64,
}
