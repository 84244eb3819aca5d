//! Modelo de MileageRecord
//!
//! Lectura puntual de odómetro enviada por un motorista.
//! Mapea a la tabla append-only `mileage_records`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lectura de odómetro - inmutable una vez aceptada
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MileageRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    /// Valor del odómetro; nunca menor al kilometraje vigente del vehículo
    pub mileage: i64,
    /// Motorista que envió la lectura (atribución para auditoría)
    pub recorded_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Datos para anexar una lectura nueva
#[derive(Debug, Clone)]
pub struct NewMileageRecord {
    pub vehicle_id: Uuid,
    pub mileage: i64,
    pub recorded_by: Uuid,
}
