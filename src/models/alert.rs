//! Estado de alerta de revisión
//!
//! El estado nunca se almacena: siempre se deriva del kilometraje
//! vigente y de la última revisión preventiva.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado derivado de un vehículo respecto a su próxima revisión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Lejos de la próxima revisión
    Ok,
    /// Dentro del umbral configurado de distancia restante
    DueSoon,
    /// La revisión ya se pasó
    Overdue,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Ok => "ok",
            AlertStatus::DueSoon => "due_soon",
            AlertStatus::Overdue => "overdue",
        }
    }
}

/// Entrada del dashboard: un vehículo con estado no-OK
#[derive(Debug, Clone, Serialize)]
pub struct VehicleAlert {
    pub vehicle_id: Uuid,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub current_mileage: i64,
    /// Distancia restante hasta la revisión; negativa si ya venció
    pub remaining_km: i64,
    pub status: AlertStatus,
}
