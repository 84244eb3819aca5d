//! DTOs del registro de vehículos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para registrar un vehículo nuevo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    // El formato de la placa se valida aparte, tras normalizarla
    #[validate(length(min = 5, max = 10))]
    pub plate: String,

    #[validate(length(min = 2, max = 50))]
    pub make: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(range(min = 1950, max = 2030))]
    pub year: i32,

    #[validate(range(min = 1))]
    pub review_interval_km: i64,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 5, max = 10))]
    pub plate: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2030))]
    pub year: Option<i32>,

    #[validate(range(min = 1))]
    pub review_interval_km: Option<i64>,
}

/// Request para asignar un motorista a un vehículo
#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    pub driver_id: Uuid,
}

/// Response completa - solo para Administrador
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub current_mileage: i64,
    pub review_interval_km: i64,
    pub mileage_at_last_review: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Response reducida para Mecánico/Motorista (sin campos de edición)
#[derive(Debug, Serialize)]
pub struct VehicleSummaryResponse {
    pub id: Uuid,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub current_mileage: i64,
    pub active: bool,
}

/// Vista de vehículo según el rol del solicitante
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VehicleView {
    Full(VehicleResponse),
    Summary(VehicleSummaryResponse),
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            current_mileage: vehicle.current_mileage,
            review_interval_km: vehicle.review_interval_km,
            mileage_at_last_review: vehicle.mileage_at_last_review,
            active: vehicle.active,
            created_at: vehicle.created_at,
        }
    }
}

impl From<Vehicle> for VehicleSummaryResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            current_mileage: vehicle.current_mileage,
            active: vehicle.active,
        }
    }
}
