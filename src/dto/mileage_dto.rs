//! DTOs del log de odómetro

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::mileage::MileageRecord;

/// Request para enviar una lectura de odómetro
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitReadingRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 0))]
    pub mileage: i64,
}

/// Response de una lectura aceptada
#[derive(Debug, Serialize)]
pub struct MileageResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub mileage: i64,
    pub recorded_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<MileageRecord> for MileageResponse {
    fn from(record: MileageRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            mileage: record.mileage,
            recorded_by: record.recorded_by,
            created_at: record.created_at,
        }
    }
}
