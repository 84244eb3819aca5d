//! DTOs del ledger de manutención

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{MaintenanceKind, MaintenanceRecord};

/// Request para anexar un registro de manutención
#[derive(Debug, Deserialize, Validate)]
pub struct RecordMaintenanceRequest {
    pub vehicle_id: Uuid,

    pub kind: MaintenanceKind,

    #[validate(length(min = 3, max = 2000))]
    pub description: String,

    #[validate(range(min = 0))]
    pub mileage_at_service: i64,

    /// Costo de piezas; default 0
    pub parts_cost: Option<Decimal>,

    /// Costo de mano de obra; default 0
    pub labor_cost: Option<Decimal>,
}

/// Response de un registro del ledger
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub kind: MaintenanceKind,
    pub description: String,
    pub mileage_at_service: i64,
    pub parts_cost: Decimal,
    pub labor_cost: Decimal,
    pub total_cost: Decimal,
    pub performed_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<MaintenanceRecord> for MaintenanceResponse {
    fn from(record: MaintenanceRecord) -> Self {
        let total_cost = record.total_cost();
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            kind: record.kind,
            description: record.description,
            mileage_at_service: record.mileage_at_service,
            parts_cost: record.parts_cost,
            labor_cost: record.labor_cost,
            total_cost,
            performed_by: record.performed_by,
            created_at: record.created_at,
        }
    }
}
