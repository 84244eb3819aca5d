//! Modelo de MaintenanceRecord
//!
//! Registro inmutable de un evento de manutención (preventiva o correctiva)
//! asociado a un vehículo. Mapea a la tabla `maintenance_records`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de manutención - mapea al ENUM maintenance_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "maintenance_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    /// Revisión programada: mueve la línea base de la próxima revisión
    Preventive,
    /// Reparación no programada: no toca la línea base
    Corrective,
}

impl MaintenanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceKind::Preventive => "preventive",
            MaintenanceKind::Corrective => "corrective",
        }
    }
}

/// Registro de manutención - inmutable una vez creado (audit trail)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub kind: MaintenanceKind,
    pub description: String,
    /// Kilometraje del vehículo en el momento del servicio
    pub mileage_at_service: i64,
    pub parts_cost: Decimal,
    pub labor_cost: Decimal,
    /// Mecánico que realizó el servicio (atribución, no propiedad)
    pub performed_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    /// Costo total del servicio (piezas + mano de obra)
    pub fn total_cost(&self) -> Decimal {
        self.parts_cost + self.labor_cost
    }
}

/// Datos para anexar un registro nuevo al ledger
#[derive(Debug, Clone)]
pub struct NewMaintenanceRecord {
    pub vehicle_id: Uuid,
    pub kind: MaintenanceKind,
    pub description: String,
    pub mileage_at_service: i64,
    pub parts_cost: Decimal,
    pub labor_cost: Decimal,
    pub performed_by: Uuid,
}
