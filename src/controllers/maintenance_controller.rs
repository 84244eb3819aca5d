//! Controller del ledger de manutención

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::maintenance_dto::{MaintenanceResponse, RecordMaintenanceRequest};
use crate::models::auth::{UserInfo, UserRole};
use crate::models::maintenance::NewMaintenanceRecord;
use crate::repositories::{MaintenanceStore, VehicleStore};
use crate::services::authorization_service::{self, Capability};
use crate::utils::errors::{AppError, AppResult};

pub struct MaintenanceController<V, M> {
    vehicles: V,
    store: M,
}

impl<V: VehicleStore, M: MaintenanceStore> MaintenanceController<V, M> {
    pub fn new(vehicles: V, store: M) -> Self {
        Self { vehicles, store }
    }

    /// Anexar un registro de manutención. El repositorio valida la
    /// monotonicidad y mueve la línea base en una sola transacción.
    pub async fn record(
        &self,
        user: &UserInfo,
        request: RecordMaintenanceRequest,
    ) -> AppResult<ApiResponse<MaintenanceResponse>> {
        authorization_service::require(user, Capability::RecordMaintenance)?;
        request.validate()?;

        if let Some(cost) = request.parts_cost {
            if cost < Decimal::ZERO {
                return Err(AppError::Validation(
                    "El costo de piezas no puede ser negativo".to_string(),
                ));
            }
        }
        if let Some(cost) = request.labor_cost {
            if cost < Decimal::ZERO {
                return Err(AppError::Validation(
                    "El costo de mano de obra no puede ser negativo".to_string(),
                ));
            }
        }

        let record = self
            .store
            .append(NewMaintenanceRecord {
                vehicle_id: request.vehicle_id,
                kind: request.kind,
                description: request.description,
                mileage_at_service: request.mileage_at_service,
                parts_cost: request.parts_cost.unwrap_or(Decimal::ZERO),
                labor_cost: request.labor_cost.unwrap_or(Decimal::ZERO),
                performed_by: user.id,
            })
            .await?;

        tracing::info!(
            vehicle_id = %record.vehicle_id,
            kind = record.kind.as_str(),
            mileage = record.mileage_at_service,
            "Manutención registrada"
        );

        Ok(ApiResponse::success_with_message(
            record.into(),
            "Manutención registrada exitosamente".to_string(),
        ))
    }

    /// Historial de manutención de un vehículo, descendente por fecha.
    /// Un motorista solo puede consultar sus vehículos asignados.
    pub async fn history(
        &self,
        user: &UserInfo,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MaintenanceResponse>> {
        authorization_service::require(user, Capability::ViewFleet)?;

        // Los vehículos desactivados conservan su historial consultable
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if user.role == UserRole::Driver
            && !self.vehicles.is_driver_assigned(vehicle_id, user.id).await?
        {
            return Err(AppError::Forbidden(
                "El vehículo no está asignado a este motorista".to_string(),
            ));
        }

        let records = self.store.history(vehicle_id, limit, offset).await?;
        Ok(records.into_iter().map(MaintenanceResponse::from).collect())
    }
}
