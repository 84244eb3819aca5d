//! Controller del log de odómetro

use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::mileage_dto::{MileageResponse, SubmitReadingRequest};
use crate::models::auth::{UserInfo, UserRole};
use crate::models::mileage::NewMileageRecord;
use crate::repositories::{MileageStore, VehicleStore};
use crate::services::authorization_service::{self, Capability};
use crate::utils::errors::{AppError, AppResult};

pub struct MileageController<V, M> {
    vehicles: V,
    store: M,
}

impl<V: VehicleStore, M: MileageStore> MileageController<V, M> {
    pub fn new(vehicles: V, store: M) -> Self {
        Self { vehicles, store }
    }

    /// Enviar una lectura de odómetro. Un motorista solo puede registrar
    /// lecturas para sus vehículos asignados; el repositorio garantiza
    /// la monotonicidad y la actualización atómica del vehículo.
    pub async fn submit(
        &self,
        user: &UserInfo,
        request: SubmitReadingRequest,
    ) -> AppResult<ApiResponse<MileageResponse>> {
        authorization_service::require(user, Capability::SubmitMileage)?;
        request.validate()?;

        if user.role == UserRole::Driver
            && !self
                .vehicles
                .is_driver_assigned(request.vehicle_id, user.id)
                .await?
        {
            return Err(AppError::Forbidden(
                "El vehículo no está asignado a este motorista".to_string(),
            ));
        }

        let record = self
            .store
            .append(NewMileageRecord {
                vehicle_id: request.vehicle_id,
                mileage: request.mileage,
                recorded_by: user.id,
            })
            .await?;

        tracing::info!(
            vehicle_id = %record.vehicle_id,
            mileage = record.mileage,
            "Lectura de odómetro aceptada"
        );

        Ok(ApiResponse::success_with_message(
            record.into(),
            "Lectura registrada exitosamente".to_string(),
        ))
    }

    /// Historial de lecturas de un vehículo, descendente por fecha
    pub async fn history(
        &self,
        user: &UserInfo,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MileageResponse>> {
        authorization_service::require(user, Capability::ViewFleet)?;

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
        Ok(records.into_iter().map(MileageResponse::from).collect())
    }
}
