//! Controller del registro de vehículos
//!
//! Operaciones de escritura restringidas al Administrador; lectura
//! disponible para los tres roles con vista reducida para
//! Mecánico/Motorista.

use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse, VehicleSummaryResponse,
    VehicleView,
};
use crate::models::auth::{UserInfo, UserRole};
use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::repositories::{UserStore, VehicleStore};
use crate::services::authorization_service::{self, Capability};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{normalize_plate, validate_plate};

pub struct VehicleController<S, U> {
    store: S,
    users: U,
}

impl<S: VehicleStore, U: UserStore> VehicleController<S, U> {
    pub fn new(store: S, users: U) -> Self {
        Self { store, users }
    }

    pub async fn register(
        &self,
        user: &UserInfo,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        authorization_service::require(user, Capability::ManageVehicles)?;
        request.validate()?;

        let plate = normalize_plate(&request.plate);
        validate_plate(&plate)
            .map_err(|_| AppError::Validation(format!("Placa malformada: '{}'", plate)))?;

        if self.store.plate_exists(&plate, None).await? {
            return Err(AppError::Validation(format!(
                "La placa '{}' ya está registrada en un vehículo activo",
                plate
            )));
        }

        let vehicle = self
            .store
            .create(NewVehicle {
                plate,
                make: request.make,
                model: request.model,
                year: request.year,
                review_interval_km: request.review_interval_km,
            })
            .await?;

        tracing::info!(vehicle_id = %vehicle.id, plate = %vehicle.plate, "Vehículo registrado");

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        authorization_service::require(user, Capability::ManageVehicles)?;
        request.validate()?;

        let plate = match request.plate {
            Some(raw) => {
                let plate = normalize_plate(&raw);
                validate_plate(&plate)
                    .map_err(|_| AppError::Validation(format!("Placa malformada: '{}'", plate)))?;

                if self.store.plate_exists(&plate, Some(id)).await? {
                    return Err(AppError::Validation(format!(
                        "La placa '{}' ya está registrada en otro vehículo activo",
                        plate
                    )));
                }
                Some(plate)
            }
            None => None,
        };

        let vehicle = self
            .store
            .update(
                id,
                VehicleChanges {
                    plate,
                    make: request.make,
                    model: request.model,
                    year: request.year,
                    review_interval_km: request.review_interval_km,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn deactivate(&self, user: &UserInfo, id: Uuid) -> AppResult<()> {
        authorization_service::require(user, Capability::ManageVehicles)?;
        self.store.deactivate(id).await?;
        tracing::info!(vehicle_id = %id, "Vehículo desactivado");
        Ok(())
    }

    pub async fn get(&self, user: &UserInfo, id: Uuid) -> AppResult<VehicleView> {
        authorization_service::require(user, Capability::ViewFleet)?;

        let vehicle = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(view_for_role(vehicle, user.role))
    }

    pub async fn list(&self, user: &UserInfo) -> AppResult<Vec<VehicleView>> {
        authorization_service::require(user, Capability::ViewFleet)?;

        // Solo el Administrador ve los vehículos desactivados
        let include_inactive = user.role == UserRole::Administrator;
        let vehicles = self.store.list(include_inactive).await?;

        Ok(vehicles
            .into_iter()
            .map(|v| view_for_role(v, user.role))
            .collect())
    }

    pub async fn assign_driver(
        &self,
        user: &UserInfo,
        vehicle_id: Uuid,
        driver_id: Uuid,
    ) -> AppResult<()> {
        authorization_service::require(user, Capability::ManageVehicles)?;

        let vehicle = self
            .store
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if !vehicle.active {
            return Err(AppError::NotFound(
                "Vehículo no encontrado o inactivo".to_string(),
            ));
        }

        let driver = self
            .users
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if driver.role != UserRole::Driver.as_str() {
            return Err(AppError::Validation(format!(
                "El usuario '{}' no tiene perfil de motorista",
                driver.username
            )));
        }

        self.store.assign_driver(vehicle_id, driver_id).await?;
        tracing::info!(vehicle_id = %vehicle_id, driver_id = %driver_id, "Motorista asignado");
        Ok(())
    }
}

fn view_for_role(vehicle: Vehicle, role: UserRole) -> VehicleView {
    match role {
        UserRole::Administrator => VehicleView::Full(VehicleResponse::from(vehicle)),
        _ => VehicleView::Summary(VehicleSummaryResponse::from(vehicle)),
    }
}
