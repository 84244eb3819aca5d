//! Controller del dashboard de alertas
//!
//! El dashboard de flota es para Administrador y Mecánico; un motorista
//! solo consulta el estado de sus vehículos asignados.

use crate::models::alert::VehicleAlert;
use crate::models::auth::UserInfo;
use crate::repositories::VehicleStore;
use crate::services::alert_service;
use crate::services::authorization_service::{self, Capability};
use crate::utils::errors::AppResult;

pub struct DashboardController<V> {
    vehicles: V,
}

impl<V: VehicleStore> DashboardController<V> {
    pub fn new(vehicles: V) -> Self {
        Self { vehicles }
    }

    /// Vehículos activos con estado no-OK, más urgente primero.
    /// Falla con Forbidden para el rol Motorista.
    pub async fn dashboard(
        &self,
        user: &UserInfo,
        alert_threshold_km: i64,
    ) -> AppResult<Vec<VehicleAlert>> {
        authorization_service::require(user, Capability::ViewDashboard)?;

        let vehicles = self.vehicles.list(false).await?;
        Ok(alert_service::build_dashboard(&vehicles, alert_threshold_km))
    }

    /// Estado de los vehículos asignados al usuario, incluyendo los OK
    pub async fn my_status(
        &self,
        user: &UserInfo,
        alert_threshold_km: i64,
    ) -> AppResult<Vec<VehicleAlert>> {
        let vehicles = self.vehicles.assigned_vehicles(user.id).await?;

        Ok(vehicles
            .into_iter()
            .map(|v| {
                let (status, remaining) = alert_service::compute_status(&v, alert_threshold_km);
                VehicleAlert {
                    vehicle_id: v.id,
                    plate: v.plate,
                    make: v.make,
                    model: v.model,
                    current_mileage: v.current_mileage,
                    remaining_km: remaining,
                    status,
                }
            })
            .collect())
    }
}
