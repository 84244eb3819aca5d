//! Capa de persistencia
//!
//! Los seams de almacenamiento son traits para que los controllers sean
//! testeables sin base de datos real; las implementaciones PostgreSQL
//! viven en los módulos `*_repository`.

pub mod maintenance_repository;
pub mod mileage_repository;
pub mod user_repository;
pub mod vehicle_repository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::maintenance::{MaintenanceRecord, NewMaintenanceRecord};
use crate::models::mileage::{MileageRecord, NewMileageRecord};
use crate::models::user::{NewUser, User};
use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::utils::errors::AppResult;

/// Registro de vehículos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn create(&self, new: NewVehicle) -> AppResult<Vehicle>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>>;

    /// Listar la flota; `include_inactive` incorpora los desactivados
    async fn list(&self, include_inactive: bool) -> AppResult<Vec<Vehicle>>;

    /// Verificar si una placa ya existe entre los vehículos activos,
    /// excluyendo opcionalmente un id (para updates)
    async fn plate_exists(&self, plate: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    async fn update(&self, id: Uuid, changes: VehicleChanges) -> AppResult<Vehicle>;

    /// Soft-delete; el historial del vehículo sigue consultable
    async fn deactivate(&self, id: Uuid) -> AppResult<()>;

    async fn assign_driver(&self, vehicle_id: Uuid, driver_id: Uuid) -> AppResult<()>;

    async fn is_driver_assigned(&self, vehicle_id: Uuid, driver_id: Uuid) -> AppResult<bool>;

    async fn assigned_vehicles(&self, driver_id: Uuid) -> AppResult<Vec<Vehicle>>;
}

/// Ledger append-only de manutención
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    /// Anexar un registro. En la misma transacción, una manutención
    /// preventiva mueve `mileage_at_last_review` del vehículo.
    /// Falla con NotFound si el vehículo no existe o está inactivo y con
    /// Validation si el kilometraje del servicio regresa al registrado.
    async fn append(&self, new: NewMaintenanceRecord) -> AppResult<MaintenanceRecord>;

    /// Historial por vehículo, descendente por fecha, paginado
    async fn history(
        &self,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MaintenanceRecord>>;
}

/// Log append-only de lecturas de odómetro
#[async_trait]
pub trait MileageStore: Send + Sync {
    /// Anexar una lectura y actualizar `current_mileage` del vehículo en
    /// una sola transacción. La monotonicidad se re-valida contra el valor
    /// vigente bajo lock de fila, nunca contra una lectura previa.
    async fn append(&self, new: NewMileageRecord) -> AppResult<MileageRecord>;

    /// Historial por vehículo, descendente por fecha, paginado
    async fn history(
        &self,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MileageRecord>>;
}

/// Usuarios del sistema
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, new: NewUser) -> AppResult<User>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}
