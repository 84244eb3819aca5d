//! Store en memoria para ejercitar los controllers sin PostgreSQL
//!
//! Implementa los mismos contratos que los repositorios reales,
//! incluyendo la re-validación de monotonicidad bajo el lock.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use fleet_maintenance::models::auth::{UserInfo, UserRole};
use fleet_maintenance::models::maintenance::{
    MaintenanceKind, MaintenanceRecord, NewMaintenanceRecord,
};
use fleet_maintenance::models::mileage::{MileageRecord, NewMileageRecord};
use fleet_maintenance::models::user::{NewUser, User};
use fleet_maintenance::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use fleet_maintenance::repositories::{MaintenanceStore, MileageStore, UserStore, VehicleStore};
use fleet_maintenance::utils::errors::{AppError, AppResult};

#[derive(Default)]
struct Inner {
    vehicles: HashMap<Uuid, Vehicle>,
    vehicle_order: Vec<Uuid>,
    maintenance: Vec<MaintenanceRecord>,
    mileage: Vec<MileageRecord>,
    users: HashMap<Uuid, User>,
    assignments: HashSet<(Uuid, Uuid)>,
}

#[derive(Clone, Default)]
pub struct MemoryFleet {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryFleet {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for MemoryFleet {
    async fn create(&self, new: NewVehicle) -> AppResult<Vehicle> {
        let mut inner = self.inner.lock().unwrap();

        if inner.vehicles.values().any(|v| v.active && v.plate == new.plate) {
            return Err(AppError::Validation("La placa ya está registrada".to_string()));
        }

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            plate: new.plate,
            make: new.make,
            model: new.model,
            year: new.year,
            current_mileage: 0,
            review_interval_km: new.review_interval_km,
            mileage_at_last_review: 0,
            active: true,
            created_at: Utc::now(),
        };

        inner.vehicle_order.push(vehicle.id);
        inner.vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.vehicles.get(&id).cloned())
    }

    async fn list(&self, include_inactive: bool) -> AppResult<Vec<Vehicle>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .vehicle_order
            .iter()
            .rev()
            .filter_map(|id| inner.vehicles.get(id))
            .filter(|v| include_inactive || v.active)
            .cloned()
            .collect())
    }

    async fn plate_exists(&self, plate: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .vehicles
            .values()
            .any(|v| v.active && v.plate == plate && Some(v.id) != exclude))
    }

    async fn update(&self, id: Uuid, changes: VehicleChanges) -> AppResult<Vehicle> {
        let mut inner = self.inner.lock().unwrap();

        let vehicle = inner
            .vehicles
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if let Some(plate) = changes.plate {
            vehicle.plate = plate;
        }
        if let Some(make) = changes.make {
            vehicle.make = make;
        }
        if let Some(model) = changes.model {
            vehicle.model = model;
        }
        if let Some(year) = changes.year {
            vehicle.year = year;
        }
        if let Some(interval) = changes.review_interval_km {
            vehicle.review_interval_km = interval;
        }

        Ok(vehicle.clone())
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let vehicle = inner
            .vehicles
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
        vehicle.active = false;
        Ok(())
    }

    async fn assign_driver(&self, vehicle_id: Uuid, driver_id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.assignments.insert((vehicle_id, driver_id));
        Ok(())
    }

    async fn is_driver_assigned(&self, vehicle_id: Uuid, driver_id: Uuid) -> AppResult<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.assignments.contains(&(vehicle_id, driver_id)))
    }

    async fn assigned_vehicles(&self, driver_id: Uuid) -> AppResult<Vec<Vehicle>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .vehicle_order
            .iter()
            .filter(|id| inner.assignments.contains(&(**id, driver_id)))
            .filter_map(|id| inner.vehicles.get(id))
            .filter(|v| v.active)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MaintenanceStore for MemoryFleet {
    async fn append(&self, new: NewMaintenanceRecord) -> AppResult<MaintenanceRecord> {
        let mut inner = self.inner.lock().unwrap();

        let vehicle = match inner.vehicles.get(&new.vehicle_id) {
            Some(v) if v.active => v.clone(),
            _ => {
                return Err(AppError::NotFound(
                    "Vehículo no encontrado o inactivo".to_string(),
                ))
            }
        };

        if new.mileage_at_service < vehicle.current_mileage {
            return Err(AppError::Validation(format!(
                "El kilometraje del servicio ({} km) es menor al registrado del vehículo ({} km)",
                new.mileage_at_service, vehicle.current_mileage
            )));
        }

        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: new.vehicle_id,
            kind: new.kind,
            description: new.description,
            mileage_at_service: new.mileage_at_service,
            parts_cost: new.parts_cost,
            labor_cost: new.labor_cost,
            performed_by: new.performed_by,
            created_at: Utc::now(),
        };

        if new.kind == MaintenanceKind::Preventive {
            if let Some(v) = inner.vehicles.get_mut(&new.vehicle_id) {
                v.mileage_at_last_review = record.mileage_at_service;
            }
        }

        inner.maintenance.push(record.clone());
        Ok(record)
    }

    async fn history(
        &self,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MaintenanceRecord>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .maintenance
            .iter()
            .rev()
            .filter(|r| r.vehicle_id == vehicle_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MileageStore for MemoryFleet {
    async fn append(&self, new: NewMileageRecord) -> AppResult<MileageRecord> {
        let mut inner = self.inner.lock().unwrap();

        let current = match inner.vehicles.get(&new.vehicle_id) {
            Some(v) if v.active => v.current_mileage,
            _ => {
                return Err(AppError::NotFound(
                    "Vehículo no encontrado o inactivo".to_string(),
                ))
            }
        };

        if new.mileage < current {
            return Err(AppError::Validation(format!(
                "La lectura ({} km) es menor al kilometraje registrado del vehículo ({} km)",
                new.mileage, current
            )));
        }

        let record = MileageRecord {
            id: Uuid::new_v4(),
            vehicle_id: new.vehicle_id,
            mileage: new.mileage,
            recorded_by: new.recorded_by,
            created_at: Utc::now(),
        };

        if let Some(v) = inner.vehicles.get_mut(&new.vehicle_id) {
            v.current_mileage = new.mileage;
        }

        inner.mileage.push(record.clone());
        Ok(record)
    }

    async fn history(
        &self,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MileageRecord>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .mileage
            .iter()
            .rev()
            .filter(|r| r.vehicle_id == vehicle_id)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserStore for MemoryFleet {
    async fn create(&self, new: NewUser) -> AppResult<User> {
        let mut inner = self.inner.lock().unwrap();

        if inner.users.values().any(|u| u.username == new.username) {
            return Err(AppError::Validation(
                "El nombre de usuario ya existe".to_string(),
            ));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new.username,
            full_name: new.full_name,
            password_hash: new.password_hash,
            role: new.role,
            active: true,
            created_at: Utc::now(),
        };

        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.get(&id).cloned())
    }
}

/// Crear un UserInfo suelto (sin fila en el store)
pub fn user_info(role: UserRole) -> UserInfo {
    UserInfo {
        id: Uuid::new_v4(),
        username: format!("test_{}", role.as_str()),
        role,
    }
}

/// Insertar un usuario en el store y devolver su contexto de sesión
pub async fn seed_user(fleet: &MemoryFleet, username: &str, role: UserRole) -> UserInfo {
    let user = UserStore::create(
        fleet,
        NewUser {
            username: username.to_string(),
            full_name: format!("Test {}", username),
            // Hash ficticio: solo los tests de login usan hashes reales
            password_hash: "x".to_string(),
            role: role.as_str().to_string(),
        },
    )
    .await
    .unwrap();

    UserInfo {
        id: user.id,
        username: user.username,
        role,
    }
}
