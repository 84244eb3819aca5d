//! Repositorio PostgreSQL del registro de vehículos

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::repositories::VehicleStore;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn create(&self, new: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, plate, make, model, year, current_mileage,
                                  review_interval_km, mileage_at_last_review, active, created_at)
            VALUES ($1, $2, $3, $4, $5, 0, $6, 0, TRUE, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.plate)
        .bind(new.make)
        .bind(new.model)
        .bind(new.year)
        .bind(new.review_interval_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // El índice único de placa respalda el chequeo del controller
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Validation("La placa ya está registrada".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(vehicle)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn list(&self, include_inactive: bool) -> AppResult<Vec<Vehicle>> {
        let query = if include_inactive {
            "SELECT * FROM vehicles ORDER BY created_at DESC"
        } else {
            "SELECT * FROM vehicles WHERE active ORDER BY created_at DESC"
        };

        let vehicles = sqlx::query_as::<_, Vehicle>(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    async fn plate_exists(&self, plate: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE plate = $1 AND active AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(plate)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    async fn update(&self, id: Uuid, changes: VehicleChanges) -> AppResult<Vehicle> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate = $2, make = $3, model = $4, year = $5, review_interval_km = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.plate.unwrap_or(current.plate))
        .bind(changes.make.unwrap_or(current.make))
        .bind(changes.model.unwrap_or(current.model))
        .bind(changes.year.unwrap_or(current.year))
        .bind(changes.review_interval_km.unwrap_or(current.review_interval_km))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Validation("La placa ya está registrada en otro vehículo".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(vehicle)
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("UPDATE vehicles SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }

    async fn assign_driver(&self, vehicle_id: Uuid, driver_id: Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicle_drivers (vehicle_id, driver_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(vehicle_id)
        .bind(driver_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn is_driver_assigned(&self, vehicle_id: Uuid, driver_id: Uuid) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicle_drivers WHERE vehicle_id = $1 AND driver_id = $2)",
        )
        .bind(vehicle_id)
        .bind(driver_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    async fn assigned_vehicles(&self, driver_id: Uuid) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.* FROM vehicles v
            JOIN vehicle_drivers vd ON vd.vehicle_id = v.id
            WHERE vd.driver_id = $1 AND v.active
            ORDER BY v.created_at DESC
            "#,
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
