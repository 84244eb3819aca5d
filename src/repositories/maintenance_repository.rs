//! Repositorio PostgreSQL del ledger de manutención
//!
//! Tabla append-only a nivel de dominio: no existen operaciones de
//! update ni delete sobre los registros, aunque el storage lo permita.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::maintenance::{MaintenanceKind, MaintenanceRecord, NewMaintenanceRecord};
use crate::models::vehicle::Vehicle;
use crate::repositories::MaintenanceStore;
use crate::utils::errors::{AppError, AppResult};

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceStore for MaintenanceRepository {
    async fn append(&self, new: NewMaintenanceRecord) -> AppResult<MaintenanceRecord> {
        let mut tx = self.pool.begin().await?;

        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(new.vehicle_id)
            .fetch_optional(&mut *tx)
            .await?;

        let vehicle = match vehicle {
            Some(v) if v.active => v,
            _ => {
                return Err(AppError::NotFound(
                    "Vehículo no encontrado o inactivo".to_string(),
                ))
            }
        };

        // No se puede registrar un servicio "en el pasado", por debajo
        // de la última distancia conocida del vehículo
        if new.mileage_at_service < vehicle.current_mileage {
            return Err(AppError::Validation(format!(
                "El kilometraje del servicio ({} km) es menor al registrado del vehículo ({} km)",
                new.mileage_at_service, vehicle.current_mileage
            )));
        }

        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records
                (id, vehicle_id, kind, description, mileage_at_service,
                 parts_cost, labor_cost, performed_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.vehicle_id)
        .bind(new.kind)
        .bind(new.description)
        .bind(new.mileage_at_service)
        .bind(new.parts_cost)
        .bind(new.labor_cost)
        .bind(new.performed_by)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        // Una revisión preventiva mueve la línea base de la próxima revisión
        if new.kind == MaintenanceKind::Preventive {
            sqlx::query("UPDATE vehicles SET mileage_at_last_review = $2 WHERE id = $1")
                .bind(new.vehicle_id)
                .bind(record.mileage_at_service)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(record)
    }

    async fn history(
        &self,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MaintenanceRecord>> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT * FROM maintenance_records
            WHERE vehicle_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(vehicle_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
