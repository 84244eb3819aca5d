//! Repositorio PostgreSQL del log de odómetro
//!
//! El append de una lectura y la actualización del kilometraje vigente
//! del vehículo son una sola transacción: un lector nunca puede observar
//! una lectura aceptada sin el vehículo ya actualizado.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::mileage::{MileageRecord, NewMileageRecord};
use crate::models::vehicle::Vehicle;
use crate::repositories::MileageStore;
use crate::utils::errors::{AppError, AppResult};

pub struct MileageRepository {
    pool: PgPool,
}

impl MileageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MileageStore for MileageRepository {
    async fn append(&self, new: NewMileageRecord) -> AppResult<MileageRecord> {
        let mut tx = self.pool.begin().await?;

        // Lock de fila: la monotonicidad se valida contra el valor vigente
        // en el momento del commit, no contra una lectura anterior
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

        if new.mileage < vehicle.current_mileage {
            return Err(AppError::Validation(format!(
                "La lectura ({} km) es menor al kilometraje registrado del vehículo ({} km)",
                new.mileage, vehicle.current_mileage
            )));
        }

        let record = sqlx::query_as::<_, MileageRecord>(
            r#"
            INSERT INTO mileage_records (id, vehicle_id, mileage, recorded_by, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.vehicle_id)
        .bind(new.mileage)
        .bind(new.recorded_by)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET current_mileage = $2 WHERE id = $1")
            .bind(new.vehicle_id)
            .bind(new.mileage)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn history(
        &self,
        vehicle_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MileageRecord>> {
        let records = sqlx::query_as::<_, MileageRecord>(
            r#"
            SELECT * FROM mileage_records
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
