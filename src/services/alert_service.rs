//! Evaluador de alertas de revisión
//!
//! Derivación pura: combina el kilometraje vigente con la línea base de
//! la última revisión preventiva y el intervalo de revisión del vehículo.
//! No guarda estado propio.

use crate::models::alert::{AlertStatus, VehicleAlert};
use crate::models::vehicle::Vehicle;

/// Distancia restante hasta la próxima revisión (negativa si venció)
pub fn remaining_km(vehicle: &Vehicle) -> i64 {
    vehicle.review_interval_km - (vehicle.current_mileage - vehicle.mileage_at_last_review)
}

/// Calcular el estado de alerta de un vehículo
///
/// - restante <= 0            -> Overdue
/// - 0 < restante <= umbral   -> DueSoon
/// - restante > umbral        -> Ok
pub fn compute_status(vehicle: &Vehicle, alert_threshold_km: i64) -> (AlertStatus, i64) {
    let remaining = remaining_km(vehicle);
    let status = if remaining <= 0 {
        AlertStatus::Overdue
    } else if remaining <= alert_threshold_km {
        AlertStatus::DueSoon
    } else {
        AlertStatus::Ok
    };
    (status, remaining)
}

/// Construir el dashboard: vehículos activos con estado no-OK,
/// ordenados por distancia restante ascendente (más urgente primero)
pub fn build_dashboard(vehicles: &[Vehicle], alert_threshold_km: i64) -> Vec<VehicleAlert> {
    let mut alerts: Vec<VehicleAlert> = vehicles
        .iter()
        .filter(|v| v.active)
        .filter_map(|v| {
            let (status, remaining) = compute_status(v, alert_threshold_km);
            if status == AlertStatus::Ok {
                return None;
            }
            Some(VehicleAlert {
                vehicle_id: v.id,
                plate: v.plate.clone(),
                make: v.make.clone(),
                model: v.model.clone(),
                current_mileage: v.current_mileage,
                remaining_km: remaining,
                status,
            })
        })
        .collect();

    alerts.sort_by_key(|a| a.remaining_km);
    alerts
}
