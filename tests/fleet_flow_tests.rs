//! Tests de flujo completo: registro, odómetro, ledger y alertas

mod common;

use rust_decimal::Decimal;
use uuid::Uuid;

use common::{user_info, MemoryFleet};
use fleet_maintenance::controllers::dashboard_controller::DashboardController;
use fleet_maintenance::controllers::maintenance_controller::MaintenanceController;
use fleet_maintenance::controllers::mileage_controller::MileageController;
use fleet_maintenance::controllers::vehicle_controller::VehicleController;
use fleet_maintenance::dto::maintenance_dto::RecordMaintenanceRequest;
use fleet_maintenance::dto::mileage_dto::SubmitReadingRequest;
use fleet_maintenance::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse,
};
use fleet_maintenance::models::alert::AlertStatus;
use fleet_maintenance::models::auth::UserRole;
use fleet_maintenance::models::maintenance::MaintenanceKind;
use fleet_maintenance::utils::errors::AppError;

const THRESHOLD_KM: i64 = 1000;

fn create_request(plate: &str, interval: i64) -> CreateVehicleRequest {
    CreateVehicleRequest {
        plate: plate.to_string(),
        make: "Volkswagen".to_string(),
        model: "Delivery 11.180".to_string(),
        year: 2022,
        review_interval_km: interval,
    }
}

async fn register_vehicle(fleet: &MemoryFleet, plate: &str, interval: i64) -> VehicleResponse {
    let controller = VehicleController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);
    controller
        .register(&admin, create_request(plate, interval))
        .await
        .unwrap()
        .data
        .unwrap()
}

async fn submit_reading(fleet: &MemoryFleet, vehicle_id: Uuid, mileage: i64) {
    let controller = MileageController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);
    controller
        .submit(&admin, SubmitReadingRequest { vehicle_id, mileage })
        .await
        .unwrap();
}

fn maintenance_request(
    vehicle_id: Uuid,
    kind: MaintenanceKind,
    mileage: i64,
) -> RecordMaintenanceRequest {
    RecordMaintenanceRequest {
        vehicle_id,
        kind,
        description: "Cambio de aceite y filtros".to_string(),
        mileage_at_service: mileage,
        parts_cost: None,
        labor_cost: None,
    }
}

#[tokio::test]
async fn register_normalizes_plate() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, " abc-1234", 10_000).await;

    assert_eq!(vehicle.plate, "ABC-1234");
    assert_eq!(vehicle.current_mileage, 0);
    assert_eq!(vehicle.mileage_at_last_review, 0);
    assert!(vehicle.active);
}

#[tokio::test]
async fn duplicate_plate_is_rejected() {
    let fleet = MemoryFleet::new();
    register_vehicle(&fleet, "ABC-1234", 10_000).await;

    let controller = VehicleController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);

    // Misma placa sin guión: normaliza igual, también debe chocar
    let result = controller
        .register(&admin, create_request("abc1234", 10_000))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn malformed_plate_is_rejected() {
    let fleet = MemoryFleet::new();
    let controller = VehicleController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);

    let result = controller
        .register(&admin, create_request("12-34567", 10_000))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn update_cannot_take_plate_of_another_active_vehicle() {
    let fleet = MemoryFleet::new();
    register_vehicle(&fleet, "ABC-1234", 10_000).await;
    let second = register_vehicle(&fleet, "XYZ-9876", 10_000).await;

    let controller = VehicleController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);

    let result = controller
        .update(
            &admin,
            second.id,
            UpdateVehicleRequest {
                plate: Some("ABC-1234".to_string()),
                make: None,
                model: None,
                year: None,
                review_interval_km: None,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Re-usar su propia placa sí está permitido
    let result = controller
        .update(
            &admin,
            second.id,
            UpdateVehicleRequest {
                plate: Some("xyz-9876".to_string()),
                make: Some("Mercedes-Benz".to_string()),
                model: None,
                year: None,
                review_interval_km: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(result.data.unwrap().make, "Mercedes-Benz");
}

#[tokio::test]
async fn alert_transitions_follow_remaining_km() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;

    let dashboard = DashboardController::new(fleet.clone());
    let admin = user_info(UserRole::Administrator);

    // 5.000 km restantes: fuera del dashboard
    submit_reading(&fleet, vehicle.id, 5_000).await;
    let alerts = dashboard.dashboard(&admin, THRESHOLD_KM).await.unwrap();
    assert!(alerts.is_empty());

    // 500 km restantes: DueSoon
    submit_reading(&fleet, vehicle.id, 9_500).await;
    let alerts = dashboard.dashboard(&admin, THRESHOLD_KM).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].status, AlertStatus::DueSoon);
    assert_eq!(alerts[0].remaining_km, 500);

    // -200 km: Overdue
    submit_reading(&fleet, vehicle.id, 10_200).await;
    let alerts = dashboard.dashboard(&admin, THRESHOLD_KM).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].status, AlertStatus::Overdue);
    assert_eq!(alerts[0].remaining_km, -200);
}

#[tokio::test]
async fn regressing_reading_leaves_vehicle_untouched() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;
    submit_reading(&fleet, vehicle.id, 10_200).await;

    let controller = MileageController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);

    let result = controller
        .submit(
            &admin,
            SubmitReadingRequest {
                vehicle_id: vehicle.id,
                mileage: 10_100,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    // Ni kilometraje nuevo ni fila fantasma en el log
    let history = controller
        .history(&admin, vehicle.id, 50, 0)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].mileage, 10_200);
}

#[tokio::test]
async fn reading_equal_to_current_mileage_is_accepted() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;
    submit_reading(&fleet, vehicle.id, 5_000).await;
    submit_reading(&fleet, vehicle.id, 5_000).await;

    let controller = MileageController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);
    let history = controller
        .history(&admin, vehicle.id, 50, 0)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn preventive_maintenance_moves_review_baseline() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;
    submit_reading(&fleet, vehicle.id, 10_200).await;

    let maintenance = MaintenanceController::new(fleet.clone(), fleet.clone());
    let dashboard = DashboardController::new(fleet.clone());
    let mechanic = user_info(UserRole::Mechanic);
    let admin = user_info(UserRole::Administrator);

    maintenance
        .record(
            &mechanic,
            maintenance_request(vehicle.id, MaintenanceKind::Preventive, 10_200),
        )
        .await
        .unwrap();

    // Línea base movida: el vehículo vuelve a tener 10.000 km de margen
    let alerts = dashboard.dashboard(&admin, THRESHOLD_KM).await.unwrap();
    assert!(alerts.is_empty());
}

#[tokio::test]
async fn corrective_maintenance_does_not_move_baseline() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;
    submit_reading(&fleet, vehicle.id, 10_200).await;

    let maintenance = MaintenanceController::new(fleet.clone(), fleet.clone());
    let dashboard = DashboardController::new(fleet.clone());
    let mechanic = user_info(UserRole::Mechanic);
    let admin = user_info(UserRole::Administrator);

    maintenance
        .record(
            &mechanic,
            maintenance_request(vehicle.id, MaintenanceKind::Corrective, 10_200),
        )
        .await
        .unwrap();

    let alerts = dashboard.dashboard(&admin, THRESHOLD_KM).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].status, AlertStatus::Overdue);
}

#[tokio::test]
async fn maintenance_below_current_mileage_is_rejected() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;
    submit_reading(&fleet, vehicle.id, 10_200).await;

    let maintenance = MaintenanceController::new(fleet.clone(), fleet.clone());
    let mechanic = user_info(UserRole::Mechanic);

    let result = maintenance
        .record(
            &mechanic,
            maintenance_request(vehicle.id, MaintenanceKind::Preventive, 9_000),
        )
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn maintenance_costs_default_to_zero_and_sum() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;

    let maintenance = MaintenanceController::new(fleet.clone(), fleet.clone());
    let mechanic = user_info(UserRole::Mechanic);

    let mut request = maintenance_request(vehicle.id, MaintenanceKind::Corrective, 0);
    request.parts_cost = Some(Decimal::new(15050, 2)); // 150.50
    request.labor_cost = Some(Decimal::new(8025, 2)); // 80.25
    let record = maintenance
        .record(&mechanic, request)
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(record.total_cost, Decimal::new(23075, 2));

    let record = maintenance
        .record(
            &mechanic,
            maintenance_request(vehicle.id, MaintenanceKind::Corrective, 0),
        )
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(record.parts_cost, Decimal::ZERO);
    assert_eq!(record.total_cost, Decimal::ZERO);
}

#[tokio::test]
async fn negative_cost_is_rejected() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;

    let maintenance = MaintenanceController::new(fleet.clone(), fleet.clone());
    let mechanic = user_info(UserRole::Mechanic);

    let mut request = maintenance_request(vehicle.id, MaintenanceKind::Corrective, 0);
    request.labor_cost = Some(Decimal::new(-100, 0));
    let result = maintenance.record(&mechanic, request).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn history_is_descending_and_paginated() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;
    submit_reading(&fleet, vehicle.id, 100).await;
    submit_reading(&fleet, vehicle.id, 200).await;
    submit_reading(&fleet, vehicle.id, 300).await;

    let controller = MileageController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);

    let page = controller.history(&admin, vehicle.id, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].mileage, 300);
    assert_eq!(page[1].mileage, 200);

    let page = controller.history(&admin, vehicle.id, 2, 2).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].mileage, 100);
}

#[tokio::test]
async fn history_of_unknown_vehicle_is_not_found() {
    let fleet = MemoryFleet::new();
    let controller = MaintenanceController::new(fleet.clone(), fleet.clone());
    let admin = user_info(UserRole::Administrator);

    let result = controller.history(&admin, Uuid::new_v4(), 50, 0).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn deactivated_vehicle_keeps_history_but_rejects_writes() {
    let fleet = MemoryFleet::new();
    let vehicle = register_vehicle(&fleet, "ABC-1234", 10_000).await;
    submit_reading(&fleet, vehicle.id, 9_800).await;

    let vehicles = VehicleController::new(fleet.clone(), fleet.clone());
    let mileage = MileageController::new(fleet.clone(), fleet.clone());
    let dashboard = DashboardController::new(fleet.clone());
    let admin = user_info(UserRole::Administrator);

    vehicles.deactivate(&admin, vehicle.id).await.unwrap();

    // Fuera del dashboard
    let alerts = dashboard.dashboard(&admin, THRESHOLD_KM).await.unwrap();
    assert!(alerts.is_empty());

    // El historial sigue consultable
    let history = mileage.history(&admin, vehicle.id, 50, 0).await.unwrap();
    assert_eq!(history.len(), 1);

    // Pero no acepta lecturas nuevas
    let result = mileage
        .submit(
            &admin,
            SubmitReadingRequest {
                vehicle_id: vehicle.id,
                mileage: 9_900,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    // Y su placa queda libre para un vehículo nuevo
    register_vehicle(&fleet, "ABC-1234", 10_000).await;
}

#[tokio::test]
async fn dashboard_orders_most_urgent_first() {
    let fleet = MemoryFleet::new();
    let overdue = register_vehicle(&fleet, "AAA-1111", 10_000).await;
    let due_soon = register_vehicle(&fleet, "BBB-2222", 10_000).await;
    submit_reading(&fleet, overdue.id, 10_500).await;
    submit_reading(&fleet, due_soon.id, 9_300).await;

    let dashboard = DashboardController::new(fleet.clone());
    let admin = user_info(UserRole::Administrator);

    let alerts = dashboard.dashboard(&admin, THRESHOLD_KM).await.unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].plate, "AAA-1111");
    assert_eq!(alerts[0].remaining_km, -500);
    assert_eq!(alerts[1].plate, "BBB-2222");
    assert_eq!(alerts[1].remaining_km, 700);
}
