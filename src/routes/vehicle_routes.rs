use axum::{
    extract::{Extension, Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    AssignDriverRequest, CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse, VehicleView,
};
use crate::models::auth::UserInfo;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(deactivate_vehicle),
        )
        .route("/:id/drivers", post(assign_driver))
}

fn controller(state: &AppState) -> VehicleController<VehicleRepository, UserRepository> {
    VehicleController::new(
        VehicleRepository::new(state.pool.clone()),
        UserRepository::new(state.pool.clone()),
    )
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let response = controller(&state).register(&user, request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<Vec<VehicleView>>, AppError> {
    let response = controller(&state).list(&user).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleView>, AppError> {
    let response = controller(&state).get(&user, id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let response = controller(&state).update(&user, id, request).await?;
    Ok(Json(response))
}

async fn deactivate_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state).deactivate(&user, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo desactivado exitosamente"
    })))
}

async fn assign_driver(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignDriverRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state)
        .assign_driver(&user, id, request.driver_id)
        .await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Motorista asignado exitosamente"
    })))
}
