use axum::{
    extract::{Extension, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::common::{ApiResponse, PageParams};
use crate::dto::maintenance_dto::{MaintenanceResponse, RecordMaintenanceRequest};
use crate::models::auth::UserInfo;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_maintenance))
        .route("/vehicle/:id", get(maintenance_history))
}

fn controller(state: &AppState) -> MaintenanceController<VehicleRepository, MaintenanceRepository> {
    MaintenanceController::new(
        VehicleRepository::new(state.pool.clone()),
        MaintenanceRepository::new(state.pool.clone()),
    )
}

async fn record_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<RecordMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let response = controller(&state).record(&user, request).await?;
    Ok(Json(response))
}

async fn maintenance_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let response = controller(&state)
        .history(&user, id, page.limit(), page.offset())
        .await?;
    Ok(Json(response))
}
