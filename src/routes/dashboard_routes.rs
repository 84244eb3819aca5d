use axum::{
    extract::{Extension, State},
    routing::get,
    Json, Router,
};

use crate::controllers::dashboard_controller::DashboardController;
use crate::models::alert::VehicleAlert;
use crate::models::auth::UserInfo;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(fleet_dashboard))
        .route("/my", get(my_status))
}

fn controller(state: &AppState) -> DashboardController<VehicleRepository> {
    DashboardController::new(VehicleRepository::new(state.pool.clone()))
}

async fn fleet_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<Vec<VehicleAlert>>, AppError> {
    let response = controller(&state)
        .dashboard(&user, state.config.alert_threshold_km)
        .await?;
    Ok(Json(response))
}

async fn my_status(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<Vec<VehicleAlert>>, AppError> {
    let response = controller(&state)
        .my_status(&user, state.config.alert_threshold_km)
        .await?;
    Ok(Json(response))
}
