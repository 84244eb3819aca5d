use axum::{
    extract::{Extension, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::mileage_controller::MileageController;
use crate::dto::common::{ApiResponse, PageParams};
use crate::dto::mileage_dto::{MileageResponse, SubmitReadingRequest};
use crate::models::auth::UserInfo;
use crate::repositories::mileage_repository::MileageRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mileage_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_reading))
        .route("/vehicle/:id", get(mileage_history))
}

fn controller(state: &AppState) -> MileageController<VehicleRepository, MileageRepository> {
    MileageController::new(
        VehicleRepository::new(state.pool.clone()),
        MileageRepository::new(state.pool.clone()),
    )
}

async fn submit_reading(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<SubmitReadingRequest>,
) -> Result<Json<ApiResponse<MileageResponse>>, AppError> {
    let response = controller(&state).submit(&user, request).await?;
    Ok(Json(response))
}

async fn mileage_history(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Query(page): Query<PageParams>,
) -> Result<Json<Vec<MileageResponse>>, AppError> {
    let response = controller(&state)
        .history(&user, id, page.limit(), page.offset())
        .await?;
    Ok(Json(response))
}
