pub mod auth_routes;
pub mod dashboard_routes;
pub mod maintenance_routes;
pub mod mileage_routes;
pub mod vehicle_routes;

use axum::{middleware, Router};

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

/// Router principal de la API bajo /api
pub fn create_api_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/mileage", mileage_routes::create_mileage_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/users", auth_routes::create_user_router())
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(protected)
}
