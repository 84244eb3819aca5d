use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{error, info};

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database;
use fleet_maintenance::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleet_maintenance::routes;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let log_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚛 Fleet Maintenance Tracker - API");
    info!("==================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = database::connection::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(e);
    }
    info!("✅ Base de datos lista");

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    // CORS abierto en desarrollo; con orígenes explícitos si se configuran
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::create_api_router(app_state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("🔑 Autenticación:");
    info!("   POST   /api/auth/login - Login");
    info!("   POST   /api/users - Crear usuario (Administrador)");
    info!("🚗 Registro de vehículos:");
    info!("   POST   /api/vehicle - Registrar vehículo");
    info!("   GET    /api/vehicle - Listar flota");
    info!("   GET    /api/vehicle/:id - Obtener vehículo");
    info!("   PUT    /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Desactivar vehículo");
    info!("   POST   /api/vehicle/:id/drivers - Asignar motorista");
    info!("🔧 Ledger de manutención:");
    info!("   POST   /api/maintenance - Registrar manutención");
    info!("   GET    /api/maintenance/vehicle/:id - Historial");
    info!("⛽ Log de odómetro:");
    info!("   POST   /api/mileage - Enviar lectura");
    info!("   GET    /api/mileage/vehicle/:id - Historial");
    info!("📊 Dashboard:");
    info!("   GET    /api/dashboard - Alertas de revisión (Admin/Mecánico)");
    info!("   GET    /api/dashboard/my - Estado de vehículos asignados");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-maintenance",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
