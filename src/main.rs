use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fleet_maintenance::{
    build_router,
    config::{DatabaseConfig, EnvironmentConfig},
    database::DatabaseConnection,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    info!("🚚 Fleet Maintenance API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    if config.cors_origins.is_empty() && config.is_production() {
        warn!("⚠️ CORS_ORIGINS vacío en producción: se aceptan todos los orígenes");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::new(config.database_url.clone())).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_router(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Company:");
    info!("   POST /api/company/register - Registrar empresa");
    info!("   POST /api/company/login - Login empresa");
    info!("   GET  /api/company/me - Perfil de la empresa");
    info!("   PUT  /api/company/me - Actualizar perfil");
    info!("🚚 Trucks:");
    info!("   GET  /api/trucks - Listar camiones (?search=)");
    info!("   POST /api/trucks - Añadir camión");
    info!("   GET  /api/trucks/:id - Ficha del camión");
    info!("   DELETE /api/trucks/:id - Eliminar camión");
    info!("   GET  /api/trucks/:id/qr - Enlace de la etiqueta QR");
    info!("   POST /api/trucks/scan - Resolver QR escaneado");
    info!("   POST /api/trucks/import/validate - Validar CSV");
    info!("   POST /api/trucks/import - Importar CSV");
    info!("🔧 Maintenance:");
    info!("   GET  /api/trucks/:id/maintenance - Historial");
    info!("   POST /api/trucks/:id/maintenance - Registrar mantenimiento");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard - Estadísticas, recientes y próximos");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
