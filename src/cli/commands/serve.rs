use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, load_settings};
use crate::router::create_router;

pub async fn serve(
    config_path: Option<&Path>,
    bind_address: Option<String>,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    trace!("Entering serve function");
    info!("CareLink application starting up");

    let mut settings = load_settings(config_path)?;
    if let Some(bind_address) = bind_address {
        settings.server.bind_address = bind_address;
    }
    if static_dir.is_some() {
        settings.server.static_dir = static_dir;
    }
    let bind_address = settings.server.bind_address.clone();
    debug!("Bind address: {}", bind_address);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(settings) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("CareLink server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
