use std::net::SocketAddr;

use metro_server::config::Config;
use metro_server::domain::ParisClock;
use metro_server::schedule::ScheduleService;
use metro_server::stations::StationDirectory;
use metro_server::web::{AppState, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    // Configuration is read once; the schedule service owns it from here on
    let config = Config::from_env().expect("Invalid configuration");
    tracing::info!(
        headway_mins = config.headway_mins,
        last_window_start = %config.last_window_start,
        service_end = %config.service_end,
        "Loaded configuration"
    );

    let directory = StationDirectory::paris();
    tracing::info!(stations = directory.len(), "Loaded station directory");

    let schedule = ScheduleService::new(&config, directory, ParisClock);
    let app = create_router(AppState::new(schedule));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Next metro server listening on http://{addr}");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /next-metro?station=<name>&time=<HH:MM>&n=<1-5>");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
