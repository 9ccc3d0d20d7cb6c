use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{Res, api, config, state::AppState};

pub async fn start_api_server(port: Option<u16>) -> Res<()> {
    let state = AppState::from_env();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin([
            parse_origin(&config::frontend_url_dev()),
            parse_origin(&config::frontend_url_prod()),
        ])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/meals", get(api::search_meals))
        .route("/meals/suggestions", get(api::fetch_suggestions))
        .route("/meals/random", get(api::fetch_random_meal))
        .route("/meals/{id}", get(api::search_by_id))
        .route("/health", get(api::health))
        .layer(cors)
        .with_state(state);

    let address = format!("0.0.0.0:{}", port.unwrap_or_else(config::backend_port));
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn parse_origin(origin: &str) -> HeaderValue {
    origin
        .parse()
        .expect("Frontend origin is not a valid header value")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
