mod config;
mod shell;
mod unavailable;

use axum::{middleware, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use maintenance_errors::AppError;
use maintenance_ui::App;
use tower_http::compression::CompressionLayer;

use config::ServerConfig;
use shell::shell;
use unavailable::mark_unavailable;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let conf = get_configuration(Some("Cargo.toml"))
        .map_err(|e| AppError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let server_config = ServerConfig::from_env();
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(middleware::map_response_with_state(
            server_config.clone(),
            mark_unavailable,
        ))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    if server_config.mark_unavailable {
        tracing::info!(
            "Pages served as 503 with Retry-After: {}s",
            server_config.retry_after_secs
        );
    } else {
        tracing::info!("Pages served as 200, maintenance status marking disabled");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Bind(format!("{}: {}", addr, e)))?;

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}
