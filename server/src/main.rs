mod security;

use app::{component, shell};
use axum::{Router, body::Body, http::Request, middleware::Next, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use security::{RateLimiter, security_headers, validate_contact_env};
use serde_json::json;

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{NotForContentType, Predicate as _, SizeAbove};
use tower_http::trace::TraceLayer;

/// Contact submissions allowed per client IP and window.
const CONTACT_REQUESTS_PER_WINDOW: usize = 5;
const CONTACT_WINDOW_SECS: u64 = 600;

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    if let Err(errors) = validate_contact_env(|key| std::env::var(key).ok()) {
        for error in &errors {
            logging::error!("{error}");
        }
        return;
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);
    let limiter = RateLimiter::new(CONTACT_REQUESTS_PER_WINDOW, CONTACT_WINDOW_SECS);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(security_headers))
                .layer(axum::middleware::from_fn(move |req: Request<Body>, next: Next| {
                    limiter.clone().middleware(req, next)
                })),
        )
        .layer(CompressionLayer::new().compress_when(
            NotForContentType::new("application/wasm").and(SizeAbove::new(1024)),
        ))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        logging::error!("Failed to serve app: {err:?}");
    } else {
        logging::log!("Server shutdown gracefully");
    }
}
