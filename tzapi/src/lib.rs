//! # tzapi: Tenderizz upload & health API
//!
//! Small HTTP service fronting the Tenderizz image pipeline. It exposes two
//! endpoints under the `/api/v1` prefix:
//!
//! - `POST /process-all-images` - multipart intake that acknowledges the
//!   uploaded file by name. The processing pipeline sits behind a separate
//!   service; nothing is read or stored here.
//! - `GET /ping` - liveness check answering `pong`.
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum).
//! Requests are stateless and handled independently; the only cross-request
//! concern is the cross-origin policy, which is driven entirely by
//! configuration: deployments either restrict browsers to an allow-list of
//! origins or open the API up with a wildcard (see [`config::CorsConfig`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use tzapi::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Parse CLI arguments and load configuration
//!     let args = tzapi::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     // Initialize telemetry (structured logging)
//!     tzapi::telemetry::init_telemetry()?;
//!
//!     // Create and start the application
//!     let app = Application::new(config)?;
//!
//!     // Run with graceful shutdown on Ctrl+C
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod errors;
mod openapi;
pub mod telemetry;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{
    Router, http,
    routing::{get, post},
};
pub use config::Config;
use config::CorsOrigin;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::openapi::ApiDoc;

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors = &config.cors;

    let allow_origin = if cors.allowed_origins.iter().any(|o| matches!(o, CorsOrigin::Wildcard)) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &cors.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                // Url::as_str() carries a trailing slash; Origin headers never do
                origins.push(url.origin().ascii_serialization().parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_credentials(cors.allow_credentials);

    if let Some(max_age) = cors.max_age {
        layer = layer.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(layer)
}

/// Build the application router with all endpoints and middleware.
///
/// This function constructs the complete Axum router with:
/// - Public API routes nested under `/api/v1`
/// - Interactive API docs at `/docs`
/// - CORS configuration
/// - Tracing middleware
///
/// # Errors
///
/// Returns an error if the CORS configuration cannot be turned into a layer
/// (e.g. an origin that is not a valid header value).
#[instrument(skip_all)]
pub fn build_router(config: &Config) -> anyhow::Result<Router> {
    // The upload route gets its own body limit; no configured limit means
    // uploads of any size are accepted
    let upload_route = post(api::handlers::images::process_all_images);
    let upload_route = match config.limits.max_upload_bytes {
        Some(limit) => upload_route.layer(DefaultBodyLimit::max(limit as usize)),
        None => upload_route.layer(DefaultBodyLimit::disable()),
    };

    let api_routes = Router::new()
        .route("/process-all-images", upload_route)
        .route("/ping", get(api::handlers::status::ping));

    // Create CORS layer from config
    let cors_layer = create_cors_layer(config)?;

    let router = Router::new()
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(cors_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}

/// Main application struct that owns the router and configuration.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] builds the router and middleware stack
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts handling requests
/// 3. **Shutdown**: When the shutdown signal resolves, in-flight requests drain and serve returns
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance with routing and middleware configured
    pub fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting upload API with configuration: {:#?}", config);

        let router = build_router(&config)?;

        Ok(Self { router, config })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Upload API listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use axum_test::TestServer;

    use crate::{Config, build_router};

    /// Build a TestServer over the full router, mirroring production wiring
    pub fn create_test_server(config: Config) -> TestServer {
        let router = build_router(&config).expect("Failed to build router");
        TestServer::new(router).expect("Failed to create test server")
    }
}
