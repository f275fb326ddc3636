//! Paperbloom JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    serve_static::StaticDir,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use paperbloom_app::{
    context::{AppContext, AppOptions},
    seed,
};

use crate::{
    config::{ServerConfig, logging::LogFormat},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod extensions;
mod healthcheck;
mod images;
mod products;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Paperbloom JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));

    match config.logging.log_format {
        LogFormat::Compact => tracing_subscriber::fmt().with_env_filter(env_filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init(),
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let uploads_dir = config.uploads.uploads_dir.clone();

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        AppOptions {
            jwt: config.auth.jwt_config(),
            uploads_dir: uploads_dir.clone(),
        },
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    if let Err(seed_error) = seed::seed(
        &app,
        &config.auth.admin_username,
        &config.auth.admin_password,
    )
    .await
    {
        error!("failed to seed database: {seed_error}");

        process::exit(1);
    }

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::shared(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("auth/login").post(auth::handlers::login))
        .push(Router::with_path("images/{*path}").get(StaticDir::new([uploads_dir])))
        .push(
            Router::with_path("products")
                .get(products::handlers::index::handler)
                .push(Router::with_path("{uuid}").get(products::handlers::get::handler)),
        )
        .push(
            Router::new().hoop(auth::middleware::handler).push(
                Router::with_path("products")
                    .post(products::handlers::create::handler)
                    .push(
                        Router::with_path("{uuid}")
                            .put(products::handlers::update::handler)
                            .delete(products::handlers::delete::handler)
                            .push(
                                Router::with_path("images")
                                    .post(images::handlers::upload::handler)
                                    .push(
                                        Router::with_path("{image_uuid}")
                                            .delete(images::handlers::delete::handler),
                                    ),
                            ),
                    ),
            ),
        );

    let doc = OpenApi::new("Paperbloom API", "0.1.0")
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
