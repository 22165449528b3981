use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::storage::{CompanyStore, Probe};
use crate::{ui, Error};

pub mod error;
pub mod routes;

pub use error::{ApiError, ErrorResponse};

/// Server state
pub struct AppState {
    pub store: CompanyStore,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(store: CompanyStore, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            static_dir: static_dir.into(),
        }
    }
}

/// Build the application router: JSON API under `/api`, the bundled
/// front-end at `/` and `/static`, JSON 404 for everything else.
pub fn router(state: Arc<AppState>) -> Router {
    // `/` resolves to `index.html` in the static directory. Missing files
    // get the same JSON 404 as unknown routes.
    let not_found = routes::not_found.into_service();
    let index = ServeDir::new(&state.static_dir).not_found_service(not_found.clone());
    let assets = ServeDir::new(&state.static_dir).not_found_service(not_found);

    Router::new()
        .route("/api/test", get(routes::test_connection))
        .route(
            "/api/companies",
            get(routes::list_companies).post(routes::create_company),
        )
        .route(
            "/api/companies/{id}",
            get(routes::get_company)
                .put(routes::update_company)
                .delete(routes::delete_company),
        )
        .route("/api/stats", get(routes::get_stats))
        .route("/api/debug/priority-values", get(routes::debug_priority_values))
        .route("/api/tables", get(routes::get_tables))
        .route_service("/", index)
        .nest_service("/static", assets)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Inspect the data file and log what was found.
///
/// A missing companies table is reported as `SchemaMismatch` after logging
/// the tables that do exist.
pub fn startup_check(store: &CompanyStore) -> crate::Result<Probe> {
    tracing::info!("Connecting to database: {}", store.path().display());

    match store.probe() {
        Ok(probe) => {
            let names: Vec<&str> = probe.columns.iter().map(|c| c.name.as_str()).collect();
            tracing::info!("Found table 'companies' with columns: {:?}", names);
            tracing::info!("{} companies in database", probe.count);
            Ok(probe)
        }
        Err(Error::SchemaMismatch { table, available }) => {
            tracing::warn!("Table '{}' does not exist in the database", table);
            tracing::info!("Tables present:");
            for name in &available {
                tracing::info!("  - {}", name);
            }
            Err(Error::SchemaMismatch { table, available })
        }
        Err(e) => {
            tracing::error!("Database check failed: {}", e);
            Err(e)
        }
    }
}

pub async fn start_server(settings: &ServerSettings) -> anyhow::Result<()> {
    ui::header("Starting Conference Companies API...");

    let store = CompanyStore::new(&settings.database);
    match startup_check(&store) {
        Ok(probe) => ui::info("Database", &format!("{} ({} companies)", store.path().display(), probe.count)),
        Err(e) => ui::warn(&format!("Serving without a usable database: {}", e)),
    }

    let state = Arc::new(AppState::new(store, settings.static_dir.clone()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on {}", addr);

    let base = format!("http://localhost:{}", addr.port());
    ui::info("Front-end", &base);
    ui::info("API", &format!("{}/api/companies", base));
    ui::info("Connection test", &format!("{}/api/test", base));
    ui::info("Static files", &settings.static_dir.join("index.html").display().to_string());
    ui::success("Server running! Press Ctrl+C to stop.");

    axum::serve(listener, app).await?;

    Ok(())
}
