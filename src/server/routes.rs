use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::company::{Company, CompanyFields};
use crate::query::{CompanyFilter, ListParams};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::storage::{CompanyStats, CompanyStore, PriorityReport};
use crate::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Run a synchronous store operation on the blocking pool.
async fn run_blocking<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    F: FnOnce(&CompanyStore) -> T + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| {
            tracing::error!("Storage task failed: {}", e);
            ApiError::internal(e)
        })
}

/// `run_blocking` for fallible operations; failures are logged with `context`.
async fn with_store<T, F>(state: &AppState, context: &'static str, op: F) -> ApiResult<T>
where
    F: FnOnce(&CompanyStore) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    run_blocking(state, op).await?.map_err(|e| {
        match &e {
            Error::NotFound(_) | Error::Validation(_) => tracing::debug!("{}: {}", context, e),
            _ => tracing::error!("Error while {}: {}", context, e),
        }
        ApiError::from(e)
    })
}

/// Path ids are unsigned decimal integers; anything else is an unknown route.
fn parse_id(raw: &str) -> ApiResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::endpoint_not_found());
    }
    raw.parse().map_err(|_| ApiError::endpoint_not_found())
}

fn timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

pub async fn list_companies(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Company>>> {
    let filter = CompanyFilter::from_params(&ListParams::from_pairs(pairs));
    let records = with_store(&state, "listing companies", move |store| store.list(&filter)).await?;
    Ok(Json(records.iter().map(Company::from).collect()))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Company>> {
    let id = parse_id(&id)?;
    let record = with_store(&state, "fetching company", move |store| {
        store.get(id)?.ok_or(Error::NotFound(id))
    })
    .await?;
    Ok(Json(Company::from(record)))
}

pub async fn create_company(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let fields = CompanyFields::parse_create(&body).map_err(ApiError::from)?;
    let id = with_store(&state, "creating company", move |store| store.insert(&fields)).await?;

    tracing::info!("Created company {}", id);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Company created", "id": id })),
    ))
}

pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    let fields = CompanyFields::parse_update(&body).map_err(ApiError::from)?;
    with_store(&state, "updating company", move |store| store.update(id, &fields)).await?;

    tracing::info!("Updated company {}", id);
    Ok(Json(json!({ "message": "Company updated" })))
}

pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    with_store(&state, "deleting company", move |store| store.delete(id)).await?;

    tracing::info!("Deleted company {}", id);
    Ok(Json(json!({ "message": "Company deleted" })))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<CompanyStats>> {
    let stats = with_store(&state, "computing statistics", |store| store.stats()).await?;
    Ok(Json(stats))
}

pub async fn test_connection(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let database_path = state.store.path().display().to_string();
    match run_blocking(&state, probe_response).await {
        Ok(response) => response,
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": e.message,
                "database_path": database_path,
            })),
        ),
    }
}

/// Body of `GET /api/test`. A missing companies table is a warning, not a failure.
fn probe_response(store: &CompanyStore) -> (StatusCode, Json<Value>) {
    let database_path = store.path().display().to_string();

    if !store.exists() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": format!("Database file {} does not exist", database_path),
                "database_path": database_path,
            })),
        );
    }

    match store.probe() {
        Ok(probe) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Database connection works",
                "database_path": database_path,
                "table_structure": probe.columns,
                "companies_count": probe.count,
                "timestamp": timestamp(),
            })),
        ),
        Err(Error::SchemaMismatch { table, available }) => {
            tracing::warn!("Table '{}' does not exist in {}", table, database_path);
            (
                StatusCode::OK,
                Json(json!({
                    "status": "warning",
                    "message": format!("Table {} does not exist", table),
                    "database_path": database_path,
                    "available_tables": available,
                    "timestamp": timestamp(),
                })),
            )
        }
        Err(Error::StorageUnavailable { reason, .. }) => {
            tracing::error!("Cannot connect to {}: {}", database_path, reason);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "Cannot connect to the database",
                    "database_path": database_path,
                })),
            )
        }
        Err(e) => {
            tracing::error!("Error while testing the connection: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": format!("Database error: {}", e),
                    "database_path": database_path,
                })),
            )
        }
    }
}

pub async fn debug_priority_values(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriorityReport>> {
    let report = with_store(&state, "reading priority values", |store| store.priority_report()).await?;
    Ok(Json(report))
}

pub async fn get_tables(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let tables = with_store(&state, "listing tables", |store| store.list_tables()).await?;
    Ok(Json(json!({
        "tables": tables,
        "database_path": state.store.path().display().to_string(),
    })))
}

pub async fn not_found() -> ApiError {
    ApiError::endpoint_not_found()
}
