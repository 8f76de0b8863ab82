//! Client endpoints

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::core::import::ImportReport;
use crate::domain::{Client, ClientFields, ClientbookError, CustomerId, NewClient};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

const UPLOAD_FIELD: &str = "file";
const ACCEPTED_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Liveness probe
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Clientbook API is running"
    }))
}

/// Import clients from an uploaded spreadsheet
pub async fn import_clients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ImportReport>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if !has_spreadsheet_extension(&file_name) {
            return Err(ClientbookError::InvalidInput(
                "The file must be an Excel spreadsheet (.xlsx or .xls)".to_string(),
            )
            .into());
        }

        let bytes = field.bytes().await?;
        let report = state.importer.import(&file_name, &bytes).await?;
        return Ok(Json(report));
    }

    Err(ClientbookError::InvalidInput(format!("Missing multipart field '{UPLOAD_FIELD}'")).into())
}

/// Create a single client
pub async fn create_client(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewClient>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Client>)> {
    let Json(new_client) = payload?;
    let client = state.service.create(new_client).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// List all clients
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<Client>>> {
    Ok(Json(state.service.get_all().await?))
}

/// Get a client by id
pub async fn get_client(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Client>> {
    let id = parse_id(&raw_id)?;
    let client = state
        .service
        .get_by_id(id)
        .await?
        .ok_or(ClientbookError::NotFound(id))?;
    Ok(Json(client))
}

/// Replace a client's mutable fields
pub async fn update_client(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<ClientFields>, JsonRejection>,
) -> ApiResult<Json<Client>> {
    let id = parse_id(&raw_id)?;
    let Json(fields) = payload?;
    let client = state
        .service
        .update(id, fields)
        .await?
        .ok_or(ClientbookError::NotFound(id))?;
    Ok(Json(client))
}

/// Delete a client
pub async fn delete_client(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    if state.service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ClientbookError::NotFound(id).into())
    }
}

fn parse_id(raw: &str) -> std::result::Result<CustomerId, ClientbookError> {
    raw.parse().map_err(ClientbookError::InvalidInput)
}

fn has_spreadsheet_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
