use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DataDto, ErrorDto, SuccessDto},
        maintenance::{AddMaintenanceDto, AssignMaintenanceDto, RemoveMaintenanceDto},
    },
    server::{
        error::{AppError, PlainTextError},
        model::maintenance::{AssignMaintenanceParams, CreateMaintenanceParams},
        service::maintenance::MaintenanceService,
        state::AppState,
        util::{json::JsonBody, parse::require},
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

/// Get the largest per-aircraft average downtime.
///
/// Answers `{ "data": [[value]] }`; the value is null when no maintenance exists.
#[utoipa::path(
    get,
    path = "/max_avg_downtime",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Single-row result", body = serde_json::Value),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn max_avg_downtime(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let row = MaintenanceService::new(&state.db)
        .max_avg_downtime()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting max average downtime."))?;

    Ok((StatusCode::OK, Json(DataDto::from(vec![row.into_dto()]))))
}

/// Add a maintenance record for an aircraft.
#[utoipa::path(
    post,
    path = "/add-maintenance",
    tag = MAINTENANCE_TAG,
    request_body = AddMaintenanceDto,
    responses(
        (status = 200, description = "Maintenance record added", body = SuccessDto),
        (status = 400, description = "Missing field, malformed date or unknown complexity code", body = ErrorDto),
        (status = 500, description = "Duplicate ID, unknown aircraft or insert failed", body = SuccessDto)
    ),
)]
pub async fn add_maintenance(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddMaintenanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateMaintenanceParams::try_from(payload)?;

    MaintenanceService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Reassign a maintenance record to another aircraft.
///
/// The previous assignment is overwritten.
#[utoipa::path(
    post,
    path = "/assign-maintenance",
    tag = MAINTENANCE_TAG,
    request_body = AssignMaintenanceDto,
    responses(
        (status = 200, description = "Maintenance reassigned", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Unknown maintenance record or aircraft", body = SuccessDto)
    ),
)]
pub async fn assign_maintenance(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssignMaintenanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AssignMaintenanceParams::try_from(payload)?;

    MaintenanceService::new(&state.db).assign(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Remove a maintenance record.
///
/// Also deletes every damage record of the aircraft the maintenance record is assigned
/// to, including damage unrelated to this record.
#[utoipa::path(
    post,
    path = "/remove-maintenance",
    tag = MAINTENANCE_TAG,
    request_body = RemoveMaintenanceDto,
    responses(
        (status = 200, description = "Maintenance record and aircraft damage removed", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Unknown maintenance record or delete failed", body = SuccessDto)
    ),
)]
pub async fn remove_maintenance(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RemoveMaintenanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let maintenance_id = require(payload.maintenance_id, "maintenanceID")?;

    MaintenanceService::new(&state.db)
        .remove(maintenance_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
