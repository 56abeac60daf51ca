use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DataDto, ErrorDto, SuccessDto},
        mechanic::{AddMechanicDto, AssignTaskDto, MechanicRowDto, StatusCountDto},
    },
    server::{
        error::{AppError, PlainTextError},
        model::mechanic::{AssignTaskParams, CreateMechanicParams, MechanicRow, StatusCountRow},
        service::mechanic::MechanicService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping mechanic endpoints in OpenAPI documentation
pub static MECHANIC_TAG: &str = "mechanic";

/// Get every mechanic as flattened join rows.
///
/// Each row is `[mechanicID, name, contact, availabilityStatus, maintenanceID]`, one per
/// logged task.
#[utoipa::path(
    get,
    path = "/get_mechanic",
    tag = MECHANIC_TAG,
    responses(
        (status = 200, description = "Flattened mechanic rows", body = Vec<Vec<serde_json::Value>>),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_mechanic(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let rows = MechanicService::new(&state.db)
        .get_rows()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting mechanics."))?;

    let rows: Vec<MechanicRowDto> = rows.into_iter().map(MechanicRow::into_dto).collect();

    Ok((StatusCode::OK, Json(rows)))
}

/// Get the mechanic with the most logged working hours.
///
/// # Returns
/// - `200 OK` - `{ "data": [[name, hours]] }`
/// - `404 Not Found` - No working hours have been logged
/// - `500 Internal Server Error` - Plain-text message
#[utoipa::path(
    get,
    path = "/max_working_hours",
    tag = MECHANIC_TAG,
    responses(
        (status = 200, description = "`{ data: [[name, hours]] }`", body = serde_json::Value),
        (status = 404, description = "No working hours logged", body = String, content_type = "text/plain"),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn max_working_hours(
    State(state): State<AppState>,
) -> Result<axum::response::Response, PlainTextError> {
    let row = MechanicService::new(&state.db)
        .get_max_working_hours()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting working hours."))?;

    let response = match row {
        Some(row) => (StatusCode::OK, Json(DataDto::from(vec![row.into_dto()]))).into_response(),
        None => (StatusCode::NOT_FOUND, "No working hours data found.").into_response(),
    };

    Ok(response)
}

/// Count mechanics per availability status.
#[utoipa::path(
    get,
    path = "/get_Mechanic_Status",
    tag = MECHANIC_TAG,
    responses(
        (status = 200, description = "`{ data: [[status, count]] }`", body = serde_json::Value),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_mechanic_status(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let rows = MechanicService::new(&state.db)
        .count_by_status()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting mechanic status."))?;

    let rows: Vec<StatusCountDto> = rows.into_iter().map(StatusCountRow::into_dto).collect();

    Ok((StatusCode::OK, Json(DataDto::from(rows))))
}

/// Add a mechanic.
///
/// Writes the availability, name and identity fragments in one transaction.
#[utoipa::path(
    post,
    path = "/add-mechanic",
    tag = MECHANIC_TAG,
    request_body = AddMechanicDto,
    responses(
        (status = 200, description = "Mechanic added", body = SuccessDto),
        (status = 400, description = "Missing field or unknown status code", body = ErrorDto),
        (status = 500, description = "Insert failed and nothing was persisted", body = SuccessDto)
    ),
)]
pub async fn add_mechanic(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddMechanicDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateMechanicParams::try_from(payload)?;

    MechanicService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Log a mechanic's hours against a maintenance record.
#[utoipa::path(
    post,
    path = "/assign-task",
    tag = MECHANIC_TAG,
    request_body = AssignTaskDto,
    responses(
        (status = 200, description = "Task assigned", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Unknown mechanic or maintenance record", body = SuccessDto)
    ),
)]
pub async fn assign_task(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssignTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AssignTaskParams::try_from(payload)?;

    MechanicService::new(&state.db).assign_task(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
