use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        aircraft::{AddAircraftDto, AddDamageDto, AircraftRowDto, AssignCrewDto, RemoveAircraftDto},
        api::{ErrorDto, SuccessDto},
    },
    server::{
        error::{AppError, PlainTextError},
        model::aircraft::{AircraftRow, AssignCrewParams, CreateAircraftParams, CreateDamageParams},
        service::aircraft::AircraftService,
        state::AppState,
        util::{json::JsonBody, parse::require_text},
    },
};

/// Tag for grouping aircraft endpoints in OpenAPI documentation
pub static AIRCRAFT_TAG: &str = "aircraft";

/// Get every aircraft as flattened join rows.
///
/// Each row is `[aircraftID, yearIntroduced, model, manufacturer, mainWeapon, crewID,
/// maintenanceID, damagePart, damageDate]`. An aircraft with several crew assignments and
/// damage records appears once per combination.
///
/// # Returns
/// - `200 OK` - JSON array of rows
/// - `500 Internal Server Error` - Plain-text message
#[utoipa::path(
    get,
    path = "/get_aircraft",
    tag = AIRCRAFT_TAG,
    responses(
        (status = 200, description = "Flattened aircraft rows", body = Vec<Vec<serde_json::Value>>),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_aircraft(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let rows = AircraftService::new(&state.db)
        .get_rows()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting aircraft."))?;

    let rows: Vec<AircraftRowDto> = rows.into_iter().map(AircraftRow::into_dto).collect();

    Ok((StatusCode::OK, Json(rows)))
}

/// Add an aircraft.
///
/// Writes the model, armament and identity fragments in one transaction.
///
/// # Returns
/// - `200 OK` - All fragments persisted
/// - `400 Bad Request` - `aircraftID`, `yearIntroduced` or `manufacturer` missing
/// - `500 Internal Server Error` - Insert failed and nothing was persisted
#[utoipa::path(
    post,
    path = "/add-aircraft",
    tag = AIRCRAFT_TAG,
    request_body = AddAircraftDto,
    responses(
        (status = 200, description = "Aircraft added", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Insert failed", body = SuccessDto)
    ),
)]
pub async fn add_aircraft(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddAircraftDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAircraftParams::try_from(payload)?;

    AircraftService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Remove an aircraft by ID.
///
/// # Returns
/// - `200 OK` - Aircraft deleted
/// - `400 Bad Request` - `aircraftID` missing
/// - `500 Internal Server Error` - No such aircraft, or the delete failed
#[utoipa::path(
    post,
    path = "/remove-aircraft",
    tag = AIRCRAFT_TAG,
    request_body = RemoveAircraftDto,
    responses(
        (status = 200, description = "Aircraft removed", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Aircraft not found or delete failed", body = SuccessDto)
    ),
)]
pub async fn remove_aircraft(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RemoveAircraftDto>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft_id = require_text(payload.aircraft_id, "aircraftID")?;

    AircraftService::new(&state.db).remove(&aircraft_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Record damage against an aircraft.
#[utoipa::path(
    post,
    path = "/add-damage",
    tag = AIRCRAFT_TAG,
    request_body = AddDamageDto,
    responses(
        (status = 200, description = "Damage recorded", body = SuccessDto),
        (status = 400, description = "Missing field or malformed date", body = ErrorDto),
        (status = 500, description = "Unknown aircraft or insert failed", body = SuccessDto)
    ),
)]
pub async fn add_damage(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddDamageDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateDamageParams::try_from(payload)?;

    AircraftService::new(&state.db).add_damage(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Assign a crew member to an aircraft.
///
/// Repeating the same assignment succeeds and stores a second row.
#[utoipa::path(
    post,
    path = "/assign-crew-to-aircraft",
    tag = AIRCRAFT_TAG,
    request_body = AssignCrewDto,
    responses(
        (status = 200, description = "Crew assigned", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Unknown aircraft or crew member", body = SuccessDto)
    ),
)]
pub async fn assign_crew_to_aircraft(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssignCrewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = AssignCrewParams::try_from(payload)?;

    AircraftService::new(&state.db).assign_crew(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
