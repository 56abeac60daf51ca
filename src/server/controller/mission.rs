use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        mission::{AddMissionDto, FlyDto, MissionRowDto},
    },
    server::{
        error::{AppError, PlainTextError},
        model::mission::{CreateMissionParams, FlyParams, MissionRow},
        service::mission::MissionService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping mission endpoints in OpenAPI documentation
pub static MISSION_TAG: &str = "mission";

/// Get every mission with its weather and flights.
///
/// Each row is `[missionID, missionDate, missionLocation, weather, outcome, duration,
/// crewID, squadronID]`.
#[utoipa::path(
    get,
    path = "/mission",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Flattened mission rows", body = Vec<Vec<serde_json::Value>>),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_missions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let rows = MissionService::new(&state.db)
        .get_rows()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting missions."))?;

    let rows: Vec<MissionRowDto> = rows.into_iter().map(MissionRow::into_dto).collect();

    Ok((StatusCode::OK, Json(rows)))
}

/// Add a mission.
///
/// Writes the weather and identity fragments in one transaction.
#[utoipa::path(
    post,
    path = "/add-mission",
    tag = MISSION_TAG,
    request_body = AddMissionDto,
    responses(
        (status = 200, description = "Mission added", body = SuccessDto),
        (status = 400, description = "Missing field, malformed date or unknown outcome code", body = ErrorDto),
        (status = 500, description = "Insert failed and nothing was persisted", body = SuccessDto)
    ),
)]
pub async fn add_mission(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddMissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateMissionParams::try_from(payload)?;

    MissionService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Record that a crew member flew a mission with a squadron.
#[utoipa::path(
    post,
    path = "/fly",
    tag = MISSION_TAG,
    request_body = FlyDto,
    responses(
        (status = 200, description = "Flight recorded", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Unknown crew member or mission", body = SuccessDto)
    ),
)]
pub async fn fly(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<FlyDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = FlyParams::try_from(payload)?;

    MissionService::new(&state.db).fly(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
