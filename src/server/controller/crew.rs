use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DataDto, ErrorDto, SuccessDto},
        crew::{AddCrewDto, CrewRowDto, RoleCountDto, UpdateRankDto, VeteranDto},
    },
    server::{
        error::{AppError, PlainTextError},
        model::crew::{CreateCrewParams, CrewRow, RoleCountRow, UpdateRankParams, VeteranRow},
        service::crew::CrewService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping crew endpoints in OpenAPI documentation
pub static CREW_TAG: &str = "crew";

/// Get every crew member as flattened join rows.
///
/// Each row is `[crewID, name, role, rank, squadronID, missionID, aircraftID]`.
#[utoipa::path(
    get,
    path = "/get_crew",
    tag = CREW_TAG,
    responses(
        (status = 200, description = "Flattened crew rows", body = Vec<Vec<serde_json::Value>>),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_crew(State(state): State<AppState>) -> Result<impl IntoResponse, PlainTextError> {
    let rows = CrewService::new(&state.db)
        .get_rows()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting crew."))?;

    let rows: Vec<CrewRowDto> = rows.into_iter().map(CrewRow::into_dto).collect();

    Ok((StatusCode::OK, Json(rows)))
}

/// Get crew members who have flown every mission.
#[utoipa::path(
    get,
    path = "/get_Veterans",
    tag = CREW_TAG,
    responses(
        (status = 200, description = "`{ data: [[crewID, name, role, rank]] }`", body = serde_json::Value),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_veterans(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let rows = CrewService::new(&state.db)
        .get_veterans()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting veterans."))?;

    let rows: Vec<VeteranDto> = rows.into_iter().map(VeteranRow::into_dto).collect();

    Ok((StatusCode::OK, Json(DataDto::from(rows))))
}

/// Get roles held by more than five crew members.
#[utoipa::path(
    get,
    path = "/excess_Roles",
    tag = CREW_TAG,
    responses(
        (status = 200, description = "`{ data: [[role, count]] }`", body = serde_json::Value),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_excess_roles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let rows = CrewService::new(&state.db)
        .get_excess_roles()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting excess roles."))?;

    let rows: Vec<RoleCountDto> = rows.into_iter().map(RoleCountRow::into_dto).collect();

    Ok((StatusCode::OK, Json(DataDto::from(rows))))
}

/// Add a crew member.
#[utoipa::path(
    post,
    path = "/add-crew",
    tag = CREW_TAG,
    request_body = AddCrewDto,
    responses(
        (status = 200, description = "Crew member added", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Duplicate ID or insert failed", body = SuccessDto)
    ),
)]
pub async fn add_crew(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddCrewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCrewParams::try_from(payload)?;

    CrewService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Change a crew member's rank.
#[utoipa::path(
    post,
    path = "/update-rank",
    tag = CREW_TAG,
    request_body = UpdateRankDto,
    responses(
        (status = 200, description = "Rank updated", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Unknown crew member or update failed", body = SuccessDto)
    ),
)]
pub async fn update_rank(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateRankParams::try_from(payload)?;

    CrewService::new(&state.db).update_rank(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
