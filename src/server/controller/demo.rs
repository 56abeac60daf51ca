use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CountDto, DataDto, ErrorDto, SuccessDto},
        demo::{DemoRowDto, InsertDemoDto, UpdateDemoNameDto},
    },
    server::{
        error::{AppError, PlainTextError},
        model::demo::{DemoRecord, InsertDemoParams, RenameDemoParams},
        service::demo::DemoService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping demo table endpoints in OpenAPI documentation
pub static DEMO_TAG: &str = "demo";

/// Get every demo row as `{ "data": [[id, name]] }`.
#[utoipa::path(
    get,
    path = "/demotable",
    tag = DEMO_TAG,
    responses(
        (status = 200, description = "`{ data: [[id, name]] }`", body = serde_json::Value),
        (status = 500, description = "Query failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_demotable(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PlainTextError> {
    let records = DemoService::new(&state.db)
        .get_all()
        .await
        .map_err(|e| e.into_plain_text("An error occurred while getting the demo table."))?;

    let rows: Vec<DemoRowDto> = records.into_iter().map(DemoRecord::into_dto).collect();

    Ok((StatusCode::OK, Json(DataDto::from(rows))))
}

/// Drop and recreate the demo table.
#[utoipa::path(
    post,
    path = "/initiate-demotable",
    tag = DEMO_TAG,
    responses(
        (status = 200, description = "Demo table recreated", body = SuccessDto),
        (status = 500, description = "DDL failed", body = SuccessDto)
    ),
)]
pub async fn initiate_demotable(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    DemoService::new(&state.db).initiate().await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

#[utoipa::path(
    post,
    path = "/insert-demotable",
    tag = DEMO_TAG,
    request_body = InsertDemoDto,
    responses(
        (status = 200, description = "Row inserted", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Duplicate ID or insert failed", body = SuccessDto)
    ),
)]
pub async fn insert_demotable(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<InsertDemoDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = InsertDemoParams::try_from(payload)?;

    DemoService::new(&state.db).insert(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Rename every demo row carrying `oldName`.
#[utoipa::path(
    post,
    path = "/update-name-demotable",
    tag = DEMO_TAG,
    request_body = UpdateDemoNameDto,
    responses(
        (status = 200, description = "Rows renamed", body = SuccessDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "No row carries oldName", body = SuccessDto)
    ),
)]
pub async fn update_name_demotable(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateDemoNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RenameDemoParams::try_from(payload)?;

    DemoService::new(&state.db).rename(params).await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Count demo rows.
///
/// A failed count answers 500 with `{ "success": false, "count": -1 }`.
#[utoipa::path(
    get,
    path = "/count-demotable",
    tag = DEMO_TAG,
    responses(
        (status = 200, description = "Row count", body = CountDto),
        (status = 500, description = "Count failed", body = CountDto)
    ),
)]
pub async fn count_demotable(State(state): State<AppState>) -> impl IntoResponse {
    match DemoService::new(&state.db).count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(CountDto {
                success: true,
                count: count as i64,
            }),
        ),
        Err(err) => {
            tracing::error!("Error counting demo table: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CountDto {
                    success: false,
                    count: -1,
                }),
            )
        }
    }
}
