use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedUser},
    model::off_day::{CreateOffDayRequest, OffDayCheckQuery, OffDayCheckResponse, OffDayResponse},
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::OffDayId, off_day::event::CreateOffDay};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_off_day_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<OffDayResponse>>> {
    registry
        .off_day_repository()
        .find_all()
        .await
        .map(|days| days.into_iter().map(OffDayResponse::from).collect())
        .map(Json)
}

pub async fn check_off_day(
    AppQuery(query): AppQuery<OffDayCheckQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OffDayCheckResponse>> {
    let off_day = registry.off_day_repository().find_by_date(query.date).await?;
    Ok(Json(OffDayCheckResponse::new(query.date, off_day)))
}

pub async fn register_off_day(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateOffDayRequest>,
) -> AppResult<(StatusCode, Json<OffDayResponse>)> {
    user.require_admin()?;
    req.validate()?;

    let event = CreateOffDay::from(req);
    if event.reason.is_empty() {
        return Err(AppError::InvalidRequest("reason is required".into()));
    }

    let off_day = registry.off_day_repository().create(event).await?;
    tracing::info!(date = %off_day.date, "off day added");

    Ok((StatusCode::CREATED, Json(off_day.into())))
}

pub async fn delete_off_day(
    user: AuthorizedUser,
    AppPath(off_day_id): AppPath<OffDayId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_admin()?;

    registry
        .off_day_repository()
        .delete(off_day_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
