use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedUser},
    model::rebate::{
        CreateRebateRequest, RebateListQuery, RebateResponse, UpdateRebateStatusRequest,
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::RebateId,
    rebate::event::{CreateRebate, UpdateRebateStatus},
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn apply_rebate(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateRebateRequest>,
) -> AppResult<(StatusCode, Json<RebateResponse>)> {
    req.validate()?;

    let CreateRebateRequest {
        start_date,
        end_date,
        reason,
    } = req;
    let event = CreateRebate::new(
        user.id(),
        start_date,
        end_date,
        reason,
        registry.clock().today(),
    )?;

    registry
        .rebate_repository()
        .create(event)
        .await
        .map(|rebate| (StatusCode::CREATED, Json(rebate.into())))
}

pub async fn show_rebate_list(
    user: AuthorizedUser,
    AppQuery(query): AppQuery<RebateListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RebateResponse>>> {
    user.require_admin()?;

    registry
        .rebate_repository()
        .find_all(query.status)
        .await
        .map(|v| v.into_iter().map(RebateResponse::from).collect())
        .map(Json)
}

pub async fn show_my_rebates(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RebateResponse>>> {
    registry
        .rebate_repository()
        .find_by_user(user.id())
        .await
        .map(|v| v.into_iter().map(RebateResponse::from).collect())
        .map(Json)
}

// 承認・却下は一度きり
pub async fn update_rebate_status(
    user: AuthorizedUser,
    AppPath(rebate_id): AppPath<RebateId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateRebateStatusRequest>,
) -> AppResult<Json<RebateResponse>> {
    user.require_admin()?;

    let rebate = registry
        .rebate_repository()
        .update_status(UpdateRebateStatus {
            rebate_id,
            status: req.status,
        })
        .await?;
    tracing::info!(rebate_id = %rebate.rebate_id, status = rebate.status.as_ref(), "rebate decided");

    Ok(Json(rebate.into()))
}
