use super::booking::eligibility;
use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedUser},
    model::{
        booking::BookingListQuery,
        guest_booking::{
            CreateGuestBookingRequest, GuestBookingResponse, UpdateGuestBookingStatusRequest,
        },
        report::{GuestBookingsReportResponse, MonthQuery},
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::{
    eligibility::{Applicant, BookingRequest},
    model::{guest_booking::event::UpdateGuestBookingStatus, id::GuestBookingId},
    report::{GuestBookingsReport, ReportMonth},
};
use registry::AppRegistry;
use shared::error::AppResult;

// 認証不要
pub async fn create_guest_booking(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateGuestBookingRequest>,
) -> AppResult<(StatusCode, Json<GuestBookingResponse>)> {
    req.validate()?;

    let request = BookingRequest {
        meal_type: req.meal_type,
        date: req.date,
        quantities: Some(&req.quantities),
    };
    eligibility(&registry, request, Applicant::Guest)
        .await?
        .into_result()?;

    let guest_booking = registry
        .guest_booking_repository()
        .create(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(guest_booking.into())))
}

pub async fn show_guest_bookings_by_date(
    user: AuthorizedUser,
    AppQuery(query): AppQuery<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<GuestBookingResponse>>> {
    user.require_admin()?;

    let repository = registry.guest_booking_repository();
    let found = match query.date {
        Some(date) => repository.find_by_date(date).await?,
        None => repository.find_all().await?,
    };

    Ok(Json(found.into_iter().map(GuestBookingResponse::from).collect()))
}

pub async fn update_guest_booking_status(
    user: AuthorizedUser,
    AppPath(guest_booking_id): AppPath<GuestBookingId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateGuestBookingStatusRequest>,
) -> AppResult<Json<GuestBookingResponse>> {
    user.require_admin()?;

    registry
        .guest_booking_repository()
        .update_status(UpdateGuestBookingStatus::new(guest_booking_id, req.status))
        .await
        .map(GuestBookingResponse::from)
        .map(Json)
}

pub async fn delete_guest_booking(
    user: AuthorizedUser,
    AppPath(guest_booking_id): AppPath<GuestBookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    user.require_admin()?;

    registry
        .guest_booking_repository()
        .delete(guest_booking_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn show_guest_bookings_report(
    user: AuthorizedUser,
    AppQuery(query): AppQuery<MonthQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuestBookingsReportResponse>> {
    user.require_admin()?;
    let month = ReportMonth::new(query.year, query.month)?;

    let guest_bookings = registry
        .guest_booking_repository()
        .find_in_range(month.first_day, month.last_day)
        .await?;

    Ok(Json(GuestBookingsReport::build(&month, &guest_bookings).into()))
}
