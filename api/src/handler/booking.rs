use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedUser},
    model::{
        booking::{
            BookingListQuery, BookingResponse, CreateBookingRequest, EligibilityQuery,
            EligibilityResponse, UpdateBookingStatusRequest,
        },
        report::{AttendanceResponse, MonthQuery, MonthlySummaryResponse},
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::{
    eligibility::{check_booking, Applicant, BookingRequest, Eligibility},
    model::{
        booking::event::{CreateBooking, UpdateBookingStatus},
        id::{BookingId, UserId},
    },
    report::{MonthlySummary, ReportMonth, ResidentAttendance},
};
use registry::AppRegistry;
use shared::error::AppResult;

/// Runs the eligibility checks against the current stores and the mess clock.
pub(crate) async fn eligibility(
    registry: &AppRegistry,
    request: BookingRequest<'_>,
    applicant: Applicant,
) -> AppResult<Eligibility> {
    let off_days = registry.off_day_repository();
    let rebates = registry.rebate_repository();
    let bookings = registry.booking_repository();
    check_booking(
        off_days.as_ref(),
        rebates.as_ref(),
        bookings.as_ref(),
        request,
        applicant,
        registry.clock().now(),
    )
    .await
}

pub async fn show_bookings_by_date(
    user: AuthorizedUser,
    AppQuery(query): AppQuery<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    user.require_admin()?;

    let repository = registry.booking_repository();
    let found = match query.date {
        Some(date) => repository.find_by_date(date).await?,
        None => repository.find_all().await?,
    };

    Ok(Json(found.into_iter().map(BookingResponse::from).collect()))
}

pub async fn show_my_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_by_user(user.id())
        .await
        .map(|v| v.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

pub async fn check_eligibility(
    user: AuthorizedUser,
    AppQuery(query): AppQuery<EligibilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EligibilityResponse>> {
    let request = BookingRequest {
        meal_type: query.meal_type,
        date: query.date,
        quantities: None,
    };
    eligibility(&registry, request, Applicant::Resident(user.id()))
        .await
        .map(EligibilityResponse::from)
        .map(Json)
}

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate()?;

    let request = BookingRequest {
        meal_type: req.meal_type,
        date: req.date,
        quantities: Some(&req.quantities),
    };
    let decision = eligibility(&registry, request, Applicant::Resident(user.id())).await?;
    if let Eligibility::Denied(denial) = &decision {
        tracing::info!(user_id = %user.id(), meal = %req.meal_type, date = %req.date, %denial, "booking denied");
    }
    decision.into_result()?;

    let CreateBookingRequest {
        meal_type,
        quantities,
        is_vegetarian,
        date,
    } = req;
    let booking = registry
        .booking_repository()
        .create(CreateBooking::new(
            user.id(),
            meal_type,
            date,
            quantities,
            is_vegetarian,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn update_booking_status(
    user: AuthorizedUser,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateBookingStatusRequest>,
) -> AppResult<Json<BookingResponse>> {
    user.require_admin()?;

    registry
        .booking_repository()
        .update_status(UpdateBookingStatus::new(booking_id, req.status))
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn show_monthly_summary(
    user: AuthorizedUser,
    AppQuery(query): AppQuery<MonthQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MonthlySummaryResponse>> {
    user.require_admin()?;
    let month = ReportMonth::new(query.year, query.month)?;

    let bookings = registry
        .booking_repository()
        .find_in_range(month.first_day, month.last_day)
        .await?;

    Ok(Json(MonthlySummary::build(&month, &bookings).into()))
}

pub async fn show_attendance(
    user: AuthorizedUser,
    AppPath(user_id): AppPath<UserId>,
    AppQuery(query): AppQuery<MonthQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AttendanceResponse>> {
    user.require_admin()?;
    let month = ReportMonth::new(query.year, query.month)?;

    let bookings = registry.booking_repository().find_by_user(user_id).await?;

    Ok(Json(ResidentAttendance::build(&month, user_id, &bookings).into()))
}
