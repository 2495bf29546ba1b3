//! Decides whether a meal may be booked.
//!
//! Checks run in a fixed order and stop at the first denial:
//! off day, rebate, duplicate booking, time window, item count.
//! Rebate and duplicate checks only apply to residents.

use crate::{
    model::{
        booking::{total_items, Quantities},
        id::UserId,
        meal::MealType,
    },
    repository::{booking::BookingRepository, off_day::OffDayRepository, rebate::RebateRepository},
};
use chrono::{NaiveDate, NaiveDateTime};
use shared::error::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicant {
    Resident(UserId),
    Guest,
}

#[derive(Debug, Clone, Copy)]
pub struct BookingRequest<'a> {
    pub meal_type: MealType,
    pub date: NaiveDate,
    /// `None` asks only whether the slot is open, without judging the items.
    pub quantities: Option<&'a Quantities>,
}

/// What the stores know about the requested slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFacts {
    pub off_day_reason: Option<String>,
    pub on_rebate: bool,
    pub already_booked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    OffDay(String),
    OnRebate,
    AlreadyBooked,
    WindowClosed(MealType),
    PastDate,
    NoItems,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::OffDay(reason) => f.write_str(reason),
            Denial::OnRebate => f.write_str("on rebate"),
            Denial::AlreadyBooked => f.write_str("already booked"),
            Denial::WindowClosed(meal) => write!(f, "Booking for {meal} has closed for today"),
            Denial::PastDate => f.write_str("Cannot book a meal for a past date"),
            Denial::NoItems => f.write_str("Please select at least one item"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Allowed,
    Denied(Denial),
}

impl Eligibility {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Eligibility::Allowed)
    }

    pub fn into_result(self) -> AppResult<()> {
        match self {
            Eligibility::Allowed => Ok(()),
            Eligibility::Denied(denial) => Err(AppError::BookingNotAllowed(denial.to_string())),
        }
    }
}

/// Today is open until the meal's window ends; future dates are always open.
pub fn is_time_eligible(meal_type: MealType, date: NaiveDate, now: NaiveDateTime) -> bool {
    let today = now.date();
    if date > today {
        return true;
    }
    date == today && now.time() < meal_type.window().end
}

pub fn can_book(
    request: BookingRequest<'_>,
    applicant: Applicant,
    facts: &BookingFacts,
    now: NaiveDateTime,
) -> Eligibility {
    if let Some(reason) = &facts.off_day_reason {
        return Eligibility::Denied(Denial::OffDay(reason.clone()));
    }

    if let Applicant::Resident(_) = applicant {
        if facts.on_rebate {
            return Eligibility::Denied(Denial::OnRebate);
        }
        if facts.already_booked {
            return Eligibility::Denied(Denial::AlreadyBooked);
        }
    }

    if !is_time_eligible(request.meal_type, request.date, now) {
        let denial = if request.date < now.date() {
            Denial::PastDate
        } else {
            Denial::WindowClosed(request.meal_type)
        };
        return Eligibility::Denied(denial);
    }

    if let Some(quantities) = request.quantities {
        if total_items(quantities) == 0 {
            return Eligibility::Denied(Denial::NoItems);
        }
    }

    Eligibility::Allowed
}

/// Collects the facts for `request` from the stores, then decides.
pub async fn check_booking(
    off_days: &dyn OffDayRepository,
    rebates: &dyn RebateRepository,
    bookings: &dyn BookingRepository,
    request: BookingRequest<'_>,
    applicant: Applicant,
    now: NaiveDateTime,
) -> AppResult<Eligibility> {
    let mut facts = BookingFacts {
        off_day_reason: off_days.find_by_date(request.date).await?.map(|d| d.reason),
        ..Default::default()
    };

    if facts.off_day_reason.is_none() {
        if let Applicant::Resident(user_id) = applicant {
            facts.on_rebate = rebates.is_on_rebate(user_id, request.date).await?;
            if !facts.on_rebate {
                facts.already_booked = bookings
                    .exists(user_id, request.meal_type, request.date)
                    .await?;
            }
        }
    }

    Ok(can_book(request, applicant, &facts, now))
}
