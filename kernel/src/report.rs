use crate::model::{
    booking::{total_items, Booking, Quantities},
    date::month_bounds,
    guest_booking::GuestBooking,
    id::UserId,
    meal::MealType,
};
use chrono::{Datelike, NaiveDate};
use shared::error::{AppError, AppResult};
use std::collections::BTreeMap;

/// Flat price charged per guest item.
pub const GUEST_ITEM_PRICE: u64 = 50;
pub const GUEST_DISCOUNT_PERCENT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth {
    pub year: i32,
    pub month: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        let (first_day, last_day) = month_bounds(year, month)
            .ok_or_else(|| AppError::InvalidRequest(format!("invalid month: {year}-{month}")))?;
        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    pub fn days(&self) -> u32 {
        self.last_day.day()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    pub total_bookings: usize,
    pub counts: BTreeMap<MealType, usize>,
    pub item_totals: BTreeMap<String, u64>,
}

impl MonthlySummary {
    pub fn build(month: &ReportMonth, bookings: &[Booking]) -> Self {
        let mut summary = Self {
            counts: MealType::ALL.iter().map(|m| (*m, 0)).collect(),
            ..Default::default()
        };
        for booking in bookings.iter().filter(|b| month.contains(b.date)) {
            summary.total_bookings += 1;
            *summary.counts.entry(booking.meal_type).or_default() += 1;
            add_quantities(&mut summary.item_totals, &booking.quantities);
        }
        summary
    }
}

fn add_quantities(totals: &mut BTreeMap<String, u64>, quantities: &Quantities) {
    for (item, qty) in quantities {
        *totals.entry(item.clone()).or_default() += u64::from(*qty);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentAttendance {
    pub total_days: u32,
    pub days_present: u32,
    pub days_absent: u32,
    /// Index 0 is the first of the month.
    pub attendance: Vec<bool>,
}

impl ResidentAttendance {
    /// A resident is present on any day they booked at least one meal.
    pub fn build(month: &ReportMonth, user_id: UserId, bookings: &[Booking]) -> Self {
        let total_days = month.days();
        let mut attendance = vec![false; total_days as usize];
        bookings
            .iter()
            .filter(|b| b.booked_by.user_id == user_id && month.contains(b.date))
            .for_each(|b| attendance[b.date.day0() as usize] = true);

        let days_present = attendance.iter().filter(|p| **p).count() as u32;
        Self {
            total_days,
            days_present,
            days_absent: total_days - days_present,
            attendance,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuestBookingsReport {
    pub total_bookings: usize,
    pub total_discounts: usize,
    pub revenue: u64,
}

impl GuestBookingsReport {
    pub fn build(month: &ReportMonth, guest_bookings: &[GuestBooking]) -> Self {
        guest_bookings
            .iter()
            .filter(|b| month.contains(b.date))
            .fold(Self::default(), |mut report, booking| {
                let base = total_items(&booking.quantities) * GUEST_ITEM_PRICE;
                let discount = if booking.has_discount {
                    base * GUEST_DISCOUNT_PERCENT / 100
                } else {
                    0
                };
                report.total_bookings += 1;
                report.total_discounts += usize::from(booking.has_discount);
                report.revenue += base - discount;
                report
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        booking::BookingStatus,
        guest_booking::GuestBookingStatus,
        id::{BookingId, GuestBookingId},
        user::Requester,
    };
    use chrono::Utc;

    fn booking(user_id: UserId, meal_type: MealType, date: NaiveDate, q: &[(&str, u32)]) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            booked_by: Requester {
                user_id,
                name: "Ravi".into(),
            },
            meal_type,
            date,
            quantities: q.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            is_vegetarian: true,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn guest(date: NaiveDate, items: u32, has_discount: bool) -> GuestBooking {
        GuestBooking {
            guest_booking_id: GuestBookingId::new(),
            booking_number: 1,
            user_name: "Visitor".into(),
            contact_number: "9999999999".into(),
            meal_type: MealType::Lunch,
            date,
            quantities: [("thali".to_string(), items)].into(),
            has_discount,
            status: GuestBookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn monthly_summary_counts_first_through_last_day() {
        let user = UserId::new();
        let bookings = vec![
            booking(user, MealType::Breakfast, d(2, 1), &[("idli", 2)]),
            booking(user, MealType::Lunch, d(2, 28), &[("rice", 1), ("dal", 1)]),
            booking(user, MealType::Lunch, d(2, 14), &[("rice", 2)]),
            booking(user, MealType::Dinner, d(1, 31), &[("roti", 4)]),
            booking(user, MealType::Dinner, d(3, 1), &[("roti", 4)]),
        ];
        let summary = MonthlySummary::build(&ReportMonth::new(2025, 2).unwrap(), &bookings);

        assert_eq!(summary.total_bookings, 3);
        assert_eq!(summary.counts[&MealType::Breakfast], 1);
        assert_eq!(summary.counts[&MealType::Lunch], 2);
        assert_eq!(summary.counts[&MealType::Dinner], 0);
        assert_eq!(summary.item_totals["rice"], 3);
        assert_eq!(summary.item_totals["idli"], 2);
        assert!(!summary.item_totals.contains_key("roti"));
    }

    #[test]
    fn attendance_marks_days_with_any_booking() {
        let user = UserId::new();
        let other = UserId::new();
        let bookings = vec![
            booking(user, MealType::Breakfast, d(4, 1), &[("idli", 1)]),
            booking(user, MealType::Dinner, d(4, 1), &[("roti", 2)]),
            booking(user, MealType::Lunch, d(4, 30), &[("rice", 1)]),
            booking(other, MealType::Lunch, d(4, 2), &[("rice", 1)]),
        ];
        let report = ResidentAttendance::build(&ReportMonth::new(2025, 4).unwrap(), user, &bookings);

        assert_eq!(report.total_days, 30);
        assert_eq!(report.days_present, 2);
        assert_eq!(report.days_absent, 28);
        assert!(report.attendance[0]);
        assert!(!report.attendance[1]);
        assert!(report.attendance[29]);
    }

    #[test]
    fn guest_report_prices_items_and_applies_discount() {
        let month = ReportMonth::new(2025, 5).unwrap();
        let report = GuestBookingsReport::build(
            &month,
            &[guest(d(5, 3), 2, false), guest(d(5, 9), 2, true), guest(d(6, 1), 5, false)],
        );
        assert_eq!(report.total_bookings, 2);
        assert_eq!(report.total_discounts, 1);
        assert_eq!(report.revenue, 100 + 90);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(ReportMonth::new(2025, 0).is_err());
        assert!(ReportMonth::new(2025, 13).is_err());
    }
}
