use kernel::model::meal::MealType;
use kernel::report::{GuestBookingsReport, MonthlySummary, ResidentAttendance};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryResponse {
    pub total_bookings: usize,
    pub counts: BTreeMap<MealType, usize>,
    pub item_totals: BTreeMap<String, u64>,
}

impl From<MonthlySummary> for MonthlySummaryResponse {
    fn from(value: MonthlySummary) -> Self {
        let MonthlySummary {
            total_bookings,
            counts,
            item_totals,
        } = value;
        Self {
            total_bookings,
            counts,
            item_totals,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub total_days: u32,
    pub days_present: u32,
    pub days_absent: u32,
    pub attendance: Vec<bool>,
}

impl From<ResidentAttendance> for AttendanceResponse {
    fn from(value: ResidentAttendance) -> Self {
        let ResidentAttendance {
            total_days,
            days_present,
            days_absent,
            attendance,
        } = value;
        Self {
            total_days,
            days_present,
            days_absent,
            attendance,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestBookingsReportResponse {
    pub total_bookings: usize,
    pub total_discounts: usize,
    pub revenue: u64,
}

impl From<GuestBookingsReport> for GuestBookingsReportResponse {
    fn from(value: GuestBookingsReport) -> Self {
        let GuestBookingsReport {
            total_bookings,
            total_discounts,
            revenue,
        } = value;
        Self {
            total_bookings,
            total_discounts,
            revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_are_keyed_by_meal_name() {
        let summary = MonthlySummary {
            total_bookings: 1,
            counts: MealType::ALL.iter().map(|m| (*m, 0)).collect(),
            item_totals: BTreeMap::new(),
        };
        let json = serde_json::to_value(MonthlySummaryResponse::from(summary)).unwrap();
        assert_eq!(json["totalBookings"], 1);
        assert_eq!(json["counts"]["breakfast"], 0);
        assert_eq!(json["counts"]["dinner"], 0);
    }
}
