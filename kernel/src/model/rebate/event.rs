use crate::model::{
    id::{RebateId, UserId},
    rebate::RebateStatus,
};
use chrono::NaiveDate;
use shared::error::{AppError, AppResult};

#[derive(Debug)]
pub struct CreateRebate {
    pub requested_by: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl CreateRebate {
    pub fn new(
        requested_by: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let reason = reason.trim().to_string();
        if reason.is_empty() {
            return Err(AppError::InvalidRequest("reason is required".into()));
        }
        if start_date < today {
            return Err(AppError::InvalidRequest(
                "startDate must not be in the past".into(),
            ));
        }
        if end_date < start_date {
            return Err(AppError::InvalidRequest(
                "endDate must not be before startDate".into(),
            ));
        }
        Ok(Self {
            requested_by,
            start_date,
            end_date,
            reason,
        })
    }
}

#[derive(Debug)]
pub struct UpdateRebateStatus {
    pub rebate_id: RebateId,
    pub status: RebateStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn rejects_blank_reason_and_inverted_range() {
        let user = UserId::new();
        assert!(CreateRebate::new(user, d(1), d(3), "   ".into(), d(1)).is_err());
        assert!(CreateRebate::new(user, d(3), d(1), "travel".into(), d(1)).is_err());
    }

    #[test]
    fn single_day_rebate_is_valid() {
        let rebate =
            CreateRebate::new(UserId::new(), d(5), d(5), " exam ".into(), d(5)).unwrap();
        assert_eq!(rebate.reason, "exam");
        assert_eq!(rebate.start_date, rebate.end_date);
    }

    #[test]
    fn start_date_before_today_is_rejected() {
        let err = CreateRebate::new(UserId::new(), d(4), d(6), "travel".into(), d(5)).unwrap_err();
        assert_eq!(err.to_string(), "startDate must not be in the past");
        assert!(CreateRebate::new(UserId::new(), d(6), d(8), "travel".into(), d(5)).is_ok());
    }
}
