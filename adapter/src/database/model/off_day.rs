use chrono::NaiveDate;
use kernel::model::{id::OffDayId, off_day::OffDay};

#[derive(sqlx::FromRow)]
pub struct OffDayRow {
    pub off_day_id: OffDayId,
    pub off_date: NaiveDate,
    pub reason: String,
}

impl From<OffDayRow> for OffDay {
    fn from(value: OffDayRow) -> Self {
        let OffDayRow {
            off_day_id,
            off_date,
            reason,
        } = value;
        OffDay {
            off_day_id,
            date: off_date,
            reason,
        }
    }
}
