use chrono::NaiveDate;
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateOffDay {
    pub date: NaiveDate,
    pub reason: String,
}
