use crate::model::{
    id::OffDayId,
    off_day::{event::CreateOffDay, OffDay},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait OffDayRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<OffDay>>;
    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<OffDay>>;
    // 同じ日付が登録済みなら DuplicateOffDay を返す
    async fn create(&self, event: CreateOffDay) -> AppResult<OffDay>;
    // 存在しない ID でもエラーにしない
    async fn delete(&self, off_day_id: OffDayId) -> AppResult<()>;
}
