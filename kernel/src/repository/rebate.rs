use crate::model::{
    id::{RebateId, UserId},
    rebate::{
        event::{CreateRebate, UpdateRebateStatus},
        Rebate, RebateStatus,
    },
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait RebateRepository: Send + Sync {
    async fn create(&self, event: CreateRebate) -> AppResult<Rebate>;
    async fn find_all(&self, status: Option<RebateStatus>) -> AppResult<Vec<Rebate>>;
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Rebate>>;
    async fn find_by_id(&self, rebate_id: RebateId) -> AppResult<Option<Rebate>>;
    // 承認・却下済みのものは変更できない
    async fn update_status(&self, event: UpdateRebateStatus) -> AppResult<Rebate>;
    // 承認済みの期間 (両端を含む) に date が入っていれば true
    async fn is_on_rebate(&self, user_id: UserId, date: NaiveDate) -> AppResult<bool>;
}
