use crate::model::{
    date::DayOfWeek,
    menu::{event::UpdateMenuDay, MenuDay},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    // 月曜から日曜の順に返す
    async fn find_all(&self) -> AppResult<Vec<MenuDay>>;
    async fn find_by_day(&self, day: DayOfWeek) -> AppResult<Option<MenuDay>>;
    async fn update(&self, event: UpdateMenuDay) -> AppResult<MenuDay>;
}
