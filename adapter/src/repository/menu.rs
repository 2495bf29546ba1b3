use crate::database::{model::menu::MenuRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    date::DayOfWeek,
    menu::{event::UpdateMenuDay, MenuDay},
};
use kernel::repository::menu::MenuRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct MenuRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MenuRepository for MenuRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<MenuDay>> {
        sqlx::query_as::<_, MenuRow>(
            r#"
                SELECT day, breakfast, lunch, dinner
                FROM menus
                ORDER BY day_order ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(MenuDay::try_from)
        .collect()
    }

    async fn find_by_day(&self, day: DayOfWeek) -> AppResult<Option<MenuDay>> {
        sqlx::query_as::<_, MenuRow>(
            r#"
                SELECT day, breakfast, lunch, dinner
                FROM menus
                WHERE day = $1
            "#,
        )
        .bind(day.as_ref())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(MenuDay::try_from)
        .transpose()
    }

    async fn update(&self, event: UpdateMenuDay) -> AppResult<MenuDay> {
        // NULL の列は既存のリストを残す
        sqlx::query_as::<_, MenuRow>(
            r#"
                UPDATE menus
                SET
                    breakfast = COALESCE($2, breakfast),
                    lunch = COALESCE($3, lunch),
                    dinner = COALESCE($4, dinner),
                    updated_at = CURRENT_TIMESTAMP(3)
                WHERE day = $1
                RETURNING day, breakfast, lunch, dinner
            "#,
        )
        .bind(event.day.as_ref())
        .bind(event.breakfast)
        .bind(event.lunch)
        .bind(event.dinner)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Menu not found".into()))
        .and_then(MenuDay::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::meal::MealType;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires PostgreSQL (DATABASE_URL)"]
    async fn replacing_one_meal_leaves_the_rest(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = MenuRepositoryImpl::new(ConnectionPool::new(pool));

        repo.update(UpdateMenuDay {
            day: DayOfWeek::Monday,
            breakfast: Some(vec!["Poha".into()]),
            lunch: Some(vec!["Rice".into()]),
            dinner: Some(vec!["Roti".into()]),
        })
        .await?;
        repo.update(UpdateMenuDay::single(
            DayOfWeek::Monday,
            MealType::Dinner,
            vec!["Dal".into(), "Rice".into()],
        ))
        .await?;

        let week = repo.find_all().await?;
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, DayOfWeek::Monday);
        assert_eq!(week[0].dinner, ["Dal", "Rice"]);
        assert_eq!(week[0].breakfast, ["Poha"]);
        assert_eq!(week[0].lunch, ["Rice"]);
        assert!(week[1..].iter().all(|d| d.dinner.is_empty()));
        Ok(())
    }
}
