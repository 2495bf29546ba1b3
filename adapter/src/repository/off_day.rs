use crate::database::{is_unique_violation, model::off_day::OffDayRow, ConnectionPool};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::OffDayId,
    off_day::{event::CreateOffDay, OffDay},
};
use kernel::repository::off_day::OffDayRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct OffDayRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl OffDayRepository for OffDayRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<OffDay>> {
        sqlx::query_as::<_, OffDayRow>(
            r#"
                SELECT off_day_id, off_date, reason
                FROM off_days
                ORDER BY off_date ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(OffDay::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<OffDay>> {
        sqlx::query_as::<_, OffDayRow>(
            r#"
                SELECT off_day_id, off_date, reason
                FROM off_days
                WHERE off_date = $1
            "#,
        )
        .bind(date)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(OffDay::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn create(&self, event: CreateOffDay) -> AppResult<OffDay> {
        sqlx::query_as::<_, OffDayRow>(
            r#"
                INSERT INTO off_days (off_day_id, off_date, reason)
                VALUES ($1, $2, $3)
                RETURNING off_day_id, off_date, reason
            "#,
        )
        .bind(OffDayId::new())
        .bind(event.date)
        .bind(&event.reason)
        .fetch_one(self.db.inner_ref())
        .await
        .map(OffDay::from)
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateOffDay(event.date.to_string())
            } else {
                AppError::SpecificOperationError(e)
            }
        })
    }

    async fn delete(&self, off_day_id: OffDayId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM off_days WHERE off_day_id = $1")
            .bind(off_day_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            tracing::debug!(%off_day_id, "off day already absent");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires PostgreSQL (DATABASE_URL)"]
    async fn off_days_are_unique_per_date(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = OffDayRepositoryImpl::new(ConnectionPool::new(pool));
        let date = NaiveDate::from_ymd_opt(2025, 1, 26).unwrap();

        let created = repo
            .create(CreateOffDay::new(date, "Republic Day".into()))
            .await?;
        assert!(matches!(
            repo.create(CreateOffDay::new(date, "again".into())).await,
            Err(AppError::DuplicateOffDay(_))
        ));
        assert_eq!(
            repo.find_by_date(date).await?.map(|d| d.reason),
            Some("Republic Day".to_string())
        );

        repo.delete(created.off_day_id).await?;
        repo.delete(created.off_day_id).await?;
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }
}
