use crate::database::{
    model::{parse_column, rebate::RebateRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::{RebateId, UserId},
    rebate::{
        event::{CreateRebate, UpdateRebateStatus},
        Rebate, RebateStatus,
    },
};
use kernel::repository::rebate::RebateRepository;
use shared::error::{AppError, AppResult};

const SELECT_REBATES: &str = r#"
    SELECT
        r.rebate_id,
        r.user_id,
        u.name AS user_name,
        r.start_date,
        r.end_date,
        r.reason,
        r.status,
        r.created_at
    FROM rebates AS r
    INNER JOIN users AS u ON r.user_id = u.user_id
"#;

#[derive(new)]
pub struct RebateRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RebateRepository for RebateRepositoryImpl {
    async fn create(&self, event: CreateRebate) -> AppResult<Rebate> {
        let rebate_id = RebateId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO rebates (rebate_id, user_id, start_date, end_date, reason, status)
                VALUES ($1, $2, $3, $4, $5, 'pending')
            "#,
        )
        .bind(rebate_id)
        .bind(event.requested_by)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(&event.reason)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No rebate record has been created".into(),
            ));
        }

        self.find_by_id(rebate_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("created rebate could not be read back".into())
        })
    }

    async fn find_all(&self, status: Option<RebateStatus>) -> AppResult<Vec<Rebate>> {
        // status が NULL なら全件
        let rows = sqlx::query_as::<_, RebateRow>(&format!(
            "{SELECT_REBATES} WHERE ($1::VARCHAR IS NULL OR r.status = $1) ORDER BY r.created_at DESC"
        ))
        .bind(status.map(|s| s.as_ref().to_string()))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        rows.into_iter().map(Rebate::try_from).collect()
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Rebate>> {
        let rows = sqlx::query_as::<_, RebateRow>(&format!(
            "{SELECT_REBATES} WHERE r.user_id = $1 ORDER BY r.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        rows.into_iter().map(Rebate::try_from).collect()
    }

    async fn find_by_id(&self, rebate_id: RebateId) -> AppResult<Option<Rebate>> {
        sqlx::query_as::<_, RebateRow>(&format!("{SELECT_REBATES} WHERE r.rebate_id = $1"))
            .bind(rebate_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(Rebate::try_from)
            .transpose()
    }

    async fn update_status(&self, event: UpdateRebateStatus) -> AppResult<Rebate> {
        let mut tx = self.db.begin().await?;

        let current = sqlx::query_scalar::<_, String>(
            "SELECT status FROM rebates WHERE rebate_id = $1 FOR UPDATE",
        )
        .bind(event.rebate_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Rebate not found".into()))?;

        let current: RebateStatus = parse_column("status", &current)?;
        let next = current.transition(event.status)?;

        sqlx::query("UPDATE rebates SET status = $1 WHERE rebate_id = $2")
            .bind(next.as_ref())
            .bind(event.rebate_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        self.find_by_id(event.rebate_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Rebate not found".into()))
    }

    async fn is_on_rebate(&self, user_id: UserId, date: NaiveDate) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM rebates
                    WHERE user_id = $1
                      AND status = 'approved'
                      AND start_date <= $2
                      AND $2 <= end_date
                )
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::{role::Role, user::event::CreateUser};
    use kernel::repository::user::UserRepository;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires PostgreSQL (DATABASE_URL)"]
    async fn approved_rebate_covers_its_inclusive_range(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()))
            .create(CreateUser {
                name: "Neha".into(),
                email: "neha@example.com".into(),
                password: "pw".into(),
                role: Role::Resident,
            })
            .await?;
        let repo = RebateRepositoryImpl::new(ConnectionPool::new(pool));
        let d = |day| NaiveDate::from_ymd_opt(2025, 8, day).unwrap();

        let rebate = repo
            .create(CreateRebate::new(user.user_id, d(10), d(12), "home".into(), d(1))?)
            .await?;
        assert!(!repo.is_on_rebate(user.user_id, d(11)).await?);

        repo.update_status(UpdateRebateStatus {
            rebate_id: rebate.rebate_id,
            status: RebateStatus::Approved,
        })
        .await?;
        assert!(repo.is_on_rebate(user.user_id, d(10)).await?);
        assert!(repo.is_on_rebate(user.user_id, d(12)).await?);
        assert!(!repo.is_on_rebate(user.user_id, d(13)).await?);

        let again = repo
            .update_status(UpdateRebateStatus {
                rebate_id: rebate.rebate_id,
                status: RebateStatus::Rejected,
            })
            .await;
        assert!(matches!(again, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }
}
