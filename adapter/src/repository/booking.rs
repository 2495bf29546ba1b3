use crate::database::{is_unique_violation, model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingStatus},
        Booking,
    },
    id::{BookingId, UserId},
    meal::MealType,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

const SELECT_BOOKINGS: &str = r#"
    SELECT
        b.booking_id,
        b.user_id,
        u.name AS user_name,
        b.meal_type,
        b.booking_date,
        b.quantities,
        b.is_vegetarian,
        b.status,
        b.created_at
    FROM bookings AS b
    INNER JOIN users AS u ON b.user_id = u.user_id
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, user_id, meal_type, booking_date, quantities, is_vegetarian, status)
                VALUES ($1, $2, $3, $4, $5, $6, 'pending')
            "#,
        )
        .bind(booking_id)
        .bind(event.booked_by)
        .bind(event.meal_type.as_ref())
        .bind(event.date)
        .bind(Json(&event.quantities))
        .bind(event.is_vegetarian)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            // (user_id, meal_type, booking_date) の一意制約
            if is_unique_violation(&e) {
                AppError::BookingNotAllowed("already booked".into())
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        self.find_by_id(booking_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("created booking could not be read back".into())
        })
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKINGS} WHERE b.booking_id = $1"))
            .bind(booking_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(Booking::try_from)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKINGS} ORDER BY b.booking_date DESC, b.created_at DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        into_bookings(rows)
    }

    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKINGS} WHERE b.booking_date = $1 ORDER BY b.created_at DESC"
        ))
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        into_bookings(rows)
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKINGS} WHERE b.user_id = $1 ORDER BY b.booking_date DESC, b.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        into_bookings(rows)
    }

    async fn find_in_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKINGS} WHERE b.booking_date BETWEEN $1 AND $2 ORDER BY b.booking_date ASC"
        ))
        .bind(from)
        .bind(to)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        into_bookings(rows)
    }

    async fn exists(
        &self,
        user_id: UserId,
        meal_type: MealType,
        date: NaiveDate,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM bookings
                    WHERE user_id = $1 AND meal_type = $2 AND booking_date = $3
                )
            "#,
        )
        .bind(user_id)
        .bind(meal_type.as_ref())
        .bind(date)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<Booking> {
        // 既に同じステータスでも更新は成功扱い
        let res = sqlx::query("UPDATE bookings SET status = $1 WHERE booking_id = $2")
            .bind(event.status.as_ref())
            .bind(event.booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Booking not found".into()));
        }

        self.find_by_id(event.booking_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Booking not found".into()))
    }
}

fn into_bookings(rows: Vec<BookingRow>) -> AppResult<Vec<Booking>> {
    rows.into_iter().map(Booking::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::{booking::BookingStatus, role::Role, user::event::CreateUser};
    use kernel::repository::user::UserRepository;

    async fn resident(pool: &sqlx::PgPool) -> anyhow::Result<UserId> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user = users
            .create(CreateUser {
                name: "Karan".into(),
                email: "karan@example.com".into(),
                password: "pw".into(),
                role: Role::Resident,
            })
            .await?;
        Ok(user.user_id)
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires PostgreSQL (DATABASE_URL)"]
    async fn second_booking_for_same_slot_is_refused(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_id = resident(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let event = |n| {
            CreateBooking::new(
                user_id,
                MealType::Breakfast,
                date,
                [("idli".to_string(), n)].into(),
                true,
            )
        };

        let booking = repo.create(event(2)).await?;
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.booked_by.name, "Karan");
        assert!(repo.exists(user_id, MealType::Breakfast, date).await?);

        let err = repo.create(event(3)).await.unwrap_err();
        assert_eq!(err.to_string(), "already booked");

        let done = repo
            .update_status(UpdateBookingStatus::new(booking.booking_id, BookingStatus::Completed))
            .await?;
        assert_eq!(done.status, BookingStatus::Completed);
        let again = repo
            .update_status(UpdateBookingStatus::new(booking.booking_id, BookingStatus::Completed))
            .await?;
        assert_eq!(again.status, BookingStatus::Completed);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires PostgreSQL (DATABASE_URL)"]
    async fn find_all_returns_every_date_newest_first(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let user_id = resident(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));
        for day in [2, 3] {
            repo.create(CreateBooking::new(
                user_id,
                MealType::Lunch,
                NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                [("rice".to_string(), 1)].into(),
                false,
            ))
            .await?;
        }

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].date, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
        Ok(())
    }
}
