use crate::database::{
    model::{guest_booking::GuestBookingRow, parse_column},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    guest_booking::{
        event::{CreateGuestBooking, UpdateGuestBookingStatus},
        GuestBooking, GuestBookingStatus, GUEST_BOOKING_COUNTER,
    },
    id::GuestBookingId,
};
use kernel::repository::guest_booking::GuestBookingRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

const GUEST_BOOKING_COLUMNS: &str = r#"
    guest_booking_id,
    booking_number,
    user_name,
    contact_number,
    meal_type,
    booking_date,
    quantities,
    has_discount,
    status,
    created_at
"#;

#[derive(new)]
pub struct GuestBookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GuestBookingRepository for GuestBookingRepositoryImpl {
    async fn create(&self, event: CreateGuestBooking) -> AppResult<GuestBooking> {
        let mut tx = self.db.begin().await?;

        // 採番は 1 文の UPSERT で行うため、同時実行でも番号は重複しない。
        // カウンタ行は登録完了まで行ロックされ、ロールバック時はカウンタも戻る。
        let booking_number = sqlx::query_scalar::<_, i64>(
            r#"
                INSERT INTO counters (counter_id, seq) VALUES ($1, 1)
                ON CONFLICT (counter_id) DO UPDATE SET seq = counters.seq + 1
                RETURNING seq
            "#,
        )
        .bind(GUEST_BOOKING_COUNTER)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let row = sqlx::query_as::<_, GuestBookingRow>(&format!(
            r#"
                INSERT INTO guest_bookings
                (guest_booking_id, booking_number, user_name, contact_number,
                meal_type, booking_date, quantities, has_discount, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, 'pending')
                RETURNING {GUEST_BOOKING_COLUMNS}
            "#
        ))
        .bind(GuestBookingId::new())
        .bind(booking_number)
        .bind(&event.user_name)
        .bind(&event.contact_number)
        .bind(event.meal_type.as_ref())
        .bind(event.date)
        .bind(Json(&event.quantities))
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(booking_number, "guest booking created");
        GuestBooking::try_from(row)
    }

    async fn find_by_id(
        &self,
        guest_booking_id: GuestBookingId,
    ) -> AppResult<Option<GuestBooking>> {
        sqlx::query_as::<_, GuestBookingRow>(&format!(
            "SELECT {GUEST_BOOKING_COLUMNS} FROM guest_bookings WHERE guest_booking_id = $1"
        ))
        .bind(guest_booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(GuestBooking::try_from)
        .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<GuestBooking>> {
        sqlx::query_as::<_, GuestBookingRow>(&format!(
            r#"
                SELECT {GUEST_BOOKING_COLUMNS} FROM guest_bookings
                ORDER BY booking_date DESC, booking_number ASC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(GuestBooking::try_from)
        .collect()
    }

    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<GuestBooking>> {
        sqlx::query_as::<_, GuestBookingRow>(&format!(
            r#"
                SELECT {GUEST_BOOKING_COLUMNS} FROM guest_bookings
                WHERE booking_date = $1
                ORDER BY booking_number ASC
            "#
        ))
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(GuestBooking::try_from)
        .collect()
    }

    async fn find_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<GuestBooking>> {
        sqlx::query_as::<_, GuestBookingRow>(&format!(
            r#"
                SELECT {GUEST_BOOKING_COLUMNS} FROM guest_bookings
                WHERE booking_date BETWEEN $1 AND $2
                ORDER BY booking_number ASC
            "#
        ))
        .bind(from)
        .bind(to)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(GuestBooking::try_from)
        .collect()
    }

    async fn update_status(&self, event: UpdateGuestBookingStatus) -> AppResult<GuestBooking> {
        let mut tx = self.db.begin().await?;

        let current = sqlx::query_scalar::<_, String>(
            "SELECT status FROM guest_bookings WHERE guest_booking_id = $1 FOR UPDATE",
        )
        .bind(event.guest_booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound("Guest booking not found".into()))?;

        let current: GuestBookingStatus = parse_column("status", &current)?;
        if !current.can_transition_to(event.status) {
            return Err(AppError::UnprocessableEntity(format!(
                "Guest booking is already {}",
                current.as_ref()
            )));
        }

        let row = sqlx::query_as::<_, GuestBookingRow>(&format!(
            r#"
                UPDATE guest_bookings SET status = $1
                WHERE guest_booking_id = $2
                RETURNING {GUEST_BOOKING_COLUMNS}
            "#
        ))
        .bind(event.status.as_ref())
        .bind(event.guest_booking_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        GuestBooking::try_from(row)
    }

    async fn delete(&self, guest_booking_id: GuestBookingId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM guest_bookings WHERE guest_booking_id = $1")
            .bind(guest_booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Guest booking not found".into()));
        }
        Ok(())
    }
}
