use super::parse_column;
use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{Booking, Quantities},
    id::{BookingId, UserId},
    user::Requester,
};
use shared::error::AppError;
use sqlx::types::Json;

// bookings と users を結合した行
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub user_name: String,
    pub meal_type: String,
    pub booking_date: NaiveDate,
    pub quantities: Json<Quantities>,
    pub is_vegetarian: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            user_id,
            user_name,
            meal_type,
            booking_date,
            quantities,
            is_vegetarian,
            status,
            created_at,
        } = value;
        Ok(Booking {
            booking_id,
            booked_by: Requester {
                user_id,
                name: user_name,
            },
            meal_type: parse_column("meal_type", &meal_type)?,
            date: booking_date,
            quantities: quantities.0,
            is_vegetarian,
            status: parse_column("status", &status)?,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{booking::BookingStatus, meal::MealType};

    fn row(meal_type: &str, status: &str) -> BookingRow {
        BookingRow {
            booking_id: BookingId::new(),
            user_id: UserId::new(),
            user_name: "Meera".into(),
            meal_type: meal_type.into(),
            booking_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            quantities: Json([("idli".to_string(), 2)].into()),
            is_vegetarian: true,
            status: status.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn converts_text_columns_into_enums() {
        let booking = Booking::try_from(row("breakfast", "completed")).unwrap();
        assert_eq!(booking.meal_type, MealType::Breakfast);
        assert_eq!(booking.status, BookingStatus::Completed);
        assert_eq!(booking.booked_by.name, "Meera");
        assert_eq!(booking.quantities["idli"], 2);
    }

    #[test]
    fn unknown_enum_values_are_conversion_errors() {
        assert!(matches!(
            Booking::try_from(row("brunch", "pending")),
            Err(AppError::ConversionEntityError(_))
        ));
        assert!(matches!(
            Booking::try_from(row("lunch", "served")),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
