use super::parse_column;
use kernel::model::{id::UserId, user::User};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            name,
            email,
            role,
        } = value;
        Ok(User {
            user_id,
            name,
            email,
            role: parse_column("role", &role)?,
        })
    }
}

// ログイン照合用
#[derive(sqlx::FromRow)]
pub struct UserCredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}
