use crate::database::{
    is_unique_violation,
    model::user::UserRow,
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateUserPassword},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, name, email, role
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(User::try_from)
        .transpose()
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(&event.email)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if exists {
            return Err(AppError::DuplicateEmail);
        }

        let user_id = UserId::new();
        let hashed_password = hash_password(&event.password)?;
        sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (user_id, name, email, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING user_id, name, email, role
            "#,
        )
        .bind(user_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(hashed_password)
        .bind(event.role.as_ref())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| {
            // 同時登録で EXISTS チェックをすり抜けた場合
            if is_unique_violation(&e) {
                AppError::DuplicateEmail
            } else {
                AppError::SpecificOperationError(e)
            }
        })
        .and_then(User::try_from)
    }

    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let original_password_hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM users WHERE user_id = $1 FOR UPDATE",
        )
        .bind(event.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        verify_password(&event.current_password, &original_password_hash)?;

        let new_password_hash = hash_password(&event.new_password)?;
        sqlx::query(
            r#"
                UPDATE users SET password_hash = $2, updated_at = CURRENT_TIMESTAMP(3)
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(new_password_hash)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}

pub(crate) fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AppError::from)
}

pub(crate) fn verify_password(password: &str, hash: &str) -> AppResult<()> {
    let valid = bcrypt::verify(password, hash)?;
    if !valid {
        return Err(AppError::InvalidCredentials);
    }
    Ok(())
}
