use crate::{
    database::{model::user::UserCredentialRow, ConnectionPool},
    redis::{
        model::{AuthorizationKey, AuthorizedUserId},
        RedisClient,
    },
    repository::user::verify_password,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{auth::AccessToken, id::UserId};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|x| x.map(AuthorizedUserId::into_inner))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let user_item = sqlx::query_as::<_, UserCredentialRow>(
            "SELECT user_id, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        // 未登録のメールアドレスもパスワード不一致と同じ扱いにする
        .ok_or(AppError::InvalidCredentials)?;

        verify_password(password, &user_item.password_hash)?;

        Ok(user_item.user_id)
    }

    async fn create_token(&self, user_id: UserId) -> AppResult<AccessToken> {
        let access_token = AccessToken::generate();
        let key: AuthorizationKey = (&access_token).into();
        let value = AuthorizedUserId::new(user_id);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        tracing::debug!(%user_id, "issued access token");
        Ok(access_token)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = (&access_token).into();
        self.kv.delete(&key).await
    }
}
