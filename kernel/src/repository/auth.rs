use crate::model::{auth::AccessToken, id::UserId};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // アクセストークンからユーザー ID を引く
    async fn fetch_user_id_from_token(&self, access_token: &AccessToken)
        -> AppResult<Option<UserId>>;
    // メールアドレスとパスワードを照合する
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId>;
    // 有効期限付きのトークンを発行する
    async fn create_token(&self, user_id: UserId) -> AppResult<AccessToken>;
    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()>;
}
