use kernel::model::{auth::AccessToken, id::UserId};
use shared::error::{AppError, AppResult};

pub trait RedisKey {
    type Value: RedisValue + TryFrom<String, Error = AppError>;
    fn inner(&self) -> String;
}

pub trait RedisValue {
    fn inner(&self) -> String;
}

pub struct AuthorizationKey(String);

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.clone())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("access-token:{}", self.0)
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn new(user_id: UserId) -> Self {
        Self(user_id)
    }

    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        s.parse::<UserId>()
            .map(Self)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}
