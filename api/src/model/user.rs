use derive_new::new;
use garde::Validate;
use kernel::model::{
    auth::AccessToken,
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateUserPassword},
        Requester, User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    name: String,
    #[garde(email)]
    email: String,
    #[garde(length(min = 1))]
    password: String,
    // 省略時は一般利用者
    #[garde(skip)]
    #[serde(default)]
    role: Role,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            name,
            email,
            password,
            role,
        } = value;
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password,
            role,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPasswordRequest {
    #[garde(length(min = 1))]
    current_password: String,
    #[garde(length(min = 1))]
    new_password: String,
}

#[derive(new)]
pub struct UpdateUserPasswordRequestWithUserId(UserId, UpdateUserPasswordRequest);

impl From<UpdateUserPasswordRequestWithUserId> for UpdateUserPassword {
    fn from(value: UpdateUserPasswordRequestWithUserId) -> Self {
        let UpdateUserPasswordRequestWithUserId(
            user_id,
            UpdateUserPasswordRequest {
                current_password,
                new_password,
            },
        ) = value;
        UpdateUserPassword {
            user_id,
            current_password,
            new_password,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
            role,
        } = value;
        Self {
            id: user_id,
            name,
            email,
            role,
        }
    }
}

/// Returned by register and login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: User, access_token: AccessToken) -> Self {
        Self {
            user: user.into(),
            token: access_token.0,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterResponse {
    pub id: UserId,
    pub name: String,
}

impl From<Requester> for RequesterResponse {
    fn from(value: Requester) -> Self {
        let Requester { user_id, name } = value;
        Self { id: user_id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_is_flat() {
        let user = User {
            user_id: UserId::new(),
            name: "Meera".into(),
            email: "meera@example.com".into(),
            role: Role::Admin,
        };
        let json = serde_json::to_value(AuthResponse::new(
            user.clone(),
            AccessToken("abc".into()),
        ))
        .unwrap();
        assert_eq!(json["id"], user.user_id.to_string());
        assert_eq!(json["role"], "admin");
        assert_eq!(json["token"], "abc");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn registration_defaults_to_resident() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"name":" Ravi ","email":"Ravi@Example.com","password":"pw"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        let event = CreateUser::from(req);
        assert_eq!(event.role, Role::Resident);
        assert_eq!(event.name, "Ravi");
        assert_eq!(event.email, "ravi@example.com");
    }

    #[test]
    fn registration_requires_an_email() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":"Ravi","email":"nope","password":"pw"}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
