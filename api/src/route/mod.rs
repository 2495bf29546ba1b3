pub mod booking;
pub mod guest_booking;
pub mod health;
pub mod menu;
pub mod off_day;
pub mod rebate;
pub mod user;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(health::build_health_check_routers())
        .merge(user::build_user_routers())
        .merge(menu::build_menu_routers())
        .merge(off_day::build_off_day_routers())
        .merge(booking::build_booking_routers())
        .merge(guest_booking::build_guest_booking_routers())
        .merge(rebate::build_rebate_routers());

    Router::new().nest("/api", router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::{database::connect_database_with, redis::RedisClient};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use shared::config::{
        AppConfig, AuthConfig, DatabaseConfig, MessConfig, RedisConfig, ServerConfig,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    // 接続は遅延されるので、DB に届く前に終わるリクエストだけを検証する
    fn app() -> Router {
        let app_config = AppConfig {
            database: DatabaseConfig {
                host: "localhost".into(),
                port: 5432,
                username: "app".into(),
                password: "passwd".into(),
                database: "app".into(),
            },
            redis: RedisConfig {
                host: "localhost".into(),
                port: 6379,
            },
            auth: AuthConfig { ttl: 60 },
            mess: MessConfig::default(),
            server: ServerConfig { port: 0 },
        };
        let pool = connect_database_with(&app_config.database);
        let kv = Arc::new(RedisClient::new(&app_config.redis).unwrap());
        routes().with_state(AppRegistry::new(pool, kv, app_config))
    }

    async fn message(body: Body) -> String {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["message"].as_str().unwrap_or_default().to_string()
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn liveness_does_not_touch_the_database() {
        let res = app()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_routes_require_a_bearer_token() {
        for (method, uri) in [
            (Method::GET, "/api/bookings/mine"),
            (Method::GET, "/api/bookings?date=2025-01-26"),
            (Method::GET, "/api/rebates"),
            (Method::GET, "/api/users/me"),
        ] {
            let res = app()
                .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(message(res.into_body()).await, "Not authorized, no valid token");
        }
    }

    #[tokio::test]
    async fn non_bearer_authorization_is_rejected() {
        let req = Request::builder()
            .method(Method::PUT)
            .uri("/api/menu/monday")
            .header(header::AUTHORIZATION, "Basic YWRtaW46YWRtaW4=")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"dinner":["Dal"]}"#))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn guest_booking_needs_a_name() {
        let res = app()
            .oneshot(json_request(
                Method::POST,
                "/api/guest-bookings",
                r#"{"userName":"","contactNumber":"9845012345","mealType":"lunch","date":"2025-01-27","quantities":{"thali":1}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_booking_date_is_rejected_before_any_lookup() {
        let res = app()
            .oneshot(json_request(
                Method::POST,
                "/api/guest-bookings",
                r#"{"userName":"Kiran","contactNumber":"9845012345","mealType":"lunch","date":"27/01/2025","quantities":{"thali":1}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(message(res.into_body()).await.contains("invalid calendar date"));
    }

    #[tokio::test]
    async fn malformed_bodies_get_a_json_message() {
        for body in [
            r#"{"userName":"Kiran","contactNumber":"9845012345","mealType":"lunch","date":"2025-01-27","quantities":{"thali":-1}}"#,
            r#"{"userName":"Kiran","contactNumber":"9845012345","mealType":"lunch","quantities":{"thali":1}}"#,
            r#"{"userName":"Kiran""#,
        ] {
            let res = app()
                .oneshot(json_request(Method::POST, "/api/guest-bookings", body))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");
            assert!(!message(res.into_body()).await.is_empty(), "{body}");
        }
    }

    #[tokio::test]
    async fn missing_query_parameter_gets_a_json_message() {
        let res = app()
            .oneshot(Request::get("/api/off-days/check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(message(res.into_body()).await.contains("date"));
    }

    #[tokio::test]
    async fn registration_rejects_invalid_email() {
        let res = app()
            .oneshot(json_request(
                Method::POST,
                "/api/users",
                r#"{"name":"Ravi","email":"not-an-email","password":"secret"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn menu_for_invalid_date_is_a_bad_request() {
        let res = app()
            .oneshot(Request::get("/api/menu/date/2025-13-01").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(res.into_body()).await, "invalid date: 2025-13-01");
    }
}
