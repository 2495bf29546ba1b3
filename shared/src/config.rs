use anyhow::{Context, Result};
use chrono::{FixedOffset, Offset, Utc};

// 30 days
const DEFAULT_TOKEN_TTL: u64 = 60 * 60 * 24 * 30;
// Asia/Kolkata, +05:30
const DEFAULT_MESS_UTC_OFFSET_MINUTES: i32 = 330;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub mess: MessConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?
                .parse()
                .context("DATABASE_PORT must be a port number")?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST")?,
            port: std::env::var("REDIS_PORT")?
                .parse()
                .context("REDIS_PORT must be a port number")?,
        };
        let auth = AuthConfig {
            ttl: parse_or("AUTH_TOKEN_TTL", DEFAULT_TOKEN_TTL)?,
        };
        let mess = MessConfig::from_offset_minutes(parse_or(
            "MESS_UTC_OFFSET_MINUTES",
            DEFAULT_MESS_UTC_OFFSET_MINUTES,
        )?)?;
        let server = ServerConfig {
            port: parse_or("PORT", 8080)?,
        };
        Ok(Self {
            database,
            redis,
            auth,
            mess,
            server,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v.parse().with_context(|| format!("invalid value for {key}")),
        Err(_) => {
            tracing::debug!("{key} not set, using default");
            Ok(default)
        }
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct AuthConfig {
    /// Seconds an access token stays valid.
    pub ttl: u64,
}

/// Where "today" is evaluated for booking windows.
#[derive(Clone, Copy, Debug)]
pub struct MessConfig {
    pub timezone: FixedOffset,
}

impl MessConfig {
    pub fn from_offset_minutes(minutes: i32) -> Result<Self> {
        let timezone = FixedOffset::east_opt(minutes * 60)
            .with_context(|| format!("UTC offset out of range: {minutes} minutes"))?;
        Ok(Self { timezone })
    }
}

impl Default for MessConfig {
    fn default() -> Self {
        Self {
            timezone: FixedOffset::east_opt(DEFAULT_MESS_UTC_OFFSET_MINUTES * 60)
                .unwrap_or_else(|| Utc.fix()),
        }
    }
}

pub struct ServerConfig {
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mess_timezone_is_ist() {
        let cfg = MessConfig::default();
        assert_eq!(cfg.timezone.local_minus_utc(), 330 * 60);
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        assert!(MessConfig::from_offset_minutes(24 * 60).is_err());
        assert!(MessConfig::from_offset_minutes(-300).is_ok());
    }
}
