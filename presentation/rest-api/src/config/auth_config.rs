use std::env;

use business::domain::shared::value_objects::Email;
use chrono::Duration;
use security::JwtTokenService;

/// Authentication settings
///
/// Environment variables:
/// - JWT_SECRET: HS256 signing secret. When unset a random secret is generated
///   and tokens do not survive a restart.
/// - JWT_TTL_SECONDS: Token lifetime (default: 3600)
/// - ADMIN_EMAILS: Comma-separated emails that register with the admin role
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub token_ttl_seconds: i64,
    pub admin_emails: Vec<Email>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            token_ttl_seconds: env::var("JWT_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(3600),
            admin_emails: parse_admin_emails(&env::var("ADMIN_EMAILS").unwrap_or_default()),
        }
    }

    pub fn token_service(&self) -> JwtTokenService {
        let ttl = Duration::seconds(self.token_ttl_seconds);
        match &self.jwt_secret {
            Some(secret) => JwtTokenService::new(secret.as_bytes(), ttl),
            None => {
                tracing::warn!("JWT_SECRET not set, tokens will be invalid after a restart");
                JwtTokenService::with_random_secret(ttl)
            }
        }
    }
}

fn parse_admin_emails(raw: &str) -> Vec<Email> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| {
            let email = Email::parse(s);
            if email.is_none() {
                tracing::warn!("Ignoring invalid admin email {:?}", s.trim());
            }
            email
        })
        .collect()
}
