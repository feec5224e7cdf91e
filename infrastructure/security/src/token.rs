use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use serde::{Deserialize, Serialize};

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{AuthClaims, IssuedToken};
use business::domain::auth::services::TokenService;
use business::domain::shared::value_objects::{Email, UserId};
use business::domain::user::model::User;
use business::domain::user::value_objects::UserRole;

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: String,
    email: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// HS256 bearer tokens signed with a shared secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Uses a secret generated for this process only. Tokens stop verifying
    /// after a restart.
    pub fn with_random_secret(ttl: Duration) -> Self {
        let secret: [u8; 32] = rand::rng().random();
        Self::new(&secret, ttl)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;
        let claims = JwtClaims {
            sub: user.id.to_string(),
            email: user.email.to_string(),
            role: user.role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(error = %e, "Could not sign access token");
                AuthError::TokenSigningFailed
            })?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    fn verify(&self, token: &str) -> Result<AuthClaims, AuthError> {
        let data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!(error = %e, "Rejected bearer token");
                    AuthError::InvalidToken
                }
            },
        )?;
        let claims = data.claims;

        let user_id = claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidToken)?;
        let email = Email::parse(&claims.email).ok_or(AuthError::InvalidToken)?;
        let role = claims
            .role
            .parse::<UserRole>()
            .map_err(|_| AuthError::InvalidToken)?;
        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or(AuthError::InvalidToken)?;

        Ok(AuthClaims {
            user_id,
            email,
            role,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::user::model::NewUserProps;

    fn user(role: UserRole) -> User {
        User::new(NewUserProps {
            email: Email::parse("margaret@example.com").unwrap(),
            password_hash: "hash".to_string(),
            first_name: "Margaret".to_string(),
            last_name: "Hamilton".to_string(),
            role,
        })
    }

    #[test]
    fn should_round_trip_identity_through_token() {
        let service = JwtTokenService::new(b"test-secret", Duration::hours(1));
        let user = user(UserRole::Admin);

        let issued = service.issue(&user).unwrap();
        let claims = service.verify(&issued.access_token).unwrap();

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, user.email);
        assert!(claims.is_admin());
        assert!(issued.expires_in_seconds() > 3_500);
    }

    #[test]
    fn should_reject_expired_token() {
        let service = JwtTokenService::new(b"test-secret", Duration::seconds(-30));

        let issued = service.issue(&user(UserRole::Customer)).unwrap();

        assert!(matches!(
            service.verify(&issued.access_token).unwrap_err(),
            AuthError::TokenExpired
        ));
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let issuer = JwtTokenService::new(b"secret-a", Duration::hours(1));
        let verifier = JwtTokenService::new(b"secret-b", Duration::hours(1));

        let issued = issuer.issue(&user(UserRole::Customer)).unwrap();

        assert!(matches!(
            verifier.verify(&issued.access_token).unwrap_err(),
            AuthError::InvalidToken
        ));
    }

    #[test]
    fn should_reject_garbage() {
        let service = JwtTokenService::with_random_secret(Duration::hours(1));

        assert!(matches!(
            service.verify("not.a.jwt").unwrap_err(),
            AuthError::InvalidToken
        ));
    }
}
