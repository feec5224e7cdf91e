use std::sync::Arc;

use chrono::Duration;
use poem::endpoint::BoxEndpoint;
use poem::http::StatusCode;
use poem::test::TestClient;
use poem::{EndpointExt, Response};
use serde_json::json;

use business::domain::shared::value_objects::Email;
use security::{Argon2PasswordHasher, JwtTokenService};

use crate::setup::dependency_injection::{DependencyContainer, Repositories};
use crate::setup::server::Server;

pub const ADMIN_EMAIL: &str = "admin@example.com";
const PASSWORD: &str = "correct-horse-battery";

/// The full app over in-memory repositories, with cheap password hashing.
pub struct TestApp {
    pub client: TestClient<BoxEndpoint<'static, Response>>,
}

impl TestApp {
    pub fn new() -> Self {
        let container = DependencyContainer::new(
            Repositories::in_memory(),
            Arc::new(Argon2PasswordHasher::with_params(1024, 1, 1).unwrap()),
            Arc::new(JwtTokenService::new(b"test-secret", Duration::hours(1))),
            vec![Email::parse(ADMIN_EMAIL).unwrap()],
        );

        Self {
            client: TestClient::new(Server::build_app(container).boxed()),
        }
    }

    /// Registers the account if needed and returns a fresh access token.
    pub async fn login(&self, email: &str) -> String {
        let resp = self
            .client
            .post("/auth/register")
            .body_json(&json!({
                "email": email,
                "password": PASSWORD,
                "first_name": "Test",
                "last_name": "User"
            }))
            .send()
            .await;
        let status = resp.0.status();
        assert!(status == StatusCode::CREATED || status == StatusCode::CONFLICT);

        let resp = self
            .client
            .post("/auth/login")
            .body_json(&json!({ "email": email, "password": PASSWORD }))
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("access_token")
            .string()
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL).await
    }

    pub async fn customer_token(&self, email: &str) -> String {
        self.login(email).await
    }

    /// Creates an active product as admin and returns its id.
    pub async fn create_product(&self, name: &str, price_cents: i64) -> String {
        let admin = self.admin_token().await;
        let resp = self
            .client
            .post("/products")
            .header("Authorization", format!("Bearer {admin}"))
            .body_json(&json!({
                "name": name,
                "price_cents": price_cents,
                "category": "test"
            }))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        resp.json()
            .await
            .value()
            .object()
            .get("id")
            .string()
            .to_string()
    }
}
