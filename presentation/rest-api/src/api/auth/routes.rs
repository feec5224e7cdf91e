use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};

use crate::api::auth::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
        }
    }
}

/// Authentication API
#[OpenApi]
impl AuthApi {
    /// Register a new account
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let body = body.0;
        let params = RegisterParams {
            email: body.email,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    409 => RegisterResponse::Conflict(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Exchange credentials for a bearer token
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginApiResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(result) => LoginApiResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginApiResponse::Unauthorized(json),
                    _ => LoginApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginApiResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::setup::test_support::TestApp;

    fn registration(email: &str, password: &str) -> serde_json::Value {
        json!({
            "email": email,
            "password": password,
            "first_name": "Frank",
            "last_name": "Herbert"
        })
    }

    #[tokio::test]
    async fn should_register_then_login() {
        let app = TestApp::new();

        let resp = app
            .client
            .post("/auth/register")
            .body_json(&registration("frank@example.com", "spice-must-flow"))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);

        let resp = app
            .client
            .post("/auth/login")
            .body_json(&json!({ "email": "Frank@Example.com", "password": "spice-must-flow" }))
            .send()
            .await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("token_type").assert_string("Bearer");
        assert!(!body.get("access_token").string().is_empty());
        body.get("user")
            .object()
            .get("email")
            .assert_string("frank@example.com");
    }

    #[tokio::test]
    async fn should_reject_duplicate_registration() {
        let app = TestApp::new();
        let body = registration("frank@example.com", "spice-must-flow");

        app.client
            .post("/auth/register")
            .body_json(&body)
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        let resp = app.client.post("/auth/register").body_json(&body).send().await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_reject_short_password() {
        let app = TestApp::new();

        let resp = app
            .client
            .post("/auth/register")
            .body_json(&registration("frank@example.com", "short"))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_give_same_error_for_wrong_password_and_unknown_email() {
        let app = TestApp::new();
        app.customer_token("frank@example.com").await;
        let expected = json!({ "name": "Unauthorized", "message": "auth.invalid_credentials" });

        let wrong_password = app
            .client
            .post("/auth/login")
            .body_json(&json!({ "email": "frank@example.com", "password": "wrong-password" }))
            .send()
            .await;
        wrong_password.assert_status(StatusCode::UNAUTHORIZED);
        wrong_password.assert_json(&expected).await;

        let unknown_email = app
            .client
            .post("/auth/login")
            .body_json(&json!({ "email": "nobody@example.com", "password": "wrong-password" }))
            .send()
            .await;
        unknown_email.assert_status(StatusCode::UNAUTHORIZED);
        unknown_email.assert_json(&expected).await;
    }
}
