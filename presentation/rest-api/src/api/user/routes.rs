use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::get_all::GetAllUsersUseCase;
use business::domain::user::use_cases::get_profile::{
    GetUserProfileParams, GetUserProfileUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;

pub struct UserApi {
    get_profile_use_case: Arc<dyn GetUserProfileUseCase>,
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
}

impl UserApi {
    pub fn new(
        get_profile_use_case: Arc<dyn GetUserProfileUseCase>,
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    ) -> Self {
        Self {
            get_profile_use_case,
            get_all_use_case,
        }
    }
}

/// User accounts API
#[OpenApi]
impl UserApi {
    /// Profile of the authenticated user
    #[oai(path = "/users/me", method = "get", tag = "ApiTags::Users")]
    async fn get_me(&self, auth: BearerAuth) -> GetProfileResponse {
        let params = GetUserProfileParams {
            user_id: auth.0.user_id,
        };

        match self.get_profile_use_case.execute(params).await {
            Ok(user) => GetProfileResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProfileResponse::NotFound(json),
                    _ => GetProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// List every user
    ///
    /// Admin only.
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all(&self, auth: BearerAuth) -> GetAllUsersResponse {
        if !auth.0.is_admin() {
            return GetAllUsersResponse::Forbidden(ErrorResponse::forbidden());
        }

        match self.get_all_use_case.execute().await {
            Ok(users) => GetAllUsersResponse::Ok(Json(users.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllUsersResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;

    use crate::setup::test_support::TestApp;

    #[tokio::test]
    async fn should_return_own_profile_without_password() {
        let app = TestApp::new();
        let token = app.customer_token("erin@example.com").await;

        let resp = app
            .client
            .get("/users/me")
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body = resp.0.into_body().into_string().await.unwrap();
        let user: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(user["email"], "erin@example.com");
        assert_eq!(user["role"], "customer");
        assert!(user.get("password_hash").is_none());
        assert!(user.get("password").is_none());
    }

    #[tokio::test]
    async fn should_list_users_for_admin_only() {
        let app = TestApp::new();
        let admin = app.admin_token().await;
        let customer = app.customer_token("erin@example.com").await;

        app.client
            .get("/users")
            .header("Authorization", format!("Bearer {customer}"))
            .send()
            .await
            .assert_status(StatusCode::FORBIDDEN);

        let resp = app
            .client
            .get("/users")
            .header("Authorization", format!("Bearer {admin}"))
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(2);
    }

    #[tokio::test]
    async fn should_reject_garbage_token() {
        let app = TestApp::new();

        let resp = app
            .client
            .get("/users/me")
            .header("Authorization", "Bearer not-a-token")
            .send()
            .await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
        resp.assert_json(&serde_json::json!({
            "name": "Unauthorized",
            "message": "auth.unauthorized"
        }))
        .await;
    }
}
