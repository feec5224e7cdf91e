use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};
use business::domain::review::use_cases::get_by_product::{
    GetProductReviewsParams, GetProductReviewsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::review::dto::{CreateReviewRequest, ReviewResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    create_use_case: Arc<dyn CreateReviewUseCase>,
    get_by_product_use_case: Arc<dyn GetProductReviewsUseCase>,
}

impl ReviewApi {
    pub fn new(
        create_use_case: Arc<dyn CreateReviewUseCase>,
        get_by_product_use_case: Arc<dyn GetProductReviewsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_product_use_case,
        }
    }
}

fn invalid_product_id() -> Json<ErrorResponse> {
    ErrorResponse::json("ValidationError", "review.invalid_product_id")
}

/// Product reviews API
#[OpenApi]
impl ReviewApi {
    /// List reviews of a product, newest first
    #[oai(path = "/products/:id/reviews", method = "get", tag = "ApiTags::Reviews")]
    async fn get_product_reviews(&self, id: Path<String>) -> GetProductReviewsResponse {
        let Ok(product_id) = Uuid::parse_str(&id.0) else {
            return GetProductReviewsResponse::BadRequest(invalid_product_id());
        };

        match self
            .get_by_product_use_case
            .execute(GetProductReviewsParams { product_id })
            .await
        {
            Ok(reviews) => GetProductReviewsResponse::Ok(Json(
                reviews.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductReviewsResponse::NotFound(json),
                    _ => GetProductReviewsResponse::InternalError(json),
                }
            }
        }
    }

    /// Review a product
    ///
    /// One review per user and product. Updates the product's rating.
    #[oai(path = "/products/:id/reviews", method = "post", tag = "ApiTags::Reviews")]
    async fn create_review(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<CreateReviewRequest>,
    ) -> CreateReviewResponse {
        let Ok(product_id) = Uuid::parse_str(&id.0) else {
            return CreateReviewResponse::BadRequest(invalid_product_id());
        };

        let params = CreateReviewParams {
            user_id: auth.0.user_id,
            product_id,
            rating: body.0.rating,
            comment: body.0.comment,
        };

        match self.create_use_case.execute(params).await {
            Ok(review) => CreateReviewResponse::Created(Json(review.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateReviewResponse::BadRequest(json),
                    404 => CreateReviewResponse::NotFound(json),
                    409 => CreateReviewResponse::Conflict(json),
                    _ => CreateReviewResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductReviewsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateReviewResponse {
    #[oai(status = 201)]
    Created(Json<ReviewResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::setup::test_support::TestApp;

    #[tokio::test]
    async fn should_create_review_and_update_product_rating() {
        let app = TestApp::new();
        let product_id = app.create_product("Tent", 15_000).await;
        let alice = app.customer_token("alice@example.com").await;
        let bob = app.customer_token("bob@example.com").await;

        for (token, rating) in [(&alice, 5), (&bob, 2)] {
            app.client
                .post(format!("/products/{product_id}/reviews"))
                .header("Authorization", format!("Bearer {token}"))
                .body_json(&json!({ "rating": rating }))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }

        let resp = app.client.get(format!("/products/{product_id}")).send().await;
        let json = resp.json().await;
        let product = json.value().object();
        product.get("review_count").assert_i64(2);
        product.get("rating").assert_f64(3.5);

        let resp = app
            .client
            .get(format!("/products/{product_id}/reviews"))
            .send()
            .await;
        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(2);
    }

    #[tokio::test]
    async fn should_reject_second_review_from_same_user() {
        let app = TestApp::new();
        let product_id = app.create_product("Tent", 15_000).await;
        let token = app.customer_token("alice@example.com").await;
        let review = json!({ "rating": 4, "comment": "Roomy" });

        app.client
            .post(format!("/products/{product_id}/reviews"))
            .header("Authorization", format!("Bearer {token}"))
            .body_json(&review)
            .send()
            .await
            .assert_status(StatusCode::CREATED);
        let resp = app
            .client
            .post(format!("/products/{product_id}/reviews"))
            .header("Authorization", format!("Bearer {token}"))
            .body_json(&review)
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_reject_rating_out_of_range() {
        let app = TestApp::new();
        let product_id = app.create_product("Tent", 15_000).await;
        let token = app.customer_token("alice@example.com").await;

        let resp = app
            .client
            .post(format!("/products/{product_id}/reviews"))
            .header("Authorization", format!("Bearer {token}"))
            .body_json(&json!({ "rating": 6 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_not_found_for_reviews_of_unknown_product() {
        let app = TestApp::new();

        let resp = app
            .client
            .get(format!("/products/{}/reviews", uuid::Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
