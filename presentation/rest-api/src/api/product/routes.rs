use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::value_objects::ProductQuery;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductPageResponse, ProductResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// List active products
    ///
    /// Every parameter is optional. Without `limit` all matching products are
    /// returned on one page; `limit` is capped at 100. Prices are in cents.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        page: Query<Option<u32>>,
        limit: Query<Option<u32>>,
        category: Query<Option<String>>,
        min_price: Query<Option<i64>>,
        max_price: Query<Option<i64>>,
        search: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let query = ProductQuery {
            page: page.0,
            limit: limit.0,
            category: category.0,
            min_price: min_price.0,
            max_price: max_price.0,
            search: search.0,
        };

        match self.get_all_use_case.execute(query).await {
            Ok(page) => GetAllProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllProductsResponse::BadRequest(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by id
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "product.invalid_id",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(Some(product)) => GetProductByIdResponse::Ok(Json(product.into())),
            Ok(None) => GetProductByIdResponse::NotFound(ErrorResponse::json(
                "NotFound",
                "product.not_found",
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductByIdResponse::InternalError(json)
            }
        }
    }

    /// Create a product
    ///
    /// Admin only.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: BearerAuth,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        if !auth.0.is_admin() {
            return CreateProductResponse::Forbidden(ErrorResponse::forbidden());
        }

        let body = body.0;
        let params = CreateProductParams {
            name: body.name,
            description: body.description,
            price_cents: body.price_cents,
            image_url: body.image_url,
            images: body.images,
            category: body.category,
            stock: body.stock,
            features: body.features,
            is_active: body.is_active.unwrap_or(true),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Admin only.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: BearerAuth, id: Path<String>) -> DeleteProductResponse {
        if !auth.0.is_admin() {
            return DeleteProductResponse::Forbidden(ErrorResponse::forbidden());
        }

        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "product.invalid_id",
            ));
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::setup::test_support::TestApp;

    fn lamp(price_cents: i64) -> serde_json::Value {
        json!({
            "name": "Desk Lamp",
            "description": "Warm LED lamp",
            "price_cents": price_cents,
            "category": "home",
            "stock": 5
        })
    }

    #[tokio::test]
    async fn should_let_admin_create_and_fetch_product() {
        let app = TestApp::new();
        let admin = app.admin_token().await;

        let resp = app
            .client
            .post("/products")
            .header("Authorization", format!("Bearer {admin}"))
            .body_json(&lamp(2_499))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let id = json.value().object().get("id").string().to_string();
        json.value().object().get("price").assert_string("24.99");

        let resp = app.client.get(format!("/products/{id}")).send().await;
        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("name")
            .assert_string("Desk Lamp");
    }

    #[tokio::test]
    async fn should_forbid_customer_from_creating_product() {
        let app = TestApp::new();
        let token = app.customer_token("shopper@example.com").await;

        let resp = app
            .client
            .post("/products")
            .header("Authorization", format!("Bearer {token}"))
            .body_json(&lamp(1_000))
            .send()
            .await;

        resp.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_require_token_to_create_product() {
        let app = TestApp::new();

        let resp = app.client.post("/products").body_json(&lamp(1_000)).send().await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product() {
        let app = TestApp::new();

        let resp = app
            .client
            .get(format!("/products/{}", uuid::Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(&json!({ "name": "NotFound", "message": "product.not_found" }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_malformed_product_id() {
        let app = TestApp::new();

        let resp = app.client.get("/products/not-a-uuid").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_filter_and_paginate_catalog() {
        let app = TestApp::new();
        let admin = app.admin_token().await;
        for price in [500, 1_500, 2_500] {
            app.client
                .post("/products")
                .header("Authorization", format!("Bearer {admin}"))
                .body_json(&lamp(price))
                .send()
                .await
                .assert_status(StatusCode::CREATED);
        }

        let resp = app
            .client
            .get("/products")
            .query("min_price", &1_000)
            .query("limit", &1)
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let page = json.value().object();
        page.get("total").assert_i64(2);
        page.get("items").array().assert_len(1);
    }

    #[tokio::test]
    async fn should_reject_inverted_price_range() {
        let app = TestApp::new();

        let resp = app
            .client
            .get("/products")
            .query("min_price", &900)
            .query("max_price", &100)
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_delete_product_then_report_not_found() {
        let app = TestApp::new();
        let admin = app.admin_token().await;
        let resp = app
            .client
            .post("/products")
            .header("Authorization", format!("Bearer {admin}"))
            .body_json(&lamp(900))
            .send()
            .await;
        let id = resp.json().await.value().object().get("id").string().to_string();

        app.client
            .delete(format!("/products/{id}"))
            .header("Authorization", format!("Bearer {admin}"))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        app.client
            .delete(format!("/products/{id}"))
            .header("Authorization", format!("Bearer {admin}"))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_price_beyond_storable_range() {
        let app = TestApp::new();
        let admin = app.admin_token().await;

        let resp = app
            .client
            .post("/products")
            .header("Authorization", format!("Bearer {admin}"))
            .body_json(&lamp(1_000_000_000_000))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({ "name": "ValidationError", "message": "product.invalid_price" }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_stock_beyond_storable_range() {
        let app = TestApp::new();
        let admin = app.admin_token().await;

        let resp = app
            .client
            .post("/products")
            .header("Authorization", format!("Bearer {admin}"))
            .body_json(&json!({
                "name": "Desk Lamp",
                "price_cents": 1_000,
                "category": "home",
                "stock": u32::MAX
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(&json!({ "name": "ValidationError", "message": "product.invalid_stock" }))
            .await;
    }

    #[tokio::test]
    async fn should_drop_cart_lines_and_reviews_of_deleted_product() {
        let app = TestApp::new();
        let admin = app.admin_token().await;
        let product_id = app.create_product("Kettle", 3_000).await;
        let token = app.customer_token("erin@example.com").await;
        app.client
            .post("/cart")
            .header("Authorization", format!("Bearer {token}"))
            .body_json(&json!({ "product_id": product_id, "quantity": 2 }))
            .send()
            .await
            .assert_status_is_ok();
        app.client
            .post(format!("/products/{product_id}/reviews"))
            .header("Authorization", format!("Bearer {token}"))
            .body_json(&json!({ "rating": 4 }))
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        app.client
            .delete(format!("/products/{product_id}"))
            .header("Authorization", format!("Bearer {admin}"))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let resp = app
            .client
            .get("/cart")
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("items").array().assert_len(0);
        cart.get("subtotal_cents").assert_i64(0);

        app.client
            .get(format!("/products/{product_id}/reviews"))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        app.client
            .post(format!("/products/{product_id}/reviews"))
            .header("Authorization", format!("Bearer {token}"))
            .body_json(&json!({ "rating": 5 }))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
