use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, ClearCartResponse, UpdateCartItemRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_items_use_case: Arc<dyn GetCartItemsUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_items_use_case: Arc<dyn GetCartItemsUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_items_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

fn invalid_id(message: &str) -> Json<ErrorResponse> {
    ErrorResponse::json("ValidationError", message)
}

/// Shopping cart API
///
/// Every endpoint works on the cart of the authenticated user.
#[OpenApi]
impl CartApi {
    /// Get the cart with its totals
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: BearerAuth) -> CartResult {
        let params = GetCartItemsParams {
            user_id: auth.0.user_id,
        };
        CartResult::from_outcome(self.get_items_use_case.execute(params).await)
    }

    /// Add a product to the cart
    ///
    /// Adding a product that is already in the cart increases its quantity.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: BearerAuth, body: Json<AddCartItemRequest>) -> CartResult {
        let Ok(product_id) = Uuid::parse_str(&body.0.product_id) else {
            return CartResult::BadRequest(invalid_id("cart.invalid_product_id"));
        };

        let params = AddCartItemParams {
            user_id: auth.0.user_id,
            product_id,
            quantity: body.0.quantity,
        };
        CartResult::from_outcome(self.add_item_use_case.execute(params).await)
    }

    /// Set the quantity of a cart line
    #[oai(path = "/cart/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartResult {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return CartResult::BadRequest(invalid_id("cart.invalid_id"));
        };

        let params = UpdateCartItemQuantityParams {
            user_id: auth.0.user_id,
            id,
            quantity: body.0.quantity,
        };
        CartResult::from_outcome(self.update_quantity_use_case.execute(params).await)
    }

    /// Remove a line from the cart
    ///
    /// Removing a product that is not in the cart is not an error.
    #[oai(path = "/cart/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, auth: BearerAuth, id: Path<String>) -> CartResult {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return CartResult::BadRequest(invalid_id("cart.invalid_id"));
        };

        let params = RemoveCartItemParams {
            user_id: auth.0.user_id,
            id,
        };
        CartResult::from_outcome(self.remove_item_use_case.execute(params).await)
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, auth: BearerAuth) -> ClearCartResult {
        let params = ClearCartParams {
            user_id: auth.0.user_id,
        };

        match self.clear_use_case.execute(params).await {
            Ok(count) => ClearCartResult::Ok(Json(ClearCartResponse { count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResult::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartResult {
    fn from_outcome(outcome: Result<Cart, CartError>) -> Self {
        match outcome {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartResult::BadRequest(json),
                    404 => CartResult::NotFound(json),
                    _ => CartResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResult {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
