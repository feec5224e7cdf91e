use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::models::{
    Cart, ClearCartResponse, Credentials, ErrorBody, Health, LoginResponse, NewProduct, NewReview,
    Product, ProductPage, ProductQuery, Registration, Review, User,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
struct Session {
    token: Option<String>,
    /// Kept after a successful login so an expired token can be replaced.
    credentials: Option<Credentials>,
}

/// HTTP client for the storefront API.
///
/// Authenticated calls send the current bearer token. When the server answers
/// 401 and credentials are known, the client signs in again once and repeats
/// the request.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: RwLock<Session>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            session: RwLock::new(Session::default()),
        })
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token.clone()
    }

    pub async fn set_token(&self, token: Option<String>) {
        self.session.write().await.token = token;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.token.is_some()
    }

    // Health

    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.send(Method::GET, "health", false, |r| r).await?;
        decode(response).await
    }

    // Products

    pub async fn products(&self, query: &ProductQuery) -> Result<ProductPage, ClientError> {
        let response = self
            .send(Method::GET, "products", false, |r| r.query(query))
            .await?;
        decode(response).await
    }

    /// `None` when no product has this id.
    pub async fn product(&self, id: &str) -> Result<Option<Product>, ClientError> {
        let response = self
            .send(Method::GET, &format!("products/{id}"), false, |r| r)
            .await?;
        match decode(response).await {
            Ok(product) => Ok(Some(product)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ClientError> {
        let response = self
            .send(Method::POST, "products", true, |r| r.json(product))
            .await?;
        decode(response).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .send(Method::DELETE, &format!("products/{id}"), true, |r| r)
            .await?;
        expect_success(response).await
    }

    // Reviews

    pub async fn reviews(&self, product_id: &str) -> Result<Vec<Review>, ClientError> {
        let response = self
            .send(
                Method::GET,
                &format!("products/{product_id}/reviews"),
                false,
                |r| r,
            )
            .await?;
        decode(response).await
    }

    pub async fn create_review(
        &self,
        product_id: &str,
        review: &NewReview,
    ) -> Result<Review, ClientError> {
        let response = self
            .send(
                Method::POST,
                &format!("products/{product_id}/reviews"),
                true,
                |r| r.json(review),
            )
            .await?;
        decode(response).await
    }

    // Cart

    pub async fn cart(&self) -> Result<Cart, ClientError> {
        let response = self.send(Method::GET, "cart", true, |r| r).await?;
        decode(response).await
    }

    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Result<Cart, ClientError> {
        let body = json!({ "product_id": product_id, "quantity": quantity });
        let response = self
            .send(Method::POST, "cart", true, |r| r.json(&body))
            .await?;
        decode(response).await
    }

    pub async fn update_cart_item(&self, id: &str, quantity: u32) -> Result<Cart, ClientError> {
        let body = json!({ "quantity": quantity });
        let response = self
            .send(Method::PUT, &format!("cart/{id}"), true, |r| r.json(&body))
            .await?;
        decode(response).await
    }

    pub async fn remove_cart_item(&self, id: &str) -> Result<Cart, ClientError> {
        let response = self
            .send(Method::DELETE, &format!("cart/{id}"), true, |r| r)
            .await?;
        decode(response).await
    }

    /// Returns the number of lines removed.
    pub async fn clear_cart(&self) -> Result<u64, ClientError> {
        let response = self.send(Method::DELETE, "cart", true, |r| r).await?;
        let cleared: ClearCartResponse = decode(response).await?;
        Ok(cleared.count)
    }

    // Auth and users

    pub async fn register(&self, registration: &Registration) -> Result<User, ClientError> {
        let response = self
            .send(Method::POST, "auth/register", false, |r| r.json(registration))
            .await?;
        decode(response).await
    }

    /// Signs in and remembers the token and credentials for later calls.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ClientError> {
        let login = self.request_login(&credentials).await?;

        let mut session = self.session.write().await;
        session.token = Some(login.access_token.clone());
        session.credentials = Some(credentials);
        Ok(login)
    }

    pub async fn logout(&self) {
        *self.session.write().await = Session::default();
    }

    pub async fn me(&self) -> Result<User, ClientError> {
        let response = self.send(Method::GET, "users/me", true, |r| r).await?;
        decode(response).await
    }

    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        let response = self.send(Method::GET, "users", true, |r| r).await?;
        decode(response).await
    }

    // Guarded fetches for views that render with whatever data is available

    pub async fn products_or_empty(&self, query: &ProductQuery) -> Vec<Product> {
        or_default("products", self.products(query).await.map(|page| page.items))
    }

    pub async fn reviews_or_empty(&self, product_id: &str) -> Vec<Review> {
        or_default("reviews", self.reviews(product_id).await)
    }

    pub async fn cart_or_empty(&self) -> Cart {
        or_default("cart", self.cart().await)
    }

    async fn request_login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let response = self
            .send(Method::POST, "auth/login", false, |r| r.json(credentials))
            .await?;
        decode(response).await
    }

    async fn send<F>(
        &self,
        method: Method,
        path: &str,
        authorized: bool,
        prepare: F,
    ) -> Result<Response, ClientError>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path)?;
        let response = self
            .dispatch(method.clone(), url.clone(), authorized, &prepare)
            .await?;

        if authorized && response.status() == StatusCode::UNAUTHORIZED && self.reauthenticate().await?
        {
            tracing::debug!(%url, "Retrying request with a fresh token");
            return self.dispatch(method, url, authorized, &prepare).await;
        }

        Ok(response)
    }

    async fn dispatch<F>(
        &self,
        method: Method,
        url: Url,
        authorized: bool,
        prepare: &F,
    ) -> Result<Response, ClientError>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let mut request = self.http.request(method, url);
        if authorized && let Some(token) = self.token().await {
            request = request.bearer_auth(token);
        }
        Ok(prepare(request).send().await?)
    }

    /// Signs in again with the remembered credentials. `Ok(false)` when there
    /// are none.
    async fn reauthenticate(&self) -> Result<bool, ClientError> {
        let Some(credentials) = self.session.read().await.credentials.clone() else {
            return Ok(false);
        };

        tracing::info!("Access token rejected, signing in again");
        match Box::pin(self.request_login(&credentials)).await {
            Ok(login) => {
                self.session.write().await.token = Some(login.access_token);
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Re-authentication failed");
                self.logout().await;
                Err(e)
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(status_error(status, &body));
    }
    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

async fn expect_success(response: Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.bytes().await?;
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(error) => ClientError::Status {
            status: status.as_u16(),
            name: error.name,
            message: error.message,
        },
        Err(_) => ClientError::Status {
            status: status.as_u16(),
            name: status.canonical_reason().unwrap_or("Error").to_string(),
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

fn or_default<T: Default>(what: &str, result: Result<T, ClientError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to fetch {}, using empty result", what);
        T::default()
    })
}
