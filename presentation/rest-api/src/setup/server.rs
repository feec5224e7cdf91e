use poem::http::StatusCode;
use poem::{
    Endpoint, EndpointExt, Response, Route, Server as PoemServer, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Routes plus the request data and error handling every deployment
    /// needs. CORS and request tracing are added by `run`.
    pub fn build_app(container: DependencyContainer) -> impl Endpoint<Output = Response> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.review_api,
                container.cart_api,
                container.auth_api,
                container.user_api,
            ),
            "Storefront API",
            env!("CARGO_PKG_VERSION"),
        );

        Route::new()
            .nest("/", api_service)
            .data(container.token_service)
            .catch_all_error(json_error)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(container).with(config.cors).with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Renders framework-level failures (unknown route, unparsable request,
/// missing or invalid bearer token) in the same JSON shape as handler errors.
async fn json_error(err: poem::Error) -> Response {
    let status = err.status();
    let (name, message) = match status {
        StatusCode::UNAUTHORIZED => ("Unauthorized", "auth.unauthorized"),
        StatusCode::NOT_FOUND => ("NotFound", "route.not_found"),
        StatusCode::METHOD_NOT_ALLOWED => ("MethodNotAllowed", "route.method_not_allowed"),
        s if s.is_client_error() => ("BadRequest", "request.invalid"),
        _ => ("InternalError", "internal.unexpected"),
    };

    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::debug!("Request rejected with {}: {}", status, err);
    }

    Response::builder()
        .status(status)
        .content_type("application/json")
        .body(serde_json::json!({ "name": name, "message": message }).to_string())
}
