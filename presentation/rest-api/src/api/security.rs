use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

use business::domain::auth::model::AuthClaims;
use business::domain::auth::services::TokenService;

/// Bearer token authentication. The token must have been issued by
/// `POST /auth/login`; its verified claims are handed to the handler.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub AuthClaims);

async fn bearer_checker(req: &Request, bearer: Bearer) -> Option<AuthClaims> {
    let Some(tokens) = req.data::<Arc<dyn TokenService>>() else {
        tracing::error!("No token service registered on the endpoint");
        return None;
    };

    match tokens.verify(&bearer.token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
