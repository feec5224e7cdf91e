use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api_client::ApiClient;
use crate::error::ClientError;
use crate::models::{Credentials, Registration, User};

/// The signed-in user, if any.
pub struct AuthStore {
    client: Arc<ApiClient>,
    user: RwLock<Option<User>>,
}

impl AuthStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            user: RwLock::new(None),
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.user.read().await.as_ref().is_some_and(User::is_admin)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let login = self
            .client
            .login(Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        *self.user.write().await = Some(login.user.clone());
        Ok(login.user)
    }

    /// Creates the account and signs in with it.
    pub async fn register(&self, registration: Registration) -> Result<User, ClientError> {
        self.client.register(&registration).await?;
        self.login(&registration.email, &registration.password).await
    }

    pub async fn logout(&self) {
        self.client.logout().await;
        *self.user.write().await = None;
    }

    /// Reloads the profile for the current token. A rejected token signs the
    /// user out; other failures keep the known user.
    pub async fn refresh(&self) -> Option<User> {
        if !self.client.is_authenticated().await {
            *self.user.write().await = None;
            return None;
        }

        match self.client.me().await {
            Ok(user) => {
                *self.user.write().await = Some(user.clone());
                Some(user)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Session expired, signing out");
                self.logout().await;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to refresh profile");
                self.current_user().await
            }
        }
    }
}
