use super::{
    auth_config::AuthConfig, cors_config, database_config::DatabaseSettings,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}
