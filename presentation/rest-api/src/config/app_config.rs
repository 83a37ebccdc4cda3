use super::{
    cors_config, nova_poshta_config::NovaPoshtaConfig, server_config::ServerConfig,
    session_config::SessionConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub session: SessionConfig,
    pub nova_poshta: NovaPoshtaConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            session: SessionConfig::from_env()?,
            nova_poshta: NovaPoshtaConfig::from_env()?,
        })
    }
}
