use business::domain::backend::config::BackendConfig;

use super::firebase_config::{self, ConfigError};

pub struct AppConfig {
    pub firebase: BackendConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            firebase: firebase_config::load_from_env()?,
        })
    }
}
