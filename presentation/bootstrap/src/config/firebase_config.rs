use business::domain::backend::config::{BackendConfig, NewBackendConfigProps};
use serde_json::{Map, Value};
use std::env::{self, VarError};
use thiserror::Error;

/// Web app config object, as provided by Firebase App Hosting.
pub const WEBAPP_CONFIG_VAR: &str = "FIREBASE_WEBAPP_CONFIG";

pub const API_KEY_VAR: &str = "FIREBASE_API_KEY";
pub const AUTH_DOMAIN_VAR: &str = "FIREBASE_AUTH_DOMAIN";
pub const PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";
pub const STORAGE_BUCKET_VAR: &str = "FIREBASE_STORAGE_BUCKET";
pub const MESSAGING_SENDER_ID_VAR: &str = "FIREBASE_MESSAGING_SENDER_ID";
pub const APP_ID_VAR: &str = "FIREBASE_APP_ID";
pub const MEASUREMENT_ID_VAR: &str = "FIREBASE_MEASUREMENT_ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_json: {0}")]
    InvalidJson(String),
    #[error("config.not_unicode: {0}")]
    NotUnicode(String),
}

/// Load the backend config from environment variables
///
/// Environment variables:
/// - FIREBASE_WEBAPP_CONFIG: JSON object with the web config keys (optional)
/// - FIREBASE_API_KEY, FIREBASE_AUTH_DOMAIN, FIREBASE_PROJECT_ID,
///   FIREBASE_STORAGE_BUCKET, FIREBASE_MESSAGING_SENDER_ID, FIREBASE_APP_ID,
///   FIREBASE_MEASUREMENT_ID: used for any key the JSON object lacks
///
/// # Errors
/// Returns error if a key is set nowhere, a variable holds non-UTF-8 data,
/// or the JSON object is malformed
pub fn load_from_env() -> Result<BackendConfig, ConfigError> {
    load(|name| env_value(name, env::var(name)))
}

/// Unset is `None`; set but not UTF-8 is an error, not a missing variable.
fn env_value(
    name: &str,
    value: Result<String, VarError>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name.to_string())),
    }
}

pub fn load<F>(lookup: F) -> Result<BackendConfig, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    let webapp_config = match lookup(WEBAPP_CONFIG_VAR)? {
        Some(raw) => Some(
            serde_json::from_str::<Map<String, Value>>(&raw)
                .map_err(|e| ConfigError::InvalidJson(e.to_string()))?,
        ),
        None => None,
    };

    // JSON keys win; individual variables fill the gaps.
    let field = |option: &str, var: &'static str| -> Result<String, ConfigError> {
        let from_json = webapp_config
            .as_ref()
            .and_then(|object| object.get(option))
            .and_then(json_value);
        match from_json {
            Some(value) => Ok(value),
            None => lookup(var)?.ok_or(ConfigError::MissingVariable(var)),
        }
    };

    Ok(BackendConfig::new(NewBackendConfigProps {
        api_key: field("apiKey", API_KEY_VAR)?,
        auth_domain: field("authDomain", AUTH_DOMAIN_VAR)?,
        project_id: field("projectId", PROJECT_ID_VAR)?,
        storage_bucket: field("storageBucket", STORAGE_BUCKET_VAR)?,
        messaging_sender_id: field("messagingSenderId", MESSAGING_SENDER_ID_VAR)?,
        app_id: field("appId", APP_ID_VAR)?,
        measurement_id: field("measurementId", MEASUREMENT_ID_VAR)?,
    }))
}

fn json_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
