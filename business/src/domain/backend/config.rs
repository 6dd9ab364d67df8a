use serde::{Deserialize, Serialize};

/// Connection parameters identifying the backend project and its service endpoints.
///
/// Values are opaque and kept verbatim: nothing is validated, trimmed or
/// rewritten on the way to the SDK. The descriptor is immutable once built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    api_key: String,
    auth_domain: String,
    project_id: String,
    storage_bucket: String,
    messaging_sender_id: String,
    app_id: String,
    measurement_id: String,
}

pub struct NewBackendConfigProps {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

impl BackendConfig {
    /// Recognized option names, in the order the web SDK config object lists them.
    pub const OPTION_NAMES: [&'static str; 7] = [
        "apiKey",
        "authDomain",
        "projectId",
        "storageBucket",
        "messagingSenderId",
        "appId",
        "measurementId",
    ];

    pub fn new(props: NewBackendConfigProps) -> Self {
        Self {
            api_key: props.api_key,
            auth_domain: props.auth_domain,
            project_id: props.project_id,
            storage_bucket: props.storage_bucket,
            messaging_sender_id: props.messaging_sender_id,
            app_id: props.app_id,
            measurement_id: props.measurement_id,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn auth_domain(&self) -> &str {
        &self.auth_domain
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn storage_bucket(&self) -> &str {
        &self.storage_bucket
    }

    pub fn messaging_sender_id(&self) -> &str {
        &self.messaging_sender_id
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }

    /// Looks up an option by its recognized name.
    pub fn option(&self, name: &str) -> Option<&str> {
        match name {
            "apiKey" => Some(self.api_key()),
            "authDomain" => Some(self.auth_domain()),
            "projectId" => Some(self.project_id()),
            "storageBucket" => Some(self.storage_bucket()),
            "messagingSenderId" => Some(self.messaging_sender_id()),
            "appId" => Some(self.app_id()),
            "measurementId" => Some(self.measurement_id()),
            _ => None,
        }
    }
}

/// Keeps the last four characters; keys that short are hidden entirely.
fn mask(value: &str) -> String {
    let count = value.chars().count();
    if count <= 4 {
        return "***".to_string();
    }
    let visible: String = value.chars().skip(count - 4).collect();
    format!("***{}", visible)
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_key", &mask(&self.api_key))
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .field("measurement_id", &self.measurement_id)
            .finish()
    }
}
