use business::domain::backend::config::BackendConfig;

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const STORAGE_BASE_URL: &str = "https://firebasestorage.googleapis.com/v0";
pub const ANALYTICS_COLLECT_URL: &str = "https://www.google-analytics.com/g/collect";

/// Redirect handler served on the auth domain for popup/redirect sign-in.
pub fn auth_handler_url(config: &BackendConfig) -> String {
    format!("https://{}/__/auth/handler", config.auth_domain())
}

/// Root of the default Firestore database documents for the project.
pub fn firestore_documents_url(config: &BackendConfig) -> String {
    format!(
        "{}/projects/{}/databases/(default)/documents",
        FIRESTORE_BASE_URL,
        config.project_id()
    )
}

/// Object listing root of the storage bucket.
pub fn storage_bucket_url(config: &BackendConfig) -> String {
    format!("{}/b/{}/o", STORAGE_BASE_URL, config.storage_bucket())
}

pub fn analytics_collect_url(config: &BackendConfig) -> String {
    format!("{}?tid={}", ANALYTICS_COLLECT_URL, config.measurement_id())
}
