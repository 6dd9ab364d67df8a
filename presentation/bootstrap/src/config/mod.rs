pub mod app_config;
pub mod firebase_config;
