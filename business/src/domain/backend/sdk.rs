use std::sync::Arc;

use super::config::BackendConfig;

/// Name the SDK gives to an app initialized without an explicit name.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// Handle to an initialized backend client application.
///
/// Opaque to this crate: it is built by the SDK and only stored here for the
/// parts of the system that talk to backend services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientApp {
    name: String,
    options: BackendConfig,
}

impl ClientApp {
    pub fn new(name: impl Into<String>, options: BackendConfig) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &BackendConfig {
        &self.options
    }
}

/// Service port for the SDK entry point that builds a client application.
pub trait ClientAppFactory: Send + Sync {
    fn initialize_app(&self, config: &BackendConfig) -> ClientApp;
}

/// Service port for the optional telemetry (analytics) entry point.
pub trait TelemetryActivator: Send + Sync {
    fn activate(&self, app: &ClientApp);
}

/// Entry points exposed by a loaded SDK.
#[derive(Clone)]
pub struct SdkEntryPoints {
    pub factory: Arc<dyn ClientAppFactory>,
    pub telemetry: Option<Arc<dyn TelemetryActivator>>,
}

/// Whether the backend SDK is available to this process.
#[derive(Clone)]
pub enum SdkCapability {
    Available(SdkEntryPoints),
    Unavailable,
}

impl SdkCapability {
    pub fn available(factory: Arc<dyn ClientAppFactory>) -> Self {
        SdkCapability::Available(SdkEntryPoints {
            factory,
            telemetry: None,
        })
    }

    pub fn with_telemetry(
        factory: Arc<dyn ClientAppFactory>,
        telemetry: Arc<dyn TelemetryActivator>,
    ) -> Self {
        SdkCapability::Available(SdkEntryPoints {
            factory,
            telemetry: Some(telemetry),
        })
    }
}

impl std::fmt::Debug for SdkCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SdkCapability::Available(entry_points) => f
                .debug_struct("Available")
                .field("telemetry", &entry_points.telemetry.is_some())
                .finish(),
            SdkCapability::Unavailable => write!(f, "Unavailable"),
        }
    }
}
