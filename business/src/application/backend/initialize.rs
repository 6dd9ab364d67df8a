use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::domain::backend::config::BackendConfig;
use crate::domain::backend::errors::BootstrapError;
use crate::domain::backend::sdk::SdkCapability;
use crate::domain::backend::state::BootstrapState;
use crate::domain::backend::use_cases::initialize::InitializeBackendUseCase;
use crate::domain::logger::Logger;

pub const MISSING_SDK_MESSAGE: &str =
    "Backend SDK not loaded. Provide the SDK client factory before initializing the backend.";

static UNINITIALIZED: BootstrapState = BootstrapState::Uninitialized;

/// One-shot bootstrap of the backend client.
///
/// The first `execute` decides the terminal state from the injected
/// capability. The outcome is kept for the lifetime of the guard and no
/// later call re-checks the capability or calls the SDK again.
pub struct InitializationGuard {
    capability: SdkCapability,
    logger: Arc<dyn Logger>,
    state: OnceCell<BootstrapState>,
}

impl InitializationGuard {
    pub fn new(capability: SdkCapability, logger: Arc<dyn Logger>) -> Self {
        Self {
            capability,
            logger,
            state: OnceCell::new(),
        }
    }

    pub fn state(&self) -> &BootstrapState {
        self.state.get().unwrap_or(&UNINITIALIZED)
    }

    fn evaluate(&self, config: BackendConfig) -> BootstrapState {
        let entry_points = match &self.capability {
            SdkCapability::Available(entry_points) => entry_points,
            SdkCapability::Unavailable => {
                self.logger.error(MISSING_SDK_MESSAGE);
                return BootstrapState::Failed(BootstrapError::missing_dependency());
            }
        };

        self.logger.info(&format!(
            "Initializing backend client for project: {}",
            config.project_id()
        ));

        let app = entry_points.factory.initialize_app(&config);

        let telemetry_active = match &entry_points.telemetry {
            Some(telemetry) => {
                telemetry.activate(&app);
                self.logger.info(&format!(
                    "Telemetry activated with measurement id: {}",
                    app.options().measurement_id()
                ));
                true
            }
            None => {
                self.logger
                    .debug("Telemetry capability not present, skipping activation");
                false
            }
        };

        self.logger
            .info(&format!("Backend client initialized: {}", app.name()));

        BootstrapState::Initialized {
            app,
            telemetry_active,
        }
    }
}

impl InitializeBackendUseCase for InitializationGuard {
    fn execute(&self, config: BackendConfig) -> &BootstrapState {
        self.state.get_or_init(|| self.evaluate(config))
    }
}
