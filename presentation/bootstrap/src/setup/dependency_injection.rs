use std::sync::Arc;

use business::application::backend::initialize::InitializationGuard;
use business::domain::backend::sdk::SdkCapability;
use business::domain::logger::Logger;
use logger::TracingLogger;

pub struct DependencyContainer {
    pub guard: InitializationGuard,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // SDK adapters compiled into this build
        let capability = firebase::capability(logger.clone());

        Self::with_capability(capability, logger)
    }

    pub fn with_capability(capability: SdkCapability, logger: Arc<dyn Logger>) -> Self {
        Self {
            guard: InitializationGuard::new(capability, logger.clone()),
            logger,
        }
    }
}

impl Default for DependencyContainer {
    fn default() -> Self {
        Self::new()
    }
}
