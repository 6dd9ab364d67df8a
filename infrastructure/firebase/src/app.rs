use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use business::domain::backend::config::BackendConfig;
use business::domain::backend::sdk::{ClientApp, ClientAppFactory, DEFAULT_APP_NAME};
use business::domain::logger::Logger;

/// Firebase client app factory with a per-name app registry.
///
/// Initializing a name that is already registered returns the registered
/// app. Differing options are reported as `app/duplicate-app` and ignored.
pub struct FirebaseSdk {
    app_name: String,
    apps: Mutex<HashMap<String, ClientApp>>,
    logger: Arc<dyn Logger>,
}

impl FirebaseSdk {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            apps: Mutex::new(HashMap::new()),
            logger,
        }
    }

    fn registry(&self) -> MutexGuard<'_, HashMap<String, ClientApp>> {
        self.apps.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClientAppFactory for FirebaseSdk {
    fn initialize_app(&self, config: &BackendConfig) -> ClientApp {
        let mut apps = self.registry();

        if let Some(existing) = apps.get(&self.app_name) {
            if existing.options() != config {
                self.logger.warn(&format!(
                    "app/duplicate-app: Firebase app '{}' already exists with different options",
                    self.app_name
                ));
            }
            return existing.clone();
        }

        let app = ClientApp::new(self.app_name.clone(), config.clone());
        apps.insert(self.app_name.clone(), app.clone());
        self.logger.debug(&format!(
            "Firebase app '{}' registered for project {}",
            self.app_name,
            config.project_id()
        ));
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockLog, config_for, quiet_logger};

    #[test]
    fn should_register_default_app() {
        let sdk = FirebaseSdk::new(quiet_logger());

        let app = sdk.initialize_app(&config_for("demo-project"));

        assert_eq!(app.name(), DEFAULT_APP_NAME);
        assert_eq!(app.options().project_id(), "demo-project");
        assert_eq!(sdk.registry().get(DEFAULT_APP_NAME), Some(&app));
    }

    #[test]
    fn should_return_registered_app_when_options_are_equal() {
        let sdk = FirebaseSdk::new(quiet_logger());

        let first = sdk.initialize_app(&config_for("demo-project"));
        let second = sdk.initialize_app(&config_for("demo-project"));

        assert_eq!(first, second);
        assert_eq!(sdk.registry().len(), 1);
    }

    #[test]
    fn should_warn_and_keep_registered_app_when_options_differ() {
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.starts_with("app/duplicate-app"))
            .times(1)
            .returning(|_| ());
        let sdk = FirebaseSdk::new(Arc::new(logger));

        let first = sdk.initialize_app(&config_for("demo-project"));
        let second = sdk.initialize_app(&config_for("other-project"));

        assert_eq!(second, first);
        assert_eq!(second.options().project_id(), "demo-project");
        assert_eq!(sdk.registry().len(), 1);
    }
}
