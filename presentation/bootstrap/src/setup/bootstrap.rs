use business::application::backend::initialize::InitializationGuard;
use business::domain::backend::state::BootstrapState;
use business::domain::backend::use_cases::initialize::InitializeBackendUseCase;
use business::domain::logger::Logger;
use firebase::endpoints;
use once_cell::sync::OnceCell;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Process-wide guard; the client app it holds lives as long as the process.
static GUARD: OnceCell<InitializationGuard> = OnceCell::new();

pub struct Bootstrap;

impl Bootstrap {
    /// Runs the backend bootstrap for this process and reports the outcome.
    ///
    /// Only the first container is installed. Later runs reuse it and get
    /// back the state recorded by the first pass.
    pub fn run(config: AppConfig, container: DependencyContainer) -> &'static BootstrapState {
        let DependencyContainer { guard, logger } = container;
        let state = GUARD.get_or_init(|| guard).execute(config.firebase);
        Self::report(state, logger.as_ref());
        state
    }

    /// Logs the ready backend and its service endpoints.
    ///
    /// A failed bootstrap has already emitted its diagnostic, so nothing
    /// more is written for it.
    pub fn report(state: &BootstrapState, logger: &dyn Logger) {
        let BootstrapState::Initialized {
            app,
            telemetry_active,
        } = state
        else {
            return;
        };

        let options = app.options();
        logger.info(&format!(
            "Backend ready: app {} for project {} (telemetry active: {})",
            app.name(),
            options.project_id(),
            telemetry_active
        ));
        logger.debug(&format!("Auth handler: {}", endpoints::auth_handler_url(options)));
        logger.debug(&format!(
            "Firestore documents: {}",
            endpoints::firestore_documents_url(options)
        ));
        logger.debug(&format!(
            "Storage bucket: {}",
            endpoints::storage_bucket_url(options)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use business::domain::backend::config::{BackendConfig, NewBackendConfigProps};
    use business::domain::backend::errors::BootstrapError;
    use business::domain::backend::sdk::{ClientApp, DEFAULT_APP_NAME, SdkCapability};
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn backend_config() -> BackendConfig {
        BackendConfig::new(NewBackendConfigProps {
            api_key: "key".to_string(),
            auth_domain: "demo.firebaseapp.com".to_string(),
            project_id: "demo".to_string(),
            storage_bucket: "demo.appspot.com".to_string(),
            messaging_sender_id: "1".to_string(),
            app_id: "1:1:web:1".to_string(),
            measurement_id: "G-1".to_string(),
        })
    }

    fn app_config() -> AppConfig {
        AppConfig {
            firebase: backend_config(),
        }
    }

    #[test]
    fn should_report_ready_backend_with_endpoints() {
        // Arrange
        let state = BootstrapState::Initialized {
            app: ClientApp::new(DEFAULT_APP_NAME, backend_config()),
            telemetry_active: true,
        };
        let mut logger = MockLog::new();
        logger
            .expect_info()
            .withf(|message| {
                message.starts_with("Backend ready: app [DEFAULT] for project demo")
                    && message.ends_with("(telemetry active: true)")
            })
            .times(1)
            .returning(|_| ());
        logger
            .expect_debug()
            .withf(|message| message == "Auth handler: https://demo.firebaseapp.com/__/auth/handler")
            .times(1)
            .returning(|_| ());
        logger
            .expect_debug()
            .withf(|message| message.starts_with("Firestore documents: "))
            .times(1)
            .returning(|_| ());
        logger
            .expect_debug()
            .withf(|message| message.starts_with("Storage bucket: "))
            .times(1)
            .returning(|_| ());

        // Act
        Bootstrap::report(&state, &logger);
    }

    #[test]
    fn should_write_nothing_more_for_failed_bootstrap() {
        // No expectations: any log call fails the test.
        let logger = MockLog::new();
        let state = BootstrapState::Failed(BootstrapError::MissingDependency);

        Bootstrap::report(&state, &logger);
    }

    // The guard is process-wide, so every assertion on it lives in this one test.
    #[test]
    fn should_emit_single_diagnostic_and_keep_first_outcome_for_process_lifetime() {
        // Arrange
        let mut first_logger = MockLog::new();
        first_logger.expect_error().times(1).returning(|_| ());
        let first_container = DependencyContainer::with_capability(
            SdkCapability::Unavailable,
            Arc::new(first_logger),
        );
        let second_container = DependencyContainer::with_capability(
            SdkCapability::Unavailable,
            Arc::new(MockLog::new()),
        );

        // Act
        let first = Bootstrap::run(app_config(), first_container);
        let second = Bootstrap::run(app_config(), second_container);

        // Assert
        assert_eq!(
            *first,
            BootstrapState::Failed(BootstrapError::MissingDependency)
        );
        assert!(std::ptr::eq(first, second));
        assert!(first.client_app().is_none());
    }
}
