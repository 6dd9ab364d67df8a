use std::sync::Arc;

use business::domain::backend::config::{BackendConfig, NewBackendConfigProps};
use business::domain::logger::Logger;
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

pub fn quiet_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn config_for(project_id: &str) -> BackendConfig {
    BackendConfig::new(NewBackendConfigProps {
        api_key: "AIzaSyDemoKey".to_string(),
        auth_domain: format!("{}.firebaseapp.com", project_id),
        project_id: project_id.to_string(),
        storage_bucket: format!("{}.appspot.com", project_id),
        messaging_sender_id: "1234567890".to_string(),
        app_id: format!("1:1234567890:web:{}", project_id),
        measurement_id: "G-DEMO1234".to_string(),
    })
}
