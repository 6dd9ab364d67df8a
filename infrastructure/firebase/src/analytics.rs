use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use business::domain::backend::sdk::{ClientApp, TelemetryActivator};
use business::domain::logger::Logger;

use crate::endpoints::analytics_collect_url;

/// Analytics instance bound to one client app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsHandle {
    pub app_name: String,
    pub measurement_id: String,
    pub collect_url: String,
}

/// Analytics telemetry activator. One instance per app id; activation is idempotent.
pub struct FirebaseAnalytics {
    instances: Mutex<HashMap<String, AnalyticsHandle>>,
    logger: Arc<dyn Logger>,
}

impl FirebaseAnalytics {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            instances: Mutex::new(HashMap::new()),
            logger,
        }
    }

    pub fn handle(&self, app_id: &str) -> Option<AnalyticsHandle> {
        self.instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(app_id)
            .cloned()
    }

    pub fn is_active(&self, app_id: &str) -> bool {
        self.handle(app_id).is_some()
    }
}

impl TelemetryActivator for FirebaseAnalytics {
    fn activate(&self, app: &ClientApp) {
        let options = app.options();
        let mut instances = self
            .instances
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if instances.contains_key(options.app_id()) {
            self.logger.debug(&format!(
                "Analytics already active for app '{}'",
                app.name()
            ));
            return;
        }

        let handle = AnalyticsHandle {
            app_name: app.name().to_string(),
            measurement_id: options.measurement_id().to_string(),
            collect_url: analytics_collect_url(options),
        };
        self.logger.debug(&format!(
            "Analytics collecting to {}",
            handle.collect_url
        ));
        instances.insert(options.app_id().to_string(), handle);
    }
}
