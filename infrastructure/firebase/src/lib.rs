use std::sync::Arc;

use business::domain::backend::sdk::SdkCapability;
use business::domain::logger::Logger;

#[cfg(feature = "analytics")]
pub mod analytics;
#[cfg(feature = "sdk")]
pub mod app;
pub mod endpoints;

#[cfg(test)]
mod test_support;

/// Entry points of the Firebase SDK compiled into this build.
///
/// Without the `sdk` feature the SDK is reported as unavailable and the
/// bootstrap takes its diagnostic path.
#[cfg(all(feature = "sdk", feature = "analytics"))]
pub fn capability(logger: Arc<dyn Logger>) -> SdkCapability {
    SdkCapability::with_telemetry(
        Arc::new(app::FirebaseSdk::new(logger.clone())),
        Arc::new(analytics::FirebaseAnalytics::new(logger)),
    )
}

#[cfg(all(feature = "sdk", not(feature = "analytics")))]
pub fn capability(logger: Arc<dyn Logger>) -> SdkCapability {
    SdkCapability::available(Arc::new(app::FirebaseSdk::new(logger)))
}

#[cfg(not(feature = "sdk"))]
pub fn capability(_logger: Arc<dyn Logger>) -> SdkCapability {
    SdkCapability::Unavailable
}
