use super::errors::BootstrapError;
use super::sdk::ClientApp;

/// Lifecycle of the backend bootstrap. `Initialized` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    Initialized {
        app: ClientApp,
        telemetry_active: bool,
    },
    Failed(BootstrapError),
}

impl BootstrapState {
    pub fn is_initialized(&self) -> bool {
        matches!(self, BootstrapState::Initialized { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BootstrapState::Failed(_))
    }

    pub fn client_app(&self) -> Option<&ClientApp> {
        match self {
            BootstrapState::Initialized { app, .. } => Some(app),
            _ => None,
        }
    }
}

impl std::fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapState::Uninitialized => write!(f, "uninitialized"),
            BootstrapState::Initialized { .. } => write!(f, "initialized"),
            BootstrapState::Failed(_) => write!(f, "failed"),
        }
    }
}
