use crate::domain::backend::config::BackendConfig;
use crate::domain::backend::state::BootstrapState;

pub trait InitializeBackendUseCase: Send + Sync {
    /// Runs the bootstrap pass on first call; later calls return the recorded state.
    fn execute(&self, config: BackendConfig) -> &BootstrapState;
}
