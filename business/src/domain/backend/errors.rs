/// Bootstrap errors for the backend client.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("backend.missing_dependency")]
    MissingDependency,
}

impl BootstrapError {
    pub fn missing_dependency() -> Self {
        BootstrapError::MissingDependency
    }
}
