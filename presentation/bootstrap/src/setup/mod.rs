pub mod bootstrap;
pub mod dependency_injection;
