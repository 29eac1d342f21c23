//! Core domain logic
//!
//! Pure functions that turn raw pipeline metadata into the fields reported to
//! the issue tracker. None of this touches the network.

pub mod derivation;
pub mod environment;
pub mod issues;
pub mod state;

pub use derivation::Derived;
pub use environment::EnvironmentType;
pub use issues::IssueMatcher;
pub use state::DeploymentState;
