//! Repository layer
//!
//! Repositories abstract the remote calls the notifier makes. They carry no
//! business logic and are trait-based so the service layer can be tested
//! against in-memory fakes.

mod deployments;

pub use deployments::DeploymentRepository;
pub use deployments::HttpDeploymentRepository;
