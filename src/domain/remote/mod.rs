//! Remote-system domain: payload views and the collaborator port

pub mod api;
pub mod project;

pub use api::ProjectsApi;
pub use project::{RemoteProject, RemoteTeam};

#[cfg(test)]
pub use api::MockProjectsApi;
