//! Collaborator port: the remote projects API

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::project::RemoteProject;
use crate::domain::SyncError;

/// The remote operations the reconciler depends on.
///
/// Implementations own every transport-level concern (authentication, HTTP
/// retries, rate limiting); the reconciler never sees them. All errors are
/// reported as [`SyncError::Remote`] with the failed operation named.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// Grant `team` access to `project`, returning the updated remote project.
    ///
    /// The returned project slug is authoritative and may differ in form from
    /// the `project` argument.
    async fn add_team_to_project(
        &self,
        organization: &str,
        project: &str,
        team: &str,
    ) -> Result<RemoteProject, SyncError>;

    /// Fetch a project with its team list.
    ///
    /// `Ok(None)` means the project does not exist remotely; it must never be
    /// conflated with a failure.
    async fn get_project(
        &self,
        organization: &str,
        project: &str,
    ) -> Result<Option<RemoteProject>, SyncError>;

    /// Revoke `team`'s access to `project`.
    ///
    /// Whatever the remote returns for an already-removed team is surfaced
    /// verbatim; this port does not translate it.
    async fn remove_team_from_project(
        &self,
        organization: &str,
        project: &str,
        team: &str,
    ) -> Result<(), SyncError>;
}
