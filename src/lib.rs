//! sentry-team-sync
//!
//! Reconciles the declared membership of a team within a project against the
//! actual state held by a Sentry-compatible remote service:
//! - Idempotent creation of the team/project edge with a derived durable
//!   identifier (`"<project>/<team>"`)
//! - Drift detection by re-reading remote state on every check
//! - Removal with strict error surfacing (a failed delete never looks done)
//! - Normalization of externally supplied 3-part identifiers during import
//!
//! The reconciler itself is transport-agnostic: it talks to the remote system
//! exclusively through the [`domain::ProjectsApi`] port, for which
//! [`infrastructure::SentryApiClient`] is the shipped implementation.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    ImportId, MembershipId, MembershipRecord, ProjectsApi, RemoteProject, RemoteTeam, SyncError,
};
pub use infrastructure::{CreateMembershipRequest, MembershipReconciler, SentryApiClient};
