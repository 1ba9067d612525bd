//! Membership reconciliation service

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::membership::{validate_slug, ImportId, MembershipId, MembershipRecord};
use crate::domain::remote::ProjectsApi;
use crate::domain::SyncError;

/// Request for establishing a new team/project membership
#[derive(Debug, Clone)]
pub struct CreateMembershipRequest {
    pub organization: String,
    pub team: String,
    pub project: String,
}

/// Owns the full lifecycle of one team/project edge: creation, drift
/// detection, removal and import normalization.
///
/// Each operation is one synchronous unit of work for exactly one record; the
/// service holds no mutable state between calls, never retries, and never
/// caches remote answers. Whatever the host persists is the returned record's
/// identifier plus its three declared slugs.
#[derive(Debug)]
pub struct MembershipReconciler<A: ProjectsApi> {
    api: Arc<A>,
}

impl<A: ProjectsApi> MembershipReconciler<A> {
    /// Create a new reconciler over the given remote API capability.
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Establish the membership remotely and derive its durable identifier.
    ///
    /// The project slug returned by the remote call is authoritative for the
    /// identifier; it may differ in form from the declared project slug. After
    /// the remote side-effect succeeds, the contract requires an immediate
    /// read; a read failure at that point surfaces as the failure of the
    /// whole create.
    pub async fn create(
        &self,
        request: CreateMembershipRequest,
    ) -> Result<MembershipRecord, SyncError> {
        validate_slug("organization", &request.organization)
            .map_err(|e| SyncError::validation(e.to_string()))?;
        validate_slug("team", &request.team).map_err(|e| SyncError::validation(e.to_string()))?;
        validate_slug("project", &request.project)
            .map_err(|e| SyncError::validation(e.to_string()))?;

        let project = self
            .api
            .add_team_to_project(&request.organization, &request.project, &request.team)
            .await?;

        debug!(
            project_slug = %project.slug,
            project_id = %project.id,
            team = %request.team,
            org = %request.organization,
            "Added team to remote project"
        );

        let identifier = MembershipId::new(&project.slug, &request.team);
        let record = MembershipRecord::new(
            &request.organization,
            &request.team,
            &request.project,
            identifier,
        );

        // Mandatory post-create read. Only a read *error* fails the combined
        // operation; an absent answer right after creation is logged and left
        // for the next reconciliation to resolve.
        let still_exists = self
            .read(record.organization(), &record.identifier().to_string())
            .await?;

        if !still_exists {
            warn!(
                identifier = %record.identifier(),
                org = %record.organization(),
                "Membership not visible immediately after creation"
            );
        }

        Ok(record)
    }

    /// Check whether the identified membership still exists remotely.
    ///
    /// A gone project is a normal outcome (`Ok(false)`), never an error; only
    /// genuine collaborator failures propagate. Side-effect free and safe to
    /// call repeatedly.
    pub async fn read(&self, organization: &str, identifier: &str) -> Result<bool, SyncError> {
        let id = MembershipId::parse(identifier)?;

        let Some(project) = self.api.get_project(organization, id.project()).await? else {
            debug!(
                identifier = %id,
                org = %organization,
                "Remote project is gone; membership no longer exists"
            );
            return Ok(false);
        };

        let still_exists = project.has_team(id.team());

        debug!(
            project_slug = %project.slug,
            project_id = %project.id,
            org = %organization,
            team = %id.team(),
            still_exists,
            "Read remote project to see if team still belongs to it"
        );

        Ok(still_exists)
    }

    /// Remove the identified membership remotely.
    ///
    /// Collaborator errors are surfaced verbatim, including whatever the
    /// remote answers for an already-removed team: a failed delete must never
    /// look like success, so the host keeps the record and retries.
    pub async fn delete(&self, organization: &str, identifier: &str) -> Result<(), SyncError> {
        let id = MembershipId::parse(identifier)?;

        self.api
            .remove_team_from_project(organization, id.project(), id.team())
            .await?;

        debug!(
            project_slug = %id.project(),
            team_slug = %id.team(),
            org = %organization,
            "Removed team from remote project"
        );

        Ok(())
    }

    /// Normalize an externally supplied 3-part identifier into a record seed.
    ///
    /// Pure: no network call. The result makes no existence claim; the host is
    /// expected to follow up with [`read`](Self::read) to promote or discard
    /// it.
    pub fn import(&self, external_identifier: &str) -> Result<MembershipRecord, SyncError> {
        let import = ImportId::parse(external_identifier)?;

        debug!(
            org = %import.organization(),
            project_slug = %import.project(),
            team_slug = %import.team(),
            "Importing team/project membership"
        );

        Ok(MembershipRecord::from_import(import))
    }
}
