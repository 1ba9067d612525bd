//! Membership record entity

use serde::{Deserialize, Serialize};

use super::identifier::{ImportId, MembershipId};

/// One managed team/project edge.
///
/// All three declared slugs are immutable once set: any change forces full
/// recreation at the host level, never an in-place update. A record with an
/// identifier implies the edge was, at some point, successfully established
/// remotely — except for import seeds, which make no existence claim until
/// the mandatory follow-up read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    /// Slug of the owning organization. Carried separately from the
    /// identifier, which does not encode it.
    organization: String,
    /// Slug of the team.
    team: String,
    /// Slug of the project as declared by the host.
    project: String,
    /// Derived durable handle, `"<project>/<team>"`. The project component
    /// comes from the remote system and may differ from `project` in form.
    identifier: MembershipId,
}

impl MembershipRecord {
    /// Build a record after a successful remote creation.
    pub fn new(
        organization: impl Into<String>,
        team: impl Into<String>,
        project: impl Into<String>,
        identifier: MembershipId,
    ) -> Self {
        Self {
            organization: organization.into(),
            team: team.into(),
            project: project.into(),
            identifier,
        }
    }

    /// Build the record seed for an imported identifier.
    ///
    /// Pure: no network call happens here. The project and team fields are
    /// filled from the identifier components; the host is expected to drive a
    /// read next to confirm the edge actually exists.
    pub fn from_import(import: ImportId) -> Self {
        let (organization, identifier) = import.into_parts();

        Self {
            team: identifier.team().to_string(),
            project: identifier.project().to_string(),
            organization,
            identifier,
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn identifier(&self) -> &MembershipId {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_create() {
        let record = MembershipRecord::new(
            "acme",
            "backend",
            "my-proj",
            MembershipId::new("my-proj", "backend"),
        );

        assert_eq!(record.organization(), "acme");
        assert_eq!(record.team(), "backend");
        assert_eq!(record.project(), "my-proj");
        assert_eq!(record.identifier().to_string(), "my-proj/backend");
    }

    #[test]
    fn test_record_keeps_declared_project_next_to_remote_slug() {
        // The remote system may normalize the project slug; the declared value
        // stays on the record while the identifier carries the remote form.
        let record = MembershipRecord::new(
            "acme",
            "backend",
            "My-Proj",
            MembershipId::new("my-proj", "backend"),
        );

        assert_eq!(record.project(), "My-Proj");
        assert_eq!(record.identifier().project(), "my-proj");
    }

    #[test]
    fn test_record_from_import() {
        let import = ImportId::parse("acme/my-proj/backend").unwrap();
        let record = MembershipRecord::from_import(import);

        assert_eq!(record.organization(), "acme");
        assert_eq!(record.project(), "my-proj");
        assert_eq!(record.team(), "backend");
        assert_eq!(record.identifier().to_string(), "my-proj/backend");
    }
}
