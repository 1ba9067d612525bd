//! Membership identifiers
//!
//! The host persists a single opaque string per membership. In steady state it
//! is the 2-part [`MembershipId`] (`"<project>/<team>"`); during import a
//! 3-part [`ImportId`] (`"<org>/<project>/<team>"`) is accepted instead. The
//! organization is never embedded in the 2-part form: it always travels as a
//! separate field next to the identifier.

use serde::{Deserialize, Serialize};

use crate::domain::SyncError;

const MEMBERSHIP_ID_FORMAT: &str = "{project}/{team}";
const IMPORT_ID_FORMAT: &str = "org-slug/project-slug/team-slug";

/// The durable identifier of one team/project edge: `"<project>/<team>"`.
///
/// Not globally unique across organizations; callers must supply the
/// organization alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MembershipId {
    project: String,
    team: String,
}

impl MembershipId {
    /// Build an identifier from already-known components.
    ///
    /// `project` is expected to be the slug the remote system reported, which
    /// is authoritative over whatever the caller declared.
    pub fn new(project: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            team: team.into(),
        }
    }

    /// Parse a stored identifier.
    ///
    /// Exactly two non-empty slash-separated components are required; anything
    /// else is a corruption signal, reported before any collaborator call.
    pub fn parse(value: &str) -> Result<Self, SyncError> {
        let parts: Vec<&str> = value.split('/').collect();

        match parts.as_slice() {
            [project, team] if !project.is_empty() && !team.is_empty() => {
                Ok(Self::new(*project, *team))
            }
            _ => Err(SyncError::malformed_identifier(value, MEMBERSHIP_ID_FORMAT)),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn team(&self) -> &str {
        &self.team
    }
}

impl std::fmt::Display for MembershipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.project, self.team)
    }
}

impl TryFrom<String> for MembershipId {
    type Error = SyncError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MembershipId> for String {
    fn from(id: MembershipId) -> Self {
        id.to_string()
    }
}

/// The 3-part import-only identifier: `"<org>/<project>/<team>"`.
///
/// Accepted exclusively as import input; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportId {
    organization: String,
    project: String,
    team: String,
}

impl ImportId {
    /// Parse an externally supplied import identifier.
    pub fn parse(value: &str) -> Result<Self, SyncError> {
        let parts: Vec<&str> = value.split('/').collect();

        match parts.as_slice() {
            [org, project, team]
                if !org.is_empty() && !project.is_empty() && !team.is_empty() =>
            {
                Ok(Self {
                    organization: (*org).to_string(),
                    project: (*project).to_string(),
                    team: (*team).to_string(),
                })
            }
            _ => Err(SyncError::malformed_identifier(value, IMPORT_ID_FORMAT)),
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    /// Normalize into the steady-state form: the organization becomes a
    /// standalone attribute, the remaining two components the identifier.
    pub fn into_parts(self) -> (String, MembershipId) {
        (
            self.organization,
            MembershipId::new(self.project, self.team),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_id_parse() {
        let id = MembershipId::parse("my-proj/backend").unwrap();
        assert_eq!(id.project(), "my-proj");
        assert_eq!(id.team(), "backend");
    }

    #[test]
    fn test_membership_id_display_round_trip() {
        let id = MembershipId::new("my-proj", "backend");
        assert_eq!(id.to_string(), "my-proj/backend");
        assert_eq!(MembershipId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_membership_id_rejects_wrong_arity() {
        for value in ["", "my-proj", "acme/my-proj/backend", "a/b/c/d"] {
            let error = MembershipId::parse(value).unwrap_err();
            assert!(
                matches!(error, SyncError::MalformedIdentifier { .. }),
                "expected malformed identifier for {value:?}, got {error:?}"
            );
        }
    }

    #[test]
    fn test_membership_id_rejects_empty_components() {
        assert!(MembershipId::parse("/backend").is_err());
        assert!(MembershipId::parse("my-proj/").is_err());
        assert!(MembershipId::parse("/").is_err());
    }

    #[test]
    fn test_membership_id_error_names_expected_format() {
        let error = MembershipId::parse("bad-id").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed identifier 'bad-id': expected format {project}/{team}"
        );
    }

    #[test]
    fn test_import_id_parse() {
        let id = ImportId::parse("acme/my-proj/backend").unwrap();
        assert_eq!(id.organization(), "acme");
        assert_eq!(id.project(), "my-proj");
        assert_eq!(id.team(), "backend");
    }

    #[test]
    fn test_import_id_into_parts() {
        let (org, id) = ImportId::parse("acme/my-proj/backend").unwrap().into_parts();
        assert_eq!(org, "acme");
        assert_eq!(id.to_string(), "my-proj/backend");
    }

    #[test]
    fn test_import_id_rejects_wrong_arity() {
        for value in ["", "backend", "my-proj/backend", "a/b/c/d"] {
            let error = ImportId::parse(value).unwrap_err();
            assert!(matches!(error, SyncError::MalformedIdentifier { .. }));
        }
    }

    #[test]
    fn test_import_id_rejects_empty_components() {
        assert!(ImportId::parse("/my-proj/backend").is_err());
        assert!(ImportId::parse("acme//backend").is_err());
        assert!(ImportId::parse("acme/my-proj/").is_err());
    }

    #[test]
    fn test_import_id_error_names_expected_format() {
        let error = ImportId::parse("my-proj/backend").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed identifier 'my-proj/backend': expected format org-slug/project-slug/team-slug"
        );
    }
}
