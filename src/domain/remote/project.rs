//! Remote-side views of projects and teams
//!
//! These types mirror what the remote service returns; this crate never owns
//! or mutates the project and team entities themselves, only reads them to
//! decide whether the managed edge still exists.

use serde::{Deserialize, Serialize};

/// A team as it appears inside a remote project payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTeam {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RemoteTeam {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            id: None,
            name: None,
        }
    }
}

/// A project as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteProject {
    pub slug: String,
    pub id: String,
    #[serde(default)]
    pub teams: Vec<RemoteTeam>,
}

impl RemoteProject {
    /// Whether `team` appears in this project's team list.
    ///
    /// Linear scan, first match wins; slugs are expected unique per project
    /// and order carries no meaning.
    pub fn has_team(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t.slug == team)
    }
}
