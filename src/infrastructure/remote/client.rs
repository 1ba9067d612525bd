use async_trait::async_trait;
use tracing::debug;

use crate::domain::remote::{ProjectsApi, RemoteProject};
use crate::domain::SyncError;
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_BASE_URL: &str = "https://sentry.io/api/0";

/// Projects API client for a Sentry-compatible remote service
#[derive(Debug)]
pub struct SentryApiClient<C: HttpClientTrait> {
    client: C,
    token: String,
    base_url: String,
}

impl<C: HttpClientTrait> SentryApiClient<C> {
    pub fn new(client: C, token: impl Into<String>) -> Self {
        Self::with_base_url(client, token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            token: token.into(),
            base_url,
        }
    }

    fn project_url(&self, organization: &str, project: &str) -> String {
        format!("{}/projects/{}/{}/", self.base_url, organization, project)
    }

    fn project_team_url(&self, organization: &str, project: &str, team: &str) -> String {
        format!(
            "{}/projects/{}/{}/teams/{}/",
            self.base_url, organization, project, team
        )
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    fn parse_project(json: serde_json::Value) -> Result<RemoteProject, SyncError> {
        serde_json::from_value(json)
            .map_err(|e| SyncError::transport(format!("Failed to parse project payload: {}", e)))
    }

    fn wrap(operation: &str, organization: &str, error: SyncError) -> SyncError {
        match error {
            SyncError::Transport { message } => SyncError::remote(operation, organization, message),
            other => other,
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> ProjectsApi for SentryApiClient<C> {
    async fn add_team_to_project(
        &self,
        organization: &str,
        project: &str,
        team: &str,
    ) -> Result<RemoteProject, SyncError> {
        let url = self.project_team_url(organization, project, team);
        let auth = self.auth_header();

        debug!(org = %organization, project = %project, team = %team, "Adding team to remote project");

        let json = self
            .client
            .post_json(&url, vec![("Authorization", auth.as_str())], None)
            .await
            .map_err(|e| Self::wrap("add_team_to_project", organization, e))?;

        Self::parse_project(json).map_err(|e| Self::wrap("add_team_to_project", organization, e))
    }

    async fn get_project(
        &self,
        organization: &str,
        project: &str,
    ) -> Result<Option<RemoteProject>, SyncError> {
        let url = self.project_url(organization, project);
        let auth = self.auth_header();

        debug!(org = %organization, project = %project, "Fetching remote project");

        let json = self
            .client
            .get_json(&url, vec![("Authorization", auth.as_str())])
            .await
            .map_err(|e| Self::wrap("get_project", organization, e))?;

        match json {
            Some(json) => {
                let project =
                    Self::parse_project(json).map_err(|e| Self::wrap("get_project", organization, e))?;
                Ok(Some(project))
            }
            None => Ok(None),
        }
    }

    async fn remove_team_from_project(
        &self,
        organization: &str,
        project: &str,
        team: &str,
    ) -> Result<(), SyncError> {
        let url = self.project_team_url(organization, project, team);
        let auth = self.auth_header();

        debug!(org = %organization, project = %project, team = %team, "Removing team from remote project");

        self.client
            .delete(&url, vec![("Authorization", auth.as_str())])
            .await
            .map_err(|e| Self::wrap("remove_team_from_project", organization, e))
    }
}
