use async_trait::async_trait;

use crate::domain::SyncError;

/// Trait for HTTP client operations (for mocking)
///
/// `get_json` maps HTTP 404 to `Ok(None)` so callers can tell "resource is
/// gone" apart from transport or server failures.
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<Option<serde_json::Value>, SyncError>;

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, SyncError>;

    async fn delete(&self, url: &str, headers: Vec<(&str, &str)>) -> Result<(), SyncError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    fn apply_headers(
        mut request: reqwest::RequestBuilder,
        headers: Vec<(&str, &str)>,
    ) -> reqwest::RequestBuilder {
        for (key, value) in headers {
            request = request.header(key, value);
        }
        request
    }

    async fn error_from(response: reqwest::Response) -> SyncError {
        let status = response.status();
        let error_body = response.text().await.unwrap_or_default();
        SyncError::transport(format!("HTTP {}: {}", status, error_body))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<Option<serde_json::Value>, SyncError> {
        let request = Self::apply_headers(self.client.get(url), headers);

        let response = request
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let json = response
            .json()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to parse response: {}", e)))?;

        Ok(Some(json))
    }

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, SyncError> {
        let mut request = Self::apply_headers(self.client.post(url), headers);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| SyncError::transport(format!("Failed to parse response: {}", e)))
    }

    async fn delete(&self, url: &str, headers: Vec<(&str, &str)>) -> Result<(), SyncError> {
        let request = Self::apply_headers(self.client.delete(url), headers);

        let response = request
            .send()
            .await
            .map_err(|e| SyncError::transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/acme/my-proj/"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "slug": "my-proj", "id": "42"
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/projects/acme/my-proj/", server.uri());
        let json = client
            .get_json(&url, vec![("Authorization", "Bearer test-token")])
            .await
            .unwrap();

        assert_eq!(json.unwrap()["slug"], "my-proj");
    }

    #[tokio::test]
    async fn test_get_json_maps_404_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let json = client
            .get_json(&format!("{}/projects/acme/gone/", server.uri()), vec![])
            .await
            .unwrap();

        assert!(json.is_none());
    }

    #[tokio::test]
    async fn test_get_json_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let error = client
            .get_json(&format!("{}/projects/acme/my-proj/", server.uri()), vec![])
            .await
            .unwrap_err();

        assert!(matches!(error, SyncError::Transport { .. }));
        assert!(error.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_post_json_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/acme/my-proj/teams/backend/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "slug": "my-proj", "id": "42", "teams": [{"slug": "backend"}]
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/projects/acme/my-proj/teams/backend/", server.uri());
        let json = client.post_json(&url, vec![], None).await.unwrap();

        assert_eq!(json["teams"][0]["slug"], "backend");
    }

    #[tokio::test]
    async fn test_delete_propagates_404_as_error() {
        // 404 on delete stays an error; only get_json maps it to absence.
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let error = client
            .delete(&format!("{}/projects/acme/my-proj/teams/gone/", server.uri()), vec![])
            .await
            .unwrap_err();

        assert!(matches!(error, SyncError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        client
            .delete(&format!("{}/projects/acme/my-proj/teams/backend/", server.uri()), vec![])
            .await
            .unwrap();
    }
}
