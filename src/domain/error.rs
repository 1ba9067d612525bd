use thiserror::Error;

/// Core reconciliation errors
///
/// Remote "not found" is deliberately absent: the `ProjectsApi` port reports
/// it as `Ok(None)` and the reconciler translates it into non-error absence.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Malformed identifier '{value}': expected format {expected}")]
    MalformedIdentifier { value: String, expected: String },

    #[error("Remote operation '{operation}' failed for organization '{organization}': {message}")]
    Remote {
        operation: String,
        organization: String,
        message: String,
    },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SyncError {
    pub fn malformed_identifier(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn remote(
        operation: impl Into<String>,
        organization: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Remote {
            operation: operation.into(),
            organization: organization.into(),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error was produced before any collaborator call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MalformedIdentifier { .. } | Self::Validation { .. } | Self::Configuration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_identifier_display() {
        let error = SyncError::malformed_identifier("bad-id", "{project}/{team}");
        assert_eq!(
            error.to_string(),
            "Malformed identifier 'bad-id': expected format {project}/{team}"
        );
    }

    #[test]
    fn test_remote_display() {
        let error = SyncError::remote("get_project", "acme", "HTTP 500: boom");
        assert_eq!(
            error.to_string(),
            "Remote operation 'get_project' failed for organization 'acme': HTTP 500: boom"
        );
    }

    #[test]
    fn test_is_local() {
        assert!(SyncError::malformed_identifier("x", "y").is_local());
        assert!(SyncError::validation("bad slug").is_local());
        assert!(!SyncError::remote("get_project", "acme", "boom").is_local());
        assert!(!SyncError::transport("timeout").is_local());
    }
}
