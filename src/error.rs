use std::path::PathBuf;
use thiserror::Error;

/// Broad failure categories a CI gate reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    ShapeMismatch,
    ScopeViolation,
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Missing required --{0} argument.")]
    MissingArgument(&'static str),
    #[error("Missing expected file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{subject} mismatch. Expected \"{expected}\", got \"{actual}\".")]
    Mismatch {
        subject: String,
        expected: String,
        actual: String,
    },
    #[error("Expected exactly one artifact for this deploy run, found {0}.")]
    ArtifactCount(usize),
    #[error("Metadata {0} is required.")]
    RequiredField(&'static str),
    #[error("Metadata buildTimeUtc must use ISO UTC format (YYYY-MM-DDTHH:mm:ssZ). Got \"{0}\".")]
    Timestamp(String),
    #[error("Found unexpected root-absolute asset reference(s): {}", .0.join(", "))]
    UnexpectedReferences(Vec<String>),
    #[error("Found root-path leakage outside expected base \"{base}\": {}", leaks.join(", "))]
    RootPathLeakage { base: String, leaks: Vec<String> },
    #[error("Service worker path is not scoped to {0}.")]
    ServiceWorkerPath(String),
    #[error("Service worker scope is not restricted to {0}.")]
    ServiceWorkerScope(String),
}

impl VerifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifyError::MissingArgument(_) | VerifyError::MissingFile(_) | VerifyError::Io { .. } => {
                ErrorKind::MissingInput
            }
            VerifyError::Json { .. }
            | VerifyError::Mismatch { .. }
            | VerifyError::ArtifactCount(_)
            | VerifyError::RequiredField(_)
            | VerifyError::Timestamp(_) => ErrorKind::ShapeMismatch,
            VerifyError::UnexpectedReferences(_)
            | VerifyError::RootPathLeakage { .. }
            | VerifyError::ServiceWorkerPath(_)
            | VerifyError::ServiceWorkerScope(_) => ErrorKind::ScopeViolation,
        }
    }

    pub(crate) fn mismatch(
        subject: impl Into<String>,
        expected: impl Into<String>,
        actual: Option<&str>,
    ) -> Self {
        VerifyError::Mismatch {
            subject: subject.into(),
            expected: expected.into(),
            actual: actual.unwrap_or(MISSING_VALUE).to_string(),
        }
    }
}

/// Placeholder rendered in messages when a JSON field is absent or null.
pub const MISSING_VALUE: &str = "<missing>";

pub type Result<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_quotes_both_values() {
        let err = VerifyError::mismatch("Metadata commitSha", "abc123", Some("wrong-sha"));
        assert_eq!(
            err.to_string(),
            "Metadata commitSha mismatch. Expected \"abc123\", got \"wrong-sha\"."
        );
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn missing_actual_renders_placeholder() {
        let err = VerifyError::mismatch("Manifest scope", "/app/", None);
        assert!(err.to_string().contains("got \"<missing>\""));
    }

    #[test]
    fn scope_errors_list_every_offender() {
        let err = VerifyError::UnexpectedReferences(vec!["/a.js".into(), "/b.css".into()]);
        assert_eq!(
            err.to_string(),
            "Found unexpected root-absolute asset reference(s): /a.js, /b.css"
        );
        assert_eq!(err.kind(), ErrorKind::ScopeViolation);
    }
}
