//! Issue service - Forwards agent-filed reports to the package's GitHub repository

use crate::catalog;
use crate::config::IssuesConfig;
use crate::models::{Submission, SubmissionError};
use axum::http::StatusCode;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::json;

const GITHUB_API_VERSION: &str = "2022-11-28";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("No GITHUB_TOKEN configured")]
    MissingToken,

    #[error("Invalid JSON body")]
    InvalidJson,

    #[error(transparent)]
    Invalid(#[from] SubmissionError),

    #[error("Unknown package \"{package}\". Valid values: {valid}")]
    UnknownPackage { package: String, valid: String },

    #[error("GitHub API error: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    pub fn status(&self) -> StatusCode {
        match self {
            SubmitError::MissingToken => StatusCode::INTERNAL_SERVER_ERROR,
            SubmitError::InvalidJson
            | SubmitError::Invalid(_)
            | SubmitError::UnknownPackage { .. } => StatusCode::BAD_REQUEST,
            SubmitError::Upstream { .. } | SubmitError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Issue created upstream
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FiledIssue {
    pub html_url: String,
    pub number: u64,
}

#[derive(Debug, Clone)]
pub struct IssueFiler {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl IssueFiler {
    pub fn new(client: Client, config: &IssuesConfig) -> Self {
        Self {
            client,
            api_url: config.github_api_url.clone(),
            token: config.github_token.clone(),
        }
    }

    /// Validate a raw request body and file it as a new issue
    pub async fn submit(&self, raw: &[u8]) -> Result<FiledIssue, SubmitError> {
        let token = self.token.as_deref().ok_or(SubmitError::MissingToken)?;

        let payload: serde_json::Value =
            serde_json::from_slice(raw).map_err(|_| SubmitError::InvalidJson)?;
        let submission = Submission::from_json(&payload)?;

        let repo = catalog::issue_repository(&submission.package).ok_or_else(|| {
            SubmitError::UnknownPackage {
                package: submission.package.clone(),
                valid: catalog::issue_repository_keys().join(", "),
            }
        })?;

        self.create_issue(token, repo, &submission).await
    }

    async fn create_issue(
        &self,
        token: &str,
        repo: &str,
        submission: &Submission,
    ) -> Result<FiledIssue, SubmitError> {
        let url = format!("{}/repos/{}/issues", self.api_url, repo);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .json(&json!({
                "title": submission.title,
                "body": submission.issue_body(),
                "labels": submission.labels(),
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(repo, status = status.as_u16(), "issue tracker rejected submission");
            return Err(SubmitError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let issue: FiledIssue = response.json().await?;
        tracing::info!(repo, number = issue.number, "filed agent issue");
        Ok(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, test_client};
    use axum::extract::{Path, State};
    use axum::http::HeaderMap;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(String, String, Value)>>>;

    async fn create_issue(
        State(captured): State<Captured>,
        Path((owner, repo)): Path<(String, String)>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> axum::response::Response {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        captured
            .lock()
            .unwrap()
            .push((format!("{}/{}", owner, repo), auth, body));

        if repo == "harness-gimp" {
            return (StatusCode::UNPROCESSABLE_ENTITY, "Validation Failed").into_response();
        }
        (
            StatusCode::CREATED,
            Json(json!({
                "html_url": format!("https://github.com/{}/{}/issues/12", owner, repo),
                "number": 12
            })),
        )
            .into_response()
    }

    async fn filer(token: Option<&str>) -> (IssueFiler, Captured) {
        let captured: Captured = Arc::default();
        let app = Router::new()
            .route("/repos/:owner/:repo/issues", post(create_issue))
            .with_state(captured.clone());
        let base = spawn_upstream(app).await;

        let config = IssuesConfig {
            github_api_url: base,
            github_token: token.map(str::to_string),
        };
        (IssueFiler::new(test_client(), &config), captured)
    }

    #[tokio::test]
    async fn test_files_issue_with_labels_and_context() {
        let (filer, captured) = filer(Some("tok")).await;
        let body = br#"{"type":"bug","package":"electron","title":" click fails ","body":"Steps","context":"session=default"}"#;

        let issue = filer.submit(body).await.unwrap();
        assert_eq!(issue.number, 12);
        assert_eq!(
            issue.html_url,
            "https://github.com/harnessgg/Harness-electron/issues/12"
        );

        let captured = captured.lock().unwrap();
        let (repo, auth, sent) = &captured[0];
        assert_eq!(repo, "harnessgg/Harness-electron");
        assert_eq!(auth, "Bearer tok");
        assert_eq!(sent["title"], "click fails");
        assert_eq!(sent["body"], "Steps\n\n---\n**Context:** session=default");
        assert_eq!(sent["labels"], json!(["agent-report", "bug"]));
    }

    #[tokio::test]
    async fn test_missing_token_checked_first() {
        let (filer, captured) = filer(None).await;

        let err = filer.submit(b"not json").await.unwrap_err();
        assert!(matches!(err, SubmitError::MissingToken));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_errors() {
        let (filer, captured) = filer(Some("tok")).await;

        let err = filer.submit(b"{oops").await.unwrap_err();
        assert!(matches!(err, SubmitError::InvalidJson));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = filer
            .submit(br#"{"type":"rant","package":"electron","title":"t","body":"b"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = filer
            .submit(br#"{"type":"bug","package":"not-a-real-package","title":"t","body":"b"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Unknown package \"not-a-real-package\". Valid values: electron, kdenlive, blender, gimp"
        );

        assert!(captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let (filer, _) = filer(Some("tok")).await;

        let err = filer
            .submit(br#"{"type":"feature","package":"gimp","title":"t","body":"b"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "GitHub API error: 422 Validation Failed");
    }

    #[tokio::test]
    async fn test_unreachable_tracker_is_bad_gateway() {
        let config = IssuesConfig {
            github_api_url: "http://127.0.0.1:9".to_string(),
            github_token: Some("tok".to_string()),
        };
        let filer = IssueFiler::new(test_client(), &config);

        let err = filer
            .submit(br#"{"type":"question","package":"kdenlive","title":"t","body":"b"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
