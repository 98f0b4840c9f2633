use serde::Serialize;
use serde_json::Value;

/// Kind of issue an agent may file
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Bug,
    Feature,
    Question,
}

impl IssueKind {
    pub const ALL: [IssueKind; 3] = [IssueKind::Bug, IssueKind::Feature, IssueKind::Question];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bug" => Some(IssueKind::Bug),
            "feature" => Some(IssueKind::Feature),
            "question" => Some(IssueKind::Question),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Bug => "bug",
            IssueKind::Feature => "feature",
            IssueKind::Question => "question",
        }
    }
}

/// A validated issue submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: IssueKind,
    pub package: String,
    pub title: String,
    pub body: String,
    pub context: Option<String>,
}

/// Why a submission payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("type must be \"bug\", \"feature\", or \"question\"")]
    InvalidKind,

    #[error("{0} is required")]
    MissingField(&'static str),
}

impl Submission {
    /// Validate a decoded JSON payload
    ///
    /// Fields are checked in a fixed order so the first problem reported is stable:
    /// `type`, `package`, `title`, `body`. Non-string values count as missing.
    pub fn from_json(payload: &Value) -> Result<Self, SubmissionError> {
        let kind = get_str(payload, "type")
            .and_then(IssueKind::parse)
            .ok_or(SubmissionError::InvalidKind)?;

        let package = get_str(payload, "package")
            .filter(|s| !s.is_empty())
            .ok_or(SubmissionError::MissingField("package"))?;

        let title = get_str(payload, "title")
            .filter(|s| !s.trim().is_empty())
            .ok_or(SubmissionError::MissingField("title"))?;

        let body = get_str(payload, "body")
            .filter(|s| !s.trim().is_empty())
            .ok_or(SubmissionError::MissingField("body"))?;

        let context = get_str(payload, "context")
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            kind,
            package: package.to_string(),
            title: title.trim().to_string(),
            body: body.to_string(),
            context,
        })
    }

    /// Issue body sent upstream, with context appended when present
    pub fn issue_body(&self) -> String {
        match &self.context {
            Some(context) => format!("{}\n\n---\n**Context:** {}", self.body, context),
            None => self.body.clone(),
        }
    }

    pub fn labels(&self) -> [&'static str; 2] {
        ["agent-report", self.kind.label()]
    }
}

fn get_str<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload.get(field).and_then(|v| v.as_str())
}

/// Body returned by `/api/submit`
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SubmitResponse {
    Created {
        ok: bool,
        issue_url: String,
        number: u64,
    },
    Failed {
        ok: bool,
        error: String,
    },
}

impl SubmitResponse {
    pub fn created(issue_url: String, number: u64) -> Self {
        SubmitResponse::Created {
            ok: true,
            issue_url,
            number,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        SubmitResponse::Failed {
            ok: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_submission() {
        let payload = json!({
            "type": "bug",
            "package": "electron",
            "title": "  click fails  ",
            "body": "Steps to reproduce",
        });

        let submission = Submission::from_json(&payload).unwrap();
        assert_eq!(submission.kind, IssueKind::Bug);
        assert_eq!(submission.title, "click fails");
        assert_eq!(submission.issue_body(), "Steps to reproduce");
        assert_eq!(submission.labels(), ["agent-report", "bug"]);
    }

    #[test]
    fn test_context_appended_to_body() {
        let payload = json!({
            "type": "feature",
            "package": "gimp",
            "title": "new filter",
            "body": "Details",
            "context": "image=photo.png",
        });

        let submission = Submission::from_json(&payload).unwrap();
        assert_eq!(
            submission.issue_body(),
            "Details\n\n---\n**Context:** image=photo.png"
        );
    }

    #[test]
    fn test_invalid_kind() {
        let payload = json!({"type": "praise", "package": "electron", "title": "t", "body": "b"});
        assert_eq!(
            Submission::from_json(&payload).unwrap_err(),
            SubmissionError::InvalidKind
        );

        let missing = json!({"package": "electron", "title": "t", "body": "b"});
        assert_eq!(
            Submission::from_json(&missing).unwrap_err(),
            SubmissionError::InvalidKind
        );
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let payload = json!({"type": "bug", "package": "", "title": "", "body": ""});
        assert_eq!(
            Submission::from_json(&payload).unwrap_err(),
            SubmissionError::MissingField("package")
        );

        let payload = json!({"type": "bug", "package": "electron", "title": "   ", "body": "b"});
        assert_eq!(
            Submission::from_json(&payload).unwrap_err().to_string(),
            "title is required"
        );

        let payload = json!({"type": "bug", "package": "electron", "title": "t", "body": 42});
        assert_eq!(
            Submission::from_json(&payload).unwrap_err(),
            SubmissionError::MissingField("body")
        );
    }

    #[test]
    fn test_response_shapes() {
        let created = serde_json::to_value(SubmitResponse::created(
            "https://github.com/harnessgg/Harness-electron/issues/7".to_string(),
            7,
        ))
        .unwrap();
        assert_eq!(created["ok"], true);
        assert_eq!(created["number"], 7);

        let failed = serde_json::to_value(SubmitResponse::failed("nope")).unwrap();
        assert_eq!(failed, json!({"ok": false, "error": "nope"}));
    }
}
