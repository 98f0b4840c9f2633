use serde::Serialize;

/// Error code paired with recovery advice for agents
#[derive(Debug, Clone, Serialize)]
pub struct ErrorAdvice {
    pub code: &'static str,
    pub advice: &'static str,
}

/// Static quick reference for driving one package from an agent
#[derive(Debug, Clone)]
pub struct AgentReference {
    /// Catalog key this reference belongs to
    pub key: &'static str,
    pub title: &'static str,
    pub cli_guidance: &'static str,
    pub quick_flow: &'static [&'static str],
    pub response: &'static str,
    pub errors: &'static [ErrorAdvice],
    pub payload_example: &'static str,
    pub notes: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitHint {
    pub endpoint: String,
    pub payload_example: &'static str,
}

/// JSON body served at `/<key>.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentReferenceDocument {
    pub title: &'static str,
    pub install: &'static str,
    pub cli_guidance: &'static str,
    pub quick_flow: &'static [&'static str],
    pub response: &'static str,
    pub errors: &'static [ErrorAdvice],
    pub submit: SubmitHint,
    #[serde(skip_serializing_if = "no_notes")]
    pub notes: &'static [&'static str],
}

fn no_notes(notes: &&'static [&'static str]) -> bool {
    notes.is_empty()
}
