pub mod agent_reference;
pub mod package;
pub mod submission;

pub use agent_reference::{AgentReference, AgentReferenceDocument, ErrorAdvice, SubmitHint};
pub use package::{
    Ecosystem, PackageEntry, PackageLinks, PackageStatus, Requirements, ResolvedPackageEntry,
};
pub use submission::{IssueKind, Submission, SubmissionError, SubmitResponse};
