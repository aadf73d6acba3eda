use serde::{Deserialize, Serialize};

/// The structured, user-editable candidate record. Owned by the calling UI
/// layer; this service only ever returns updated copies.
///
/// Absence is represented by an empty string; clients treat "falsy" as
/// "not present". `education` is logically optional but always materialized
/// so downstream consumers never see a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub current_title: String,
    pub email: String,
    pub location: String,
    pub work_experience: String,
    pub projects: String,
    pub skills: String,
    pub education: String,
    /// Cache of the last raw text this profile was auto-filled from.
    /// Overwritten on every upload regardless of prior content.
    pub resume_text: String,
}

/// Field values inferred from one uploaded document. Produced once per
/// upload, consumed immediately by the merge step, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// The raw text the extractors ran over.
    pub resume_text: String,
}

/// Outcome of the completeness check. Informational only; an incomplete
/// profile is still merged and returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Missing required fields, in the fixed checking order.
    pub missing_fields: Vec<String>,
}
