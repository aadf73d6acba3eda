use serde::{Deserialize, Serialize};

/// Requested writing tone for generated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Confident,
    Friendly,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Confident => "Confident",
            Tone::Friendly => "Friendly",
        }
    }
}

/// Target role and tone for a generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub target_role: String,
    pub tone: Tone,
}

/// Structured resume content as produced by the generative backend.
/// All fields default so a partially-filled model response still
/// deserializes; the generator decides whether it is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    pub professional_summary: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
    pub education: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterContent {
    pub content: String,
    pub key_achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkedInContent {
    /// Capped at 120 characters on every path.
    pub headline: String,
    pub about: String,
}

/// Scored feedback on an interview answer. `score` is clamped to 0–10 and
/// the lists are capped at three entries each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewEvaluation {
    pub score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub rewritten_answer: String,
}

/// Interview question category. Drives which evaluation prompt is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Behavioral,
    Technical,
}
