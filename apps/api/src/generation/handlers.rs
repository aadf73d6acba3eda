use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::{self, ExportFile};
use crate::generation::generator;
use crate::generation::questions::{InterviewQuestion, BEHAVIORAL_QUESTIONS, TECHNICAL_QUESTIONS};
use crate::models::content::{
    CoverLetterContent, GenerationOptions, InterviewEvaluation, LinkedInContent, QuestionType,
    ResumeContent,
};
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub profile: Profile,
    pub options: GenerationOptions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub profile: Profile,
    pub options: GenerationOptions,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub question: String,
    pub answer: String,
    pub profile: Profile,
    pub question_type: QuestionType,
}

#[derive(Debug, Serialize)]
pub struct QuestionBank {
    pub behavioral: &'static [InterviewQuestion],
    pub technical: &'static [InterviewQuestion],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResumeRequest {
    pub profile: Profile,
    pub resume: ResumeContent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCoverLetterRequest {
    pub profile: Profile,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLinkedInRequest {
    pub profile: Profile,
    pub headline: String,
    pub about: String,
}

/// POST /api/v1/generate/resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<ResumeContent>, AppError> {
    let content = generator::generate_resume(state.llm.as_ref(), &req.profile, &req.options).await?;
    Ok(Json(content))
}

/// POST /api/v1/generate/cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterContent>, AppError> {
    let content = generator::generate_cover_letter(
        state.llm.as_ref(),
        &req.profile,
        &req.options,
        &req.job_description,
    )
    .await?;
    Ok(Json(content))
}

/// POST /api/v1/generate/linkedin
pub async fn handle_generate_linkedin(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<LinkedInContent>, AppError> {
    let content =
        generator::generate_linkedin_content(state.llm.as_ref(), &req.profile, &req.options)
            .await?;
    Ok(Json(content))
}

/// GET /api/v1/interview/questions
pub async fn handle_interview_questions() -> Json<QuestionBank> {
    Json(QuestionBank {
        behavioral: BEHAVIORAL_QUESTIONS,
        technical: TECHNICAL_QUESTIONS,
    })
}

/// POST /api/v1/interview/evaluate
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<InterviewEvaluation>, AppError> {
    let evaluation = generator::evaluate_interview_answer(
        state.llm.as_ref(),
        &req.question,
        &req.answer,
        &req.profile,
        req.question_type,
    )
    .await?;
    Ok(Json(evaluation))
}

/// POST /api/v1/export/resume
pub async fn handle_export_resume(
    Json(req): Json<ExportResumeRequest>,
) -> Result<Json<ExportFile>, AppError> {
    Ok(Json(export::resume_export(&req.profile, &req.resume)))
}

/// POST /api/v1/export/cover-letter
pub async fn handle_export_cover_letter(
    Json(req): Json<ExportCoverLetterRequest>,
) -> Result<Json<ExportFile>, AppError> {
    Ok(Json(export::cover_letter_export(&req.profile, &req.content)))
}

/// POST /api/v1/export/linkedin
pub async fn handle_export_linkedin(
    Json(req): Json<ExportLinkedInRequest>,
) -> Result<Json<ExportFile>, AppError> {
    Ok(Json(export::linkedin_export(
        &req.profile,
        &req.headline,
        &req.about,
    )))
}
