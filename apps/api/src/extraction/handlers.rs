use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::document::{self, DocumentKind};
use crate::errors::AppError;
use crate::extraction::merge::merge_profile;
use crate::extraction::validation::validate_profile;
use crate::extraction::auto_fill_profile;
use crate::models::profile::{ExtractedProfile, Profile, ValidationResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutofillRequest {
    pub resume_text: String,
    /// The caller's current profile; defaults to empty for a first upload.
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutofillResponse {
    pub extracted: ExtractedProfile,
    pub profile: Profile,
    pub validation: ValidationResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub text: String,
    pub extracted: ExtractedProfile,
    pub profile: Profile,
    pub validation: ValidationResult,
}

/// POST /api/v1/profile/autofill
///
/// Pure pipeline over already-recovered text: extract, merge into the
/// caller's profile, validate. Validation never blocks the merge.
pub async fn handle_autofill(
    Json(req): Json<AutofillRequest>,
) -> Result<Json<AutofillResponse>, AppError> {
    let extracted = auto_fill_profile(&req.resume_text);
    let profile = merge_profile(&req.profile, &extracted);
    let validation = validate_profile(&profile);
    Ok(Json(AutofillResponse {
        extracted,
        profile,
        validation,
    }))
}

/// POST /api/v1/profile/upload
///
/// Multipart upload: a `file` part (txt/docx/pdf) and an optional `profile`
/// part holding the caller's current profile as JSON. Runs the full
/// document-to-text + auto-fill pipeline.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut profile = Profile::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume.txt").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                file = Some((filename, data));
            }
            Some("profile") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read profile: {e}")))?;
                profile = serde_json::from_str(&raw)
                    .map_err(|e| AppError::Validation(format!("Invalid profile JSON: {e}")))?;
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("Missing 'file' part".to_string()))?;
    let kind = DocumentKind::from_filename(&filename)?;
    let text = document::extract_text(kind, &data);

    let extracted = auto_fill_profile(&text);
    let merged = merge_profile(&profile, &extracted);
    let validation = validate_profile(&merged);

    Ok(Json(UploadResponse {
        text,
        extracted,
        profile: merged,
        validation,
    }))
}

/// POST /api/v1/profile/validate
pub async fn handle_validate(
    Json(profile): Json<Profile>,
) -> Result<Json<ValidationResult>, AppError> {
    Ok(Json(validate_profile(&profile)))
}
