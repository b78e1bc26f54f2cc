//! Single-file upload through the chunked upload endpoint.
//!
//! The whole file goes up as one chunk. The record is titled after the file
//! and filed under the chosen category for the signed-in user.

use serde_json::Value;
use store::{FormError, UploadForm, UserProfile};
use uuid::Uuid;

use crate::client::CorpusApi;
use crate::create::pretty;
use crate::error::{ApiError, FlowError};
use crate::wire::ChunkedUpload;

pub const UPLOAD_DESCRIPTION: &str = "File uploaded from Corpus Dashboard";

pub async fn upload_file<A: CorpusApi>(
    api: &A,
    form: &UploadForm,
    user: &UserProfile,
) -> Result<Value, FlowError> {
    let file = form.validate()?;
    let user_id = user
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or(FormError::Required("Signed-in user"))?;

    let upload = ChunkedUpload {
        file: file.clone(),
        title: file.name.clone(),
        description: UPLOAD_DESCRIPTION.to_string(),
        category_id: form.category_id.clone(),
        user_id,
        media_type: "document".to_string(),
        release_rights: "creator".to_string(),
        language: "english".to_string(),
        upload_uuid: Uuid::new_v4().to_string(),
        total_chunks: 1,
    };
    tracing::info!(file = %upload.file.name, uuid = %upload.upload_uuid, "uploading file");
    Ok(api.upload_record(&upload).await?)
}

pub fn success_message(response: &Value) -> String {
    format!("Upload successful!\n{}", pretty(response))
}

pub fn failure_message(error: &FlowError) -> String {
    match error {
        FlowError::Api(ApiError::Status { detail, body, .. }) => {
            format!("Upload failed: {}", detail.as_deref().unwrap_or(body))
        }
        FlowError::Api(ApiError::Network(reason)) => format!("Error uploading file: {reason}"),
        other => other.to_string(),
    }
}
