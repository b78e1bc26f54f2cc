//! Request and response bodies that only the HTTP layer sees.

use serde::{Deserialize, Serialize};
use store::FileAttachment;

use crate::error::ApiError;

#[derive(Serialize)]
pub(crate) struct PhoneBody<'a> {
    pub phone: &'a str,
}

#[derive(Serialize)]
pub(crate) struct VerifyOtpBody<'a> {
    pub phone: &'a str,
    pub otp_code: &'a str,
}

#[derive(Serialize)]
pub(crate) struct SignupOtpBody<'a> {
    pub phone_number: &'a str,
}

#[derive(Serialize)]
pub(crate) struct DetectBody<'a> {
    pub text: &'a str,
}

/// Login response. Password login answers with `access_token`; the OTP
/// endpoint has been seen to use either name.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl TokenResponse {
    pub fn into_token(self) -> Result<String, ApiError> {
        self.access_token
            .filter(|t| !t.is_empty())
            .or(self.token.filter(|t| !t.is_empty()))
            .ok_or_else(|| ApiError::Decode("response carries no access token".to_string()))
    }
}

/// Multipart body of `POST /records/upload`, sent as a single chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkedUpload {
    pub file: FileAttachment,
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub user_id: String,
    pub media_type: String,
    pub release_rights: String,
    pub language: String,
    pub upload_uuid: String,
    pub total_chunks: u32,
}

impl ChunkedUpload {
    /// Text parts of the multipart body, in submission order. The file part
    /// comes first and is added by the client.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("category_id", self.category_id.clone()),
            ("user_id", self.user_id.clone()),
            ("media_type", self.media_type.clone()),
            ("release_rights", self.release_rights.clone()),
            ("language", self.language.clone()),
            ("upload_uuid", self.upload_uuid.clone()),
            ("filename", self.file.name.clone()),
            ("total_chunks", self.total_chunks.to_string()),
        ]
    }
}
