//! In-memory [`CorpusApi`] for driver tests. Records every call by endpoint
//! name and either answers with canned data or fails every call.

use std::cell::RefCell;

use serde_json::{json, Value};
use store::{
    Category, CategoryForm, Detection, PasswordLoginForm, Record, RecordForm, SignupSubmission,
    SupportedLanguage, Translation, TranslationRequest, UserProfile,
};

use crate::client::CorpusApi;
use crate::error::ApiError;
use crate::wire::ChunkedUpload;

#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<&'static str>>,
    failure: Option<ApiError>,
    pub uploads: RefCell<Vec<ChunkedUpload>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == endpoint).count()
    }

    fn answer<T>(&self, endpoint: &'static str, value: impl FnOnce() -> T) -> Result<T, ApiError> {
        self.calls.borrow_mut().push(endpoint);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(value()),
        }
    }
}

pub fn category(id: &str) -> Category {
    Category {
        id: id.to_string(),
        name: format!("Category {id}"),
        description: None,
    }
}

impl CorpusApi for MockApi {
    async fn login(&self, _form: &PasswordLoginForm) -> Result<String, ApiError> {
        self.answer("login", || "X".to_string())
    }

    async fn send_login_otp(&self, _phone: &str) -> Result<Value, ApiError> {
        self.answer("send_login_otp", || json!({ "message": "OTP sent" }))
    }

    async fn verify_login_otp(&self, _phone: &str, otp_code: &str) -> Result<String, ApiError> {
        let token = format!("otp-{otp_code}");
        self.answer("verify_login_otp", || token)
    }

    async fn send_signup_otp(&self, _phone: &str) -> Result<Value, ApiError> {
        self.answer("send_signup_otp", || json!({ "message": "OTP sent" }))
    }

    async fn verify_signup_otp(&self, submission: &SignupSubmission) -> Result<Value, ApiError> {
        let name = submission.name.clone();
        self.answer("verify_signup_otp", || json!({ "name": name }))
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.answer("current_user", || UserProfile {
            id: Some("u-1".to_string()),
            username: Some("ravi".to_string()),
            ..Default::default()
        })
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.answer("list_categories", || vec![category("c-1"), category("c-2")])
    }

    async fn create_category(&self, form: &CategoryForm) -> Result<Value, ApiError> {
        let name = form.name.clone();
        self.answer("create_category", || json!({ "id": "c-9", "name": name }))
    }

    async fn delete_category(&self, _id: &str) -> Result<(), ApiError> {
        self.answer("delete_category", || ())
    }

    async fn list_records(&self) -> Result<Vec<Record>, ApiError> {
        self.answer("list_records", || {
            vec![Record {
                id: "r-1".to_string(),
                title: "Bathukamma song".to_string(),
                description: None,
                language: Some("Telugu".to_string()),
                category: Some("Music".to_string()),
            }]
        })
    }

    async fn create_record(&self, form: &RecordForm) -> Result<Value, ApiError> {
        let title = form.title.clone();
        self.answer("create_record", || json!({ "id": "r-9", "title": title }))
    }

    async fn upload_record(&self, upload: &ChunkedUpload) -> Result<Value, ApiError> {
        self.uploads.borrow_mut().push(upload.clone());
        self.answer("upload_record", || json!({ "status": "uploaded" }))
    }

    async fn supported_languages(&self) -> Result<Vec<SupportedLanguage>, ApiError> {
        self.answer("supported_languages", || {
            vec![SupportedLanguage {
                code: "te".to_string(),
                name: "Telugu".to_string(),
                native_name: "తెలుగు".to_string(),
            }]
        })
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ApiError> {
        let translation = Translation {
            translated_text: format!("[{}] {}", request.target_language, request.text),
            original_text: request.text.clone(),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            confidence: 0.9,
        };
        self.answer("translate", || translation)
    }

    async fn detect_language(&self, _text: &str) -> Result<Detection, ApiError> {
        self.answer("detect_language", || Detection {
            detected_language: "hi".to_string(),
            confidence: 0.75,
        })
    }
}
