//! # Corpus API client
//!
//! [`CorpusApi`] is the seam between the flow drivers and the network: one
//! method per endpoint, each resolving to a typed value or an [`ApiError`].
//! [`CorpusClient`] implements it over `reqwest`, which targets `fetch` in the
//! browser and hyper on native.
//!
//! | Method | Endpoint | Auth |
//! |--------|----------|------|
//! | `login` | `POST /auth/login` | no |
//! | `send_login_otp` | `POST /auth/login/send-otp` | no |
//! | `verify_login_otp` | `POST /auth/login/verify-otp` | no |
//! | `send_signup_otp` | `POST /auth/signup/send-otp` | no |
//! | `verify_signup_otp` | `POST /auth/signup/verify-otp` | no |
//! | `current_user` | `GET /auth/me` | bearer |
//! | `list_categories` | `GET /categories` | bearer |
//! | `create_category` | `POST /categories` | bearer |
//! | `delete_category` | `DELETE /categories/{id}` | bearer |
//! | `list_records` | `GET /corpus` | bearer |
//! | `create_record` | `POST /corpus/upload` (multipart) | bearer |
//! | `upload_record` | `POST /records/upload` (multipart) | bearer |
//! | `supported_languages` | `GET /translation/supported-languages` | bearer |
//! | `translate` | `POST /translation/translate` | bearer |
//! | `detect_language` | `POST /translation/detect-language` | bearer |
//!
//! The bearer token is attached whenever the client holds one.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::config::ApiConfig;
use store::{
    Category, CategoryForm, CorpusPage, Detection, FileAttachment, LanguageCatalog,
    PasswordLoginForm, Record, RecordForm, SignupSubmission, SupportedLanguage, Translation,
    TranslationRequest, UserProfile,
};

use crate::error::ApiError;
use crate::wire::{
    ChunkedUpload, DetectBody, PhoneBody, SignupOtpBody, TokenResponse, VerifyOtpBody,
};

/// Every call the dashboard makes against the corpus backend.
pub trait CorpusApi {
    fn login(
        &self,
        form: &PasswordLoginForm,
    ) -> impl Future<Output = Result<String, ApiError>>;
    fn send_login_otp(&self, phone: &str) -> impl Future<Output = Result<Value, ApiError>>;
    fn verify_login_otp(
        &self,
        phone: &str,
        otp_code: &str,
    ) -> impl Future<Output = Result<String, ApiError>>;
    fn send_signup_otp(&self, phone: &str) -> impl Future<Output = Result<Value, ApiError>>;
    fn verify_signup_otp(
        &self,
        submission: &SignupSubmission,
    ) -> impl Future<Output = Result<Value, ApiError>>;
    fn current_user(&self) -> impl Future<Output = Result<UserProfile, ApiError>>;
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>>;
    fn create_category(
        &self,
        form: &CategoryForm,
    ) -> impl Future<Output = Result<Value, ApiError>>;
    fn delete_category(&self, id: &str) -> impl Future<Output = Result<(), ApiError>>;
    fn list_records(&self) -> impl Future<Output = Result<Vec<Record>, ApiError>>;
    fn create_record(&self, form: &RecordForm) -> impl Future<Output = Result<Value, ApiError>>;
    fn upload_record(
        &self,
        upload: &ChunkedUpload,
    ) -> impl Future<Output = Result<Value, ApiError>>;
    fn supported_languages(
        &self,
    ) -> impl Future<Output = Result<Vec<SupportedLanguage>, ApiError>>;
    fn translate(
        &self,
        request: &TranslationRequest,
    ) -> impl Future<Output = Result<Translation, ApiError>>;
    fn detect_language(&self, text: &str) -> impl Future<Output = Result<Detection, ApiError>>;
}

/// `reqwest`-backed [`CorpusApi`]. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct CorpusClient {
    http: reqwest::Client,
    api_root: String,
    token: Option<String>,
}

impl CorpusClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: config.api_root(),
            token: None,
        }
    }

    /// Attach (or drop) the bearer token sent with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "corpus api request");
        let builder = self.http.request(method, format!("{}{}", self.api_root, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        send(self.request(Method::GET, path)).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        send(self.request(Method::POST, path).json(body)).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        send(self.request(Method::POST, path).multipart(form)).await
    }
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let body = send_checked(builder).await?;
    decode(&body)
}

/// Send a request whose 2xx reply carries nothing the caller needs. The body
/// is not decoded, so plain-text acknowledgements count as success.
async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
    send_checked(builder).await.map(|_| ())
}

/// Send and read the body, mapping transport failures and non-2xx statuses.
async fn send_checked(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = builder.send().await.map_err(|e| {
        tracing::warn!("corpus api unreachable: {e}");
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "corpus api request failed");
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    Ok(body)
}

/// Decode a 2xx body. An empty body reads as JSON `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn file_part(file: &FileAttachment) -> Result<Part, ApiError> {
    let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
    match &file.content_type {
        Some(content_type) => part
            .mime_str(content_type)
            .map_err(|e| ApiError::InvalidRequest(e.to_string())),
        None => Ok(part),
    }
}

impl CorpusApi for CorpusClient {
    async fn login(&self, form: &PasswordLoginForm) -> Result<String, ApiError> {
        let response: TokenResponse = self.post_json("/auth/login", form).await?;
        response.into_token()
    }

    async fn send_login_otp(&self, phone: &str) -> Result<Value, ApiError> {
        self.post_json("/auth/login/send-otp", &PhoneBody { phone })
            .await
    }

    async fn verify_login_otp(&self, phone: &str, otp_code: &str) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .post_json("/auth/login/verify-otp", &VerifyOtpBody { phone, otp_code })
            .await?;
        response.into_token()
    }

    async fn send_signup_otp(&self, phone: &str) -> Result<Value, ApiError> {
        self.post_json("/auth/signup/send-otp", &SignupOtpBody { phone_number: phone })
            .await
    }

    async fn verify_signup_otp(&self, submission: &SignupSubmission) -> Result<Value, ApiError> {
        self.post_json("/auth/signup/verify-otp", submission).await
    }

    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get("/auth/me").await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    async fn create_category(&self, form: &CategoryForm) -> Result<Value, ApiError> {
        self.post_json("/categories", form).await
    }

    async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        send_empty(self.request(Method::DELETE, &format!("/categories/{id}"))).await
    }

    async fn list_records(&self) -> Result<Vec<Record>, ApiError> {
        let page: Option<CorpusPage> = self.get("/corpus").await?;
        Ok(page.unwrap_or_default().items)
    }

    async fn create_record(&self, form: &RecordForm) -> Result<Value, ApiError> {
        let mut multipart = Form::new();
        for (name, value) in form.text_fields() {
            multipart = multipart.text(name, value.to_string());
        }
        if let Some(file) = &form.file {
            multipart = multipart.part("file", file_part(file)?);
        }
        self.post_multipart("/corpus/upload", multipart).await
    }

    async fn upload_record(&self, upload: &ChunkedUpload) -> Result<Value, ApiError> {
        let mut multipart = Form::new().part("file", file_part(&upload.file)?);
        for (name, value) in upload.text_fields() {
            multipart = multipart.text(name, value);
        }
        self.post_multipart("/records/upload", multipart).await
    }

    async fn supported_languages(&self) -> Result<Vec<SupportedLanguage>, ApiError> {
        let catalog: LanguageCatalog = self.get("/translation/supported-languages").await?;
        Ok(catalog.languages)
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ApiError> {
        self.post_json("/translation/translate", request).await
    }

    async fn detect_language(&self, text: &str) -> Result<Detection, ApiError> {
        self.post_json("/translation/detect-language", &DetectBody { text })
            .await
    }
}
