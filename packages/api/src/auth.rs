//! # Login and signup drivers
//!
//! Each driver takes a snapshot of the form, runs local validation and then
//! at most one API call. The caller applies the result: a token goes into
//! [`store::AuthSession::set`], a returned [`FlowStage`] replaces the form's
//! stage.

use store::{FlowStage, OtpLoginForm, PasswordLoginForm, SignupForm};

use crate::client::CorpusApi;
use crate::error::FlowError;

pub const LOGIN_SUCCEEDED: &str = "Login successful";
pub const OTP_SENT: &str = "OTP sent successfully";
pub const OTP_VERIFIED: &str = "OTP verified, login successful";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SEND_OTP_FAILED: &str = "Failed to send OTP";
pub const VERIFY_OTP_FAILED: &str = "OTP verification failed";
pub const CONNECTION_ERROR: &str = "Error connecting to server";

pub const SIGNUP_OTP_SENT: &str = "OTP sent to your phone number.";
pub const SIGNUP_OTP_FAILED: &str = "Failed to send OTP.";
pub const SIGNUP_SUCCEEDED: &str = "Account created successfully! Redirecting to login...";
pub const SIGNUP_FAILED: &str = "Failed to verify OTP or create account.";

/// Phone + password login. Returns the bearer token.
pub async fn sign_in<A: CorpusApi>(api: &A, form: &PasswordLoginForm) -> Result<String, FlowError> {
    let token = api.login(form).await?;
    tracing::info!("signed in with password");
    Ok(token)
}

/// Ask the server to text a login code to `form.phone`.
pub async fn request_login_otp<A: CorpusApi>(
    api: &A,
    form: &OtpLoginForm,
) -> Result<FlowStage, FlowError> {
    api.send_login_otp(&form.phone).await?;
    let mut stage = form.stage;
    stage.otp_sent();
    Ok(stage)
}

/// Exchange a login code for a bearer token.
pub async fn verify_login_otp<A: CorpusApi>(
    api: &A,
    form: &OtpLoginForm,
) -> Result<String, FlowError> {
    if !form.stage.is_awaiting_verification() {
        return Err(FlowError::OtpNotRequested);
    }
    let token = api.verify_login_otp(&form.phone, form.otp_code()).await?;
    tracing::info!("signed in with OTP");
    Ok(token)
}

/// First signup step: validate the phone number and request a code.
pub async fn send_signup_otp<A: CorpusApi>(
    api: &A,
    form: &SignupForm,
) -> Result<FlowStage, FlowError> {
    let phone = form.validate_request()?;
    api.send_signup_otp(phone).await?;
    let mut stage = form.stage;
    stage.otp_sent();
    Ok(stage)
}

/// Second signup step: validate every field, then verify the code and create
/// the account in one call.
pub async fn create_account<A: CorpusApi>(api: &A, form: &SignupForm) -> Result<(), FlowError> {
    if !form.stage.is_awaiting_verification() {
        return Err(FlowError::OtpNotRequested);
    }
    let submission = form.validate_verification()?;
    api.verify_signup_otp(&submission).await?;
    tracing::info!("account created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::mock::MockApi;
    use store::{AuthSession, MemoryTokenStore, SignupError, TokenStore};

    fn signup_form() -> SignupForm {
        SignupForm {
            phone: "+919876543210".to_string(),
            name: "Asha".to_string(),
            password: "password1".to_string(),
            confirm_password: "password1".to_string(),
            otp: "4321".to_string(),
            consent: true,
            stage: FlowStage::AwaitingVerification,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_login_token_is_persisted() {
        let api = MockApi::new();
        let tokens = MemoryTokenStore::new();
        let mut session = AuthSession::restore(tokens.clone());

        let token = sign_in(&api, &PasswordLoginForm::default()).await.unwrap();
        session.set(token).unwrap();

        assert_eq!(session.token(), Some("X"));
        assert_eq!(tokens.load().as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn test_login_failure_uses_server_detail() {
        let api = MockApi::failing(ApiError::from_status(401, r#"{"detail":"Invalid credentials"}"#));
        let err = sign_in(&api, &PasswordLoginForm::default()).await.unwrap_err();
        assert_eq!(err.user_message(LOGIN_FAILED, CONNECTION_ERROR), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_otp_verify_requires_requested_stage() {
        let api = MockApi::new();
        let mut form = OtpLoginForm {
            phone: "+91".to_string(),
            otp: " 1234 ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            verify_login_otp(&api, &form).await,
            Err(FlowError::OtpNotRequested)
        );
        assert!(api.calls().is_empty());

        form.stage = request_login_otp(&api, &form).await.unwrap();
        assert_eq!(verify_login_otp(&api, &form).await.unwrap(), "otp-1234");
        assert_eq!(api.calls(), ["send_login_otp", "verify_login_otp"]);
    }

    #[tokio::test]
    async fn test_failed_otp_request_keeps_stage() {
        let api = MockApi::failing(ApiError::Network("offline".to_string()));
        let form = OtpLoginForm::default();
        let err = request_login_otp(&api, &form).await.unwrap_err();
        assert_eq!(err.user_message(SEND_OTP_FAILED, CONNECTION_ERROR), CONNECTION_ERROR);
        assert_eq!(form.stage, FlowStage::AwaitingRequest);
    }

    #[tokio::test]
    async fn test_signup_request_without_phone_sends_nothing() {
        let api = MockApi::new();
        let err = send_signup_otp(&api, &SignupForm::default()).await.unwrap_err();
        assert_eq!(err, FlowError::Signup(SignupError::PhoneRequired));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signup_request_moves_to_verification() {
        let api = MockApi::new();
        let form = SignupForm {
            stage: FlowStage::AwaitingRequest,
            ..signup_form()
        };
        let stage = send_signup_otp(&api, &form).await.unwrap();
        assert!(stage.is_awaiting_verification());
        assert_eq!(api.calls(), ["send_signup_otp"]);
    }

    #[tokio::test]
    async fn test_signup_validation_sends_nothing() {
        let api = MockApi::new();

        let mut mismatch = signup_form();
        mismatch.confirm_password = "password2".to_string();
        assert_eq!(
            create_account(&api, &mismatch).await,
            Err(FlowError::Signup(SignupError::PasswordMismatch))
        );

        let mut short = signup_form();
        short.password = "short".to_string();
        short.confirm_password = "short".to_string();
        assert_eq!(
            create_account(&api, &short).await,
            Err(FlowError::Signup(SignupError::PasswordTooShort))
        );

        let mut no_consent = signup_form();
        no_consent.consent = false;
        assert!(create_account(&api, &no_consent).await.is_err());

        assert!(api.calls().is_empty());
        assert!(create_account(&api, &signup_form()).await.is_ok());
        assert_eq!(api.calls(), ["verify_signup_otp"]);
    }
}
