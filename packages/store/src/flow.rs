//! # Login and signup form state
//!
//! Both OTP flows are two-stage: the user first asks for a code, then submits
//! it. [`FlowStage`] makes that explicit so a verify step can only run after a
//! successful request. Password login is a single step with no stage.
//!
//! [`SignupForm`] also carries the only real client-side validation of the app:
//! [`SignupForm::validate_request`] and [`SignupForm::validate_verification`]
//! reject incomplete input before anything is sent.

use serde::Serialize;
use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Stage of a two-step OTP flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowStage {
    #[default]
    AwaitingRequest,
    AwaitingVerification,
}

impl FlowStage {
    /// Move to verification after the server accepted an OTP request.
    pub fn otp_sent(&mut self) {
        *self = FlowStage::AwaitingVerification;
    }

    /// Return to the request stage (signup "Back to fields").
    pub fn back(&mut self) {
        *self = FlowStage::AwaitingRequest;
    }

    pub fn is_awaiting_verification(&self) -> bool {
        matches!(self, FlowStage::AwaitingVerification)
    }
}

/// Phone + password login.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PasswordLoginForm {
    pub phone: String,
    pub password: String,
}

/// Phone + OTP login.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OtpLoginForm {
    pub phone: String,
    pub otp: String,
    pub stage: FlowStage,
}

impl OtpLoginForm {
    /// The code as sent to the server.
    pub fn otp_code(&self) -> &str {
        self.otp.trim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Phone number is required.")]
    PhoneRequired,
    #[error("All fields (including consent) are required.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
}

/// OTP-gated account creation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub phone: String,
    pub name: String,
    /// Optional; sent as `null` when empty.
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub otp: String,
    pub consent: bool,
    pub stage: FlowStage,
}

/// Body of `POST /auth/signup/verify-otp`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupSubmission {
    pub phone_number: String,
    pub otp_code: String,
    pub name: String,
    pub email: Option<String>,
    pub password: String,
    pub has_given_consent: bool,
}

impl SignupForm {
    /// Gate for the send-OTP step.
    pub fn validate_request(&self) -> Result<&str, SignupError> {
        if self.phone.is_empty() {
            return Err(SignupError::PhoneRequired);
        }
        Ok(&self.phone)
    }

    /// Gate for the verify step. Checks run in a fixed order: completeness,
    /// confirmation match, then length.
    pub fn validate_verification(&self) -> Result<SignupSubmission, SignupError> {
        let required = [
            &self.phone,
            &self.otp,
            &self.name,
            &self.password,
            &self.confirm_password,
        ];
        if required.iter().any(|field| field.is_empty()) || !self.consent {
            return Err(SignupError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }

        Ok(SignupSubmission {
            phone_number: self.phone.clone(),
            otp_code: self.otp.clone(),
            name: self.name.clone(),
            email: (!self.email.is_empty()).then(|| self.email.clone()),
            password: self.password.clone(),
            has_given_consent: self.consent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SignupForm {
        SignupForm {
            phone: "+919876543210".to_string(),
            name: "Asha".to_string(),
            email: String::new(),
            password: "correct horse".to_string(),
            confirm_password: "correct horse".to_string(),
            otp: "123456".to_string(),
            consent: true,
            stage: FlowStage::AwaitingVerification,
        }
    }

    #[test]
    fn test_stage_transitions() {
        let mut stage = FlowStage::default();
        assert!(!stage.is_awaiting_verification());
        stage.otp_sent();
        assert!(stage.is_awaiting_verification());
        stage.back();
        assert_eq!(stage, FlowStage::AwaitingRequest);
    }

    #[test]
    fn test_request_needs_phone() {
        let form = SignupForm::default();
        assert_eq!(form.validate_request(), Err(SignupError::PhoneRequired));
        assert_eq!(complete_form().validate_request(), Ok("+919876543210"));
    }

    #[test]
    fn test_verification_accepts_complete_form() {
        let submission = complete_form().validate_verification().unwrap();
        assert_eq!(submission.phone_number, "+919876543210");
        assert_eq!(submission.otp_code, "123456");
        assert!(submission.email.is_none());
        assert!(submission.has_given_consent);
    }

    #[test]
    fn test_verification_keeps_email_when_given() {
        let mut form = complete_form();
        form.email = "asha@example.org".to_string();
        let submission = form.validate_verification().unwrap();
        assert_eq!(submission.email.as_deref(), Some("asha@example.org"));
    }

    #[test]
    fn test_verification_requires_every_field_and_consent() {
        let blankers: [fn(&mut SignupForm); 6] = [
            |f| f.phone.clear(),
            |f| f.otp.clear(),
            |f| f.name.clear(),
            |f| f.password.clear(),
            |f| f.confirm_password.clear(),
            |f| f.consent = false,
        ];
        for blank in blankers {
            let mut form = complete_form();
            blank(&mut form);
            assert_eq!(form.validate_verification(), Err(SignupError::MissingFields));
        }
    }

    #[test]
    fn test_verification_rejects_mismatch_before_length() {
        let mut form = complete_form();
        form.password = "short".to_string();
        form.confirm_password = "shorter".to_string();
        assert_eq!(form.validate_verification(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_verification_rejects_short_password() {
        let mut form = complete_form();
        form.password = "1234567".to_string();
        form.confirm_password = "1234567".to_string();
        assert_eq!(form.validate_verification(), Err(SignupError::PasswordTooShort));

        form.password.push('8');
        form.confirm_password.push('8');
        assert!(form.validate_verification().is_ok());
    }

    #[test]
    fn test_otp_code_is_trimmed() {
        let form = OtpLoginForm {
            otp: " 4321 \n".to_string(),
            ..Default::default()
        };
        assert_eq!(form.otp_code(), "4321");
    }
}
