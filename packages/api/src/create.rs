//! Record and category creation.

use serde_json::Value;
use store::{CategoryForm, RecordForm};

use crate::client::CorpusApi;
use crate::error::FlowError;

pub const RECORD_FAILED: &str = "Record creation failed";
pub const CATEGORY_FAILED: &str = "Category creation failed";

/// Submit the record form as multipart. Returns the server's JSON reply.
pub async fn create_record<A: CorpusApi>(api: &A, form: &RecordForm) -> Result<Value, FlowError> {
    form.validate()?;
    let created = api.create_record(form).await?;
    tracing::info!(title = %form.title, "record created");
    Ok(created)
}

pub async fn create_category<A: CorpusApi>(
    api: &A,
    form: &CategoryForm,
) -> Result<Value, FlowError> {
    form.validate()?;
    let created = api.create_category(form).await?;
    tracing::info!(name = %form.name, "category created");
    Ok(created)
}

/// Two-space indented JSON for the response box.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::mock::MockApi;
    use store::{FileAttachment, FormError};

    #[tokio::test]
    async fn test_empty_title_sends_nothing() {
        let api = MockApi::new();
        let form = RecordForm {
            file: Some(FileAttachment::new("a.txt", b"hello".to_vec())),
            ..Default::default()
        };
        assert_eq!(
            create_record(&api, &form).await,
            Err(FlowError::Form(FormError::Required("Title")))
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_category_name_sends_nothing() {
        let api = MockApi::new();
        let form = CategoryForm {
            name: "  ".to_string(),
            description: "no name".to_string(),
        };
        assert!(create_category(&api, &form).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_created_record_is_returned() {
        let api = MockApi::new();
        let form = RecordForm {
            title: "Village song".to_string(),
            ..Default::default()
        };
        let created = create_record(&api, &form).await.unwrap();
        assert_eq!(created["title"], "Village song");
        assert!(pretty(&created).contains("\n  \"title\": \"Village song\""));
    }

    #[tokio::test]
    async fn test_failure_message_falls_back() {
        let api = MockApi::failing(ApiError::from_status(500, ""));
        let form = CategoryForm {
            name: "Folk".to_string(),
            ..Default::default()
        };
        let err = create_category(&api, &form).await.unwrap_err();
        assert_eq!(err.user_message(CATEGORY_FAILED, CATEGORY_FAILED), CATEGORY_FAILED);
    }
}
