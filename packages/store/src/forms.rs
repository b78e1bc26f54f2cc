//! # Record, category and upload forms
//!
//! Plain form state for the create and upload views. Each form exposes a
//! `validate` method that enforces its required fields, so a submit with a
//! required field left empty never reaches the network.

use serde::Serialize;
use thiserror::Error;

pub const MEDIA_TYPES: &[&str] = &["Document", "Audio", "Video", "Image"];

pub const RECORD_LANGUAGES: &[&str] = &[
    "Hindi", "English", "Bengali", "Telugu", "Tamil", "Gujarati", "Marathi", "Kannada",
    "Malayalam", "Punjabi",
];

pub const RELEASE_RIGHTS: &[&str] = &[
    "Family or Friend",
    "Public Domain",
    "Creative Commons",
    "All Rights Reserved",
];

pub const RECORD_CATEGORIES: &[&str] = &[
    "Flora & Fauna",
    "Culture",
    "History",
    "Literature",
    "Music",
    "Art",
    "Science",
    "Technology",
];

/// Value of the file input's `accept` attribute.
pub const ACCEPTED_FILE_TYPES: &str =
    ".pdf,.doc,.docx,.txt,.mp3,.wav,.mp4,.avi,.jpg,.jpeg,.png,.gif";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please select a file to upload.")]
    NoFile,
    #[error("Please enter text to translate")]
    NothingToTranslate,
    #[error("Please enter text for language detection")]
    NothingToDetect,
    #[error("Source and target languages must differ")]
    SameLanguages,
}

/// A file picked in the browser, read fully into memory.
#[derive(Clone, PartialEq)]
pub struct FileAttachment {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl std::fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAttachment")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl FileAttachment {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).map(str::to_string);
        Self {
            name,
            bytes,
            content_type,
        }
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        if content_type.as_deref().is_some_and(|ct| !ct.is_empty()) {
            self.content_type = content_type;
        }
        self
    }
}

/// MIME type for the extensions the record form accepts.
pub fn content_type_for(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "avi" => "video/x-msvideo",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => return None,
    };
    Some(mime)
}

/// Record creation form, submitted as multipart to `POST /corpus/upload`.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordForm {
    pub title: String,
    pub description: String,
    pub media_type: String,
    pub language: String,
    pub release_rights: String,
    pub category: String,
    pub file: Option<FileAttachment>,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            media_type: MEDIA_TYPES[0].to_string(),
            language: RECORD_LANGUAGES[0].to_string(),
            release_rights: RELEASE_RIGHTS[0].to_string(),
            category: RECORD_CATEGORIES[0].to_string(),
            file: None,
        }
    }
}

impl RecordForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Required("Title"));
        }
        Ok(())
    }

    /// Text parts of the multipart body, in submission order.
    pub fn text_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("media_type", self.media_type.as_str()),
            ("language", self.language.as_str()),
            ("release_rights", self.release_rights.as_str()),
            ("category", self.category.as_str()),
        ]
    }
}

/// Category creation form, sent as JSON to `POST /categories`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Required("Category name"));
        }
        Ok(())
    }
}

/// Standalone file upload to `POST /records/upload`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadForm {
    pub file: Option<FileAttachment>,
    pub category_id: String,
}

impl UploadForm {
    pub fn validate(&self) -> Result<&FileAttachment, FormError> {
        let file = self.file.as_ref().ok_or(FormError::NoFile)?;
        if self.category_id.is_empty() {
            return Err(FormError::Required("Category"));
        }
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let form = RecordForm::default();
        assert_eq!(form.media_type, "Document");
        assert_eq!(form.language, "Hindi");
        assert_eq!(form.release_rights, "Family or Friend");
        assert_eq!(form.category, "Flora & Fauna");
        assert!(form.file.is_none());
    }

    #[test]
    fn test_record_requires_title() {
        let mut form = RecordForm::default();
        assert_eq!(form.validate(), Err(FormError::Required("Title")));
        form.title = "   ".to_string();
        assert!(form.validate().is_err());
        form.title = "Village song".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_record_text_fields_use_wire_names() {
        let form = RecordForm {
            title: "t".to_string(),
            ..Default::default()
        };
        let names: Vec<&str> = form.text_fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["title", "description", "media_type", "language", "release_rights", "category"]
        );
    }

    #[test]
    fn test_category_requires_name() {
        let mut form = CategoryForm::default();
        assert!(form.validate().is_err());
        form.name = "Folk tales".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_upload_requires_file_then_category() {
        let mut form = UploadForm::default();
        assert_eq!(form.validate().unwrap_err(), FormError::NoFile);
        form.file = Some(FileAttachment::new("song.mp3", vec![1, 2, 3]));
        assert_eq!(form.validate().unwrap_err(), FormError::Required("Category"));
        form.category_id = "c-1".to_string();
        assert_eq!(form.validate().unwrap().name, "song.mp3");
    }

    #[test]
    fn test_content_type_guess() {
        assert_eq!(content_type_for("Scan.PDF"), Some("application/pdf"));
        assert_eq!(content_type_for("photo.jpeg"), Some("image/jpeg"));
        assert_eq!(content_type_for("archive.zip"), None);
        assert_eq!(content_type_for("README"), None);

        let file = FileAttachment::new("clip.bin", vec![]).with_content_type(Some("video/webm".into()));
        assert_eq!(file.content_type.as_deref(), Some("video/webm"));
    }
}
