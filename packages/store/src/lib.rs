pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod flow;
pub mod forms;
pub mod models;
pub mod session;
pub mod translation;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageTokenStore;

pub use config::CorpusConfig;
pub use dashboard::{Dashboard, DashboardTab, LazyResource};
pub use fetch::Fetch;
pub use flow::{FlowStage, OtpLoginForm, PasswordLoginForm, SignupError, SignupForm, SignupSubmission};
pub use forms::{
    CategoryForm, FileAttachment, FormError, RecordForm, UploadForm, ACCEPTED_FILE_TYPES,
    MEDIA_TYPES, RECORD_CATEGORIES, RECORD_LANGUAGES, RELEASE_RIGHTS,
};
pub use models::{language_label, Category, CorpusPage, LanguageCatalog, Record, SupportedLanguage, UserProfile};
pub use session::{AuthSession, StorageError, TokenStore};
pub use translation::{
    confidence_percent, Detection, Translation, TranslationDraft, TranslationHistory,
    TranslationHistoryItem, TranslationRequest,
};
