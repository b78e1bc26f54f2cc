mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod profile;
pub use profile::ProfileView;

mod create_record;
pub use create_record::CreateRecordView;

mod upload;
pub use upload::UploadView;

mod translation;
pub use translation::TranslationView;
