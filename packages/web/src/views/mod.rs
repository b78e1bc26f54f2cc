mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod profile;
pub use profile::Profile;

mod create_record;
pub use create_record::CreateRecord;

mod upload;
pub use upload::Upload;

mod translation;
pub use translation::Translation;

mod authenticated_layout;
pub use authenticated_layout::AuthenticatedLayout;
