pub mod attachment_errors;
pub mod folder_errors;
pub mod note_errors;
pub mod session_errors;
pub mod user_errors;
