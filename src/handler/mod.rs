use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, NOT_LOGGED_IN};

pub mod api_handler;
pub mod attachment_handler;
pub mod folder_handler;
pub mod note_handler;
pub mod session_handler;
pub mod tree_handler;
pub mod user_handler;

/// a missing or malformed `Authorization` header fails the guard before the handler runs
#[catch(401)]
pub fn unauthorized() -> Json<BasicMessage> {
    BasicMessage::new(NOT_LOGGED_IN)
}
