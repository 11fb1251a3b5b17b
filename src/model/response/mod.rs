use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

pub mod attachment_responses;
pub mod folder_responses;
pub mod note_responses;
pub mod session_responses;
pub mod tree_responses;
pub mod user_responses;

/// body of every response that isn't successful; a body with only a human-readable message
#[derive(Responder, Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

/// sent back on every authenticated route when the bearer token doesn't belong to a live session
pub static NOT_LOGGED_IN: &str = "Not logged in. Log in by making a POST to `/users/login`";

// ----------------------------------

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}

impl From<String> for BasicMessage {
    fn from(value: String) -> Self {
        Self { message: value }
    }
}
