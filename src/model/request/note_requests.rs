use rocket::serde::{Deserialize, Serialize};

use crate::model::request::root_as_none;

/// every field is optional; an empty body creates an empty "Untitled" note at the root
#[derive(Deserialize, Serialize, Default)]
#[serde(crate = "rocket::serde")]
pub struct CreateNoteRequest {
    #[serde(rename = "folderId")]
    pub folder_id: Option<u32>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// saves a note exactly as sent. `folderId` is part of the save, so leaving it out moves the note to the root
#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateNoteRequest {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(rename = "folderId")]
    pub folder_id: Option<u32>,
}

impl CreateNoteRequest {
    pub fn folder_id(&self) -> Option<u32> {
        root_as_none(self.folder_id)
    }
}

impl UpdateNoteRequest {
    pub fn folder_id(&self) -> Option<u32> {
        root_as_none(self.folder_id)
    }
}
