use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::response::attachment_responses::AttachmentApi;
use crate::model::response::folder_responses::FolderResponse;
use crate::model::response::note_responses::NoteApi;
use crate::model::response::BasicMessage;
use crate::session::{SelectedItem, Session};

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SessionApi {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub email: String,
    pub selected: Option<SelectedItem>,
    #[serde(rename = "expandedFolders")]
    pub expanded_folders: Vec<u32>,
}

impl From<&Session> for SessionApi {
    fn from(session: &Session) -> Self {
        SessionApi {
            user_id: session.user_id,
            email: session.email.clone(),
            selected: session.selected(),
            expanded_folders: session.expanded_folders(),
        }
    }
}

/// whatever is currently selected, tagged with its type so the client knows how to show it
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde", tag = "type", content = "item", rename_all = "lowercase")]
pub enum SelectedContentApi {
    Folder(FolderResponse),
    Note(NoteApi),
    Attachment(AttachmentApi),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ToggleFolderApi {
    #[serde(rename = "folderId")]
    pub folder_id: u32,
    pub expanded: bool,
}

#[derive(Responder)]
pub enum GetSessionResponse {
    #[response(status = 200)]
    Success(Json<SessionApi>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum SelectItemResponse {
    #[response(status = 200)]
    Success(Json<SelectedItem>),
    #[response(status = 404, content_type = "json")]
    ItemNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum ClearSelectionResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetSelectedContentResponse {
    #[response(status = 200)]
    Success(Json<SelectedContentApi>),
    #[response(status = 204)]
    NothingSelected(NoContent),
    #[response(status = 404, content_type = "json")]
    ItemNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum ToggleFolderResponse {
    #[response(status = 200)]
    Success(Json<ToggleFolderApi>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}
