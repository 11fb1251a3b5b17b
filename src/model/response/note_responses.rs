use rocket::http::Header;
use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::Note;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct NoteApi {
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(rename = "folderId")]
    pub folder_id: Option<u32>,
}

impl From<Note> for NoteApi {
    fn from(value: Note) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            title: value.title,
            content: value.content,
            folder_id: value.folder_id,
        }
    }
}

/// a note rendered as a plain text file, ready to be sent as a download
#[derive(Responder)]
#[response(content_type = "text/plain")]
pub struct NoteDownload {
    pub body: String,
    pub disposition: Header<'static>,
}

#[derive(Responder)]
pub enum ListNotesResponse {
    #[response(status = 200)]
    Success(Json<Vec<NoteApi>>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetNoteResponse {
    #[response(status = 404, content_type = "json")]
    NoteNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<NoteApi>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DownloadNoteResponse {
    #[response(status = 404, content_type = "json")]
    NoteNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(NoteDownload),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateNoteResponse {
    #[response(status = 201)]
    Success(Json<NoteApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateNoteResponse {
    #[response(status = 200)]
    Success(Json<NoteApi>),
    #[response(status = 404, content_type = "json")]
    NoteNotFound(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteNoteResponse {
    #[response(status = 204)]
    Deleted(NoContent),
    #[response(status = 500, content_type = "json")]
    NoteDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}
