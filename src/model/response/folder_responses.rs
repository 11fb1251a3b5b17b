use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::Folder;
use crate::model::response::attachment_responses::AttachmentApi;
use crate::model::response::note_responses::NoteApi;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct FolderApi {
    pub id: u32,
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<u32>,
}

/// a folder along with everything directly inside of it
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct FolderResponse {
    pub id: u32,
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<u32>,
    pub folders: Vec<FolderApi>,
    pub notes: Vec<NoteApi>,
    pub attachments: Vec<AttachmentApi>,
}

impl From<&Folder> for FolderApi {
    fn from(base: &Folder) -> Self {
        FolderApi {
            // should always have an id when coming from the database
            id: base.id.unwrap_or_default(),
            name: String::from(&base.name),
            parent_id: base.parent_id,
        }
    }
}

impl From<&Folder> for FolderResponse {
    fn from(base: &Folder) -> Self {
        FolderResponse {
            id: base.id.unwrap_or_default(),
            name: String::from(&base.name),
            parent_id: base.parent_id,
            folders: Vec::new(),
            notes: Vec::new(),
            attachments: Vec::new(),
        }
    }
}

#[derive(Responder)]
pub enum ListFoldersResponse {
    #[response(status = 200)]
    Success(Json<Vec<FolderApi>>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetFolderResponse {
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderResponse>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateFolderResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<FolderApi>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    ParentNotFound(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateFolderResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<FolderApi>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    ParentNotFound(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteFolderResponse {
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}
