use rocket::http::{ContentType, Header};
use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::Attachment;
use crate::model::response::BasicMessage;

type NoContent = ();

/// attachment metadata; the bytes are only ever sent through the download route
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct AttachmentApi {
    pub id: u32,
    pub filename: String,
    #[serde(rename = "folderId")]
    pub folder_id: Option<u32>,
    pub size: u64,
}

impl From<Attachment> for AttachmentApi {
    fn from(value: Attachment) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            filename: value.filename,
            folder_id: value.folder_id,
            size: value.size,
        }
    }
}

#[derive(Responder)]
pub struct AttachmentDownload {
    pub body: Vec<u8>,
    pub content_type: ContentType,
    pub disposition: Header<'static>,
}

#[derive(Responder)]
pub enum ListAttachmentsResponse {
    #[response(status = 200)]
    Success(Json<Vec<AttachmentApi>>),
    #[response(status = 500, content_type = "json")]
    AttachmentDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetAttachmentResponse {
    #[response(status = 404, content_type = "json")]
    AttachmentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    AttachmentDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<AttachmentApi>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DownloadAttachmentResponse {
    #[response(status = 404, content_type = "json")]
    AttachmentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    AttachmentDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(AttachmentDownload),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateAttachmentResponse {
    #[response(status = 201)]
    Success(Json<AttachmentApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteAttachmentResponse {
    #[response(status = 204)]
    Deleted(NoContent),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}
