use std::path::Path;

use rocket::form::Form;
use rocket::http::{ContentType, Header};
use rocket::serde::json::Json;
use rocket::State;

use crate::guard::SessionToken;
use crate::model::error::attachment_errors::{
    CreateAttachmentError, DeleteAttachmentError, GetAttachmentError,
};
use crate::model::request::attachment_requests::CreateAttachmentRequest;
use crate::model::response::attachment_responses::{
    AttachmentDownload, CreateAttachmentResponse, DeleteAttachmentResponse,
    DownloadAttachmentResponse, GetAttachmentResponse, ListAttachmentsResponse,
};
use crate::model::response::{BasicMessage, NOT_LOGGED_IN};
use crate::service::attachment_service;
use crate::session::SessionStore;

static ATTACHMENT_NOT_FOUND: &str = "The attachment with the passed id could not be found.";

#[get("/")]
pub fn list_attachments(
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> ListAttachmentsResponse {
    let Some(session) = sessions.get(&token) else {
        return ListAttachmentsResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match attachment_service::list_attachments(session.user_id) {
        Ok(attachments) => ListAttachmentsResponse::Success(Json::from(attachments)),
        Err(_) => ListAttachmentsResponse::AttachmentDbError(BasicMessage::new(
            "Failed to pull attachments from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_attachment(
    id: u32,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> GetAttachmentResponse {
    let Some(session) = sessions.get(&token) else {
        return GetAttachmentResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match attachment_service::get_attachment(id, session.user_id) {
        Ok(attachment) => GetAttachmentResponse::Success(Json::from(attachment)),
        Err(GetAttachmentError::NotFound) => {
            GetAttachmentResponse::AttachmentNotFound(BasicMessage::new(ATTACHMENT_NOT_FOUND))
        }
        Err(GetAttachmentError::DbFailure) => GetAttachmentResponse::AttachmentDbError(
            BasicMessage::new("Failed to pull attachment from database. Check server logs for details"),
        ),
    }
}

/// sends back the stored bytes, with a content type guessed from the file extension
#[get("/<id>/download")]
pub fn download_attachment(
    id: u32,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> DownloadAttachmentResponse {
    let Some(session) = sessions.get(&token) else {
        return DownloadAttachmentResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match attachment_service::download_attachment(id, session.user_id) {
        Ok(data) => {
            let content_type = Path::new(&data.filename)
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ContentType::from_extension)
                .unwrap_or(ContentType::Binary);
            DownloadAttachmentResponse::Success(AttachmentDownload {
                disposition: Header::new(
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", data.filename),
                ),
                body: data.file_data,
                content_type,
            })
        }
        Err(GetAttachmentError::NotFound) => DownloadAttachmentResponse::AttachmentNotFound(
            BasicMessage::new(ATTACHMENT_NOT_FOUND),
        ),
        Err(GetAttachmentError::DbFailure) => DownloadAttachmentResponse::AttachmentDbError(
            BasicMessage::new("Failed to pull attachment from database. Check server logs for details"),
        ),
    }
}

/// accepts a file via multipart form and stores it in the folder named by `folderId`
#[post("/", data = "<upload>")]
pub async fn create_attachment(
    upload: Form<CreateAttachmentRequest<'_>>,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> CreateAttachmentResponse {
    let Some(session) = sessions.get(&token) else {
        return CreateAttachmentResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match attachment_service::create_attachment(&upload, session.user_id).await {
        Ok(created) => CreateAttachmentResponse::Success(Json::from(created)),
        Err(CreateAttachmentError::BadFileName) => CreateAttachmentResponse::BadRequest(
            BasicMessage::new("The uploaded file must have a usable file name."),
        ),
        Err(CreateAttachmentError::FolderNotFound) => CreateAttachmentResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(CreateAttachmentError::ReadFailure) => CreateAttachmentResponse::Failure(
            BasicMessage::new("Failed to read the uploaded file. Check server logs for details"),
        ),
        Err(CreateAttachmentError::DbFailure) => CreateAttachmentResponse::Failure(
            BasicMessage::new("Failed to save attachment. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_attachment(
    id: u32,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> DeleteAttachmentResponse {
    match sessions.with_session(&token, |session| {
        attachment_service::delete_attachment(id, session)
    }) {
        None => DeleteAttachmentResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(())) => DeleteAttachmentResponse::Deleted(()),
        Some(Err(DeleteAttachmentError::DbFailure)) => DeleteAttachmentResponse::Failure(
            BasicMessage::new("Failed to delete attachment. Check server logs for details"),
        ),
    }
}
