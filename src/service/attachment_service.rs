use rocket::tokio::io::AsyncReadExt;
use rusqlite::Connection;

use crate::model::error::attachment_errors::{
    CreateAttachmentError, DeleteAttachmentError, GetAttachmentError,
};
use crate::model::item_types::ItemTypes;
use crate::model::repository::AttachmentData;
use crate::model::request::attachment_requests::CreateAttachmentRequest;
use crate::model::response::attachment_responses::AttachmentApi;
use crate::repository::attachment_repository;
use crate::service::note_service::check_folder;
use crate::service::{connect, log_db_error};
use crate::session::Session;

pub fn list_attachments(user_id: u32) -> Result<Vec<AttachmentApi>, GetAttachmentError> {
    let con = connect().map_err(|_| GetAttachmentError::DbFailure)?;
    match attachment_repository::get_all_attachments(user_id, &con) {
        Ok(attachments) => Ok(attachments.into_iter().map(AttachmentApi::from).collect()),
        Err(e) => {
            log_db_error("list attachments", &e);
            Err(GetAttachmentError::DbFailure)
        }
    }
}

pub fn get_attachment(id: u32, user_id: u32) -> Result<AttachmentApi, GetAttachmentError> {
    let con = connect().map_err(|_| GetAttachmentError::DbFailure)?;
    match attachment_repository::get_attachment(id, user_id, &con) {
        Ok(attachment) => Ok(AttachmentApi::from(attachment)),
        Err(e) => Err(map_get_error(e, "pull attachment from database")),
    }
}

/// reads the uploaded file off of the request and stores it
pub async fn create_attachment(
    upload: &CreateAttachmentRequest<'_>,
    user_id: u32,
) -> Result<AttachmentApi, CreateAttachmentError> {
    let Some(filename) = upload.file_name() else {
        return Err(CreateAttachmentError::BadFileName);
    };
    let mut file_data = Vec::new();
    let read = match upload.file.open().await {
        Ok(reader) => {
            rocket::tokio::pin!(reader);
            reader.read_to_end(&mut file_data).await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = read {
        log::error!("Failed to read uploaded file {filename}: {e:?}");
        return Err(CreateAttachmentError::ReadFailure);
    }
    save_attachment(&filename, &file_data, upload.folder_id(), user_id)
}

/// stores the bytes as an attachment in the folder (or the root if `folder_id` is `None`)
pub fn save_attachment(
    filename: &str,
    file_data: &[u8],
    folder_id: Option<u32>,
    user_id: u32,
) -> Result<AttachmentApi, CreateAttachmentError> {
    let con = connect().map_err(|_| CreateAttachmentError::DbFailure)?;
    match check_folder(folder_id, user_id, &con) {
        Ok(true) => { /* folder exists */ }
        Ok(false) => return Err(CreateAttachmentError::FolderNotFound),
        Err(_) => return Err(CreateAttachmentError::DbFailure),
    };
    match attachment_repository::create_attachment(filename, file_data, folder_id, user_id, &con)
    {
        Ok(created) => {
            log::info!(
                "Stored attachment {filename} ({} bytes) for user {user_id}",
                created.size
            );
            Ok(AttachmentApi::from(created))
        }
        Err(e) => {
            log_db_error("save attachment", &e);
            Err(CreateAttachmentError::DbFailure)
        }
    }
}

pub fn download_attachment(id: u32, user_id: u32) -> Result<AttachmentData, GetAttachmentError> {
    let con = connect().map_err(|_| GetAttachmentError::DbFailure)?;
    attachment_repository::get_attachment_data(id, user_id, &con)
        .map_err(|e| map_get_error(e, "pull attachment data from database"))
}

/// deletes the attachment and deselects it if it was selected. Deleting one that doesn't exist is not an error
pub fn delete_attachment(id: u32, session: &mut Session) -> Result<(), DeleteAttachmentError> {
    let con: Connection = connect().map_err(|_| DeleteAttachmentError::DbFailure)?;
    if let Err(e) = attachment_repository::delete_attachment(id, session.user_id, &con) {
        log_db_error("delete attachment", &e);
        return Err(DeleteAttachmentError::DbFailure);
    }
    session.deselect(id, ItemTypes::Attachment);
    Ok(())
}

fn map_get_error(e: rusqlite::Error, action: &str) -> GetAttachmentError {
    if e == rusqlite::Error::QueryReturnedNoRows {
        GetAttachmentError::NotFound
    } else {
        log_db_error(action, &e);
        GetAttachmentError::DbFailure
    }
}
