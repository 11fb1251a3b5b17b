use rusqlite::Connection;

use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, UpdateFolderError,
};
use crate::model::repository::Folder;
use crate::model::request::folder_requests::{CreateFolderRequest, UpdateFolderRequest};
use crate::model::response::attachment_responses::AttachmentApi;
use crate::model::response::folder_responses::{FolderApi, FolderResponse};
use crate::model::response::note_responses::NoteApi;
use crate::repository::{attachment_repository, folder_repository, note_repository};
use crate::service::{connect, log_db_error, session_service};
use crate::session::Session;

/// every folder the user owns, as a flat list
pub fn list_folders(user_id: u32) -> Result<Vec<FolderApi>, GetFolderError> {
    let con = connect().map_err(|_| GetFolderError::DbFailure)?;
    match folder_repository::get_all_folders(user_id, &con) {
        Ok(folders) => Ok(folders.iter().map(FolderApi::from).collect()),
        Err(e) => {
            log_db_error("list folders", &e);
            Err(GetFolderError::DbFailure)
        }
    }
}

/// the folder with everything directly inside of it
pub fn get_folder(id: u32, user_id: u32) -> Result<FolderResponse, GetFolderError> {
    let con = connect().map_err(|_| GetFolderError::DbFailure)?;
    let folder = get_folder_by_id(id, user_id, &con)?;
    let mut response = FolderResponse::from(&folder);
    let contents = folder_repository::get_child_folders(Some(id), user_id, &con)
        .and_then(|folders| {
            let notes = note_repository::get_notes_in_folder(Some(id), user_id, &con)?;
            let attachments =
                attachment_repository::get_attachments_in_folder(Some(id), user_id, &con)?;
            Ok((folders, notes, attachments))
        });
    let (folders, notes, attachments) = contents.map_err(|e| {
        log_db_error("pull child info for folder", &e);
        GetFolderError::DbFailure
    })?;
    response.folders = folders.iter().map(FolderApi::from).collect();
    response.notes = notes.into_iter().map(NoteApi::from).collect();
    response.attachments = attachments.into_iter().map(AttachmentApi::from).collect();
    Ok(response)
}

pub fn create_folder(
    request: &CreateFolderRequest,
    user_id: u32,
) -> Result<FolderApi, CreateFolderError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(CreateFolderError::EmptyName);
    }
    let con = connect().map_err(|_| CreateFolderError::DbFailure)?;
    let parent_id = request.parent_id();
    if let Some(parent_id) = parent_id {
        match get_folder_by_id(parent_id, user_id, &con) {
            Ok(_) => { /* parent exists */ }
            Err(GetFolderError::NotFound) => return Err(CreateFolderError::ParentNotFound),
            Err(GetFolderError::DbFailure) => return Err(CreateFolderError::DbFailure),
        }
    }
    let folder = Folder {
        id: None,
        name: name.to_string(),
        parent_id,
        user_id,
    };
    match folder_repository::create_folder(&folder, &con) {
        Ok(created) => Ok(FolderApi::from(&created)),
        Err(e) => {
            log_db_error("save folder", &e);
            Err(CreateFolderError::DbFailure)
        }
    }
}

/// renames and/or moves a folder. A folder can't be moved into itself or anything underneath it
pub fn update_folder(
    request: &UpdateFolderRequest,
    user_id: u32,
) -> Result<FolderApi, UpdateFolderError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(UpdateFolderError::EmptyName);
    }
    let con = connect().map_err(|_| UpdateFolderError::DbFailure)?;
    match get_folder_by_id(request.id, user_id, &con) {
        Ok(_) => { /* exists */ }
        Err(GetFolderError::NotFound) => return Err(UpdateFolderError::NotFound),
        Err(GetFolderError::DbFailure) => return Err(UpdateFolderError::DbFailure),
    };
    let parent_id = request.parent_id();
    if let Some(parent_id) = parent_id {
        match get_folder_by_id(parent_id, user_id, &con) {
            Ok(_) => { /* parent exists */ }
            Err(GetFolderError::NotFound) => return Err(UpdateFolderError::ParentNotFound),
            Err(GetFolderError::DbFailure) => return Err(UpdateFolderError::DbFailure),
        }
        if is_attempt_move_to_sub_child(request.id, parent_id, user_id, &con)? {
            log::warn!(
                "Refusing to move folder {} into its own descendant {parent_id}",
                request.id
            );
            return Err(UpdateFolderError::NotAllowed);
        }
    }
    let folder = Folder {
        id: Some(request.id),
        name: name.to_string(),
        parent_id,
        user_id,
    };
    if let Err(e) = folder_repository::update_folder(&folder, &con) {
        log_db_error("update folder", &e);
        return Err(UpdateFolderError::DbFailure);
    }
    Ok(FolderApi::from(&folder))
}

/// deletes the folder and, through the database's cascading deletes, every folder, note, and attachment inside of it.
///
/// Collapsed/expanded state for the removed folders is forgotten, and the selection is cleared if it was
/// somewhere in the removed subtree. Deleting a folder that doesn't exist is not an error
pub fn delete_folder(id: u32, session: &mut Session) -> Result<(), DeleteFolderError> {
    let con = connect().map_err(|_| DeleteFolderError::DbFailure)?;
    let removed = folder_repository::get_all_child_folder_ids(id, session.user_id, &con)
        .map_err(|e| {
            log_db_error("collect child folders", &e);
            DeleteFolderError::DbFailure
        })?;
    if let Err(e) = folder_repository::delete_folder(id, session.user_id, &con) {
        log_db_error("delete folder", &e);
        return Err(DeleteFolderError::DbFailure);
    }
    if !removed.is_empty() {
        log::info!(
            "Deleted folder {id} along with {} sub folders",
            removed.len() - 1
        );
    }
    session.forget_folders(&removed);
    // a stale selection is cleared on the next read anyway
    if let Err(e) = session_service::clear_stale_selection(session, &con) {
        log_db_error("check the selection after deleting a folder", &e);
    }
    Ok(())
}

// private functions
fn get_folder_by_id(id: u32, user_id: u32, con: &Connection) -> Result<Folder, GetFolderError> {
    match folder_repository::get_by_id(id, user_id, con) {
        Ok(folder) => Ok(folder),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetFolderError::NotFound),
        Err(e) => {
            log_db_error("pull folder info from database", &e);
            Err(GetFolderError::DbFailure)
        }
    }
}

/// checks whether `parent_id` is the folder itself or anywhere underneath it
fn is_attempt_move_to_sub_child(
    folder_id: u32,
    parent_id: u32,
    user_id: u32,
    con: &Connection,
) -> Result<bool, UpdateFolderError> {
    match folder_repository::get_all_child_folder_ids(folder_id, user_id, con) {
        Ok(ids) => Ok(ids.contains(&parent_id)),
        Err(e) => {
            log_db_error("collect child folders", &e);
            Err(UpdateFolderError::DbFailure)
        }
    }
}
