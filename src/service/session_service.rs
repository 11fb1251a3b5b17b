use rusqlite::Connection;

use crate::model::error::folder_errors::GetFolderError;
use crate::model::error::session_errors::{
    GetSelectedError, GetSessionError, SelectItemError, ToggleFolderError,
};
use crate::model::item_types::ItemTypes;
use crate::model::request::session_requests::SelectItemRequest;
use crate::model::response::attachment_responses::AttachmentApi;
use crate::model::response::note_responses::NoteApi;
use crate::model::response::session_responses::{SelectedContentApi, SessionApi};
use crate::repository::{attachment_repository, folder_repository, note_repository};
use crate::service::{connect, folder_service, log_db_error};
use crate::session::{SelectedItem, Session};

/// the session as the client sees it. A selection pointing at an item that has since been deleted is cleared first
pub fn get_session(session: &mut Session) -> Result<SessionApi, GetSessionError> {
    let con = connect().map_err(|_| GetSessionError::DbFailure)?;
    if let Err(e) = clear_stale_selection(session, &con) {
        log_db_error("check if the selected item still exists", &e);
        return Err(GetSessionError::DbFailure);
    }
    Ok(SessionApi::from(&*session))
}

/// makes the item the only selected one, as long as it exists and belongs to the session's user
pub fn select_item(
    request: &SelectItemRequest,
    session: &mut Session,
) -> Result<SelectedItem, SelectItemError> {
    let con = connect().map_err(|_| SelectItemError::DbFailure)?;
    let item = SelectedItem {
        id: request.id,
        item_type: request.item_type,
    };
    match item_exists(item, session.user_id, &con) {
        Ok(true) => {
            session.select(item.id, item.item_type);
            Ok(item)
        }
        Ok(false) => Err(SelectItemError::NotFound),
        Err(e) => {
            log_db_error("check if the selected item exists", &e);
            Err(SelectItemError::DbFailure)
        }
    }
}

/// pulls whatever is selected for the content panel.
///
/// If the selected item has since been deleted, the selection is cleared and [`GetSelectedError::NotFound`] is returned
pub fn get_selected_content(session: &mut Session) -> Result<SelectedContentApi, GetSelectedError> {
    let Some(selected) = session.selected() else {
        return Err(GetSelectedError::NothingSelected);
    };
    let con = connect().map_err(|_| GetSelectedError::DbFailure)?;
    let user_id = session.user_id;
    let content = match selected.item_type {
        ItemTypes::Note => note_repository::get_note(selected.id, user_id, &con)
            .map(|note| SelectedContentApi::Note(NoteApi::from(note))),
        ItemTypes::Attachment => {
            attachment_repository::get_attachment(selected.id, user_id, &con)
                .map(|attachment| SelectedContentApi::Attachment(AttachmentApi::from(attachment)))
        }
        ItemTypes::Folder => match folder_service::get_folder(selected.id, user_id) {
            Ok(folder) => Ok(SelectedContentApi::Folder(folder)),
            Err(GetFolderError::NotFound) => Err(rusqlite::Error::QueryReturnedNoRows),
            Err(GetFolderError::DbFailure) => return Err(GetSelectedError::DbFailure),
        },
    };
    match content {
        Ok(content) => Ok(content),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            log::warn!(
                "Selected {} {} no longer exists, clearing the selection",
                selected.item_type,
                selected.id
            );
            session.clear_selection();
            Err(GetSelectedError::NotFound)
        }
        Err(e) => {
            log_db_error("pull the selected item", &e);
            Err(GetSelectedError::DbFailure)
        }
    }
}

/// expands a collapsed folder or collapses an expanded one, returning whether it is now expanded
pub fn toggle_folder(folder_id: u32, session: &mut Session) -> Result<bool, ToggleFolderError> {
    let con = connect().map_err(|_| ToggleFolderError::DbFailure)?;
    match folder_repository::get_by_id(folder_id, session.user_id, &con) {
        Ok(_) => Ok(session.toggle_folder(folder_id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(ToggleFolderError::NotFound),
        Err(e) => {
            log_db_error("check folder before toggling", &e);
            Err(ToggleFolderError::DbFailure)
        }
    }
}

/// clears the selection if the selected item is gone
pub fn clear_stale_selection(session: &mut Session, con: &Connection) -> Result<(), rusqlite::Error> {
    if let Some(selected) = session.selected() {
        if !item_exists(selected, session.user_id, con)? {
            session.clear_selection();
        }
    }
    Ok(())
}

pub fn item_exists(
    item: SelectedItem,
    user_id: u32,
    con: &Connection,
) -> Result<bool, rusqlite::Error> {
    let found = match item.item_type {
        ItemTypes::Folder => folder_repository::get_by_id(item.id, user_id, con).map(|_| ()),
        ItemTypes::Note => note_repository::get_note(item.id, user_id, con).map(|_| ()),
        ItemTypes::Attachment => {
            attachment_repository::get_attachment(item.id, user_id, con).map(|_| ())
        }
    };
    match found {
        Ok(()) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e),
    }
}
