use rusqlite::Connection;

use crate::model::error::note_errors::{
    CreateNoteError, DeleteNoteError, GetNoteError, UpdateNoteError,
};
use crate::model::item_types::ItemTypes;
use crate::model::repository::Note;
use crate::model::request::attachment_requests::sanitize_file_name;
use crate::model::request::note_requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::model::response::note_responses::NoteApi;
use crate::repository::{folder_repository, note_repository};
use crate::service::{connect, log_db_error};
use crate::session::Session;

pub static DEFAULT_TITLE: &str = "Untitled";
/// most notes a search will return
pub const SEARCH_LIMIT: u32 = 20;
/// how many notes the recent list shows
pub const RECENT_LIMIT: u32 = 5;

/// a note flattened into a plain text file
#[derive(Debug, PartialEq)]
pub struct NoteText {
    pub file_name: String,
    pub body: String,
}

pub fn list_notes(user_id: u32) -> Result<Vec<NoteApi>, GetNoteError> {
    let con = connect().map_err(|_| GetNoteError::DbFailure)?;
    match note_repository::get_all_notes(user_id, &con) {
        Ok(notes) => Ok(notes.into_iter().map(NoteApi::from).collect()),
        Err(e) => {
            log_db_error("list notes", &e);
            Err(GetNoteError::DbFailure)
        }
    }
}

/// notes with `text` somewhere in their title or content, most recently saved first.
/// Blank text matches every note, the same as [`list_notes`]
pub fn search_notes(text: &str, user_id: u32) -> Result<Vec<NoteApi>, GetNoteError> {
    let text = text.trim();
    if text.is_empty() {
        return list_notes(user_id);
    }
    let con = connect().map_err(|_| GetNoteError::DbFailure)?;
    match note_repository::search_notes(text, user_id, SEARCH_LIMIT, &con) {
        Ok(notes) => Ok(notes.into_iter().map(NoteApi::from).collect()),
        Err(e) => {
            log_db_error("search notes", &e);
            Err(GetNoteError::DbFailure)
        }
    }
}

pub fn recent_notes(user_id: u32) -> Result<Vec<NoteApi>, GetNoteError> {
    let con = connect().map_err(|_| GetNoteError::DbFailure)?;
    match note_repository::get_recent_notes(user_id, RECENT_LIMIT, &con) {
        Ok(notes) => Ok(notes.into_iter().map(NoteApi::from).collect()),
        Err(e) => {
            log_db_error("pull recent notes", &e);
            Err(GetNoteError::DbFailure)
        }
    }
}

pub fn get_note(id: u32, user_id: u32) -> Result<NoteApi, GetNoteError> {
    let con = connect().map_err(|_| GetNoteError::DbFailure)?;
    get_note_by_id(id, user_id, &con).map(NoteApi::from)
}

/// creates a note (titled "Untitled" and empty unless told otherwise) and makes it the selected item
pub fn create_note(
    request: &CreateNoteRequest,
    session: &mut Session,
) -> Result<NoteApi, CreateNoteError> {
    let con = connect().map_err(|_| CreateNoteError::DbFailure)?;
    let folder_id = request.folder_id();
    match check_folder(folder_id, session.user_id, &con) {
        Ok(true) => { /* folder exists */ }
        Ok(false) => return Err(CreateNoteError::FolderNotFound),
        Err(_) => return Err(CreateNoteError::DbFailure),
    };
    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE);
    let note = Note {
        id: None,
        title: title.to_string(),
        content: request.content.clone().unwrap_or_default(),
        folder_id,
        user_id: session.user_id,
    };
    let created = note_repository::create_note(&note, &con).map_err(|e| {
        log_db_error("save note", &e);
        CreateNoteError::DbFailure
    })?;
    let created = NoteApi::from(created);
    session.select(created.id, ItemTypes::Note);
    Ok(created)
}

/// saves the title, content, and folder exactly as passed
pub fn update_note(request: &UpdateNoteRequest, user_id: u32) -> Result<NoteApi, UpdateNoteError> {
    let con = connect().map_err(|_| UpdateNoteError::DbFailure)?;
    let folder_id = request.folder_id();
    match check_folder(folder_id, user_id, &con) {
        Ok(true) => { /* folder exists */ }
        Ok(false) => return Err(UpdateNoteError::FolderNotFound),
        Err(_) => return Err(UpdateNoteError::DbFailure),
    };
    let note = Note {
        id: Some(request.id),
        title: request.title.clone(),
        content: request.content.clone(),
        folder_id,
        user_id,
    };
    match note_repository::update_note(&note, &con) {
        Ok(0) => Err(UpdateNoteError::NotFound),
        Ok(_) => Ok(NoteApi::from(note)),
        Err(e) => {
            log_db_error("update note", &e);
            Err(UpdateNoteError::DbFailure)
        }
    }
}

/// deletes the note and deselects it if it was selected. Deleting a note that doesn't exist is not an error
pub fn delete_note(id: u32, session: &mut Session) -> Result<(), DeleteNoteError> {
    let con = connect().map_err(|_| DeleteNoteError::DbFailure)?;
    if let Err(e) = note_repository::delete_note(id, session.user_id, &con) {
        log_db_error("delete note", &e);
        return Err(DeleteNoteError::DbFailure);
    }
    session.deselect(id, ItemTypes::Note);
    Ok(())
}

/// renders the note as `# title` followed by its content, named after the title
pub fn download_note(id: u32, user_id: u32) -> Result<NoteText, GetNoteError> {
    let con = connect().map_err(|_| GetNoteError::DbFailure)?;
    let note = get_note_by_id(id, user_id, &con)?;
    Ok(NoteText {
        file_name: download_file_name(&note.title),
        body: format!("# {}\n\n{}", note.title, note.content),
    })
}

/// the title as a file name that is safe to put in a `Content-Disposition` header.
/// Falls back to `Untitled.txt` if nothing usable is left
pub fn download_file_name(title: &str) -> String {
    let stem = title.replace([' ', '/', '\\'], "_");
    match sanitize_file_name(&stem) {
        Some(stem) => format!("{stem}.txt"),
        None => format!("{DEFAULT_TITLE}.txt"),
    }
}

// private functions
fn get_note_by_id(id: u32, user_id: u32, con: &Connection) -> Result<Note, GetNoteError> {
    match note_repository::get_note(id, user_id, con) {
        Ok(note) => Ok(note),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetNoteError::NotFound),
        Err(e) => {
            log_db_error("pull note from database", &e);
            Err(GetNoteError::DbFailure)
        }
    }
}

/// `true` if the note can go in that folder: either the root, or a folder the user owns
pub(super) fn check_folder(
    folder_id: Option<u32>,
    user_id: u32,
    con: &Connection,
) -> Result<bool, rusqlite::Error> {
    let Some(folder_id) = folder_id else {
        return Ok(true);
    };
    match folder_repository::get_by_id(folder_id, user_id, con) {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => {
            log_db_error("check folder", &e);
            Err(e)
        }
    }
}
