use rocket::http::Header;
use rocket::serde::json::{self, Json};
use rocket::State;

use crate::guard::SessionToken;
use crate::model::error::note_errors::{
    CreateNoteError, DeleteNoteError, GetNoteError, UpdateNoteError,
};
use crate::model::request::note_requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::model::response::note_responses::{
    CreateNoteResponse, DeleteNoteResponse, DownloadNoteResponse, GetNoteResponse,
    ListNotesResponse, NoteDownload, UpdateNoteResponse,
};
use crate::model::response::{BasicMessage, NOT_LOGGED_IN};
use crate::service::note_service;
use crate::session::SessionStore;

static NOTE_NOT_FOUND: &str = "The note with the passed id could not be found.";
static FOLDER_NOT_FOUND: &str = "The folder with the passed id could not be found.";

/// every note the user has, or only the ones matching `search` if it's passed
#[get("/?<search>")]
pub fn list_notes(
    search: Option<&str>,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> ListNotesResponse {
    let Some(session) = sessions.get(&token) else {
        return ListNotesResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    let notes = match search {
        Some(text) => note_service::search_notes(text, session.user_id),
        None => note_service::list_notes(session.user_id),
    };
    match notes {
        Ok(notes) => ListNotesResponse::Success(Json::from(notes)),
        Err(_) => ListNotesResponse::NoteDbError(BasicMessage::new(
            "Failed to pull notes from database. Check server logs for details",
        )),
    }
}

/// the last few notes the user saved, newest first
#[get("/recent")]
pub fn recent_notes(token: SessionToken, sessions: &State<SessionStore>) -> ListNotesResponse {
    let Some(session) = sessions.get(&token) else {
        return ListNotesResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match note_service::recent_notes(session.user_id) {
        Ok(notes) => ListNotesResponse::Success(Json::from(notes)),
        Err(_) => ListNotesResponse::NoteDbError(BasicMessage::new(
            "Failed to pull recent notes from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_note(id: u32, token: SessionToken, sessions: &State<SessionStore>) -> GetNoteResponse {
    let Some(session) = sessions.get(&token) else {
        return GetNoteResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match note_service::get_note(id, session.user_id) {
        Ok(note) => GetNoteResponse::Success(Json::from(note)),
        Err(GetNoteError::NotFound) => {
            GetNoteResponse::NoteNotFound(BasicMessage::new(NOTE_NOT_FOUND))
        }
        Err(GetNoteError::DbFailure) => GetNoteResponse::NoteDbError(BasicMessage::new(
            "Failed to pull note from database. Check server logs for details",
        )),
    }
}

/// sends the note back as a `.txt` file
#[get("/<id>/download")]
pub fn download_note(
    id: u32,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> DownloadNoteResponse {
    let Some(session) = sessions.get(&token) else {
        return DownloadNoteResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match note_service::download_note(id, session.user_id) {
        Ok(text) => DownloadNoteResponse::Success(NoteDownload {
            body: text.body,
            disposition: Header::new(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", text.file_name),
            ),
        }),
        Err(GetNoteError::NotFound) => {
            DownloadNoteResponse::NoteNotFound(BasicMessage::new(NOTE_NOT_FOUND))
        }
        Err(GetNoteError::DbFailure) => DownloadNoteResponse::NoteDbError(BasicMessage::new(
            "Failed to pull note from database. Check server logs for details",
        )),
    }
}

/// creates a note and selects it. An empty body is allowed, but a body that isn't a valid note is rejected
#[post("/", data = "<note>")]
pub fn create_note(
    note: Result<Json<CreateNoteRequest>, json::Error<'_>>,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> CreateNoteResponse {
    let request = match note {
        Ok(note) => note.into_inner(),
        Err(json::Error::Parse(body, _)) if body.trim().is_empty() => CreateNoteRequest::default(),
        Err(e) => {
            log::warn!("Rejected a malformed create note request: {e:?}");
            return CreateNoteResponse::BadRequest(BasicMessage::new(
                "The request body is not a valid note.",
            ));
        }
    };
    match sessions.with_session(&token, |session| note_service::create_note(&request, session)) {
        None => CreateNoteResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(created)) => CreateNoteResponse::Success(Json::from(created)),
        Some(Err(CreateNoteError::FolderNotFound)) => {
            CreateNoteResponse::FolderNotFound(BasicMessage::new(FOLDER_NOT_FOUND))
        }
        Some(Err(CreateNoteError::DbFailure)) => CreateNoteResponse::NoteDbError(
            BasicMessage::new("Failed to create note. Check server logs for details"),
        ),
    }
}

/// saves the note's title, content, and folder
#[put("/", data = "<note>")]
pub fn update_note(
    note: Json<UpdateNoteRequest>,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> UpdateNoteResponse {
    let Some(session) = sessions.get(&token) else {
        return UpdateNoteResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match note_service::update_note(&note, session.user_id) {
        Ok(updated) => UpdateNoteResponse::Success(Json::from(updated)),
        Err(UpdateNoteError::NotFound) => {
            UpdateNoteResponse::NoteNotFound(BasicMessage::new(NOTE_NOT_FOUND))
        }
        Err(UpdateNoteError::FolderNotFound) => {
            UpdateNoteResponse::FolderNotFound(BasicMessage::new(FOLDER_NOT_FOUND))
        }
        Err(UpdateNoteError::DbFailure) => UpdateNoteResponse::NoteDbError(BasicMessage::new(
            "Failed to save note. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_note(id: u32, token: SessionToken, sessions: &State<SessionStore>) -> DeleteNoteResponse {
    match sessions.with_session(&token, |session| note_service::delete_note(id, session)) {
        None => DeleteNoteResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(())) => DeleteNoteResponse::Deleted(()),
        Some(Err(DeleteNoteError::DbFailure)) => DeleteNoteResponse::NoteDbError(
            BasicMessage::new("Failed to delete note. Check server logs for details"),
        ),
    }
}
