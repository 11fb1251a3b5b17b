use rocket::serde::json::Json;
use rocket::State;

use crate::guard::SessionToken;
use crate::model::error::session_errors::{
    GetSelectedError, GetSessionError, SelectItemError, ToggleFolderError,
};
use crate::model::request::session_requests::SelectItemRequest;
use crate::model::response::session_responses::{
    ClearSelectionResponse, GetSelectedContentResponse, GetSessionResponse, SelectItemResponse,
    ToggleFolderApi, ToggleFolderResponse,
};
use crate::model::response::{BasicMessage, NOT_LOGGED_IN};
use crate::service::session_service;
use crate::session::SessionStore;

#[get("/")]
pub fn get_session(token: SessionToken, sessions: &State<SessionStore>) -> GetSessionResponse {
    match sessions.with_session(&token, session_service::get_session) {
        None => GetSessionResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(session)) => GetSessionResponse::Success(Json::from(session)),
        Some(Err(GetSessionError::DbFailure)) => GetSessionResponse::Failure(BasicMessage::new(
            "Failed to pull the session. Check server logs for details",
        )),
    }
}

/// makes the passed item the only selected one
#[put("/selection", data = "<item>")]
pub fn select_item(
    item: Json<SelectItemRequest>,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> SelectItemResponse {
    match sessions.with_session(&token, |session| session_service::select_item(&item, session)) {
        None => SelectItemResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(selected)) => SelectItemResponse::Success(Json::from(selected)),
        Some(Err(SelectItemError::NotFound)) => SelectItemResponse::ItemNotFound(
            BasicMessage::new("The item with the passed id and type could not be found."),
        ),
        Some(Err(SelectItemError::DbFailure)) => SelectItemResponse::Failure(BasicMessage::new(
            "Failed to select item. Check server logs for details",
        )),
    }
}

#[delete("/selection")]
pub fn clear_selection(token: SessionToken, sessions: &State<SessionStore>) -> ClearSelectionResponse {
    match sessions.with_session(&token, |session| session.clear_selection()) {
        Some(()) => ClearSelectionResponse::Success(()),
        None => ClearSelectionResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
    }
}

/// the selected folder, note, or attachment, for the content panel
#[get("/selection/content")]
pub fn get_selected_content(
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> GetSelectedContentResponse {
    match sessions.with_session(&token, session_service::get_selected_content) {
        None => GetSelectedContentResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(content)) => GetSelectedContentResponse::Success(Json::from(content)),
        Some(Err(GetSelectedError::NothingSelected)) => {
            GetSelectedContentResponse::NothingSelected(())
        }
        Some(Err(GetSelectedError::NotFound)) => GetSelectedContentResponse::ItemNotFound(
            BasicMessage::new("The selected item could not be found. It might have been deleted."),
        ),
        Some(Err(GetSelectedError::DbFailure)) => GetSelectedContentResponse::Failure(
            BasicMessage::new("Failed to pull the selected item. Check server logs for details"),
        ),
    }
}

/// expands the folder if it's collapsed, or collapses it if it's expanded
#[post("/folders/<id>/toggle")]
pub fn toggle_folder(
    id: u32,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> ToggleFolderResponse {
    match sessions.with_session(&token, |session| session_service::toggle_folder(id, session)) {
        None => ToggleFolderResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(expanded)) => ToggleFolderResponse::Success(Json::from(ToggleFolderApi {
            folder_id: id,
            expanded,
        })),
        Some(Err(ToggleFolderError::NotFound)) => ToggleFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Some(Err(ToggleFolderError::DbFailure)) => ToggleFolderResponse::Failure(
            BasicMessage::new("Failed to toggle folder. Check server logs for details"),
        ),
    }
}
