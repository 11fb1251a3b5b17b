use rocket::serde::json::Json;
use rocket::State;

use crate::guard::SessionToken;
use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, UpdateFolderError,
};
use crate::model::request::folder_requests::{CreateFolderRequest, UpdateFolderRequest};
use crate::model::response::folder_responses::{
    CreateFolderResponse, DeleteFolderResponse, GetFolderResponse, ListFoldersResponse,
    UpdateFolderResponse,
};
use crate::model::response::{BasicMessage, NOT_LOGGED_IN};
use crate::service::folder_service;
use crate::session::SessionStore;

#[get("/")]
pub fn list_folders(token: SessionToken, sessions: &State<SessionStore>) -> ListFoldersResponse {
    let Some(session) = sessions.get(&token) else {
        return ListFoldersResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match folder_service::list_folders(session.user_id) {
        Ok(folders) => ListFoldersResponse::Success(Json::from(folders)),
        Err(_) => ListFoldersResponse::FolderDbError(BasicMessage::new(
            "Failed to pull folders from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_folder(id: u32, token: SessionToken, sessions: &State<SessionStore>) -> GetFolderResponse {
    let Some(session) = sessions.get(&token) else {
        return GetFolderResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match folder_service::get_folder(id, session.user_id) {
        Ok(folder) => GetFolderResponse::Success(Json::from(folder)),
        Err(GetFolderError::NotFound) => GetFolderResponse::FolderNotFound(BasicMessage::new(
            "The folder with the passed id could not be found.",
        )),
        Err(GetFolderError::DbFailure) => GetFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to pull folder info from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<folder>")]
pub fn create_folder(
    folder: Json<CreateFolderRequest>,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> CreateFolderResponse {
    let Some(session) = sessions.get(&token) else {
        return CreateFolderResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match folder_service::create_folder(&folder, session.user_id) {
        Ok(created) => CreateFolderResponse::Success(Json::from(created)),
        Err(CreateFolderError::EmptyName) => {
            CreateFolderResponse::BadRequest(BasicMessage::new("Folder name cannot be empty."))
        }
        Err(CreateFolderError::ParentNotFound) => CreateFolderResponse::ParentNotFound(
            BasicMessage::new("The parent folder with the passed id could not be found."),
        ),
        Err(CreateFolderError::DbFailure) => CreateFolderResponse::FolderDbError(
            BasicMessage::new("Failed to create folder. Check server logs for details"),
        ),
    }
}

/// renames and/or moves the folder
#[put("/", data = "<folder>")]
pub fn update_folder(
    folder: Json<UpdateFolderRequest>,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> UpdateFolderResponse {
    let Some(session) = sessions.get(&token) else {
        return UpdateFolderResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match folder_service::update_folder(&folder, session.user_id) {
        Ok(updated) => UpdateFolderResponse::Success(Json::from(updated)),
        Err(UpdateFolderError::EmptyName) => {
            UpdateFolderResponse::BadRequest(BasicMessage::new("Folder name cannot be empty."))
        }
        Err(UpdateFolderError::NotAllowed) => UpdateFolderResponse::BadRequest(BasicMessage::new(
            "Cannot move a folder into itself or one of its sub folders.",
        )),
        Err(UpdateFolderError::NotFound) => UpdateFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(UpdateFolderError::ParentNotFound) => UpdateFolderResponse::ParentNotFound(
            BasicMessage::new("The parent folder with the passed id could not be found."),
        ),
        Err(UpdateFolderError::DbFailure) => UpdateFolderResponse::FolderDbError(
            BasicMessage::new("Failed to update folder. Check server logs for details"),
        ),
    }
}

/// deletes the folder along with everything inside of it
#[delete("/<id>")]
pub fn delete_folder(
    id: u32,
    token: SessionToken,
    sessions: &State<SessionStore>,
) -> DeleteFolderResponse {
    match sessions.with_session(&token, |session| folder_service::delete_folder(id, session)) {
        None => DeleteFolderResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN)),
        Some(Ok(())) => DeleteFolderResponse::Success(()),
        Some(Err(DeleteFolderError::DbFailure)) => DeleteFolderResponse::FolderDbError(
            BasicMessage::new("Failed to delete folder. Check server logs for details"),
        ),
    }
}
