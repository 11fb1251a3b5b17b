use rocket::serde::json::Json;
use rocket::State;

use crate::guard::SessionToken;
use crate::model::response::tree_responses::{GetTreeResponse, GetTreeRowsResponse};
use crate::model::response::{BasicMessage, NOT_LOGGED_IN};
use crate::service::tree_service;
use crate::session::SessionStore;

static TREE_DB_ERROR: &str = "Failed to pull the tree from database. Check server logs for details";

/// the full tree of the user's folders, notes, and attachments
#[get("/")]
pub fn get_tree(token: SessionToken, sessions: &State<SessionStore>) -> GetTreeResponse {
    let Some(session) = sessions.get(&token) else {
        return GetTreeResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match tree_service::get_tree(&session) {
        Ok(tree) => GetTreeResponse::Success(Json::from(tree)),
        Err(_) => GetTreeResponse::TreeDbError(BasicMessage::new(TREE_DB_ERROR)),
    }
}

/// only the rows visible with the current expanded folders, flattened for display
#[get("/rows")]
pub fn get_tree_rows(token: SessionToken, sessions: &State<SessionStore>) -> GetTreeRowsResponse {
    let Some(session) = sessions.get(&token) else {
        return GetTreeRowsResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN));
    };
    match tree_service::get_tree_rows(&session) {
        Ok(rows) => GetTreeRowsResponse::Success(Json::from(rows)),
        Err(_) => GetTreeRowsResponse::TreeDbError(BasicMessage::new(TREE_DB_ERROR)),
    }
}
