use rocket::serde::json::Json;

use crate::model::response::BasicMessage;
use crate::tree::{TreeNode, TreeRow};

#[derive(Responder)]
pub enum GetTreeResponse {
    #[response(status = 200)]
    Success(Json<Vec<TreeNode>>),
    #[response(status = 500, content_type = "json")]
    TreeDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetTreeRowsResponse {
    #[response(status = 200)]
    Success(Json<Vec<TreeRow>>),
    #[response(status = 500, content_type = "json")]
    TreeDbError(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}
