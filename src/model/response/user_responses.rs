use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::User;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct UserApi {
    pub id: u32,
    pub email: String,
}

/// sent back on a successful login. `token` goes in the `Authorization: Bearer` header of every other request
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct LoginApi {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub email: String,
}

impl From<&User> for UserApi {
    fn from(value: &User) -> Self {
        Self {
            id: value.id,
            email: value.email.clone(),
        }
    }
}

#[derive(Responder)]
pub enum RegisterResponse {
    #[response(status = 201)]
    Success(Json<UserApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    AlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum LoginResponse {
    #[response(status = 200)]
    Success(Json<LoginApi>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum LogoutResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
}
