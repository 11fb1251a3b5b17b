use rocket::serde::json::Json;
use rocket::State;

use crate::guard::SessionToken;
use crate::model::error::user_errors::{LoginError, RegisterError};
use crate::model::request::user_requests::CredentialsRequest;
use crate::model::response::user_responses::{
    LoginApi, LoginResponse, LogoutResponse, RegisterResponse,
};
use crate::model::response::{BasicMessage, NOT_LOGGED_IN};
use crate::service::user_service;
use crate::session::SessionStore;

#[post("/register", data = "<credentials>")]
pub fn register(credentials: Json<CredentialsRequest>) -> RegisterResponse {
    match user_service::register(&credentials) {
        Ok(user) => RegisterResponse::Success(Json::from(user)),
        Err(RegisterError::MissingFields) => {
            RegisterResponse::BadRequest(BasicMessage::new("Email and password are required."))
        }
        Err(RegisterError::AlreadyExists) => RegisterResponse::AlreadyExists(BasicMessage::new(
            "Email already exists.",
        )),
        Err(_) => RegisterResponse::Failure(BasicMessage::new(
            "Failed to register user. Check server logs for details",
        )),
    }
}

/// checks the credentials and starts a new session, returning the token for it
#[post("/login", data = "<credentials>")]
pub fn login(
    credentials: Json<CredentialsRequest>,
    sessions: &State<SessionStore>,
) -> LoginResponse {
    match user_service::login(&credentials) {
        Ok(user) => {
            let token = sessions.create(&user);
            LoginResponse::Success(Json::from(LoginApi {
                token,
                user_id: user.id,
                email: user.email,
            }))
        }
        Err(LoginError::InvalidCredentials) => {
            LoginResponse::Unauthorized(BasicMessage::new("Invalid email or password."))
        }
        Err(LoginError::DbFailure) => LoginResponse::Failure(BasicMessage::new(
            "Failed to log in. Check server logs for details",
        )),
    }
}

#[post("/logout")]
pub fn logout(token: SessionToken, sessions: &State<SessionStore>) -> LogoutResponse {
    if sessions.remove(&token) {
        LogoutResponse::Success(())
    } else {
        LogoutResponse::Unauthorized(BasicMessage::new(NOT_LOGGED_IN))
    }
}
