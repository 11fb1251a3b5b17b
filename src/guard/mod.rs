use rocket::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

/// the raw bearer token from the `Authorization` header.
///
/// This only checks the shape of the header; whether the token belongs to a live session
/// is checked by handlers against the [`crate::session::SessionStore`]
#[derive(Debug, PartialEq)]
pub struct SessionToken(pub String);

#[derive(Debug, PartialEq)]
pub enum SessionTokenError {
    Missing,
    Invalid,
}

impl SessionToken {
    /// creates a `SessionToken` from the passed header value, which must be in the form `Bearer <token>`
    pub fn from(header: &str) -> Result<SessionToken, &str> {
        let Some(token) = header.strip_prefix("Bearer ") else {
            return Err("Invalid authorization format: not a bearer token");
        };
        let token = token.trim();
        if token.is_empty() || token.contains(char::is_whitespace) {
            return Err("Invalid authorization format: malformed token");
        }
        Ok(SessionToken(token.to_string()))
    }
}

#[async_trait]
impl<'a> FromRequest<'a> for SessionToken {
    type Error = SessionTokenError;

    async fn from_request(request: &'a Request<'_>) -> Outcome<Self, Self::Error> {
        match request.headers().get_one("Authorization") {
            None => Outcome::Error((Status::Unauthorized, SessionTokenError::Missing)),
            Some(value) => match SessionToken::from(value) {
                Ok(token) => Outcome::Success(token),
                Err(_) => Outcome::Error((Status::Unauthorized, SessionTokenError::Invalid)),
            },
        }
    }
}
