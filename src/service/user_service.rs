use once_cell::sync::Lazy;

use crate::model::error::user_errors::{LoginError, RegisterError};
use crate::model::repository::User;
use crate::model::request::user_requests::CredentialsRequest;
use crate::model::response::user_responses::UserApi;
use crate::repository::user_repository;
use crate::service::password::{hash_password, verify_password};
use crate::service::{connect, log_db_error};

/// checked against when the email isn't registered, so an unknown email costs as much as a wrong password
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("not a real password").ok());

/// creates a new user with a hashed password, failing if the email is already registered
pub fn register(request: &CredentialsRequest) -> Result<UserApi, RegisterError> {
    let email = request.email.trim();
    if email.is_empty() || request.password.is_empty() {
        return Err(RegisterError::MissingFields);
    }
    let con = connect().map_err(|_| RegisterError::DbFailure)?;
    match user_repository::get_by_email(email, &con) {
        Ok(Some(_)) => return Err(RegisterError::AlreadyExists),
        Ok(None) => { /* good to go */ }
        Err(e) => {
            log_db_error("check if the email is already registered", &e);
            return Err(RegisterError::DbFailure);
        }
    };
    let hash = hash_password(&request.password).map_err(|e| {
        log::error!("Failed to hash password: {e}");
        RegisterError::HashFailure
    })?;
    match user_repository::create_user(email, &hash, &con) {
        Ok(user) => {
            log::info!("Registered user {}", user.id);
            Ok(UserApi::from(&user))
        }
        Err(e) if is_constraint_violation(&e) => Err(RegisterError::AlreadyExists),
        Err(e) => {
            log_db_error("create a user", &e);
            Err(RegisterError::DbFailure)
        }
    }
}

/// returns the user if the email exists and the password matches.
/// Every other outcome is the same [`LoginError::InvalidCredentials`]
pub fn login(request: &CredentialsRequest) -> Result<User, LoginError> {
    let email = request.email.trim();
    let con = connect().map_err(|_| LoginError::DbFailure)?;
    let user = match user_repository::get_by_email(email, &con) {
        Ok(user) => user,
        Err(e) => {
            log_db_error("look up a user by email", &e);
            return Err(LoginError::DbFailure);
        }
    };
    let Some(user) = user else {
        if let Some(dummy) = DUMMY_HASH.as_deref() {
            let _ = verify_password(&request.password, dummy);
        }
        return Err(LoginError::InvalidCredentials);
    };
    match verify_password(&request.password, &user.password) {
        Ok(true) => Ok(user),
        Ok(false) => Err(LoginError::InvalidCredentials),
        Err(e) => {
            log::error!("Stored password hash for user {} is malformed: {e}", user.id);
            Err(LoginError::InvalidCredentials)
        }
    }
}

fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _) if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
