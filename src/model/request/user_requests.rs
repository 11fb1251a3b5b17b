use rocket::serde::{Deserialize, Serialize};

/// used for both registering and logging in
#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}
