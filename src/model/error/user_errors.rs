#[derive(PartialEq, Debug)]
pub enum RegisterError {
    /// email or password was blank
    MissingFields,
    /// a user with that email is already registered
    AlreadyExists,
    /// the password could not be hashed
    HashFailure,
    DbFailure,
}

/// deliberately vague; callers must not be able to tell an unknown email apart from a bad password
#[derive(PartialEq, Debug)]
pub enum LoginError {
    InvalidCredentials,
    DbFailure,
}
