use rusqlite::{params, Connection};

use crate::model::repository::User;

/// creates a user record. The password must already be hashed.
///
/// Fails with a constraint violation if the email is already taken
pub fn create_user(email: &str, password_hash: &str, con: &Connection) -> Result<User, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/user/create_user.sql"))?;
    let id = pst.insert(params![email, password_hash])? as u32;
    Ok(User {
        id,
        email: email.to_string(),
        password: password_hash.to_string(),
    })
}

/// case-insensitively looks up a user by email.
///
/// if `None` is returned, that means there was no match
pub fn get_by_email(email: &str, con: &Connection) -> Result<Option<User>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/user/get_by_email.sql"))?;
    match pst.query_row(params![email], map_user) {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

fn map_user(row: &rusqlite::Row) -> Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password: row.get(2)?,
    })
}
