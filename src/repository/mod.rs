use std::path::Path;

use rusqlite::{Connection, OpenFlags, Result};

use crate::db_migrations::migrate_db;

pub mod attachment_repository;
pub mod folder_repository;
pub mod metadata_repository;
pub mod note_repository;
pub mod user_repository;

#[cfg(test)]
mod tests;

/// opens a new connection to the database with foreign keys turned on.
///
/// Foreign keys are off by default in sqlite and have to be enabled on every connection,
/// otherwise deleting a folder won't cascade to what's inside of it
pub fn open_connection() -> Result<Connection> {
    let con = Connection::open_with_flags(Path::new(&database_location()), OpenFlags::default())?;
    con.pragma_update(None, "foreign_keys", "ON")?;
    Ok(con)
}

#[cfg(not(test))]
fn database_location() -> String {
    crate::config::NOTE_SERVER_CONFIG.database.location.clone()
}

/// every test thread gets its own database so tests can run in parallel
#[cfg(test)]
fn database_location() -> String {
    format!("{}.sqlite", crate::test::current_thread_name())
}

/// runs init.sql on the database
fn create_db(con: &Connection) -> Result<()> {
    let sql = include_str!("../assets/init.sql");
    con.execute_batch(sql)
}

/// handles checking if the database exists and is up to the correct version.
/// If not, it either creates or upgrades the database accordingly
pub fn initialize_db() -> Result<()> {
    let con = open_connection()?;
    let table_version = match metadata_repository::get_version(&con) {
        Ok(version) => version,
        Err(_) => {
            // tables haven't been created yet
            log::info!("No database found, creating a new one...");
            create_db(&con)?;
            1
        }
    };
    migrate_db(&con, table_version)?;
    Ok(())
}
