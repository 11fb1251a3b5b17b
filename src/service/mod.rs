use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::repository;

pub mod attachment_service;
pub mod folder_service;
pub mod note_service;
pub mod password;
pub mod session_service;
pub mod tree_service;
pub mod user_service;


/// opens a connection, logging why if it can't
fn connect() -> Result<Connection, rusqlite::Error> {
    repository::open_connection().map_err(|e| {
        log::error!(
            "Failed to get a connection to the database! Exception is {e:?}\n{}",
            Backtrace::force_capture()
        );
        e
    })
}

/// logs a failed database operation along with where it happened
fn log_db_error(action: &str, e: &rusqlite::Error) {
    log::error!(
        "Failed to {action}! Exception is {e:?}\n{}",
        Backtrace::force_capture()
    );
}
