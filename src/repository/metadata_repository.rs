use std::backtrace::Backtrace;

use rusqlite::Connection;

/// returns the current version of the database schema
pub fn get_version(con: &Connection) -> Result<u64, rusqlite::Error> {
    let version: String = con.query_row(
        include_str!("../assets/queries/metadata/get_version.sql"),
        [],
        |row| row.get(0),
    )?;
    version.parse::<u64>().map_err(|e| {
        log::error!(
            "Database version {version} is not a number! {e:?}\n{}",
            Backtrace::force_capture()
        );
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub fn set_version(version: u64, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/metadata/set_version.sql"))?;
    pst.execute([version.to_string()])?;
    Ok(())
}
