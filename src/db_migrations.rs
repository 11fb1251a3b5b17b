use rusqlite::{Connection, Result};

use crate::repository::metadata_repository;

/// the schema version a freshly-migrated database ends up at
pub const CURRENT_VERSION: u64 = 3;

/// incrementally upgrades the database for each version the database is behind
pub fn migrate_db(con: &Connection, table_version: u64) -> Result<()> {
    if table_version < 2 {
        log_migration_version(2);
        migrate_v2(con)?;
    }
    if table_version < 3 {
        log_migration_version(3);
        migrate_v3(con)?;
    }
    Ok(())
}

fn log_migration_version(version: u64) {
    log::info!("Migrating database to v{version}...");
}

/// v2 indexes the owner and parent columns, since every tree load filters on them
fn migrate_v2(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("assets/queries/metadata/v2.sql"))?;
    metadata_repository::set_version(2, con)
}

/// v3 stamps notes with when they were created and last saved, for search and the recent list
fn migrate_v3(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("assets/queries/metadata/v3.sql"))?;
    metadata_repository::set_version(3, con)
}
