use rusqlite::{params, Connection};

use crate::model::repository::Folder;

/// retrieves the folder with the passed id, as long as it belongs to the user.
///
/// Returns [`rusqlite::Error::QueryReturnedNoRows`] if there is no such folder
pub fn get_by_id(id: u32, user_id: u32, con: &Connection) -> Result<Folder, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/get_folder_by_id.sql"))?;
    pst.query_row(params![id, user_id], map_folder)
}

/// every folder the user owns, in creation order
pub fn get_all_folders(user_id: u32, con: &Connection) -> Result<Vec<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/get_folders_for_user.sql"
    ))?;
    let rows = pst.query_map(params![user_id], map_folder)?;
    rows.collect()
}

/// the folders directly inside the passed folder, or at the root if `id` is `None`
pub fn get_child_folders(
    id: Option<u32>,
    user_id: u32,
    con: &Connection,
) -> Result<Vec<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/get_child_folders.sql"))?;
    let rows = pst.query_map(params![id, user_id], map_folder)?;
    rows.collect()
}

/// creates a folder record in the database.
/// This does not do any checks on folder parent id or any other data,
/// and that must be done before this function is called
pub fn create_folder(folder: &Folder, con: &Connection) -> Result<Folder, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/create_folder.sql"))?;
    let folder_id = pst.insert(params![folder.name, folder.parent_id, folder.user_id])? as u32;
    Ok(Folder {
        id: Some(folder_id),
        name: String::from(&folder.name),
        parent_id: folder.parent_id,
        user_id: folder.user_id,
    })
}

/// updates a folder's name and parent.
/// This does not perform any checks on folder info, and that must be done
/// before this function is called
pub fn update_folder(folder: &Folder, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/update_folder.sql"))?;
    pst.execute(params![folder.name, folder.parent_id, folder.id, folder.user_id])?;
    Ok(())
}

/// deletes a folder. Everything inside of it is removed by the database's cascading foreign keys.
/// Deleting a folder that doesn't exist does nothing
pub fn delete_folder(id: u32, user_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/delete_folder_by_id.sql"
    ))?;
    pst.execute(params![id, user_id])?;
    Ok(())
}

/// returns the id of the passed folder along with the ids of every folder underneath it, at any depth.
///
/// Returns an empty list if the folder doesn't exist
pub fn get_all_child_folder_ids(
    id: u32,
    user_id: u32,
    con: &Connection,
) -> Result<Vec<u32>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/get_child_folder_ids_recursive.sql"
    ))?;
    let rows = pst.query_map(params![id, user_id], |row| row.get(0))?;
    rows.collect()
}

fn map_folder(row: &rusqlite::Row) -> Result<Folder, rusqlite::Error> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
        parent_id: row.get(2)?,
        user_id: row.get(3)?,
    })
}
