use rusqlite::{params, Connection};

use crate::model::repository::Note;

pub fn create_note(note: &Note, con: &Connection) -> Result<Note, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/create_note.sql"))?;
    let id = pst.insert(params![note.title, note.content, note.folder_id, note.user_id])? as u32;
    Ok(Note {
        id: Some(id),
        ..note.clone()
    })
}

/// Returns [`rusqlite::Error::QueryReturnedNoRows`] if the note doesn't exist or belongs to someone else
pub fn get_note(id: u32, user_id: u32, con: &Connection) -> Result<Note, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/get_note_by_id.sql"))?;
    pst.query_row(params![id, user_id], map_note)
}

pub fn get_all_notes(user_id: u32, con: &Connection) -> Result<Vec<Note>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/get_notes_for_user.sql"))?;
    let rows = pst.query_map(params![user_id], map_note)?;
    rows.collect()
}

/// notes whose title or content contains `text`, ignoring case, most recently saved first.
///
/// `%` and `_` in `text` are matched literally
pub fn search_notes(
    text: &str,
    user_id: u32,
    limit: u32,
    con: &Connection,
) -> Result<Vec<Note>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/search_notes.sql"))?;
    let pattern = format!("%{}%", escape_like(text));
    let rows = pst.query_map(params![user_id, pattern, limit], map_note)?;
    rows.collect()
}

/// the user's most recently saved notes, newest first
pub fn get_recent_notes(
    user_id: u32,
    limit: u32,
    con: &Connection,
) -> Result<Vec<Note>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/get_recent_notes.sql"))?;
    let rows = pst.query_map(params![user_id, limit], map_note)?;
    rows.collect()
}

/// notes directly inside the folder, or at the root if `folder_id` is `None`
pub fn get_notes_in_folder(
    folder_id: Option<u32>,
    user_id: u32,
    con: &Connection,
) -> Result<Vec<Note>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/get_notes_in_folder.sql"))?;
    let rows = pst.query_map(params![folder_id, user_id], map_note)?;
    rows.collect()
}

/// overwrites the title, content, and folder of the note. Returns the number of rows changed,
/// which will be 0 if the note doesn't exist
pub fn update_note(note: &Note, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/update_note.sql"))?;
    pst.execute(params![
        note.title,
        note.content,
        note.folder_id,
        note.id,
        note.user_id
    ])
}

pub fn delete_note(id: u32, user_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/note/delete_note_by_id.sql"))?;
    pst.execute(params![id, user_id])?;
    Ok(())
}

fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn map_note(row: &rusqlite::Row) -> Result<Note, rusqlite::Error> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        folder_id: row.get(3)?,
        user_id: row.get(4)?,
    })
}
