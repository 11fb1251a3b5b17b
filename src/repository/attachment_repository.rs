use rusqlite::{params, Connection};

use crate::model::repository::{Attachment, AttachmentData};

/// stores the bytes as-is. No checks are made on the folder, that must be done by the caller
pub fn create_attachment(
    filename: &str,
    file_data: &[u8],
    folder_id: Option<u32>,
    user_id: u32,
    con: &Connection,
) -> Result<Attachment, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/attachment/create_attachment.sql"
    ))?;
    let id = pst.insert(params![filename, file_data, folder_id, user_id])? as u32;
    Ok(Attachment {
        id: Some(id),
        filename: filename.to_string(),
        folder_id,
        user_id,
        size: file_data.len() as u64,
    })
}

/// Returns [`rusqlite::Error::QueryReturnedNoRows`] if the attachment doesn't exist or belongs to someone else
pub fn get_attachment(id: u32, user_id: u32, con: &Connection) -> Result<Attachment, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/attachment/get_attachment_by_id.sql"
    ))?;
    pst.query_row(params![id, user_id], map_attachment)
}

pub fn get_all_attachments(user_id: u32, con: &Connection) -> Result<Vec<Attachment>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/attachment/get_attachments_for_user.sql"
    ))?;
    let rows = pst.query_map(params![user_id], map_attachment)?;
    rows.collect()
}

pub fn get_attachments_in_folder(
    folder_id: Option<u32>,
    user_id: u32,
    con: &Connection,
) -> Result<Vec<Attachment>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/attachment/get_attachments_in_folder.sql"
    ))?;
    let rows = pst.query_map(params![folder_id, user_id], map_attachment)?;
    rows.collect()
}

/// pulls the file name and the stored bytes, for downloading
pub fn get_attachment_data(
    id: u32,
    user_id: u32,
    con: &Connection,
) -> Result<AttachmentData, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/attachment/get_attachment_data.sql"
    ))?;
    pst.query_row(params![id, user_id], |row| {
        Ok(AttachmentData {
            filename: row.get(0)?,
            file_data: row.get(1)?,
        })
    })
}

pub fn delete_attachment(id: u32, user_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/attachment/delete_attachment_by_id.sql"
    ))?;
    pst.execute(params![id, user_id])?;
    Ok(())
}

fn map_attachment(row: &rusqlite::Row) -> Result<Attachment, rusqlite::Error> {
    let size: i64 = row.get(4)?;
    Ok(Attachment {
        id: row.get(0)?,
        filename: row.get(1)?,
        folder_id: row.get(2)?,
        user_id: row.get(3)?,
        size: u64::try_from(size).unwrap_or_default(),
    })
}
