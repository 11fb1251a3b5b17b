use crate::model::item_types::ItemTypes;

/// a row in the users table
#[derive(Debug, PartialEq, Clone)]
pub struct User {
    pub id: u32,
    pub email: String,
    /// PHC-formatted argon2 hash, never the plain password
    pub password: String,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Folder {
    /// cannot be changed, and only retrieved from the database
    pub id: Option<u32>,
    pub name: String,
    /// may be `None` to represent it being a top-level folder
    pub parent_id: Option<u32>,
    pub user_id: u32,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Note {
    /// the id, will only be populated when pulled from the database
    pub id: Option<u32>,
    pub title: String,
    /// rich text (html) from the editor, stored as-is
    pub content: String,
    /// will be None if the note lives at the root of the tree
    pub folder_id: Option<u32>,
    pub user_id: u32,
}

/// attachment metadata. The file bytes are only pulled from the database when downloading,
/// see [`AttachmentData`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Attachment {
    pub id: Option<u32>,
    pub filename: String,
    pub folder_id: Option<u32>,
    pub user_id: u32,
    /// size of the stored bytes
    pub size: u64,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AttachmentData {
    pub filename: String,
    pub file_data: Vec<u8>,
}

/// a folder, note, or attachment flattened down to what the tree needs to place and label it
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TreeItem {
    pub id: u32,
    pub name: String,
    pub item_type: ItemTypes,
    /// the folder this item lives in, `None` for the root
    pub parent_id: Option<u32>,
}

impl From<&Folder> for TreeItem {
    fn from(value: &Folder) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.name.clone(),
            item_type: ItemTypes::Folder,
            parent_id: value.parent_id,
        }
    }
}

impl From<&Note> for TreeItem {
    fn from(value: &Note) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.title.clone(),
            item_type: ItemTypes::Note,
            parent_id: value.folder_id,
        }
    }
}

impl From<&Attachment> for TreeItem {
    fn from(value: &Attachment) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.filename.clone(),
            item_type: ItemTypes::Attachment,
            parent_id: value.folder_id,
        }
    }
}
