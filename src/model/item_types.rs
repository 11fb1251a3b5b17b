use std::fmt::{Display, Formatter};

use rocket::serde::{Deserialize, Serialize};

/// the kinds of things that can live in the tree.
///
/// The declaration order is also the order siblings are listed in: folders, then notes, then attachments
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Copy, Clone)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ItemTypes {
    Folder,
    Note,
    Attachment,
}

impl Display for ItemTypes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Folder => "folder",
            Self::Note => "note",
            Self::Attachment => "attachment",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::ItemTypes;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            r#""attachment""#,
            serde_json::to_string(&ItemTypes::Attachment).unwrap()
        );
        let parsed: ItemTypes = serde_json::from_str(r#""note""#).unwrap();
        assert_eq!(ItemTypes::Note, parsed);
    }

    #[test]
    fn orders_folders_first() {
        let mut types = vec![ItemTypes::Attachment, ItemTypes::Note, ItemTypes::Folder];
        types.sort();
        assert_eq!(
            vec![ItemTypes::Folder, ItemTypes::Note, ItemTypes::Attachment],
            types
        );
    }
}
