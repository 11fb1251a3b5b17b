use crate::model::error::session_errors::GetTreeError;
use crate::model::repository::TreeItem;
use crate::repository::{attachment_repository, folder_repository, note_repository};
use crate::service::{connect, log_db_error};
use crate::session::Session;
use crate::tree::{self, TreeNode, TreeRow};

/// the user's whole tree, with expanded and selected flags taken from the session
pub fn get_tree(session: &Session) -> Result<Vec<TreeNode>, GetTreeError> {
    let items = get_tree_items(session.user_id)?;
    Ok(tree::build_forest(items, session))
}

/// the rows of the tree that are visible with the session's expanded folders
pub fn get_tree_rows(session: &Session) -> Result<Vec<TreeRow>, GetTreeError> {
    Ok(tree::render_rows(&get_tree(session)?))
}

/// every folder, note, and attachment the user owns, merged into one list
fn get_tree_items(user_id: u32) -> Result<Vec<TreeItem>, GetTreeError> {
    let con = connect().map_err(|_| GetTreeError::DbFailure)?;
    let pulled = folder_repository::get_all_folders(user_id, &con).and_then(|folders| {
        let notes = note_repository::get_all_notes(user_id, &con)?;
        let attachments = attachment_repository::get_all_attachments(user_id, &con)?;
        Ok((folders, notes, attachments))
    });
    let (folders, notes, attachments) = pulled.map_err(|e| {
        log_db_error("pull tree items", &e);
        GetTreeError::DbFailure
    })?;
    let mut items: Vec<TreeItem> = folders.iter().map(TreeItem::from).collect();
    items.extend(notes.iter().map(TreeItem::from));
    items.extend(attachments.iter().map(TreeItem::from));
    Ok(items)
}
