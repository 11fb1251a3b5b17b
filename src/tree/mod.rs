//! Turns the flat lists of a user's folders, notes, and attachments into the nested tree shown in the sidebar.
//!
//! Siblings are always listed folders first, then notes, then attachments, and alphabetically
//! (ignoring case) within each type, with the id breaking ties.

use std::collections::{HashMap, HashSet};

use rocket::serde::{Deserialize, Serialize};

use crate::model::item_types::ItemTypes;
use crate::model::repository::TreeItem;
use crate::session::Session;


#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct TreeNode {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemTypes,
    #[serde(rename = "parentId")]
    pub parent_id: Option<u32>,
    /// only present on folders
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expanded: Option<bool>,
    pub selected: bool,
    pub children: Vec<TreeNode>,
}

/// a single visible line of the rendered tree
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct TreeRow {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemTypes,
    /// how many folders deep this row is, 0 for the root
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expanded: Option<bool>,
    pub selected: bool,
    /// indented display text, with an arrow in front of folders showing whether they're open
    pub label: String,
}

/// builds the forest of root items, flagging folders as expanded and the selected item as selected
/// according to `session`.
///
/// Items that point at a folder that isn't in `items` are placed at the root rather than dropped
pub fn build_forest(items: Vec<TreeItem>, session: &Session) -> Vec<TreeNode> {
    let folder_ids: HashSet<u32> = items
        .iter()
        .filter(|it| it.item_type == ItemTypes::Folder)
        .map(|it| it.id)
        .collect();
    let mut children: HashMap<Option<u32>, Vec<TreeItem>> = HashMap::new();
    for item in items {
        let parent = item.parent_id.filter(|id| folder_ids.contains(id));
        children.entry(parent).or_default().push(item);
    }
    for siblings in children.values_mut() {
        siblings.sort_by(|a, b| {
            a.item_type
                .cmp(&b.item_type)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.id.cmp(&b.id))
        });
    }
    // folders caught in a parent cycle can never be reached from the root, so they are left out
    attach_children(None, &mut children, session)
}

fn attach_children(
    parent: Option<u32>,
    children: &mut HashMap<Option<u32>, Vec<TreeItem>>,
    session: &Session,
) -> Vec<TreeNode> {
    let Some(items) = children.remove(&parent) else {
        return Vec::new();
    };
    items
        .into_iter()
        .map(|item| {
            let is_folder = item.item_type == ItemTypes::Folder;
            let nested = if is_folder {
                attach_children(Some(item.id), children, session)
            } else {
                Vec::new()
            };
            TreeNode {
                id: item.id,
                selected: session.is_selected(item.id, item.item_type),
                expanded: is_folder.then(|| session.is_expanded(item.id)),
                name: item.name,
                item_type: item.item_type,
                parent_id: item.parent_id,
                children: nested,
            }
        })
        .collect()
}

/// flattens the forest into the rows that are actually visible: children of collapsed folders are skipped
pub fn render_rows(forest: &[TreeNode]) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(forest, 0, &mut rows);
    rows
}

fn push_rows(nodes: &[TreeNode], depth: usize, rows: &mut Vec<TreeRow>) {
    for node in nodes {
        let arrow = match node.expanded {
            Some(true) => "▼ ",
            Some(false) => "▶ ",
            None => "",
        };
        rows.push(TreeRow {
            id: node.id,
            name: node.name.clone(),
            item_type: node.item_type,
            depth,
            expanded: node.expanded,
            selected: node.selected,
            label: format!("{}{arrow}{}", "  ".repeat(depth), node.name),
        });
        if node.expanded == Some(true) {
            push_rows(&node.children, depth + 1, rows);
        }
    }
}
