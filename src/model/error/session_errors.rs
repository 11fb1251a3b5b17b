#[derive(PartialEq, Debug)]
pub enum GetSessionError {
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum SelectItemError {
    /// the item doesn't exist, or belongs to someone else
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetSelectedError {
    NothingSelected,
    /// the selected item went away. The selection is cleared when this is returned
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum ToggleFolderError {
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetTreeError {
    DbFailure,
}
