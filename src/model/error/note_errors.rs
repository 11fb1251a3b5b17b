#[derive(PartialEq, Debug)]
pub enum GetNoteError {
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum CreateNoteError {
    /// the folder the note was meant to go in does not exist
    FolderNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum UpdateNoteError {
    NotFound,
    /// the folder the note is being moved to does not exist
    FolderNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteNoteError {
    DbFailure,
}
