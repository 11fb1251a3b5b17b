#[derive(PartialEq, Debug)]
pub enum GetFolderError {
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum CreateFolderError {
    /// the folder name was blank
    EmptyName,
    /// the database failed to save the folder
    DbFailure,
    /// the requested parent folder does not exist
    ParentNotFound,
}

#[derive(PartialEq, Debug)]
pub enum UpdateFolderError {
    /// the new folder name was blank
    EmptyName,
    /// the database failed to update the folder
    DbFailure,
    /// the requested parent folder does not exist
    ParentNotFound,
    /// The folder could not be found
    NotFound,
    /// The user attempted to do an illegal action, such as moving a parent folder into its own child
    NotAllowed,
}

#[derive(PartialEq, Debug)]
pub enum DeleteFolderError {
    /// database could not execute the query
    DbFailure,
}
