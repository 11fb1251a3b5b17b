#[derive(PartialEq, Debug)]
pub enum GetAttachmentError {
    NotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum CreateAttachmentError {
    /// no file name survived sanitization
    BadFileName,
    /// the upload could not be read off of the request
    ReadFailure,
    FolderNotFound,
    DbFailure,
}

#[derive(PartialEq, Debug)]
pub enum DeleteAttachmentError {
    DbFailure,
}
