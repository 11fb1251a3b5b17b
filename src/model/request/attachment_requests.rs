use once_cell::sync::Lazy;
use regex::Regex;
use rocket::fs::TempFile;

//language=RegExp
static RESERVED_NAMES: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(CON|PRN|AUX|NUL|COM[1-9]|LPT[1-9])(\\..*)?$").unwrap());
//language=RegExp
static BANNED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new("[<>|:&;#?*\"\\x00-\\x1f]").unwrap());

#[derive(FromForm)]
pub struct CreateAttachmentRequest<'a> {
    /// the file being uploaded. Its name comes from the multipart `filename`
    pub file: TempFile<'a>,
    /// leave blank (or 0) for the root folder
    #[field(name = "folderId")]
    pub folder_id: Option<u32>,
}

impl CreateAttachmentRequest<'_> {
    pub fn folder_id(&self) -> Option<u32> {
        super::root_as_none(self.folder_id)
    }

    /// the sanitized name of the uploaded file, see [`sanitize_file_name`]
    pub fn file_name(&self) -> Option<String> {
        let raw = self.file.raw_name()?;
        sanitize_file_name(raw.dangerous_unsafe_unsanitized_raw().as_str())
    }
}

/// strips any directory components and characters that are unsafe to hand back in a
/// `Content-Disposition` header or to save on most file systems.
///
/// will return None if nothing usable is left of the name
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    // browsers on windows have been known to send the full path
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned = BANNED_CHARS.replace_all(base, "");
    let cleaned = cleaned.trim().trim_start_matches('.').trim();
    if cleaned.is_empty() || RESERVED_NAMES.is_match(&cleaned.to_uppercase()) {
        return None;
    }
    Some(cleaned.to_string())
}
