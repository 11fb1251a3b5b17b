pub mod attachment_requests;
pub mod folder_requests;
pub mod note_requests;
pub mod session_requests;
pub mod user_requests;

/// clients are allowed to pass 0 to mean the root folder, but the database stores the root as `null`
pub fn root_as_none(folder_id: Option<u32>) -> Option<u32> {
    match folder_id {
        Some(0) => None,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::root_as_none;

    #[test]
    fn root_as_none_translates_0() {
        assert_eq!(None, root_as_none(Some(0)));
        assert_eq!(None, root_as_none(None));
        assert_eq!(Some(3), root_as_none(Some(3)));
    }
}
