mod user_repository_tests {
    use crate::repository::open_connection;
    use crate::repository::user_repository::{create_user, get_by_email};
    use crate::test::{cleanup, refresh_db};

    #[test]
    fn get_by_email_ignores_case() {
        refresh_db();
        let con = open_connection().unwrap();
        let created = create_user("Someone@Example.com", "hash", &con).unwrap();
        let found = get_by_email("someone@example.COM", &con).unwrap();
        con.close().unwrap();
        assert_eq!(Some(created), found);
        cleanup();
    }

    #[test]
    fn get_by_email_not_found() {
        refresh_db();
        let con = open_connection().unwrap();
        let found = get_by_email("nobody@example.com", &con).unwrap();
        con.close().unwrap();
        assert_eq!(None, found);
        cleanup();
    }

    #[test]
    fn create_user_duplicate_email_fails() {
        refresh_db();
        let con = open_connection().unwrap();
        create_user("a@example.com", "hash", &con).unwrap();
        let res = create_user("A@example.com", "other", &con);
        let count: u32 = con
            .query_row("select count(*) from users", [], |row| row.get(0))
            .unwrap();
        con.close().unwrap();
        assert!(res.is_err());
        assert_eq!(1, count);
        cleanup();
    }
}

mod folder_repository_tests {
    use crate::model::repository::Folder;
    use crate::repository::folder_repository::*;
    use crate::repository::open_connection;
    use crate::test::{cleanup, create_folder_db_entry, create_user_db_entry, refresh_db};

    #[test]
    fn create_folder_then_list() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let parent = create_folder_db_entry("Parent", None, user_id);
        let con = open_connection().unwrap();
        let created = create_folder(
            &Folder {
                id: None,
                name: "Child".to_string(),
                parent_id: Some(parent),
                user_id,
            },
            &con,
        )
        .unwrap();
        let all = get_all_folders(user_id, &con).unwrap();
        con.close().unwrap();
        let matching: Vec<&Folder> = all
            .iter()
            .filter(|f| f.name == "Child" && f.parent_id == Some(parent))
            .collect();
        assert_eq!(vec![&created], matching);
        cleanup();
    }

    #[test]
    fn get_child_folders_at_root() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let top = create_folder_db_entry("Top", None, user_id);
        create_folder_db_entry("Nested", Some(top), user_id);
        let con = open_connection().unwrap();
        let roots = get_child_folders(None, user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(1, roots.len());
        assert_eq!(Some(top), roots[0].id);
        cleanup();
    }

    #[test]
    fn get_by_id_wrong_user() {
        refresh_db();
        let owner = create_user_db_entry("a@example.com");
        let other = create_user_db_entry("b@example.com");
        let folder = create_folder_db_entry("Mine", None, owner);
        let con = open_connection().unwrap();
        let res = get_by_id(folder, other, &con);
        con.close().unwrap();
        assert_eq!(Err(rusqlite::Error::QueryReturnedNoRows), res);
        cleanup();
    }

    #[test]
    fn get_all_child_folder_ids_walks_every_level() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let top = create_folder_db_entry("Top", None, user_id);
        let middle = create_folder_db_entry("Middle", Some(top), user_id);
        let bottom = create_folder_db_entry("Bottom", Some(middle), user_id);
        let sibling = create_folder_db_entry("Sibling", None, user_id);
        let con = open_connection().unwrap();
        let mut ids = get_all_child_folder_ids(top, user_id, &con).unwrap();
        let missing = get_all_child_folder_ids(sibling + 100, user_id, &con).unwrap();
        con.close().unwrap();
        ids.sort();
        assert_eq!(vec![top, middle, bottom], ids);
        assert!(missing.is_empty());
        cleanup();
    }

    #[test]
    fn delete_folder_cascades_to_contents() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let top = create_folder_db_entry("Top", None, user_id);
        let child = create_folder_db_entry("Child", Some(top), user_id);
        crate::test::create_note_db_entry("note", "", Some(child), user_id);
        crate::test::create_attachment_db_entry("a.txt", b"a", Some(child), user_id);
        let con = open_connection().unwrap();
        delete_folder(top, user_id, &con).unwrap();
        let folders = get_all_folders(user_id, &con).unwrap();
        let notes = crate::repository::note_repository::get_all_notes(user_id, &con).unwrap();
        let attachments =
            crate::repository::attachment_repository::get_all_attachments(user_id, &con).unwrap();
        con.close().unwrap();
        assert!(folders.is_empty());
        assert!(notes.is_empty());
        assert!(attachments.is_empty());
        cleanup();
    }
}

mod note_repository_tests {
    use crate::model::repository::Note;
    use crate::repository::note_repository::*;
    use crate::repository::open_connection;
    use crate::test::{
        cleanup, create_note_db_entry, create_user_db_entry, refresh_db, set_note_updated_at,
    };

    #[test]
    fn update_note_round_trips() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let id = create_note_db_entry("Untitled", "", None, user_id);
        let note = Note {
            id: Some(id),
            title: "Title".to_string(),
            content: "<p>line one</p>\n<p>line two</p>".to_string(),
            folder_id: None,
            user_id,
        };
        let con = open_connection().unwrap();
        let changed = update_note(&note, &con).unwrap();
        let saved = get_note(id, user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(1, changed);
        assert_eq!(note, saved);
        cleanup();
    }

    #[test]
    fn update_note_wrong_user_changes_nothing() {
        refresh_db();
        let owner = create_user_db_entry("a@example.com");
        let other = create_user_db_entry("b@example.com");
        let id = create_note_db_entry("Mine", "", None, owner);
        let con = open_connection().unwrap();
        let changed = update_note(
            &Note {
                id: Some(id),
                title: "Stolen".to_string(),
                content: String::new(),
                folder_id: None,
                user_id: other,
            },
            &con,
        )
        .unwrap();
        let saved = get_note(id, owner, &con).unwrap();
        con.close().unwrap();
        assert_eq!(0, changed);
        assert_eq!("Mine", saved.title);
        cleanup();
    }

    #[test]
    fn get_notes_in_folder_root() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let folder = crate::test::create_folder_db_entry("Work", None, user_id);
        let root_note = create_note_db_entry("Root", "", None, user_id);
        create_note_db_entry("Nested", "", Some(folder), user_id);
        let con = open_connection().unwrap();
        let at_root = get_notes_in_folder(None, user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(1, at_root.len());
        assert_eq!(Some(root_note), at_root[0].id);
        cleanup();
    }

    #[test]
    fn search_notes_ignores_case_and_other_users() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let other = create_user_db_entry("b@example.com");
        let mine = create_note_db_entry("Meeting", "Agenda for TUESDAY", None, user_id);
        create_note_db_entry("Tuesday", "", None, other);
        let con = open_connection().unwrap();
        let found = search_notes("tuesday", user_id, 20, &con).unwrap();
        con.close().unwrap();
        assert_eq!(1, found.len());
        assert_eq!(Some(mine), found[0].id);
        cleanup();
    }

    #[test]
    fn search_notes_treats_wildcards_literally() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let percent = create_note_db_entry("100% done", "", None, user_id);
        create_note_db_entry("1000 done", "", None, user_id);
        let underscore = create_note_db_entry("snake_case", "", None, user_id);
        create_note_db_entry("snakeXcase", "", None, user_id);
        let con = open_connection().unwrap();
        let by_percent = search_notes("0%", user_id, 20, &con).unwrap();
        let by_underscore = search_notes("e_c", user_id, 20, &con).unwrap();
        con.close().unwrap();
        assert_eq!(vec![Some(percent)], by_percent.iter().map(|n| n.id).collect::<Vec<_>>());
        assert_eq!(
            vec![Some(underscore)],
            by_underscore.iter().map(|n| n.id).collect::<Vec<_>>()
        );
        cleanup();
    }

    #[test]
    fn search_notes_respects_limit() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        for i in 0..4 {
            create_note_db_entry(&format!("match {i}"), "", None, user_id);
        }
        let con = open_connection().unwrap();
        let found = search_notes("match", user_id, 3, &con).unwrap();
        con.close().unwrap();
        assert_eq!(3, found.len());
        cleanup();
    }

    #[test]
    fn saving_a_note_moves_it_to_the_front_of_recent() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let older = create_note_db_entry("Older", "", None, user_id);
        let newer = create_note_db_entry("Newer", "", None, user_id);
        set_note_updated_at(older, "2000-01-01 00:00:00.000");
        set_note_updated_at(newer, "2000-01-02 00:00:00.000");
        let con = open_connection().unwrap();
        let before = get_recent_notes(user_id, 5, &con).unwrap();
        let mut older_note = get_note(older, user_id, &con).unwrap();
        older_note.content = "edited".to_string();
        update_note(&older_note, &con).unwrap();
        let after = get_recent_notes(user_id, 5, &con).unwrap();
        con.close().unwrap();
        assert_eq!(Some(newer), before[0].id);
        assert_eq!(Some(older), after[0].id);
        cleanup();
    }
}

mod attachment_repository_tests {
    use crate::model::repository::AttachmentData;
    use crate::repository::attachment_repository::*;
    use crate::repository::open_connection;
    use crate::test::{cleanup, create_user_db_entry, refresh_db};

    #[test]
    fn create_and_read_back() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let con = open_connection().unwrap();
        let created = create_attachment("photo.png", &[1, 2, 3], None, user_id, &con).unwrap();
        let id = created.id.unwrap();
        let fetched = get_attachment(id, user_id, &con).unwrap();
        let data = get_attachment_data(id, user_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(created, fetched);
        assert_eq!(3, fetched.size);
        assert_eq!(
            AttachmentData {
                filename: "photo.png".to_string(),
                file_data: vec![1, 2, 3],
            },
            data
        );
        cleanup();
    }

    #[test]
    fn delete_attachment_removes_it() {
        refresh_db();
        let user_id = create_user_db_entry("a@example.com");
        let con = open_connection().unwrap();
        let id = create_attachment("a.txt", b"a", None, user_id, &con)
            .unwrap()
            .id
            .unwrap();
        delete_attachment(id, user_id, &con).unwrap();
        let res = get_attachment(id, user_id, &con);
        con.close().unwrap();
        assert_eq!(Err(rusqlite::Error::QueryReturnedNoRows), res);
        cleanup();
    }
}

mod metadata_repository_tests {
    use crate::db_migrations::CURRENT_VERSION;
    use crate::repository::metadata_repository::get_version;
    use crate::repository::open_connection;
    use crate::test::{cleanup, refresh_db};

    #[test]
    fn new_database_is_migrated_to_current_version() {
        refresh_db();
        let con = open_connection().unwrap();
        let version = get_version(&con).unwrap();
        con.close().unwrap();
        assert_eq!(CURRENT_VERSION, version);
        cleanup();
    }
}
