use rocket::http::{ContentType, Status};

use crate::model::response::note_responses::NoteApi;
use crate::model::response::session_responses::SessionApi;
use crate::model::response::BasicMessage;
use crate::model::item_types::ItemTypes;
use crate::session::SelectedItem;
use crate::test::*;

#[test]
fn create_note_with_empty_body() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let res = client.post(uri!("/notes")).header(auth.clone()).dispatch();
    assert_eq!(res.status(), Status::Created);
    let created: NoteApi = res.into_json().unwrap();
    assert_eq!(created.title, "Untitled");
    assert_eq!(created.content, "");
    assert_eq!(created.folder_id, None);
    // new notes are selected right away
    let res = client.get(uri!("/session")).header(auth).dispatch();
    let session: SessionApi = res.into_json().unwrap();
    assert_eq!(
        session.selected,
        Some(SelectedItem {
            id: created.id,
            item_type: ItemTypes::Note
        })
    );
    cleanup();
}

#[test]
fn create_note_in_folder() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let folder = create_folder_db_entry("Work", None, default_user_id());
    let res = client
        .post(uri!("/notes"))
        .header(auth)
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"folderId":{folder},"title":"Plan","content":"<b>bold</b>"}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let created: NoteApi = res.into_json().unwrap();
    assert_eq!(created.title, "Plan");
    assert_eq!(created.content, "<b>bold</b>");
    assert_eq!(created.folder_id, Some(folder));
    cleanup();
}

#[test]
fn create_note_missing_folder() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let res = client
        .post(uri!("/notes"))
        .header(auth)
        .header(ContentType::JSON)
        .body(r#"{"folderId":77}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!(body.message, "The folder with the passed id could not be found.");
    cleanup();
}

#[test]
fn update_note_round_trips() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let user_id = default_user_id();
    let note = create_note_db_entry("Untitled", "", None, user_id);
    let folder = create_folder_db_entry("Work", None, user_id);
    let content = r#"<h1>Title</h1><p>with \"quotes\" and ünïcödé</p>"#;
    let res = client
        .put(uri!("/notes"))
        .header(auth.clone())
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"id":{note},"title":"  Spaced  ","content":"{content}","folderId":{folder}}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get(format!("/notes/{note}")).header(auth).dispatch();
    let saved: NoteApi = res.into_json().unwrap();
    assert_eq!(
        saved,
        NoteApi {
            id: note,
            title: "  Spaced  ".to_string(),
            content: r#"<h1>Title</h1><p>with "quotes" and ünïcödé</p>"#.to_string(),
            folder_id: Some(folder),
        }
    );
    cleanup();
}

#[test]
fn update_note_not_found() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let res = client
        .put(uri!("/notes"))
        .header(auth)
        .header(ContentType::JSON)
        .body(r#"{"id":5,"title":"a","content":"b"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!(body.message, "The note with the passed id could not be found.");
    cleanup();
}

#[test]
fn update_note_of_other_user() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let other = create_user_db_entry("other@example.com");
    let theirs = create_note_db_entry("Secret", "shh", None, other);
    let res = client
        .put(uri!("/notes"))
        .header(auth)
        .header(ContentType::JSON)
        .body(format!(r#"{{"id":{theirs},"title":"mine","content":""}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    cleanup();
}

#[test]
fn list_notes_only_own() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let other = create_user_db_entry("other@example.com");
    create_note_db_entry("Secret", "shh", None, other);
    let mine = create_note_db_entry("Mine", "", None, default_user_id());
    let res = client.get(uri!("/notes")).header(auth).dispatch();
    let notes: Vec<NoteApi> = res.into_json().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, mine);
    cleanup();
}

#[test]
fn download_note() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let note = create_note_db_entry("Shopping list", "eggs", None, default_user_id());
    let res = client
        .get(format!("/notes/{note}/download"))
        .header(auth)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(
        res.headers().get_one("Content-Disposition"),
        Some("attachment; filename=\"Shopping_list.txt\"")
    );
    assert_eq!(res.into_string().unwrap(), "# Shopping list\n\neggs");
    cleanup();
}

#[test]
fn delete_note_deselects() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let res = client.post(uri!("/notes")).header(auth.clone()).dispatch();
    let created: NoteApi = res.into_json().unwrap();
    let res = client
        .delete(format!("/notes/{}", created.id))
        .header(auth.clone())
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);
    let res = client.get(uri!("/session")).header(auth.clone()).dispatch();
    let session: SessionApi = res.into_json().unwrap();
    assert_eq!(session.selected, None);
    // deleting again is not an error
    let res = client
        .delete(format!("/notes/{}", created.id))
        .header(auth)
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);
    cleanup();
}

#[test]
fn create_note_malformed_body_writes_nothing() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let res = client
        .post(uri!("/notes"))
        .header(auth.clone())
        .header(ContentType::JSON)
        .body(r#"{"title":"Plan","folderId":"not-a-number"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let body: BasicMessage = res.into_json().unwrap();
    assert_eq!(body.message, "The request body is not a valid note.");
    let res = client
        .post(uri!("/notes"))
        .header(auth.clone())
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let res = client.get(uri!("/notes")).header(auth.clone()).dispatch();
    let notes: Vec<NoteApi> = res.into_json().unwrap();
    assert!(notes.is_empty());
    let res = client.get(uri!("/session")).header(auth).dispatch();
    let session: SessionApi = res.into_json().unwrap();
    assert_eq!(session.selected, None);
    cleanup();
}

#[test]
fn download_note_with_header_breaking_title() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let user_id = default_user_id();
    let quoted = create_note_db_entry("say \"hi\"; x=1", "", None, user_id);
    let crlf = create_note_db_entry("line\r\nX-Injected: 1", "", None, user_id);
    let res = client
        .get(format!("/notes/{quoted}/download"))
        .header(auth.clone())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(
        res.headers().get_one("Content-Disposition"),
        Some("attachment; filename=\"say_hi_x=1.txt\"")
    );
    let res = client
        .get(format!("/notes/{crlf}/download"))
        .header(auth)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(
        res.headers().get_one("Content-Disposition"),
        Some("attachment; filename=\"lineX-Injected_1.txt\"")
    );
    assert_eq!(res.headers().get_one("X-Injected"), None);
    cleanup();
}

#[test]
fn search_notes() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let user_id = default_user_id();
    let other = create_user_db_entry("other@example.com");
    let by_title = create_note_db_entry("Trip to Lisbon", "", None, user_id);
    let by_content = create_note_db_entry("Packing", "passport for lisbon", None, user_id);
    create_note_db_entry("Groceries", "eggs", None, user_id);
    create_note_db_entry("Lisbon", "not mine", None, other);
    set_note_updated_at(by_title, "2024-03-01 00:00:00.000");
    set_note_updated_at(by_content, "2024-03-02 00:00:00.000");
    let res = client
        .get(uri!("/notes?search=LISBON"))
        .header(auth.clone())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let found: Vec<u32> = res
        .into_json::<Vec<NoteApi>>()
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(vec![by_content, by_title], found);
    // blank searches list everything
    let res = client.get("/notes?search=").header(auth).dispatch();
    let notes: Vec<NoteApi> = res.into_json().unwrap();
    assert_eq!(notes.len(), 3);
    cleanup();
}

#[test]
fn recent_notes_newest_first() {
    refresh_db();
    let client = client();
    let auth = login_default(&client);
    let user_id = default_user_id();
    let ids: Vec<u32> = (1..=6)
        .map(|i| create_note_db_entry(&format!("Note {i}"), "", None, user_id))
        .collect();
    for (i, id) in ids.iter().enumerate() {
        set_note_updated_at(*id, &format!("2024-01-0{} 00:00:00.000", i + 1));
    }
    // saving the oldest note brings it to the front
    let res = client
        .put(uri!("/notes"))
        .header(auth.clone())
        .header(ContentType::JSON)
        .body(format!(r#"{{"id":{},"title":"Note 1","content":"edited"}}"#, ids[0]))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get(uri!("/notes/recent")).header(auth).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let recent: Vec<u32> = res
        .into_json::<Vec<NoteApi>>()
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect();
    assert_eq!(vec![ids[0], ids[5], ids[4], ids[3], ids[2]], recent);
    cleanup();
}
