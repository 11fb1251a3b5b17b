use std::fs::remove_file;
use std::path::Path;

use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;

use crate::model::repository::{Folder, Note};
use crate::model::response::user_responses::LoginApi;
use crate::repository::{
    attachment_repository, folder_repository, initialize_db, note_repository, open_connection,
    user_repository,
};
use crate::rocket;

mod note_handler_tests;

pub static EMAIL: &str = "user@example.com";
pub static PASSWORD: &str = "password";
pub static BOUNDARY: &str = "NoteServerBoundary";

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

pub fn refresh_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}

pub fn client() -> Client {
    Client::tracked(rocket()).unwrap()
}

/// registers the user through the api and logs them in, returning the header every authenticated request needs
pub fn register_and_login(client: &Client, email: &str, password: &str) -> Header<'static> {
    let credentials = format!(r#"{{"email":"{email}","password":"{password}"}}"#);
    let res = client
        .post(uri!("/users/register"))
        .header(ContentType::JSON)
        .body(&credentials)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let res = client
        .post(uri!("/users/login"))
        .header(ContentType::JSON)
        .body(&credentials)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let login: LoginApi = res.into_json().unwrap();
    Header::new("Authorization", format!("Bearer {}", login.token))
}

/// shortcut for the common case of a single logged in user
pub fn login_default(client: &Client) -> Header<'static> {
    register_and_login(client, EMAIL, PASSWORD)
}

/// the id of the user created by [`login_default`]
pub fn default_user_id() -> u32 {
    let connection = open_connection().unwrap();
    let id = user_repository::get_by_email(EMAIL, &connection)
        .unwrap()
        .unwrap()
        .id;
    connection.close().unwrap();
    id
}

/// creates a user directly in the database. The password is not a real hash
pub fn create_user_db_entry(email: &str) -> u32 {
    let connection = open_connection().unwrap();
    let id = user_repository::create_user(email, "not a hash", &connection)
        .unwrap()
        .id;
    connection.close().unwrap();
    id
}

pub fn create_folder_db_entry(name: &str, parent_id: Option<u32>, user_id: u32) -> u32 {
    let connection = open_connection().unwrap();
    let id = folder_repository::create_folder(
        &Folder {
            id: None,
            name: String::from(name),
            parent_id,
            user_id,
        },
        &connection,
    )
    .unwrap()
    .id
    .unwrap();
    connection.close().unwrap();
    id
}

pub fn create_note_db_entry(title: &str, content: &str, folder_id: Option<u32>, user_id: u32) -> u32 {
    let connection = open_connection().unwrap();
    let id = note_repository::create_note(
        &Note {
            id: None,
            title: String::from(title),
            content: String::from(content),
            folder_id,
            user_id,
        },
        &connection,
    )
    .unwrap()
    .id
    .unwrap();
    connection.close().unwrap();
    id
}

/// overwrites when the note was last saved, so tests can control the newest-first ordering
pub fn set_note_updated_at(id: u32, updated_at: &str) {
    let connection = open_connection().unwrap();
    connection
        .execute(
            "update notes set updated_at = ?1 where id = ?2",
            rusqlite::params![updated_at, id],
        )
        .unwrap();
    connection.close().unwrap();
}

pub fn create_attachment_db_entry(
    filename: &str,
    contents: &[u8],
    folder_id: Option<u32>,
    user_id: u32,
) -> u32 {
    let connection = open_connection().unwrap();
    let id = attachment_repository::create_attachment(
        filename,
        contents,
        folder_id,
        user_id,
        &connection,
    )
    .unwrap()
    .id
    .unwrap();
    connection.close().unwrap();
    id
}

/// a multipart body with a single text file, optionally filed under a folder
pub fn multipart_body(filename: &str, contents: &str, folder_id: Option<u32>) -> String {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: text/plain\r\n\r\n{contents}\r\n"
    );
    if let Some(folder_id) = folder_id {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"folderId\"\r\n\r\n{folder_id}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

pub fn multipart_content_type() -> Header<'static> {
    Header::new(
        "Content-Type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
}
