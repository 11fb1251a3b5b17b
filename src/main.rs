#[macro_use]
extern crate rocket;

use rocket::data::{ByteUnit, Limits};
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use handler::{
    api_handler::api_version,
    attachment_handler::{
        create_attachment, delete_attachment, download_attachment, get_attachment,
        list_attachments,
    },
    folder_handler::{create_folder, delete_folder, get_folder, list_folders, update_folder},
    note_handler::{
        create_note, delete_note, download_note, get_note, list_notes, recent_notes, update_note,
    },
    session_handler::{
        clear_selection, get_selected_content, get_session, select_item, toggle_folder,
    },
    tree_handler::{get_tree, get_tree_rows},
    unauthorized,
    user_handler::{login, logout, register},
};

use crate::config::NOTE_SERVER_CONFIG;
use crate::repository::initialize_db;
use crate::session::SessionStore;

mod config;
mod db_migrations;
mod guard;
mod handler;
mod logging;
mod model;
mod repository;
mod service;
mod session;
mod tree;
#[cfg(test)]
mod test;

#[launch]
fn rocket() -> Rocket<Build> {
    #[cfg(not(test))]
    if let Err(e) = logging::init_logging() {
        eprintln!("Failed to set up logging: {e}");
    }
    let upload_limit = ByteUnit::Mebibyte(NOTE_SERVER_CONFIG.uploads.max_size_mb);
    // the folder id shares the multipart body with the file
    let limits = Limits::default()
        .limit("file", upload_limit)
        .limit("data-form", upload_limit + ByteUnit::Mebibyte(1));
    let figment = rocket::Config::figment().merge(("limits", limits));
    rocket::custom(figment)
        .manage(SessionStore::default())
        .attach(AdHoc::try_on_ignite("Database", |rocket| async move {
            match initialize_db() {
                Ok(()) => Ok(rocket),
                Err(e) => {
                    log::error!("Failed to initialize the database! Exception is {e:?}");
                    Err(rocket)
                }
            }
        }))
        .register("/", catchers![unauthorized])
        .mount("/api", routes![api_version])
        .mount("/users", routes![register, login, logout])
        .mount(
            "/folders",
            routes![
                list_folders,
                get_folder,
                create_folder,
                update_folder,
                delete_folder
            ],
        )
        .mount(
            "/notes",
            routes![
                list_notes,
                recent_notes,
                get_note,
                download_note,
                create_note,
                update_note,
                delete_note
            ],
        )
        .mount(
            "/attachments",
            routes![
                list_attachments,
                get_attachment,
                download_attachment,
                create_attachment,
                delete_attachment
            ],
        )
        .mount("/tree", routes![get_tree, get_tree_rows])
        .mount(
            "/session",
            routes![
                get_session,
                select_item,
                clear_selection,
                get_selected_content,
                toggle_folder
            ],
        )
}
