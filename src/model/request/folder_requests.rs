use rocket::serde::{Deserialize, Serialize};

use crate::model::request::root_as_none;

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateFolderRequest {
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<u32>,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateFolderRequest {
    pub id: u32,
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<u32>,
}

impl CreateFolderRequest {
    pub fn parent_id(&self) -> Option<u32> {
        root_as_none(self.parent_id)
    }
}

impl UpdateFolderRequest {
    pub fn parent_id(&self) -> Option<u32> {
        root_as_none(self.parent_id)
    }
}
