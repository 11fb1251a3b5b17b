use rocket::serde::{Deserialize, Serialize};

use crate::model::item_types::ItemTypes;

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SelectItemRequest {
    pub id: u32,
    #[serde(rename = "type")]
    pub item_type: ItemTypes,
}
