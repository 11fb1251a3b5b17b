pub mod error;
pub mod item_types;
pub mod repository;
pub mod request;
pub mod response;
