// src/domain/tag/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::Tag;
pub use value_objects::TagId;
