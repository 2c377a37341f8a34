pub mod entity;
pub mod services;
pub mod value_objects;

pub use entity::Article;
pub use services::ArticleTagService;
pub use value_objects::{ArticleId, ArticleType, ROOT_PUUID, TagList};
