pub mod articles;
pub mod auth;

pub use articles::{ArticleInput, ArticleRecord};
pub use auth::AuthenticatedUser;
