// src/application/commands/articles/mod.rs
mod create;
mod service;
mod update;

pub use service::ArticleCommandService;
pub use update::apply_article_input;
