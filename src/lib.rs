//! Create/update pipeline for blog articles and their document variants.
//!
//! [`application::commands::articles::ArticleCommandService`] is the entry
//! point: it validates untrusted [`application::dto::ArticleInput`], maps it
//! onto an [`domain::article::Article`], gates privileged fields, reconciles
//! tags through an injected [`application::ports::tags::TagService`] and
//! enforces the rules of the article's content type.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
