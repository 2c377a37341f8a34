// src/application/ports/tags.rs
use crate::domain::errors::DomainResult;
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::UserId;

/// Tag lookup owned by the surrounding application.
pub trait TagService: Send + Sync {
    /// Returns the candidates that exist and belong to `owner_id`, in the
    /// order the implementation chooses to report them.
    fn check_tags(&self, candidates: &[TagId], owner_id: &UserId) -> DomainResult<Vec<Tag>>;
}
