// src/domain/article/services/mod.rs
use crate::application::ports::tags::TagService;
use crate::domain::article::value_objects::TagList;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;

/// Domain service resolving a client tag string into the canonical tag list of
/// an article. Tags that do not exist or belong to someone else are dropped.
pub struct ArticleTagService<'a> {
    tags: &'a dyn TagService,
}

impl<'a> ArticleTagService<'a> {
    pub fn new(tags: &'a dyn TagService) -> Self {
        Self { tags }
    }

    pub fn reconcile(&self, raw: Option<&str>, owner_id: &UserId) -> DomainResult<TagList> {
        let candidates = TagList::parse_candidates(raw)?;
        if candidates.is_empty() {
            return Ok(TagList::default());
        }

        let requested = candidates.len();
        let resolved: TagList = self
            .tags
            .check_tags(&candidates, owner_id)?
            .into_iter()
            .filter(|tag| tag.is_owned_by(owner_id))
            .map(|tag| tag.id)
            .collect();

        if resolved.len() < requested {
            tracing::debug!(
                owner = %owner_id,
                requested,
                kept = resolved.len(),
                "dropped tags that are unknown or not owned by the article owner"
            );
        }

        Ok(resolved)
    }
}
