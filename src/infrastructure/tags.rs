// src/infrastructure/tags.rs
use crate::application::ports::tags::TagService;
use crate::domain::errors::DomainResult;
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::UserId;
use std::collections::{HashMap, HashSet};

/// Read-only tag store seeded once per request. Answers in candidate order,
/// skipping unknown ids, tags of other users and repeated ids.
#[derive(Debug, Default)]
pub struct InMemoryTagService {
    tags: HashMap<TagId, Tag>,
}

impl InMemoryTagService {
    /// Later tags replace earlier ones with the same id.
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().map(|tag| (tag.id.clone(), tag)).collect(),
        }
    }
}

impl TagService for InMemoryTagService {
    fn check_tags(&self, candidates: &[TagId], owner_id: &UserId) -> DomainResult<Vec<Tag>> {
        let mut seen = HashSet::new();

        Ok(candidates
            .iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.tags.get(id))
            .filter(|tag| tag.is_owned_by(owner_id))
            .cloned()
            .collect())
    }
}
