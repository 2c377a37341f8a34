// tests/support/mocks/tags.rs
use std::sync::Mutex;

use quire_core::application::ports::tags::TagService;
use quire_core::domain::errors::{DomainError, DomainResult};
use quire_core::domain::tag::{Tag, TagId};
use quire_core::domain::user::UserId;

/// Answers every lookup with the configured ids, owned by whoever asked, and
/// records the candidates it was given.
pub struct ScriptedTagService {
    answer: Vec<&'static str>,
    calls: Mutex<Vec<(Vec<TagId>, UserId)>>,
}

impl ScriptedTagService {
    pub fn answering(answer: &[&'static str]) -> Self {
        Self {
            answer: answer.to_vec(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Vec<TagId>, UserId)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TagService for ScriptedTagService {
    fn check_tags(&self, candidates: &[TagId], owner_id: &UserId) -> DomainResult<Vec<Tag>> {
        self.calls
            .lock()
            .unwrap()
            .push((candidates.to_vec(), *owner_id));
        Ok(self
            .answer
            .iter()
            .map(|id| Tag::new(*id, *owner_id, id.to_uppercase()))
            .collect())
    }
}

/// Tag backend that is down.
pub struct FailingTagService;

impl TagService for FailingTagService {
    fn check_tags(&self, _candidates: &[TagId], _owner_id: &UserId) -> DomainResult<Vec<Tag>> {
        Err(DomainError::Persistence("tag backend unavailable".into()))
    }
}
