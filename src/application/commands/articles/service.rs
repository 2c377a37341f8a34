// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::application::{ports::tags::TagService, validation::ValidationLimits};

pub struct ArticleCommandService {
    pub(super) tag_service: Arc<dyn TagService>,
    pub(super) limits: ValidationLimits,
}

impl ArticleCommandService {
    pub fn new(tag_service: Arc<dyn TagService>, limits: ValidationLimits) -> Self {
        Self {
            tag_service,
            limits,
        }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }
}
