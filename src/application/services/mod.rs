// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::articles::ArticleCommandService, ports::tags::TagService,
    validation::ValidationLimits,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
}

impl ApplicationServices {
    pub fn new(tag_service: Arc<dyn TagService>, limits: ValidationLimits) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&tag_service),
            limits,
        ));

        Self { article_commands }
    }
}
