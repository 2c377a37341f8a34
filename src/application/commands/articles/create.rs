// src/application/commands/articles/create.rs
use super::{ArticleCommandService, update::apply_article_input};
use crate::{
    application::{
        dto::{ArticleInput, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::Article,
};

impl ArticleCommandService {
    /// Allocates a new article owned by `actor` and runs it through the same
    /// pipeline as an update. Ownership is assigned here and nowhere else.
    pub fn create_article(
        &self,
        actor: &AuthenticatedUser,
        input: &ArticleInput,
    ) -> ApplicationResult<Article> {
        let mut article = Article::owned_by(actor.id);
        apply_article_input(
            &mut article,
            input,
            actor,
            self.tag_service.as_ref(),
            &self.limits,
        )?;

        tracing::info!(
            article_id = %article.id(),
            owner = %article.owner_id(),
            article_type = %article.article_type,
            "article created"
        );
        Ok(article)
    }
}
