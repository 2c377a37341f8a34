// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleInput, AuthenticatedUser},
        error::ApplicationResult,
        ports::tags::TagService,
        validation::ValidationLimits,
    },
    domain::{
        article::{Article, ArticleTagService},
        errors::DomainResult,
    },
};

impl ArticleCommandService {
    /// Applies `input` to an existing article in place. On error the article
    /// may be partially modified and must not be persisted.
    pub fn update_article(
        &self,
        actor: &AuthenticatedUser,
        article: &mut Article,
        input: &ArticleInput,
    ) -> ApplicationResult<()> {
        apply_article_input(
            article,
            input,
            actor,
            self.tag_service.as_ref(),
            &self.limits,
        )?;

        tracing::debug!(article_id = %article.id(), "article updated");
        Ok(())
    }
}

/// The create/update pipeline: field checks, field mapping with path
/// validation, the privileged `top` flag, tag reconciliation, then the rules
/// of the content type. The first failure aborts.
pub fn apply_article_input(
    article: &mut Article,
    input: &ArticleInput,
    actor: &AuthenticatedUser,
    tag_service: &dyn TagService,
    limits: &ValidationLimits,
) -> ApplicationResult<()> {
    input.validate(limits)?;

    map_fields(article, input)?;
    apply_privileged_fields(article, input, actor);

    let tags = ArticleTagService::new(tag_service)
        .reconcile(input.tags.as_deref(), article.owner_id())?;
    article.set_tags(tags);

    article.enforce_type_rules()?;
    Ok(())
}

fn map_fields(article: &mut Article, input: &ArticleInput) -> DomainResult<()> {
    article.title = input.title.clone().unwrap_or_default();

    article.set_path(input.path.clone());
    article.validate_path()?;

    article.poster_tank_uuid = input.poster_tank_uuid.clone();
    article.poster_url = input.poster_url.clone();
    article.digest = input.digest.clone();
    article.is_markdown = input.is_markdown;
    article.markdown = input.markdown.clone();
    article.html = input.html.clone();
    article.words = input.words.unwrap_or_default();
    article.privacy = input.privacy;
    article.need_notify = input.need_notify;
    article.document_uuid = input.document_uuid.clone();
    article.puuid = input.puuid.clone();
    article.article_type = input.article_type;
    Ok(())
}

fn apply_privileged_fields(article: &mut Article, input: &ArticleInput, actor: &AuthenticatedUser) {
    if actor.has_capability("users", "manage") {
        article.top = input.top;
    } else if input.top != article.top {
        tracing::debug!(
            article_id = %article.id(),
            actor = %actor.id,
            "ignoring top flag change from actor without users:manage"
        );
    }
}
