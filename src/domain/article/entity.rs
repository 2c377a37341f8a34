// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleType, ROOT_PUUID, TagList};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    owner_id: UserId,
    pub title: String,
    pub path: Option<String>,
    pub tags: TagList,
    pub poster_tank_uuid: Option<String>,
    pub poster_url: Option<String>,
    pub digest: Option<String>,
    pub is_markdown: bool,
    pub markdown: Option<String>,
    pub html: Option<String>,
    pub words: u32,
    pub privacy: bool,
    pub top: bool,
    pub need_notify: bool,
    pub document_uuid: Option<String>,
    pub puuid: Option<String>,
    pub article_type: ArticleType,
}

impl Article {
    /// Fresh, empty entity owned by `owner_id`. Ownership is never changed
    /// afterwards.
    pub fn owned_by(owner_id: UserId) -> Self {
        Self::with_identity(ArticleId::generate(), owner_id)
    }

    /// Rebuilds the identity of an already persisted row.
    pub fn with_identity(id: ArticleId, owner_id: UserId) -> Self {
        Self {
            id,
            owner_id,
            title: String::new(),
            path: None,
            tags: TagList::default(),
            poster_tank_uuid: None,
            poster_url: None,
            digest: None,
            is_markdown: true,
            markdown: None,
            html: None,
            words: 0,
            privacy: false,
            top: false,
            need_notify: true,
            document_uuid: None,
            puuid: None,
            article_type: ArticleType::default(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    /// Structural check of the path: present, non-empty, ASCII letters,
    /// digits, `-` and `_` only.
    pub fn validate_path(&self) -> DomainResult<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| DomainError::validation("path is required"))?;

        if path.is_empty() {
            return Err(DomainError::validation("path cannot be empty"));
        }

        if let Some(bad) = path
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::validation(format!(
                "path may only contain letters, digits, '-' and '_' (found {bad:?})"
            )));
        }

        Ok(())
    }

    pub fn set_tags(&mut self, tags: TagList) {
        self.tags = tags;
    }

    /// Applies the rules of the current content type. Stops at the first
    /// violated rule; fields already written stay written.
    pub fn enforce_type_rules(&mut self) -> DomainResult<()> {
        match self.article_type {
            ArticleType::Article => self.require_markdown_body(),
            ArticleType::Document | ArticleType::DocumentPlaceholderArticle => Ok(()),
            ArticleType::DocumentArticle => {
                self.require_markdown_body()?;
                if is_blank(self.document_uuid.as_deref()) {
                    return Err(DomainError::bad_request("document must be specified"));
                }
                if is_blank(self.puuid.as_deref()) {
                    return Err(DomainError::bad_request(format!(
                        "parent node must be specified (top level uses \"{ROOT_PUUID}\")"
                    )));
                }
                Ok(())
            }
            ArticleType::DocumentBlank | ArticleType::DocumentUrl => {
                self.set_path(None);
                Ok(())
            }
        }
    }

    fn require_markdown_body(&self) -> DomainResult<()> {
        if self.is_markdown && is_blank(self.markdown.as_deref()) {
            return Err(DomainError::rule("markdown content required"));
        }
        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
