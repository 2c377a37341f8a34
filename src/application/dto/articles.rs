use crate::application::validation::{FieldErrors, ValidationLimits};
use crate::domain::article::{Article, ArticleId, ArticleType, TagList};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Untrusted create/update payload. Keys unknown to this struct, such as an
/// owner id, are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// JSON array of tag identifiers, e.g. `["t1","t2"]`.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub poster_tank_uuid: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default = "default_true")]
    pub is_markdown: bool,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub words: Option<u32>,
    #[serde(default)]
    pub privacy: bool,
    #[serde(default)]
    pub top: bool,
    #[serde(default = "default_true")]
    pub need_notify: bool,
    #[serde(default)]
    pub document_uuid: Option<String>,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(rename = "type", default)]
    pub article_type: ArticleType,
}

impl Default for ArticleInput {
    fn default() -> Self {
        Self {
            title: None,
            path: None,
            tags: None,
            poster_tank_uuid: None,
            poster_url: None,
            digest: None,
            is_markdown: true,
            markdown: None,
            html: None,
            words: None,
            privacy: false,
            top: false,
            need_notify: true,
            document_uuid: None,
            puuid: None,
            article_type: ArticleType::Article,
        }
    }
}

impl ArticleInput {
    /// Structural field checks. Collects every violation instead of stopping
    /// at the first one.
    pub fn validate(&self, limits: &ValidationLimits) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check_length("title", self.title.as_deref(), limits.title_max_chars);
        errors.check_required("path", self.path.as_deref(), limits.path_max_chars);
        errors.check_optional("digest", self.digest.as_deref(), limits.digest_max_chars);
        errors.check_present("words", self.words.as_ref());
        errors.into_result()
    }
}

/// Persistence-ready view of an [`Article`]. The `tags` column holds the
/// canonical JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub uuid: ArticleId,
    pub user_uuid: UserId,
    pub title: String,
    pub path: Option<String>,
    pub tags: String,
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
    #[serde(rename = "type")]
    pub article_type: ArticleType,
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            uuid: article.id(),
            user_uuid: *article.owner_id(),
            title: article.title.clone(),
            path: article.path.clone(),
            tags: article.tags.to_json(),
            poster_tank_uuid: article.poster_tank_uuid.clone(),
            poster_url: article.poster_url.clone(),
            digest: article.digest.clone(),
            is_markdown: article.is_markdown,
            markdown: article.markdown.clone(),
            html: article.html.clone(),
            words: article.words,
            privacy: article.privacy,
            top: article.top,
            need_notify: article.need_notify,
            document_uuid: article.document_uuid.clone(),
            puuid: article.puuid.clone(),
            article_type: article.article_type,
        }
    }
}

impl From<Article> for ArticleRecord {
    fn from(article: Article) -> Self {
        Self::from(&article)
    }
}

impl ArticleRecord {
    /// Rehydrates a stored row so it can go through another update.
    pub fn into_article(self) -> DomainResult<Article> {
        let tags = TagList::new(TagList::parse_candidates(Some(&self.tags))?);
        let mut article = Article::with_identity(self.uuid, self.user_uuid);
        article.title = self.title;
        article.set_path(self.path);
        article.set_tags(tags);
        article.poster_tank_uuid = self.poster_tank_uuid;
        article.poster_url = self.poster_url;
        article.digest = self.digest;
        article.is_markdown = self.is_markdown;
        article.markdown = self.markdown;
        article.html = self.html;
        article.words = self.words;
        article.privacy = self.privacy;
        article.top = self.top;
        article.need_notify = self.need_notify;
        article.document_uuid = self.document_uuid;
        article.puuid = self.puuid;
        article.article_type = self.article_type;
        Ok(article)
    }
}
