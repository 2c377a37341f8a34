use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::TagId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Parent-node value used by document articles that sit at the top level of
/// their document's menu.
pub const ROOT_PUUID: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Content-type discriminator. Each variant carries its own set of rules,
/// see [`crate::domain::article::Article::enforce_type_rules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleType {
    /// Standalone blog post.
    #[default]
    Article,
    /// Knowledge-base root.
    Document,
    /// Menu entry inside a document that has no body of its own yet.
    DocumentPlaceholderArticle,
    /// Article nested under a document node.
    DocumentArticle,
    /// Menu grouping without content.
    DocumentBlank,
    /// Menu entry pointing at an external URL.
    DocumentUrl,
}

impl ArticleType {
    pub const ALL: [ArticleType; 6] = [
        ArticleType::Article,
        ArticleType::Document,
        ArticleType::DocumentPlaceholderArticle,
        ArticleType::DocumentArticle,
        ArticleType::DocumentBlank,
        ArticleType::DocumentUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleType::Article => "ARTICLE",
            ArticleType::Document => "DOCUMENT",
            ArticleType::DocumentPlaceholderArticle => "DOCUMENT_PLACEHOLDER_ARTICLE",
            ArticleType::DocumentArticle => "DOCUMENT_ARTICLE",
            ArticleType::DocumentBlank => "DOCUMENT_BLANK",
            ArticleType::DocumentUrl => "DOCUMENT_URL",
        }
    }

    /// Whether entities of this type are reachable through their own path.
    pub fn is_addressable(&self) -> bool {
        match self {
            ArticleType::Article
            | ArticleType::Document
            | ArticleType::DocumentPlaceholderArticle
            | ArticleType::DocumentArticle => true,
            ArticleType::DocumentBlank | ArticleType::DocumentUrl => false,
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown article type '{s}'")))
    }
}

/// Canonical, owner-filtered tag identifiers of an article. Stored as a JSON
/// array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<TagId>);

impl TagList {
    pub fn new(ids: Vec<TagId>) -> Self {
        Self(ids)
    }

    /// Decodes the raw client string. Blank input is an empty list.
    pub fn parse_candidates(raw: Option<&str>) -> DomainResult<Vec<TagId>> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Vec::new()),
            Some(raw) => serde_json::from_str::<Vec<String>>(raw)
                .map(|ids| ids.into_iter().map(TagId::from).collect())
                .map_err(|err| DomainError::parse(format!("tags must be a JSON array of strings: {err}"))),
        }
    }

    pub fn as_slice(&self) -> &[TagId] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_json(&self) -> String {
        let ids: Vec<&str> = self.0.iter().map(TagId::as_str).collect();
        // Serializing a slice of strings cannot fail.
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }
}

impl FromIterator<TagId> for TagList {
    fn from_iter<I: IntoIterator<Item = TagId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
