// tests/support/builders.rs
use quire_core::application::dto::ArticleInput;
use quire_core::domain::article::{ArticleType, ROOT_PUUID};

#[derive(Clone)]
pub struct InputBuilder {
    input: ArticleInput,
}

impl InputBuilder {
    /// A markdown article that passes every rule.
    pub fn new() -> Self {
        Self {
            input: ArticleInput {
                title: Some("Test Article".into()),
                path: Some("test-article".into()),
                markdown: Some("# Test\n\nbody".into()),
                html: Some("<h1>Test</h1><p>body</p>".into()),
                words: Some(2),
                ..ArticleInput::default()
            },
        }
    }

    /// A document article placed at the top of its document.
    pub fn document_article() -> Self {
        Self::new()
            .kind(ArticleType::DocumentArticle)
            .document("doc-1")
            .parent(ROOT_PUUID)
    }

    pub fn kind(mut self, kind: ArticleType) -> Self {
        self.input.article_type = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.input.title = Some(title.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.input.path = Some(path.into());
        self
    }

    pub fn tags(mut self, raw: impl Into<String>) -> Self {
        self.input.tags = Some(raw.into());
        self
    }

    pub fn markdown(mut self, is_markdown: bool, body: Option<&str>) -> Self {
        self.input.is_markdown = is_markdown;
        self.input.markdown = body.map(String::from);
        self
    }

    pub fn top(mut self, top: bool) -> Self {
        self.input.top = top;
        self
    }

    pub fn document(mut self, uuid: &str) -> Self {
        self.input.document_uuid = Some(uuid.into());
        self
    }

    pub fn no_document(mut self) -> Self {
        self.input.document_uuid = None;
        self
    }

    pub fn parent(mut self, puuid: &str) -> Self {
        self.input.puuid = Some(puuid.into());
        self
    }

    pub fn no_parent(mut self) -> Self {
        self.input.puuid = None;
        self
    }

    pub fn build(self) -> ArticleInput {
        self.input
    }
}
