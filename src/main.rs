use anyhow::{Context, Result};
use quire_core::{
    application::{
        ApplicationError, ApplicationResult,
        dto::{ArticleInput, ArticleRecord, AuthenticatedUser},
        services::ApplicationServices,
        validation::FieldErrors,
    },
    config::AppConfig,
    domain::{
        article::Article,
        errors::{DomainError, DomainResult},
        tag::Tag,
        user::{Capability, Role, UserId},
    },
    infrastructure::InMemoryTagService,
};
use serde::{Deserialize, Serialize};
use std::{io::Read, process::ExitCode, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One create or update, read as JSON from stdin. `existing` selects update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleRequest {
    actor: Actor,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    existing: Option<ArticleRecord>,
    input: ArticleInput,
}

#[derive(Debug, Deserialize)]
struct Actor {
    id: UserId,
    #[serde(default)]
    username: String,
    #[serde(default)]
    role: Role,
    /// Extra `resource:action` grants on top of the role defaults.
    #[serde(default)]
    capabilities: Vec<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a FieldErrors>,
}

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "fatal error");
            eprintln!("fatal error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap() -> Result<ExitCode> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("reading request from stdin")?;

    match process(&raw, &config) {
        Ok(article) => {
            let record = ArticleRecord::from(&article);
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, "article rejected");
            let fields = match &err {
                ApplicationError::Validation(fields) => Some(fields),
                ApplicationError::Domain(_) => None,
            };
            let body = ErrorBody {
                error: err.kind(),
                message: err.to_string(),
                fields,
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(if err.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Runs one request. Anything wrong with the payload itself is a client
/// error, reported like any other rejection.
fn process(raw: &str, config: &AppConfig) -> ApplicationResult<Article> {
    let request: ArticleRequest = serde_json::from_str(raw)
        .map_err(|err| DomainError::parse(format!("invalid article request: {err}")))?;

    let actor = build_actor(request.actor)?;
    let tag_service = Arc::new(InMemoryTagService::new(request.tags));
    let services = ApplicationServices::new(tag_service, config.limits());
    let commands = &services.article_commands;

    match request.existing {
        Some(record) => {
            let mut article = record.into_article()?;
            commands.update_article(&actor, &mut article, &request.input)?;
            Ok(article)
        }
        None => commands.create_article(&actor, &request.input),
    }
}

fn build_actor(actor: Actor) -> DomainResult<AuthenticatedUser> {
    let mut user = AuthenticatedUser::new(actor.id, actor.username, actor.role);
    for grant in &actor.capabilities {
        let capability: Capability = grant.parse()?;
        user = user.with_capability(capability);
    }
    Ok(user)
}

fn init_tracing(filter: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
