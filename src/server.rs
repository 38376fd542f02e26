//! HTTP listing surface.
//!
//! `GET /api/v1/article` validates paging, builds one [`Criteria`], and runs
//! it through both specification forms — an inline closure over
//! [`criteria_to_predicate`] and an [`ArticleSpecification`] — returning the
//! two pages side by side.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use clinked_core::config::ServerConfig;
use clinked_core::page::DEFAULT_PAGE_SIZE;
use clinked_core::{
    criteria_to_predicate, Article, ArticleRepository, ArticleSpecification, Criteria, Page,
    PageRequest,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

pub const ARTICLE_PATH: &str = "/api/v1/article";

type SharedRepository = Arc<dyn ArticleRepository>;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// Query parameters of the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Zero-based page index.
    #[serde(default)]
    pub next: i64,
    /// Page size.
    #[serde(default = "default_max")]
    pub max: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub slug: Option<String>,
    pub publish_from: Option<String>,
    pub publish_to: Option<String>,
}

fn default_max() -> i64 {
    i64::from(DEFAULT_PAGE_SIZE)
}

impl ListParams {
    pub fn page_request(&self) -> clinked_core::Result<PageRequest> {
        PageRequest::checked(self.next, self.max)
    }

    pub fn into_criteria(self) -> Criteria {
        Criteria::new()
            .with_title(self.title)
            .with_author(self.author)
            .with_slug(self.slug)
            .with_publish_from(self.publish_from)
            .with_publish_to(self.publish_to)
    }
}

/// The same request answered through both specification forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub by_function: Page<Article>,
    pub by_specification: Page<Article>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ApiError {
    Core(clinked_core::Error),
    Join(tokio::task::JoinError),
}

impl From<clinked_core::Error> for ApiError {
    fn from(e: clinked_core::Error) -> Self {
        ApiError::Core(e)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Join(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Core(e) if e.is_invalid_argument() => {
                debug!(error = %e, "rejected listing request");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Core(e) => {
                error!(error = %e, "article store failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "article store failed".to_string())
            }
            ApiError::Join(e) => {
                error!(error = %e, "article query task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "query task failed".to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(repo: SharedRepository) -> Router {
    Router::new()
        .route(ARTICLE_PATH, get(list_articles))
        .with_state(repo)
}

/// Bind `config.host:config.port` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, repo: SharedRepository) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(repo))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn list_articles(
    State(repo): State<SharedRepository>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let page = params.page_request()?;
    let criteria = params.into_criteria();
    debug!(?criteria, index = page.index(), size = page.size(), "listing articles");

    let response = tokio::task::spawn_blocking(move || -> clinked_core::Result<ListResponse> {
        let closure = || criteria_to_predicate(&criteria);
        let by_function = repo.find_all(&closure, page)?;
        let by_specification = repo.find_all(&ArticleSpecification::new(&criteria), page)?;
        if by_function != by_specification {
            warn!(?criteria, "specification forms disagree");
        }
        Ok(ListResponse {
            by_function,
            by_specification,
        })
    })
    .await??;

    Ok(Json(response))
}
