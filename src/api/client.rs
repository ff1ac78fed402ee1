use async_trait::async_trait;
use url::Url;

use crate::{
    config::Config,
    error::AppError,
    models::{
        comment::{Comment, CommentDraft},
        page::Page,
        post::Post,
    },
};

/// The consumed content API, as seen by the controllers.
///
/// Futures are not `Send`: everything in this crate runs on one
/// cooperative thread, and tests substitute in-memory fakes behind the
/// same trait.
#[async_trait(?Send)]
pub trait BlogApi {
    async fn list_posts(&self, limit: u32, cursor: Option<&str>) -> Result<Page<Post>, AppError>;

    async fn get_post(&self, slug: &str) -> Result<Post, AppError>;

    async fn list_comments(
        &self,
        slug: &str,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Page<Comment>, AppError>;

    async fn create_comment(&self, slug: &str, draft: &CommentDraft) -> Result<Comment, AppError>;
}

/// reqwest-backed implementation of [`BlogApi`].
///
/// Requests carry no headers beyond the implicit content-type on the POST,
/// so browser-equivalent callers never trigger a preflight round trip.
pub struct HttpBlogApi {
    base: Option<Url>,
    http: reqwest::Client,
}

impl HttpBlogApi {
    pub fn new(config: &Config) -> Self {
        Self {
            base: config.api_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// The API base is optional at construction; every request re-checks it
    /// so a missing setting surfaces as a reported configuration error at
    /// the moment of use, not a crash at startup.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let base = self
            .base
            .as_ref()
            .ok_or_else(|| AppError::Config("API_URL is not set".to_string()))?;
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config("API_URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds the human-readable summary for a non-2xx response, preferring
    /// the `{"error": ...}` body the API uses over a bare status line.
    async fn failure(response: reqwest::Response, context: &str) -> AppError {
        let status = response.status().as_u16();
        let from_body = match response.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(String::from)),
            Err(_) => None,
        };
        AppError::Status {
            status,
            message: from_body.unwrap_or_else(|| format!("{}: HTTP {}", context, status)),
        }
    }
}

#[async_trait(?Send)]
impl BlogApi for HttpBlogApi {
    async fn list_posts(&self, limit: u32, cursor: Option<&str>) -> Result<Page<Post>, AppError> {
        let mut url = self.endpoint(&["api", "posts"])?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        if let Some(cursor) = cursor {
            url.query_pairs_mut().append_pair("cursor", cursor);
        }

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, "Failed to load posts").await);
        }
        Ok(response.json::<Page<Post>>().await?)
    }

    async fn get_post(&self, slug: &str) -> Result<Post, AppError> {
        let url = self.endpoint(&["api", "posts", slug])?;

        let response = self.http.get(url).send().await?;
        if response.status().as_u16() == 404 {
            return Err(AppError::NotFound("Post not found".to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::failure(response, "Failed to load post").await);
        }
        Ok(response.json::<Post>().await?)
    }

    async fn list_comments(
        &self,
        slug: &str,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Page<Comment>, AppError> {
        let mut url = self.endpoint(&["api", "comments"])?;
        url.query_pairs_mut()
            .append_pair("slug", slug)
            .append_pair("limit", &limit.to_string());
        if let Some(cursor) = cursor {
            url.query_pairs_mut().append_pair("cursor", cursor);
        }

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, "Failed to load comments").await);
        }
        Ok(response.json::<Page<Comment>>().await?)
    }

    async fn create_comment(&self, slug: &str, draft: &CommentDraft) -> Result<Comment, AppError> {
        let url = self.endpoint(&["api", "posts", slug, "comments"])?;

        let response = self.http.post(url).json(draft).send().await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, "Failed to submit comment").await);
        }
        Ok(response.json::<Comment>().await?)
    }
}
