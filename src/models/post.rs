use serde::{Deserialize, Serialize};

/// One post as returned by the content API.
///
/// Every field except the slug is routinely absent in older records, so
/// everything is optional here; display fallbacks are resolved in one place
/// by the renderer, not at each use site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    /// Raw timestamp string; parsed only at display time.
    pub published_at: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Editorial state on the origin side ('published', 'draft').
    pub status: Option<String>,
}

/// Client-side filter over the loaded accumulation.
///
/// Filtering never refetches and never mutates the accumulation; it only
/// narrows what gets rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    query: String,
    tags: Vec<String>,
}

impl FilterCriteria {
    /// Builds criteria from the raw filter inputs: a free-text query and a
    /// comma-separated tag list. Both are trimmed and lowercased; empty
    /// fragments are dropped.
    pub fn parse(query: &str, tags: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            tags: tags
                .split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.tags.is_empty()
    }

    /// A post passes when the query occurs in its lowercased
    /// "title author" haystack (or the query is empty) AND it carries every
    /// required tag, case-insensitively.
    pub fn matches(&self, post: &Post) -> bool {
        let haystack = format!(
            "{} {}",
            post.title.as_deref().unwrap_or(""),
            post.author.as_deref().unwrap_or("")
        )
        .to_lowercase();
        let query_ok = self.query.is_empty() || haystack.contains(&self.query);

        let post_tags: Vec<String> = post
            .tags
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|t| t.to_lowercase())
            .collect();
        let tags_ok = self.tags.is_empty() || self.tags.iter().all(|t| post_tags.contains(t));

        query_ok && tags_ok
    }
}
