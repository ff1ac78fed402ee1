use rand::Rng;

use crate::{
    models::{comment::Comment, post::Post},
    utils::date::format_date,
};

const EXCERPT_CHARS: usize = 160;
const UNTITLED: &str = "Untitled post";
const UNKNOWN_AUTHOR: &str = "Unknown author";
const ANONYMOUS: &str = "Anonymous";

/// Decorative stand-in for posts without a cover. The random value only
/// varies which picture the placeholder service returns.
fn placeholder_cover(width: u32, height: u32) -> String {
    let seed = rand::thread_rng().gen_range(0..1000);
    format!("https://picsum.photos/{}/{}?random={}", width, height, seed)
}

fn display_date(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(format_date)
}

/// Display-ready fields for one post card.
///
/// All absence handling for a card happens here, in one place, instead of
/// inline at each interpolation site.
pub struct ResolvedCard {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub published: Option<String>,
    pub excerpt: Option<String>,
    pub cover: String,
    pub tags: Vec<String>,
}

impl ResolvedCard {
    pub fn from_post(post: &Post) -> Self {
        let slug = post.slug.clone().unwrap_or_default();
        let title = match (&post.title, &post.slug) {
            (Some(title), _) => title.clone(),
            (None, Some(slug)) => slug.replace(['-', '_'], " "),
            (None, None) => UNTITLED.to_string(),
        };
        let excerpt = post.excerpt.clone().or_else(|| {
            post.content
                .as_ref()
                .map(|content| format!("{}…", content.chars().take(EXCERPT_CHARS).collect::<String>()))
        });

        Self {
            slug,
            title,
            author: post.author.clone().unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            published: display_date(post.published_at.as_deref()),
            excerpt,
            cover: post.cover_url.clone().unwrap_or_else(|| placeholder_cover(800, 400)),
            tags: post.tags.clone().unwrap_or_default(),
        }
    }
}

/// Display-ready fields for the full article on the detail page.
///
/// Differs from the card: the title falls back to the page's slug
/// parameter verbatim, the author is simply omitted when unknown, and
/// there is no excerpt.
pub struct ResolvedArticle {
    pub title: String,
    pub author: Option<String>,
    pub published: Option<String>,
    pub cover: String,
    pub tags: Vec<String>,
    pub body: String,
}

impl ResolvedArticle {
    pub fn from_post(post: &Post, slug: &str) -> Self {
        Self {
            title: post.title.clone().unwrap_or_else(|| slug.to_string()),
            author: post.author.clone().filter(|a| !a.is_empty()),
            published: display_date(post.published_at.as_deref()),
            cover: post.cover_url.clone().unwrap_or_else(|| placeholder_cover(1200, 500)),
            tags: post.tags.clone().unwrap_or_default(),
            body: post.content.clone().unwrap_or_default(),
        }
    }
}

/// Display-ready fields for one comment entry.
pub struct ResolvedComment {
    pub author: String,
    pub when: Option<String>,
    pub content: String,
}

impl ResolvedComment {
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            author: comment.author.clone().unwrap_or_else(|| ANONYMOUS.to_string()),
            when: display_date(comment.when()),
            content: comment.content.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_post() -> Post {
        Post {
            slug: None,
            title: None,
            author: None,
            content: None,
            excerpt: None,
            cover_url: None,
            published_at: None,
            tags: None,
            status: None,
        }
    }

    #[test]
    fn card_title_falls_back_to_prettified_slug() {
        let mut post = bare_post();
        post.slug = Some("my-first_post".to_string());
        let card = ResolvedCard::from_post(&post);
        assert_eq!(card.title, "my first post");
    }

    #[test]
    fn card_title_placeholder_when_slug_also_missing() {
        let card = ResolvedCard::from_post(&bare_post());
        assert_eq!(card.title, UNTITLED);
    }

    #[test]
    fn explicit_title_wins_over_slug() {
        let mut post = bare_post();
        post.slug = Some("some-slug".to_string());
        post.title = Some("Real Title".to_string());
        assert_eq!(ResolvedCard::from_post(&post).title, "Real Title");
    }

    #[test]
    fn excerpt_is_truncated_content_with_ellipsis() {
        let mut post = bare_post();
        post.content = Some("x".repeat(200));
        let card = ResolvedCard::from_post(&post);
        let excerpt = card.excerpt.unwrap();
        assert_eq!(excerpt.chars().count(), 161);
        assert!(excerpt.ends_with('…'));
    }

    #[test]
    fn excerpt_truncation_respects_multibyte_content() {
        let mut post = bare_post();
        post.content = Some("é".repeat(300));
        let excerpt = ResolvedCard::from_post(&post).excerpt.unwrap();
        assert_eq!(excerpt.chars().count(), 161);
    }

    #[test]
    fn excerpt_absent_without_content() {
        assert!(ResolvedCard::from_post(&bare_post()).excerpt.is_none());
    }

    #[test]
    fn missing_cover_synthesizes_placeholder() {
        let card = ResolvedCard::from_post(&bare_post());
        assert!(card.cover.starts_with("https://picsum.photos/800/400?random="));
    }

    #[test]
    fn article_title_falls_back_to_raw_slug_parameter() {
        let article = ResolvedArticle::from_post(&bare_post(), "raw-slug_here");
        assert_eq!(article.title, "raw-slug_here");
    }

    #[test]
    fn unparseable_published_date_passes_through() {
        let mut post = bare_post();
        post.published_at = Some("not a date".to_string());
        let card = ResolvedCard::from_post(&post);
        assert_eq!(card.published.as_deref(), Some("not a date"));
    }
}
