//! Pure view construction: `(items, criteria) -> markup`.
//!
//! Nothing in here mutates the accumulation or performs I/O, so rendering
//! is idempotent and the controllers can re-render at will.

pub mod resolve;

use url::form_urlencoded;

use crate::{
    models::{
        comment::Comment,
        post::{FilterCriteria, Post},
    },
    utils::html::{MarkupRenderer, escape_html},
};
use resolve::{ResolvedArticle, ResolvedCard, ResolvedComment};

/// Shown when the active filters reject every loaded post. Distinct from
/// the pre-load placeholder the controller owns.
pub const NO_RESULTS: &str = r#"<p class="muted">No posts match the active filters.</p>"#;

/// Applies the criteria to the accumulation and renders the surviving
/// posts as cards, or the no-results placeholder.
pub fn render_feed(posts: &[Post], criteria: &FilterCriteria) -> String {
    let cards: Vec<String> = posts
        .iter()
        .filter(|p| criteria.matches(p))
        .map(render_post_card)
        .collect();
    if cards.is_empty() {
        return NO_RESULTS.to_string();
    }
    cards.join("\n")
}

pub fn render_post_card(post: &Post) -> String {
    let card = ResolvedCard::from_post(post);

    let link_query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("slug", &card.slug)
        .finish();

    let mut meta = String::new();
    if let Some(published) = &card.published {
        meta.push_str(&format!("<span>📅 {}</span>", escape_html(published)));
    }
    meta.push_str(&format!("<span>✍️ {}</span>", escape_html(&card.author)));

    let tags = render_tags(&card.tags);

    let excerpt = card
        .excerpt
        .as_deref()
        .map(|e| format!(r#"<p class="post-excerpt">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<article class="post-card">
  <img class="post-cover" alt="" src="{cover}" loading="lazy" />
  <div class="post-body">
    <h3 class="post-title"><a href="post.html?{link_query}">{title}</a></h3>
    <div class="post-meta">{meta}</div>
    {tags}
    {excerpt}
  </div>
</article>"#,
        cover = escape_html(&card.cover),
        link_query = link_query,
        title = escape_html(&card.title),
        meta = meta,
        tags = tags,
        excerpt = excerpt,
    )
}

/// Renders the full article for the detail page. The body is the only
/// field that may carry markup, and it goes through the `MarkupRenderer`
/// collaborator rather than the escaper.
pub fn render_article(post: &Post, slug: &str, markup: &dyn MarkupRenderer) -> String {
    let article = ResolvedArticle::from_post(post, slug);

    let mut lead = String::new();
    if let Some(published) = &article.published {
        lead.push_str(&format!("📅 {}", escape_html(published)));
    }
    if let Some(author) = &article.author {
        if !lead.is_empty() {
            lead.push_str(" · ");
        }
        lead.push_str(&format!("✍️ {}", escape_html(author)));
    }

    format!(
        r#"<img class="post-cover" alt="" src="{cover}" loading="lazy" />
<h1>{title}</h1>
<p class="lead">{lead}</p>
{tags}
<div class="prose">{body}</div>"#,
        cover = escape_html(&article.cover),
        title = escape_html(&article.title),
        lead = lead,
        tags = render_tags(&article.tags),
        body = markup.render(&article.body),
    )
}

/// Window/tab title for the detail page.
pub fn document_title(post: &Post, slug: &str) -> String {
    format!("{} — My Blog", ResolvedArticle::from_post(post, slug).title)
}

pub fn render_comment_list(comments: &[Comment]) -> String {
    comments
        .iter()
        .map(render_comment)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_comment(comment: &Comment) -> String {
    let entry = ResolvedComment::from_comment(comment);

    let when = entry
        .when
        .as_deref()
        .map(|w| format!(" · {}", escape_html(w)))
        .unwrap_or_default();

    // Escape first, then reintroduce line breaks.
    let body = escape_html(&entry.content).replace('\n', "<br>");

    format!(
        r#"<div class="comment">
  <div class="meta">💬 <strong>{author}</strong>{when}</div>
  <div class="body">{body}</div>
</div>"#,
        author = escape_html(&entry.author),
        when = when,
        body = body,
    )
}

fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let spans: String = tags
        .iter()
        .map(|t| format!(r#"<span class="tag">#{}</span>"#, escape_html(t)))
        .collect();
    format!(r#"<div class="tags">{}</div>"#, spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::html::SanitizedMarkup;

    fn post(title: &str, author: &str, tags: &[&str]) -> Post {
        Post {
            slug: Some(title.to_lowercase().replace(' ', "-")),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            content: Some("content".to_string()),
            excerpt: None,
            cover_url: Some("https://cdn.example/cover.jpg".to_string()),
            published_at: None,
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            status: None,
        }
    }

    #[test]
    fn filtered_feed_keeps_only_matching_posts() {
        let posts = vec![
            post("Hello World", "Ana", &["go"]),
            post("Rust Tips", "Bo", &["rust"]),
        ];

        let by_query = render_feed(&posts, &FilterCriteria::parse("rust", ""));
        assert!(by_query.contains("Rust Tips"));
        assert!(!by_query.contains("Hello World"));

        let by_tag = render_feed(&posts, &FilterCriteria::parse("", "go"));
        assert!(by_tag.contains("Hello World"));
        assert!(!by_tag.contains("Rust Tips"));
    }

    #[test]
    fn impossible_filters_render_the_no_results_placeholder() {
        let posts = vec![
            post("Hello World", "Ana", &["go"]),
            post("Rust Tips", "Bo", &["rust"]),
        ];
        let view = render_feed(&posts, &FilterCriteria::parse("rust", "go"));
        assert_eq!(view, NO_RESULTS);
    }

    #[test]
    fn rendering_is_idempotent_and_non_destructive() {
        let posts = vec![post("Hello World", "Ana", &["go"])];
        let criteria = FilterCriteria::parse("hello", "");
        let first = render_feed(&posts, &criteria);
        let second = render_feed(&posts, &criteria);
        assert_eq!(first, second);
        assert_eq!(posts[0].title.as_deref(), Some("Hello World"));
    }

    #[test]
    fn card_escapes_hostile_fields() {
        let mut p = post("<script>alert(1)</script>", "Ana", &["<b>"]);
        p.excerpt = Some(r#""quoted" & <i>"#.to_string());
        let card = render_post_card(&p);
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
        assert!(card.contains("#&lt;b&gt;"));
        assert!(card.contains("&quot;quoted&quot; &amp; &lt;i&gt;"));
    }

    #[test]
    fn card_link_encodes_the_slug() {
        let mut p = post("Hello", "Ana", &[]);
        p.slug = Some("weird slug/with?chars".to_string());
        let card = render_post_card(&p);
        assert!(card.contains("post.html?slug=weird+slug%2Fwith%3Fchars"));
    }

    #[test]
    fn article_body_is_sanitized_not_escaped() {
        let mut p = post("Hello", "Ana", &[]);
        p.content = Some("<p>fine</p><script>alert(1)</script>".to_string());
        let article = render_article(&p, "hello", &SanitizedMarkup);
        assert!(article.contains("<p>fine</p>"));
        assert!(!article.contains("script"));
    }

    #[test]
    fn comment_breaks_lines_after_escaping() {
        let comment = Comment {
            id: None,
            author: Some("Bo".to_string()),
            content: Some("line one\n<b>line two</b>".to_string()),
            created_at: None,
            published_at: None,
            updated_at: None,
            email_hash: None,
            status: None,
        };
        let entry = render_comment(&comment);
        assert!(entry.contains("line one<br>&lt;b&gt;line two&lt;/b&gt;"));
    }

    #[test]
    fn anonymous_comment_gets_the_fallback_name() {
        let comment = Comment {
            id: None,
            author: None,
            content: Some("hi".to_string()),
            created_at: None,
            published_at: None,
            updated_at: None,
            email_hash: None,
            status: None,
        };
        assert!(render_comment(&comment).contains("<strong>Anonymous</strong>"));
    }
}
