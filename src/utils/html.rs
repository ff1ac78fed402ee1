use ammonia;

/// Escapes text for insertion into HTML.
///
/// Every externally sourced string that lands in markup goes through here;
/// the only exception is the post body, which is produced by a
/// `MarkupRenderer` instead.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Turns a post body into markup that is safe to insert into the article.
///
/// Markdown-to-HTML conversion belongs to the host page, not this crate;
/// implementors are expected to wrap whatever converter the page ships and
/// sanitize its output.
pub trait MarkupRenderer {
    fn render(&self, body: &str) -> String;
}

/// Default `MarkupRenderer`: sanitization only, no conversion.
///
/// This employs a whitelist-based sanitization strategy via ammonia: it
/// preserves safe tags (like <b>, <p>) while stripping dangerous tags
/// (like <script>, <iframe>) and malicious attributes (like onclick).
/// Bodies that are already HTML pass through intact minus anything unsafe.
pub struct SanitizedMarkup;

impl MarkupRenderer for SanitizedMarkup {
    fn render(&self, body: &str) -> String {
        ammonia::clean(body)
    }
}
