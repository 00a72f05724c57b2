//! Free-text rendering
//!
//! Project descriptions and learnings accept inline markdown. Raw HTML in the
//! source is shown as text, never passed through.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to an HTML fragment safe to embed unescaped.
///
/// Raw HTML becomes text, images are dropped, and links keep their label but
/// lose the anchor unless the destination is http(s), mailto or relative.
pub fn render_markdown(text: &str) -> String {
    // Links never nest, so one flag tracks the open unsafe link
    let mut in_unsafe_link = false;
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => {
            Event::Text(CowStr::Borrowed(""))
        }
        Event::Start(Tag::Link { ref dest_url, .. }) if !is_safe_link(dest_url) => {
            in_unsafe_link = true;
            Event::Text(CowStr::Borrowed(""))
        }
        Event::End(TagEnd::Link) if in_unsafe_link => {
            in_unsafe_link = false;
            Event::Text(CowStr::Borrowed(""))
        }
        other => other,
    });

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    html::push_html(&mut out, parser);
    out
}

/// http(s), mailto, or a URL with no scheme at all.
fn is_safe_link(dest: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme
    let normalized: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.find(|c| matches!(c, ':' | '/' | '?' | '#')) {
        Some(idx) if normalized[idx..].starts_with(':') => {
            matches!(&normalized[..idx], "http" | "https" | "mailto")
        }
        _ => true,
    }
}

/// Percent-encode a site-relative asset path one segment at a time.
///
/// Absolute and protocol-relative URLs are passed through untouched.
pub fn asset_href(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") || url.starts_with("//") || url.starts_with("mailto:") {
        return url.to_string();
    }
    url.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
