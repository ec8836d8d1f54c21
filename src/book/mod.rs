//! Extraction of book metadata and chapter text.
//!
//! Two sources are supported: a plain-text book file carrying
//! `Title:` / `Author:` header lines, and a downloaded HTML page whose
//! `<title>` element reads `"<title> by <author>"` (the Project
//! Gutenberg convention). Every function here is a pure transform;
//! missing metadata degrades to the [`UNKNOWN`] placeholder rather
//! than failing.

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::app::Result;
use crate::domain::{ChapterDocument, UNKNOWN};

/// Cover images sit next to the page at this relative path.
const COVER_RELATIVE_PATH: &str = "images/cover.jpg";

/// Extract `Title:` / `Author:` header lines from raw book text.
/// First match wins; a missing label yields the placeholder.
pub fn extract_metadata(raw_text: &str) -> (String, String) {
    let title = first_capture(raw_text, r"Title:\s*(.*)");
    let author = first_capture(raw_text, r"Author:\s*(.*)");
    (
        title.unwrap_or_else(|| UNKNOWN.to_string()),
        author.unwrap_or_else(|| UNKNOWN.to_string()),
    )
}

fn first_capture(text: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).unwrap();
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Text following the first chapter heading, trimmed. Headings look
/// like `Chapter 1` or `CHAPTER IV` on their own line. Without a
/// heading the input is returned unchanged.
pub fn split_first_chapter(raw_text: &str) -> String {
    let re = Regex::new(r"(?i)\nchapter\s+(?:\d+|[ivxlcdm]+)\b.*\n").unwrap();
    let body = match re.splitn(raw_text, 2).nth(1) {
        Some(rest) => rest.trim().to_string(),
        None => raw_text.to_string(),
    };
    body
}

/// Metadata from raw text plus the first chapter, bundled.
pub fn chapter_document(raw_text: &str) -> ChapterDocument {
    let (title, author) = extract_metadata(raw_text);
    let body = split_first_chapter(raw_text);
    ChapterDocument::new(title, author, body)
}

/// Title and author from a book page's `<title>` element, split on the
/// first `" by "`.
pub fn title_author_from_html(html: &str) -> (String, String) {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("title").unwrap();

    let tag_text = match doc.select(&selector).next() {
        Some(el) => el.text().collect::<String>(),
        None => return (UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    match tag_text.split_once(" by ") {
        Some((title, author)) => (title.trim().to_string(), author.trim().to_string()),
        None => (tag_text.trim().to_string(), UNKNOWN.to_string()),
    }
}

/// Resolve the cover image location against the page URL. Standard
/// join semantics: the relative path replaces the last path segment.
pub fn resolve_cover_url(page_url: &str) -> Result<Url> {
    let base = Url::parse(page_url)?;
    Ok(base.join(COVER_RELATIVE_PATH)?)
}
