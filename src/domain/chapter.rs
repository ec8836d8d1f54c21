/// Placeholder used when a title or author cannot be extracted.
pub const UNKNOWN: &str = "Unknown";

/// A book's first chapter together with whatever metadata the source
/// text carried. Transient; built by the `book` module and discarded
/// once a report or histogram has been produced from it.
#[derive(Debug, Clone)]
pub struct ChapterDocument {
    pub title: String,
    pub author: String,
    pub body: String,
}

impl ChapterDocument {
    pub fn new(title: String, author: String, body: String) -> Self {
        Self {
            title,
            author,
            body,
        }
    }
}
