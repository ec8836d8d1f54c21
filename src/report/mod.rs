//! Reading-report document assembly.
//!
//! The report is a single self-contained HTML file: a heading, three
//! labeled paragraphs (book title, book author, report author) and the
//! cover image embedded as a base64 data URI at a fixed display width,
//! so the file needs no sidecar assets.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use html_escape::encode_text;

use crate::app::{LecternError, Result};

/// Default rendered cover width in pixels (4in at 96dpi).
pub const DEFAULT_COVER_WIDTH: u32 = 384;

/// JPEG streams open with the SOI marker.
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

pub fn build_report(
    book_title: &str,
    book_author: &str,
    report_author: &str,
    cover_jpeg: &[u8],
    cover_width: u32,
) -> Result<String> {
    if !cover_jpeg.starts_with(&JPEG_SOI) {
        return Err(LecternError::Decode(
            "cover bytes are not a JPEG image".into(),
        ));
    }

    let cover_b64 = STANDARD.encode(cover_jpeg);
    let generated = Utc::now().format("%Y-%m-%d");

    let doc = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Reading Report: {title}</title>
</head>
<body>
<h1>Reading Report</h1>
<p>Book title: {title}</p>
<p>Book author: {author}</p>
<p>Report author: {report_author}</p>
<img src="data:image/jpeg;base64,{cover}" width="{width}" alt="Cover of {title}">
<footer><small>Generated {generated}</small></footer>
</body>
</html>
"#,
        title = encode_text(book_title),
        author = encode_text(book_author),
        report_author = encode_text(report_author),
        cover = cover_b64,
        width = cover_width,
        generated = generated,
    );

    Ok(doc)
}

pub fn write_report<P: AsRef<Path>>(path: P, document: &str) -> Result<()> {
    std::fs::write(path, document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest byte string the builder accepts as a cover.
    const COVER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn test_report_contains_labeled_paragraphs() {
        let doc = build_report("Moby Dick", "Herman Melville", "Reader", COVER, 384).unwrap();
        assert!(doc.contains("<p>Book title: Moby Dick</p>"));
        assert!(doc.contains("<p>Book author: Herman Melville</p>"));
        assert!(doc.contains("<p>Report author: Reader</p>"));
        assert!(doc.contains("<h1>Reading Report</h1>"));
    }

    #[test]
    fn test_report_embeds_cover_at_fixed_width() {
        let doc = build_report("T", "A", "R", COVER, 200).unwrap();
        assert!(doc.contains("data:image/jpeg;base64,"));
        assert!(doc.contains("width=\"200\""));
        assert!(doc.contains(&STANDARD.encode(COVER)));
    }

    #[test]
    fn test_report_escapes_html_in_text() {
        let doc = build_report("<script>", "A & B", "R", COVER, 384).unwrap();
        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&lt;script&gt;"));
        assert!(doc.contains("A &amp; B"));
    }

    #[test]
    fn test_report_rejects_non_image_cover() {
        // A soft 404 comes back as HTML with a 200 status; it must not
        // be embedded as a JPEG.
        let err = build_report("T", "A", "R", b"<html>Not Found</html>", 384).unwrap_err();
        assert!(matches!(err, LecternError::Decode(_)));
    }

    #[test]
    fn test_report_rejects_empty_cover() {
        let err = build_report("T", "A", "R", &[], 384).unwrap_err();
        assert!(matches!(err, LecternError::Decode(_)));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        let doc = build_report("T", "A", "R", COVER, 384).unwrap();
        write_report(&path, &doc).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc);
    }
}
