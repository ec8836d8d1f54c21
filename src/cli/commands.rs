use std::path::Path;

use tracing::info;

use crate::app::{AppContext, LecternError, Result};
use crate::store::{DuplicatePolicy, Store};
use crate::{book, report, stats};

pub async fn fetch(ctx: &AppContext, policy: DuplicatePolicy) -> Result<()> {
    let posts = ctx.feed.fetch_posts().await?;
    info!(count = posts.len(), "feed downloaded");

    let inserted = ctx.store.insert_posts(&posts, policy)?;
    println!("Fetched {} posts, stored {}", posts.len(), inserted);
    Ok(())
}

pub fn clear(ctx: &AppContext) -> Result<()> {
    ctx.store.clear_posts()?;
    println!("Cleared all posts");
    Ok(())
}

pub fn list(ctx: &AppContext) -> Result<()> {
    let posts = ctx.store.get_all_posts()?;

    if posts.is_empty() {
        println!("No posts stored");
        return Ok(());
    }

    for post in posts {
        println!(
            "#{} (user {})\n  {}\n  {}\n",
            post.id,
            post.user_id,
            post.display_title(),
            post.body
        );
    }

    Ok(())
}

pub fn print_stats(ctx: &AppContext) -> Result<()> {
    let posts = ctx.store.get_all_posts()?;

    if posts.is_empty() {
        println!("No posts stored");
        return Ok(());
    }

    println!("Posts per user:");
    for (user_id, count) in stats::group_counts(&posts) {
        println!("  user {:>3}  {:>4}", user_id, count);
    }

    println!("\nAverage body length per user:");
    for (user_id, avg) in stats::group_avg_body_len(&posts) {
        println!("  user {:>3}  {:>8.1}", user_id, avg);
    }

    Ok(())
}

pub fn chapter(path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LecternError::NotFound(path.display().to_string()),
        _ => LecternError::Io(e),
    })?;

    let doc = book::chapter_document(&raw);
    println!("Title:  {}", doc.title);
    println!("Author: {}", doc.author);

    let counts = stats::words_per_paragraph(&doc.body);
    if counts.is_empty() {
        println!("\nNo paragraphs found");
        return Ok(());
    }

    println!("\nParagraph word counts (rounded to nearest ten):");
    for (bucket, freq) in stats::histogram(&counts) {
        println!("  {:>4}  {}", bucket, "#".repeat(freq as usize));
    }

    Ok(())
}

pub async fn build_report(
    ctx: &AppContext,
    page_url: &str,
    author: Option<String>,
    out: &Path,
    open_after: bool,
) -> Result<()> {
    let report_author = author
        .or_else(|| ctx.config.report.author.clone())
        .ok_or_else(|| {
            LecternError::Config(
                "no report author given (use --author or set [report].author)".into(),
            )
        })?;

    let html = ctx.web.fetch_page(page_url).await?;
    let (title, book_author) = book::title_author_from_html(&html);

    let cover_url = book::resolve_cover_url(page_url)?;
    info!(cover_url = %cover_url, "downloading cover image");
    let cover = ctx.web.fetch_bytes(cover_url.as_str()).await?;

    let doc = report::build_report(
        &title,
        &book_author,
        &report_author,
        &cover,
        ctx.config.report.cover_width,
    )?;
    report::write_report(out, &doc)?;
    println!("Report for \"{}\" written to {}", title, out.display());

    if open_after {
        if let Err(e) = open::that(out) {
            eprintln!("Failed to open report: {}", e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::Post;
    use crate::fetcher::FeedSource;
    use async_trait::async_trait;

    struct StaticFeed(Vec<Post>);

    #[async_trait]
    impl FeedSource for StaticFeed {
        async fn fetch_posts(&self) -> Result<Vec<Post>> {
            Ok(self.0.clone())
        }
    }

    fn ctx_with_feed(posts: Vec<Post>) -> AppContext {
        let mut ctx = AppContext::in_memory(Config::default()).unwrap();
        ctx.feed = std::sync::Arc::new(StaticFeed(posts));
        ctx
    }

    #[tokio::test]
    async fn test_fetch_ingests_feed() {
        let ctx = ctx_with_feed(vec![Post::new(1, 7, "t", "abcdefghij")]);
        fetch(&ctx, DuplicatePolicy::Reject).await.unwrap();

        let posts = ctx.store.get_all_posts().unwrap();
        assert_eq!(posts.len(), 1);

        let counts = stats::group_counts(&posts);
        assert_eq!(counts.get(&7), Some(&1));

        let avgs = stats::group_avg_body_len(&posts);
        assert_eq!(avgs.get(&7), Some(&10.0));
    }

    #[tokio::test]
    async fn test_refetch_with_reject_fails() {
        let ctx = ctx_with_feed(vec![Post::new(1, 7, "t", "b")]);
        fetch(&ctx, DuplicatePolicy::Reject).await.unwrap();

        let err = fetch(&ctx, DuplicatePolicy::Reject).await.unwrap_err();
        assert!(matches!(err, LecternError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_refetch_with_skip_is_quiet() {
        let ctx = ctx_with_feed(vec![Post::new(1, 7, "t", "b")]);
        fetch(&ctx, DuplicatePolicy::Skip).await.unwrap();
        fetch(&ctx, DuplicatePolicy::Skip).await.unwrap();

        assert_eq!(ctx.store.count_posts().unwrap(), 1);
    }

    #[test]
    fn test_chapter_missing_file_is_not_found() {
        let err = chapter(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LecternError::NotFound(_)));
    }

    #[test]
    fn test_chapter_prints_histogram_for_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        std::fs::write(
            &path,
            "Title: T\nAuthor: A\nChapter 1\npara one words here\n\nsecond para",
        )
        .unwrap();
        chapter(&path).unwrap();
    }
}
