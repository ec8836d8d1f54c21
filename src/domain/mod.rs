pub mod chapter;
pub mod post;

pub use chapter::{ChapterDocument, UNKNOWN};
pub use post::Post;
