//! Aggregations over stored posts and chapter text.
//!
//! Everything here is a pure transform: posts in, maps out. `BTreeMap`
//! keeps group and bucket iteration in ascending key order, which the
//! chart and table renderers rely on.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::Post;

/// Number of posts per `user_id`.
pub fn group_counts(posts: &[Post]) -> BTreeMap<i64, u64> {
    let mut counts = BTreeMap::new();
    for post in posts {
        *counts.entry(post.user_id).or_insert(0) += 1;
    }
    counts
}

/// Arithmetic mean of `body` length per `user_id`, measured in
/// characters rather than UTF-8 bytes.
///
/// Empty input yields an empty map; callers must treat "no data" as a
/// distinct case before charting.
pub fn group_avg_body_len(posts: &[Post]) -> BTreeMap<i64, f64> {
    let mut sums: BTreeMap<i64, (u64, u64)> = BTreeMap::new();
    for post in posts {
        let entry = sums.entry(post.user_id).or_insert((0, 0));
        entry.0 += post.body.chars().count() as u64;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(user_id, (total, n))| (user_id, total as f64 / n as f64))
        .collect()
}

/// Word counts per paragraph, each rounded to the nearest multiple of
/// ten. Paragraphs are blank-line separated; empty paragraphs are
/// dropped.
pub fn words_per_paragraph(chapter_text: &str) -> Vec<u32> {
    chapter_text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| round_to_ten(p.split_whitespace().count() as u32))
        .collect()
}

/// Bucket -> frequency pairs, ascending by bucket value.
pub fn histogram(counts: &[u32]) -> Vec<(u32, u64)> {
    let mut buckets: BTreeMap<u32, u64> = BTreeMap::new();
    for &count in counts {
        *buckets.entry(count).or_insert(0) += 1;
    }
    buckets.into_iter().collect()
}

/// Round to the nearest multiple of ten, half-to-even on the quotient:
/// 23 -> 20, 25 -> 20, 35 -> 40.
fn round_to_ten(count: u32) -> u32 {
    let div = count / 10;
    let rem = count % 10;
    let rounded = match rem.cmp(&5) {
        Ordering::Less => div,
        Ordering::Greater => div + 1,
        Ordering::Equal if div % 2 == 0 => div,
        Ordering::Equal => div + 1,
    };
    rounded * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts_for(user_ids: &[i64]) -> Vec<Post> {
        user_ids
            .iter()
            .enumerate()
            .map(|(i, &uid)| Post::new(i as i64 + 1, uid, "t", "body"))
            .collect()
    }

    #[test]
    fn test_group_counts() {
        let posts = posts_for(&[7, 7, 9, 7, 9]);
        let counts = group_counts(&posts);
        assert_eq!(counts.get(&7), Some(&3));
        assert_eq!(counts.get(&9), Some(&2));
    }

    #[test]
    fn test_group_counts_sum_to_input_len() {
        let posts = posts_for(&[1, 2, 2, 3, 3, 3]);
        let total: u64 = group_counts(&posts).values().sum();
        assert_eq!(total, posts.len() as u64);
    }

    #[test]
    fn test_group_counts_empty() {
        assert!(group_counts(&[]).is_empty());
    }

    #[test]
    fn test_avg_body_len_single_user() {
        let posts = vec![
            Post::new(1, 7, "t", "abcd"),       // 4
            Post::new(2, 7, "t", "abcdefgh"),   // 8
        ];
        let avgs = group_avg_body_len(&posts);
        assert_eq!(avgs.get(&7), Some(&6.0));
    }

    #[test]
    fn test_avg_body_len_counts_characters_not_bytes() {
        // "éléphant" is 8 characters but 10 UTF-8 bytes.
        let posts = vec![Post::new(1, 7, "t", "éléphant")];
        let avgs = group_avg_body_len(&posts);
        assert_eq!(avgs.get(&7), Some(&8.0));
    }

    #[test]
    fn test_avg_body_len_empty_iff_no_posts() {
        assert!(group_avg_body_len(&[]).is_empty());
        assert!(!group_avg_body_len(&posts_for(&[1])).is_empty());
    }

    #[test]
    fn test_round_to_ten_rounds_down_below_half() {
        assert_eq!(round_to_ten(23), 20);
        assert_eq!(round_to_ten(14), 10);
        assert_eq!(round_to_ten(3), 0);
    }

    #[test]
    fn test_round_to_ten_rounds_up_above_half() {
        assert_eq!(round_to_ten(26), 30);
        assert_eq!(round_to_ten(17), 20);
    }

    #[test]
    fn test_round_to_ten_half_to_even() {
        assert_eq!(round_to_ten(25), 20); // 2.5 -> 2
        assert_eq!(round_to_ten(35), 40); // 3.5 -> 4
        assert_eq!(round_to_ten(45), 40); // 4.5 -> 4
        assert_eq!(round_to_ten(5), 0); // 0.5 -> 0
        assert_eq!(round_to_ten(15), 20); // 1.5 -> 2
    }

    #[test]
    fn test_words_per_paragraph_buckets() {
        let text = "one two three\n\nfour five six seven eight nine seven eight\n\n   \n\nnine";
        // 3 words -> 0, 8 words -> 10, blank dropped, 1 word -> 0
        assert_eq!(words_per_paragraph(text), vec![0, 10, 0]);
    }

    #[test]
    fn test_words_per_paragraph_23_words() {
        let words = vec!["w"; 23].join(" ");
        assert_eq!(words_per_paragraph(&words), vec![20]);
    }

    #[test]
    fn test_words_per_paragraph_25_words() {
        let words = vec!["w"; 25].join(" ");
        assert_eq!(words_per_paragraph(&words), vec![20]);
    }

    #[test]
    fn test_histogram_ascending_buckets() {
        let hist = histogram(&[20, 10, 20, 30, 20, 10]);
        assert_eq!(hist, vec![(10, 2), (20, 3), (30, 1)]);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(histogram(&[]).is_empty());
    }
}
