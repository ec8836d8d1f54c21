use crate::domain::Post;
use crate::stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Posts,
    Chart,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Posts => ActivePane::Chart,
            ActivePane::Chart => ActivePane::Posts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Counts,
    AvgBodyLen,
}

impl ChartKind {
    pub fn next(self) -> Self {
        match self {
            ChartKind::Counts => ChartKind::AvgBodyLen,
            ChartKind::AvgBodyLen => ChartKind::Counts,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Counts => "Posts per user",
            ChartKind::AvgBodyLen => "Average body length per user",
        }
    }
}

/// Renderable bar-chart data: one labeled bar per user group.
pub struct ChartData {
    pub title: String,
    pub bars: Vec<(String, u64)>,
}

impl ChartData {
    /// Build chart data for `kind`, or `None` when there are no posts
    /// (an empty histogram is undefined).
    pub fn build(kind: ChartKind, posts: &[Post]) -> Option<Self> {
        if posts.is_empty() {
            return None;
        }

        let bars = match kind {
            ChartKind::Counts => stats::group_counts(posts)
                .into_iter()
                .map(|(user_id, count)| (format!("u{}", user_id), count))
                .collect(),
            ChartKind::AvgBodyLen => stats::group_avg_body_len(posts)
                .into_iter()
                .map(|(user_id, avg)| (format!("u{}", user_id), avg.round() as u64))
                .collect(),
        };

        Some(Self {
            title: kind.title().to_string(),
            bars,
        })
    }
}

pub struct TuiApp {
    pub active_pane: ActivePane,
    pub posts: Vec<Post>,
    pub post_index: usize,
    /// Single-slot chart handle; each rebuild drops the previous chart.
    pub chart: Option<ChartData>,
    pub chart_kind: ChartKind,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_fetching: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            active_pane: ActivePane::Posts,
            posts: Vec::new(),
            post_index: 0,
            chart: None,
            chart_kind: ChartKind::Counts,
            should_quit: false,
            status_message: None,
            is_fetching: false,
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.post_index)
    }

    pub fn move_up(&mut self) {
        if self.active_pane == ActivePane::Posts && self.post_index > 0 {
            self.post_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.active_pane == ActivePane::Posts
            && !self.posts.is_empty()
            && self.post_index < self.posts.len() - 1
        {
            self.post_index += 1;
        }
    }

    pub fn toggle_chart(&mut self) {
        self.chart_kind = self.chart_kind.next();
        self.rebuild_chart();
    }

    /// Replace the displayed chart with one built from current posts.
    pub fn rebuild_chart(&mut self) {
        self.chart = ChartData::build(self.chart_kind, &self.posts);
    }

    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        if self.post_index >= self.posts.len() && !self.posts.is_empty() {
            self.post_index = self.posts.len() - 1;
        }
        self.rebuild_chart();
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_none_when_no_posts() {
        assert!(ChartData::build(ChartKind::Counts, &[]).is_none());
    }

    #[test]
    fn test_chart_counts_one_bar_per_user() {
        let posts = vec![
            Post::new(1, 7, "t", "aaaa"),
            Post::new(2, 7, "t", "bb"),
            Post::new(3, 9, "t", "c"),
        ];
        let chart = ChartData::build(ChartKind::Counts, &posts).unwrap();
        assert_eq!(chart.bars, vec![("u7".to_string(), 2), ("u9".to_string(), 1)]);
    }

    #[test]
    fn test_chart_averages_rounded_for_display() {
        let posts = vec![
            Post::new(1, 7, "t", "aaaa"), // 4
            Post::new(2, 7, "t", "bbb"),  // 3 -> avg 3.5 -> bar 4
        ];
        let chart = ChartData::build(ChartKind::AvgBodyLen, &posts).unwrap();
        assert_eq!(chart.bars, vec![("u7".to_string(), 4)]);
    }

    #[test]
    fn test_toggle_chart_replaces_slot() {
        let mut app = TuiApp::new();
        app.set_posts(vec![Post::new(1, 7, "t", "abcd")]);
        assert_eq!(app.chart.as_ref().unwrap().title, "Posts per user");

        app.toggle_chart();
        assert_eq!(
            app.chart.as_ref().unwrap().title,
            "Average body length per user"
        );
    }

    #[test]
    fn test_set_posts_clamps_selection() {
        let mut app = TuiApp::new();
        app.set_posts(vec![
            Post::new(1, 1, "a", "x"),
            Post::new(2, 1, "b", "y"),
            Post::new(3, 1, "c", "z"),
        ]);
        app.post_index = 2;
        app.set_posts(vec![Post::new(1, 1, "a", "x")]);
        assert_eq!(app.post_index, 0);
    }
}
