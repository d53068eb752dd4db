//! Pure derivations over catalog slices.
//!
//! Every function here takes a slice and returns borrowed references in a
//! new order; none of them mutate or shuffle. All sorts are stable, so
//! ties keep their catalog order.

use crate::types::{CatalogApp, DiscussionCategory, DiscussionPost};

/// Number of non-featured apps appended to the recommended list.
pub const RECOMMEND_EXTRA: usize = 3;

/// Maximum entries on a ranking board.
pub const RANKING_LIMIT: usize = 20;

/// Tab on the home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HomeTab {
    /// Featured apps, then the first few others
    #[default]
    Recommend,
    /// Most liked first
    Trending,
    /// Newest first
    Latest,
    /// Catalog order, used for any tab name we don't recognize
    All,
}

impl HomeTab {
    /// The tabs shown in the home tab bar, in display order.
    pub const TABS: [HomeTab; 3] = [HomeTab::Recommend, HomeTab::Trending, HomeTab::Latest];

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeTab::Recommend => "recommend",
            HomeTab::Trending => "trending",
            HomeTab::Latest => "latest",
            HomeTab::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::Recommend => "为你推荐",
            HomeTab::Trending => "热门应用",
            HomeTab::Latest => "最新发布",
            HomeTab::All => "全部",
        }
    }

    /// Map a tab name to a tab; unknown names fall back to [`HomeTab::All`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "recommend" => HomeTab::Recommend,
            "trending" => HomeTab::Trending,
            "latest" => HomeTab::Latest,
            _ => HomeTab::All,
        }
    }

    /// Next tab in the tab bar (wraps).
    pub fn next(self) -> Self {
        match self {
            HomeTab::Recommend => HomeTab::Trending,
            HomeTab::Trending => HomeTab::Latest,
            HomeTab::Latest | HomeTab::All => HomeTab::Recommend,
        }
    }

    /// Previous tab in the tab bar (wraps).
    pub fn previous(self) -> Self {
        match self {
            HomeTab::Recommend | HomeTab::All => HomeTab::Latest,
            HomeTab::Trending => HomeTab::Recommend,
            HomeTab::Latest => HomeTab::Trending,
        }
    }
}

/// The apps shown under a home tab.
pub fn visible_catalog(apps: &[CatalogApp], tab: HomeTab) -> Vec<&CatalogApp> {
    match tab {
        HomeTab::Recommend => apps
            .iter()
            .filter(|a| a.featured)
            .chain(apps.iter().filter(|a| !a.featured).take(RECOMMEND_EXTRA))
            .collect(),
        HomeTab::Trending => {
            let mut sorted: Vec<_> = apps.iter().collect();
            sorted.sort_by(|a, b| b.likes.cmp(&a.likes));
            sorted
        }
        HomeTab::Latest => {
            let mut sorted: Vec<_> = apps.iter().collect();
            sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            sorted
        }
        HomeTab::All => apps.iter().collect(),
    }
}

// ============================================
// Ranking
// ============================================

/// A leaderboard on the ranking page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RankingBoard {
    /// By likes
    #[default]
    Hot,
    /// By views
    Views,
    /// By creation time
    Newest,
}

impl RankingBoard {
    pub const ALL: [RankingBoard; 3] = [RankingBoard::Hot, RankingBoard::Views, RankingBoard::Newest];

    pub fn label(&self) -> &'static str {
        match self {
            RankingBoard::Hot => "热门榜",
            RankingBoard::Views => "浏览榜",
            RankingBoard::Newest => "新品榜",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RankingBoard::Hot => RankingBoard::Views,
            RankingBoard::Views => RankingBoard::Newest,
            RankingBoard::Newest => RankingBoard::Hot,
        }
    }
}

/// One row on a ranking board.
#[derive(Debug, Clone, Copy)]
pub struct RankingEntry<'a> {
    /// 1-based position
    pub rank: usize,
    pub app: &'a CatalogApp,
}

/// Top [`RANKING_LIMIT`] apps on `board`.
pub fn ranking(apps: &[CatalogApp], board: RankingBoard) -> Vec<RankingEntry<'_>> {
    let mut sorted: Vec<_> = apps.iter().collect();
    match board {
        RankingBoard::Hot => sorted.sort_by(|a, b| b.likes.cmp(&a.likes)),
        RankingBoard::Views => sorted.sort_by(|a, b| b.views.cmp(&a.views)),
        RankingBoard::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    sorted
        .into_iter()
        .take(RANKING_LIMIT)
        .enumerate()
        .map(|(idx, app)| RankingEntry { rank: idx + 1, app })
        .collect()
}

// ============================================
// Community
// ============================================

/// Category filter on the community page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiscussionFilter {
    #[default]
    All,
    Category(DiscussionCategory),
}

impl DiscussionFilter {
    /// Filters in the order they appear in the category bar.
    pub const ALL: [DiscussionFilter; 5] = [
        DiscussionFilter::All,
        DiscussionFilter::Category(DiscussionCategory::Tutorial),
        DiscussionFilter::Category(DiscussionCategory::Tips),
        DiscussionFilter::Category(DiscussionCategory::Showcase),
        DiscussionFilter::Category(DiscussionCategory::Question),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DiscussionFilter::All => "全部",
            DiscussionFilter::Category(c) => c.label(),
        }
    }

    pub fn matches(&self, post: &DiscussionPost) -> bool {
        match self {
            DiscussionFilter::All => true,
            DiscussionFilter::Category(c) => post.category == *c,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Posts matching `filter`, in catalog order.
pub fn filter_discussions(
    posts: &[DiscussionPost],
    filter: DiscussionFilter,
) -> Vec<&DiscussionPost> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

// ============================================
// Featured carousel
// ============================================

/// Position in the home page's featured carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeaturedCarousel {
    index: usize,
}

impl FeaturedCarousel {
    /// Current slide, clamped to `len`. `None` when there's nothing featured.
    pub fn current(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index % len)
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index % len + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index % len + len - 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppKind, User};
    use chrono::{TimeZone, Utc};

    fn author() -> User {
        User {
            id: "u".to_string(),
            name: "作者".to_string(),
            username: "author".to_string(),
            avatar: String::new(),
            bio: None,
            cover_image: None,
        }
    }

    fn app(id: &str, likes: u64, day: u32, featured: bool) -> CatalogApp {
        CatalogApp {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            thumbnail: String::new(),
            author: author(),
            likes,
            comments: 0,
            shares: 0,
            views: likes * 10,
            tags: vec![],
            created_at: Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0).unwrap(),
            kind: AppKind::ExternalLink,
            url: None,
            code_snippet: None,
            featured,
        }
    }

    fn ids(apps: &[&CatalogApp]) -> Vec<String> {
        apps.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_recommend_is_featured_then_first_three_others() {
        let apps = vec![
            app("a", 1, 1, true),
            app("b", 1, 1, false),
            app("c", 1, 1, false),
            app("d", 1, 1, false),
            app("e", 1, 1, false),
        ];
        assert_eq!(
            ids(&visible_catalog(&apps, HomeTab::Recommend)),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_recommend_keeps_featured_in_source_order_wherever_they_sit() {
        let apps = vec![
            app("a", 1, 1, false),
            app("b", 1, 1, true),
            app("c", 1, 1, false),
            app("d", 1, 1, true),
        ];
        assert_eq!(
            ids(&visible_catalog(&apps, HomeTab::Recommend)),
            vec!["b", "d", "a", "c"]
        );
    }

    #[test]
    fn test_trending_sorts_by_likes_and_is_stable() {
        let apps = vec![
            app("a", 3, 1, false),
            app("b", 5, 1, false),
            app("c", 5, 1, false),
            app("d", 1, 1, false),
        ];
        assert_eq!(
            ids(&visible_catalog(&apps, HomeTab::Trending)),
            vec!["b", "c", "a", "d"]
        );
    }

    #[test]
    fn test_latest_sorts_by_created_and_is_stable() {
        let apps = vec![
            app("a", 0, 2, false),
            app("b", 0, 5, false),
            app("c", 0, 2, false),
            app("d", 0, 9, false),
        ];
        assert_eq!(
            ids(&visible_catalog(&apps, HomeTab::Latest)),
            vec!["d", "b", "a", "c"]
        );
    }

    #[test]
    fn test_all_tab_is_catalog_order() {
        let apps = vec![app("z", 0, 1, false), app("y", 9, 9, true)];
        assert_eq!(ids(&visible_catalog(&apps, HomeTab::All)), vec!["z", "y"]);
        assert_eq!(HomeTab::from_name("whatever"), HomeTab::All);
        assert_eq!(HomeTab::from_name(" Trending "), HomeTab::Trending);
    }

    #[test]
    fn test_visible_catalog_is_repeatable() {
        let apps = vec![
            app("a", 3, 4, true),
            app("b", 7, 2, false),
            app("c", 7, 4, false),
        ];
        for tab in [HomeTab::Recommend, HomeTab::Trending, HomeTab::Latest, HomeTab::All] {
            assert_eq!(
                ids(&visible_catalog(&apps, tab)),
                ids(&visible_catalog(&apps, tab))
            );
        }
    }

    #[test]
    fn test_ranking_is_capped_and_one_based() {
        let apps: Vec<_> = (0..25).map(|i| app(&format!("x{i}"), i, 1, false)).collect();
        let board = ranking(&apps, RankingBoard::Hot);
        assert_eq!(board.len(), RANKING_LIMIT);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].app.id, "x24");
        assert_eq!(board[19].rank, 20);
        assert_eq!(board[19].app.id, "x5");
    }

    #[test]
    fn test_ranking_boards_use_their_metric() {
        let mut apps = vec![app("a", 10, 1, false), app("b", 5, 3, false)];
        apps[1].views = 1000;

        let hot = ranking(&apps, RankingBoard::Hot);
        let views = ranking(&apps, RankingBoard::Views);
        let newest = ranking(&apps, RankingBoard::Newest);
        assert_eq!(hot[0].app.id, "a");
        assert_eq!(views[0].app.id, "b");
        assert_eq!(newest[0].app.id, "b");
    }

    #[test]
    fn test_home_tab_cycles_through_tab_bar() {
        assert_eq!(HomeTab::Recommend.next(), HomeTab::Trending);
        assert_eq!(HomeTab::Latest.next(), HomeTab::Recommend);
        assert_eq!(HomeTab::Recommend.previous(), HomeTab::Latest);
        assert_eq!(HomeTab::All.next(), HomeTab::Recommend);
    }

    #[test]
    fn test_discussion_filter_cycles_and_wraps() {
        let mut filter = DiscussionFilter::All;
        for _ in 0..DiscussionFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, DiscussionFilter::All);
        assert_eq!(
            DiscussionFilter::All.next(),
            DiscussionFilter::Category(DiscussionCategory::Tutorial)
        );
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = FeaturedCarousel::default();
        assert_eq!(carousel.current(0), None);
        assert_eq!(carousel.current(3), Some(0));

        carousel.previous(3);
        assert_eq!(carousel.current(3), Some(2));
        carousel.next(3);
        carousel.next(3);
        assert_eq!(carousel.current(3), Some(1));

        // Shrinking the featured set never yields an out-of-range slide
        assert_eq!(carousel.current(1), Some(0));
    }
}
