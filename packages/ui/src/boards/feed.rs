use std::cmp::Reverse;
use std::str::FromStr;

use api::{Post, ReactionSummary};

/// Display order for a list of posts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Server order.
    #[default]
    Default,
    /// Most liked first.
    Likes,
    /// Public, then friends-only, then private.
    Access,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Default, SortMode::Likes, SortMode::Access];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Likes => "likes",
            SortMode::Access => "access",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Default => "Server order",
            SortMode::Likes => "Most liked",
            SortMode::Access => "By visibility",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("Unknown sort mode: {s}"))
    }
}

/// Posts as the server returned them. Sorting never reorders the stored list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostFeed {
    posts: Vec<Post>,
}

impl PostFeed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// A profile's posts. The server omits the author there, so every post
    /// is attributed to `author`.
    pub fn by_author(mut posts: Vec<Post>, author: &str) -> Self {
        for post in &mut posts {
            post.author_name = Some(author.to_string());
        }
        Self::new(posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts in `mode` order. Ties keep server order.
    pub fn sorted(&self, mode: SortMode) -> Vec<Post> {
        let mut posts = self.posts.clone();
        match mode {
            SortMode::Default => {}
            SortMode::Likes => posts.sort_by_key(|p| Reverse(p.like_count)),
            SortMode::Access => posts.sort_by_key(|p| p.access_type.rank()),
        }
        posts
    }

    /// Returns whether the post was found.
    pub fn apply_reaction(&mut self, post_id: i64, summary: &ReactionSummary) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                post.apply_reaction(summary);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, post_id: i64) -> Option<Post> {
        let pos = self.posts.iter().position(|p| p.id == post_id)?;
        Some(self.posts.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Reaction;
    use serde_json::json;

    fn post(id: i64, likes: u32, access: &str) -> Post {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Post {id}"),
            "description": "text",
            "created_at": "2024-05-01T10:00:00Z",
            "like_count": likes,
            "access_type": access,
        }))
        .unwrap()
    }

    fn ids(posts: &[Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id).collect()
    }

    fn feed() -> PostFeed {
        PostFeed::new(vec![
            post(1, 2, "private"),
            post(2, 5, "public"),
            post(3, 2, "friends"),
            post(4, 0, "public"),
        ])
    }

    #[test]
    fn test_default_keeps_server_order() {
        assert_eq!(ids(&feed().sorted(SortMode::Default)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_likes_descending_stable() {
        assert_eq!(ids(&feed().sorted(SortMode::Likes)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_access_order_stable() {
        assert_eq!(ids(&feed().sorted(SortMode::Access)), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_profile_posts_carry_author() {
        let feed = PostFeed::by_author(vec![post(1, 0, "public"), post(2, 0, "friends")], "alice");
        assert!(feed
            .posts()
            .iter()
            .all(|p| p.author_name.as_deref() == Some("alice")));
    }

    #[test]
    fn test_sorting_leaves_feed_untouched() {
        let feed = feed();
        feed.sorted(SortMode::Likes);
        assert_eq!(ids(feed.posts()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_apply_reaction() {
        let mut feed = feed();
        let summary = ReactionSummary {
            like_count: 6,
            dislike_count: 1,
            viewer_reaction: Some(Reaction::Like),
        };

        assert!(feed.apply_reaction(2, &summary));
        assert!(!feed.apply_reaction(99, &summary));
        assert_eq!(feed.posts()[1].like_count, 6);
        assert_eq!(feed.posts()[1].viewer_reaction, Some(Reaction::Like));
    }

    #[test]
    fn test_remove() {
        let mut feed = feed();
        assert_eq!(feed.remove(3).map(|p| p.id), Some(3));
        assert_eq!(feed.remove(3), None);
        assert_eq!(feed.posts().len(), 3);
    }

    #[test]
    fn test_sort_labels() {
        let labels: Vec<&str> = SortMode::ALL.into_iter().map(SortMode::label).collect();
        assert_eq!(labels, ["Server order", "Most liked", "By visibility"]);
    }

    #[test]
    fn test_sort_mode_from_str() {
        assert_eq!("likes".parse::<SortMode>(), Ok(SortMode::Likes));
        assert!("random".parse::<SortMode>().is_err());
    }
}
