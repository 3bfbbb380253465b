use entity::prelude::*;

/// Keyword and author narrowing applied to the fetched posts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Filter {
    pub keyword: String,
    pub author_id: Option<i64>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty() && self.author_id.is_none()
    }

    pub fn clear(&mut self) {
        self.keyword.clear();
        self.author_id = None;
    }

    pub fn apply(&self, posts: &[PostEntity]) -> Vec<PostEntity> {
        filter_posts(posts, &self.keyword, self.author_id)
    }
}

/// Keeps posts whose body contains `keyword` ignoring case and, when
/// `author_id` is set, whose author matches. Order is preserved.
pub fn filter_posts(
    posts: &[PostEntity],
    keyword: &str,
    author_id: Option<i64>,
) -> Vec<PostEntity> {
    let keyword = keyword.to_lowercase();

    posts
        .iter()
        .filter(|post| {
            keyword.is_empty() || post.body.to_lowercase().contains(&keyword)
        })
        .filter(|post| author_id.map_or(true, |id| post.user_id == id))
        .cloned()
        .collect()
}
