use client::{
    Client, ClientError, CollectionFetcher, CollectionSubmitter, FetchState,
    LoadError,
};
use entity::prelude::*;
use tokio::{
    sync::watch,
    task::{JoinError, JoinHandle},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::{banner::Banner, filter::Filter, form::PostForm, state::UiState};

/// Everything the blog page shows, owned in one place.
///
/// Setters only record input. Call [`BlogView::recompute`] afterwards to
/// refresh [`BlogView::filtered`]. Dropping the view cancels any request
/// still in flight so it cannot write into dead state.
pub struct BlogView {
    posts: CollectionFetcher<PostEntity>,
    users: CollectionFetcher<UserEntity>,
    submitter: CollectionSubmitter<NewPostDraft>,
    filter: Filter,
    filtered: Vec<PostEntity>,
    ui: UiState,
    banner: Banner,
    lifetime: CancellationToken,
}

impl BlogView {
    pub fn new(client: Client) -> Self {
        Self::with_banner(client, Banner::default())
    }

    pub fn with_banner(client: Client, banner: Banner) -> Self {
        let lifetime = CancellationToken::new();

        Self {
            posts: CollectionFetcher::new(
                client.clone(),
                Collection::Posts,
                lifetime.child_token(),
            ),
            users: CollectionFetcher::new(
                client.clone(),
                Collection::Users,
                lifetime.child_token(),
            ),
            submitter: CollectionSubmitter::new(
                client,
                Collection::Posts,
                lifetime.child_token(),
            ),
            filter: Filter::default(),
            filtered: Vec::new(),
            ui: UiState::default(),
            banner,
            lifetime,
        }
    }

    /// Loads posts and users concurrently, then recomputes the filtered
    /// list. Load failures stay on the fetchers as `*_error`.
    pub async fn mount(&mut self) {
        let (posts, users) = tokio::join!(
            settle(self.posts.mount()),
            settle(self.users.mount())
        );

        for (collection, result) in [
            (Collection::Posts, posts),
            (Collection::Users, users),
        ] {
            // only task panics are logged here
            if let Some(Err(e)) = result {
                error!(task = "mount", %collection, err = e.to_string());
            }
        }

        self.recompute();
    }

    pub async fn refetch_posts(&mut self) -> Result<(), ClientError> {
        let result = self.posts.refetch().await;
        self.recompute();

        result
    }

    /// Submits `draft`. On success the banner is shown, posts are fetched
    /// again and the add-post panel is hidden.
    pub async fn add_post(
        &mut self,
        draft: NewPostDraft,
    ) -> Result<PostEntity, ClientError> {
        let post = self.submitter.submit(draft).await?;

        info!(task = "add post", id = post.id, user_id = post.user_id);
        self.banner.show();

        // a failed refetch keeps the stale list; the fetcher logs it
        let _ = self.posts.refetch().await;

        self.ui.hide_form();
        self.recompute();

        Ok(post)
    }

    pub fn recompute(&mut self) -> &[PostEntity] {
        let posts = self.posts.data();
        self.filtered = if self.filter.is_empty() {
            posts
        } else {
            self.filter.apply(&posts)
        };

        &self.filtered
    }

    pub fn filtered(&self) -> &[PostEntity] {
        &self.filtered
    }

    pub fn posts(&self) -> Vec<PostEntity> {
        self.posts.data()
    }

    pub fn subscribe_posts(
        &self,
    ) -> watch::Receiver<FetchState<PostEntity>> {
        self.posts.subscribe()
    }

    pub fn users(&self) -> Vec<UserEntity> {
        self.users.data()
    }

    /// Posts this view created, newest first.
    pub fn added_posts(&self) -> Vec<PostEntity> {
        self.submitter.items()
    }

    pub fn author_of(&self, post: &PostEntity) -> Option<UserEntity> {
        self.users
            .snapshot()
            .data
            .into_iter()
            .find(|user| user.id == post.user_id)
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.filter.keyword = keyword.into();
    }

    pub fn set_author(&mut self, author_id: Option<i64>) {
        self.filter.author_id = author_id;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn toggle_post(&mut self, post_id: i64) {
        self.ui.toggle_post(post_id);
    }

    pub fn toggle_form(&mut self) {
        self.ui.toggle_form();
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn new_form(&self) -> PostForm {
        PostForm::new(&self.users.data())
    }

    pub fn is_banner_visible(&self) -> bool {
        self.banner.is_visible()
    }

    /// True while either collection is still loading.
    pub fn is_loading(&self) -> bool {
        self.posts.is_loading() || self.users.is_loading()
    }

    pub fn is_adding_post(&self) -> bool {
        self.submitter.is_loading()
    }

    pub fn posts_error(&self) -> Option<LoadError> {
        self.posts.error()
    }

    pub fn users_error(&self) -> Option<LoadError> {
        self.users.error()
    }
}

async fn settle(
    handle: Option<JoinHandle<Result<(), ClientError>>>,
) -> Option<Result<Result<(), ClientError>, JoinError>> {
    match handle {
        Some(handle) => Some(handle.await),
        None => None,
    }
}

impl Drop for BlogView {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
