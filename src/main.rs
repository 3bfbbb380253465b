use anyhow::Context as _;
use client::Client;
use toml::{map::Map, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use util::{load_config, ApiConfig, BASE_URL_ENV};
use view::BlogView;

const CONFIG_NAME: &str = "Config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(CONFIG_NAME)?;
    let api =
        ApiConfig::from_config(&config, std::env::var(BASE_URL_ENV).ok())?;

    info!(task = "start blog browser", base_url = %api.base_url);

    let client = Client::new(api)?;
    let mut view = BlogView::new(client);

    view.mount().await;

    if let Some(e) = view.posts_error() {
        warn!(task = "load posts", err = format!("{:?}", e));
    }
    if let Some(e) = view.users_error() {
        warn!(task = "load users", err = format!("{:?}", e));
    }

    let (keyword, author_id) = init_filter(&config)?;
    view.set_keyword(keyword);
    view.set_author(author_id);
    view.recompute();

    render(&view);

    Ok(())
}

/// Reads the optional `[view]` table.
fn init_filter(
    config: &Map<String, Value>,
) -> anyhow::Result<(String, Option<i64>)> {
    let Some(view) = config.get("view") else {
        return Ok((String::new(), None));
    };

    let keyword = match view.get("keyword") {
        Some(keyword) => keyword
            .as_str()
            .context("failed to parse keyword config")?
            .to_string(),
        None => String::new(),
    };

    let author_id = match view.get("author_id") {
        Some(author_id) => Some(
            author_id
                .as_integer()
                .context("failed to parse author_id config")?,
        ),
        None => None,
    };

    Ok((keyword, author_id))
}

fn render(view: &BlogView) {
    if view.filtered().is_empty() {
        info!(task = "render", "No posts...");
        return;
    }

    for post in view.filtered() {
        let author = view
            .author_of(post)
            .map(|user| format!("{} {}", user.username, user.email))
            .unwrap_or_else(|| "Unknown".to_string());

        info!(task = "render", id = post.id, title = %post.title, author);
    }

    info!(
        task = "render",
        shown = view.filtered().len(),
        total = view.posts().len()
    );
}
