use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use toml::{map::Map, Value};
use url::Url;

pub const BASE_URL_ENV: &str = "BLOG_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "blog-browser";

/// Connection settings for the remote collection API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Reads the `[api]` table. `base_url_override` wins over the file
    /// when present.
    pub fn from_config(
        config: &Map<String, Value>,
        base_url_override: Option<String>,
    ) -> anyhow::Result<Self> {
        let api = config.get("api").context("failed to load api config")?;

        let base_url = match base_url_override {
            Some(base_url) => base_url,
            None => api
                .get("base_url")
                .context("failed to load base_url config")?
                .as_str()
                .context("failed to parse base_url config")?
                .to_string(),
        };

        let timeout_secs = match api.get("timeout_secs") {
            Some(value) => {
                let secs = value
                    .as_integer()
                    .filter(|secs| *secs > 0)
                    .context("failed to parse timeout_secs config")?;
                secs as u64
            }
            None => DEFAULT_TIMEOUT_SECS,
        };

        let user_agent = match api.get("user_agent") {
            Some(value) => value
                .as_str()
                .context("failed to parse user_agent config")?
                .to_string(),
            None => DEFAULT_USER_AGENT.to_string(),
        };

        Ok(Self {
            base_url: parse_base_url(&base_url)?,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            collection
        )
    }
}

fn parse_base_url(base_url: &str) -> anyhow::Result<Url> {
    let url = Url::parse(base_url)
        .with_context(|| format!("invalid base_url: {}", base_url))?;

    anyhow::ensure!(
        matches!(url.scheme(), "http" | "https"),
        "base_url must be http or https: {}",
        base_url
    );

    Ok(url)
}

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to locate workspace")?
        .stdout;
    let cargo_path = Path::new(
        std::str::from_utf8(&output)
            .context("failed to read workspace path")?
            .trim(),
    );

    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("workspace manifest has no parent")
}

/// Reads `config_name` from the working directory, falling back to the
/// workspace root.
pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    let local = PathBuf::from(config_name);
    let path = if local.exists() {
        local
    } else {
        workspace_dir()?.join(config_name)
    };

    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use toml::{map::Map, Value};

    use super::ApiConfig;

    fn parse(text: &str) -> Map<String, Value> {
        toml::from_str::<Map<String, Value>>(text).unwrap()
    }

    #[test]
    fn test_from_config_with_defaults() {
        // Arrange
        let config = parse(
            r#"
            [api]
            base_url = "https://jsonplaceholder.typicode.com"
            "#,
        );

        // Act
        let api = ApiConfig::from_config(&config, None).unwrap();

        // Assert
        assert_eq!(api.timeout, Duration::from_secs(10));
        assert_eq!(api.user_agent, "blog-browser");
        assert_eq!(
            api.collection_url("posts"),
            "https://jsonplaceholder.typicode.com/posts"
        );
    }

    #[test]
    fn test_override_wins_over_file() {
        // Arrange
        let config = parse(
            r#"
            [api]
            base_url = "https://example.com"
            timeout_secs = 3
            user_agent = "tester"
            "#,
        );

        // Act
        let api = ApiConfig::from_config(
            &config,
            Some("http://127.0.0.1:8080/api/".to_string()),
        )
        .unwrap();

        // Assert
        assert_eq!(api.timeout, Duration::from_secs(3));
        assert_eq!(api.user_agent, "tester");
        assert_eq!(
            api.collection_url("users"),
            "http://127.0.0.1:8080/api/users"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        // Arrange
        let config = parse(
            r#"
            [api]
            base_url = "ftp://example.com"
            "#,
        );

        // Act
        let result = ApiConfig::from_config(&config, None);

        // Assert
        assert!(result.is_err());
        assert!(ApiConfig::new("not a url").is_err());
    }

    #[test]
    fn test_missing_api_table() {
        // Act
        let result = ApiConfig::from_config(&parse("[other]\n"), None);

        // Assert
        assert!(result.is_err());
    }
}
