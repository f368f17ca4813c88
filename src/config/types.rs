use serde::Deserialize;

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// Main configuration structure for ptt-trawl
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub forum: ForumConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which board to harvest and how deep
#[derive(Debug, Clone, Deserialize)]
pub struct ForumConfig {
    /// Scheme and host of the forum, without trailing slash
    #[serde(rename = "base-host")]
    pub base_host: String,

    /// Board name as it appears in `/bbs/<board>/index.html`
    pub board: String,

    /// Number of listing pages to walk, newest first
    #[serde(rename = "page-count", default = "default_page_count")]
    pub page_count: u32,
}

impl ForumConfig {
    /// Path of the board's newest listing page
    pub fn index_path(&self) -> String {
        format!("/bbs/{}/index.html", self.board)
    }

    /// Absolute URL of the board's newest listing page
    pub fn index_url(&self) -> String {
        format!("{}{}", self.base_host, self.index_path())
    }

    /// Absolute URL of listing page `page_number`
    pub fn listing_url(&self, page_number: u32) -> String {
        format!("{}/bbs/{}/index{}.html", self.base_host, self.board, page_number)
    }

    /// Absolute URL of a post given its site-relative link
    pub fn detail_url(&self, relative_link: &str) -> String {
        format!("{}{}", self.base_host, relative_link)
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Optional proxy URL applied to every scheme
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            proxy: None,
        }
    }
}

/// Crawler scheduling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of in-flight fetches; 1 fetches strictly one at a time
    #[serde(rename = "max-concurrent-fetches", default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the plain-text progress backlog
    #[serde(rename = "backlog-path", default = "default_backlog_path")]
    pub backlog_path: String,

    /// Empty the backlog before a run starts
    #[serde(rename = "truncate-backlog", default = "default_truncate_backlog")]
    pub truncate_backlog: bool,

    /// Where to write harvested posts as JSON
    #[serde(rename = "results-path", default)]
    pub results_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            backlog_path: default_backlog_path(),
            truncate_backlog: default_truncate_backlog(),
            results_path: None,
        }
    }
}

fn default_page_count() -> u32 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_concurrent_fetches() -> u32 {
    1
}

fn default_backlog_path() -> String {
    "backlog.txt".to_string()
}

fn default_truncate_backlog() -> bool {
    true
}
