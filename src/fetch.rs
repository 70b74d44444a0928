use crate::error::{CalendarError, Result};
use crate::model::{ApiErrorBody, ContributionsResponse};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://github-contributions-api.jogruber.de/v4/";

/// Who and which years to ask the data source for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchQuery {
    pub username: String,
    pub years: Vec<i32>,
    pub rolling: bool,
}

impl FetchQuery {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            years: Vec::new(),
            rolling: false,
        }
    }

    pub fn with_years(mut self, years: Vec<i32>) -> Self {
        self.years = years;
        self
    }

    pub fn rolling(mut self, rolling: bool) -> Self {
        self.rolling = rolling;
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        if self.rolling {
            return vec![("y", "last".to_string())];
        }
        self.years.iter().map(|y| ("y", y.to_string())).collect()
    }
}

pub trait ContributionSource {
    fn fetch(&self, query: &FetchQuery) -> Result<ContributionsResponse>;
}

pub struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { client, base_url })
    }

    pub fn user_url(&self, username: &str) -> String {
        format!("{}{}", self.base_url, username.trim())
    }
}

impl ContributionSource for ApiClient {
    fn fetch(&self, query: &FetchQuery) -> Result<ContributionsResponse> {
        if query.username.trim().is_empty() {
            return Err(CalendarError::Other("username must not be empty".to_string()));
        }

        let url = self.user_url(&query.username);
        log::info!("fetching contributions from {url}");

        let resp = self.client.get(&url).query(&query.query_pairs()).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            log::warn!("contributions API returned {status}: {message}");
            return Err(CalendarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let mut data: ContributionsResponse = serde_json::from_str(&body)?;
        data.normalize();
        log::debug!(
            "received {} contributions across {} year summaries",
            data.contributions.len(),
            data.years.len()
        );
        Ok(data)
    }
}

/// Reads a previously saved API response from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ContributionSource for FileSource {
    fn fetch(&self, query: &FetchQuery) -> Result<ContributionsResponse> {
        log::info!(
            "reading contributions for {} from {}",
            query.username,
            self.path.display()
        );
        let raw = std::fs::read_to_string(&self.path)?;
        let mut data: ContributionsResponse = serde_json::from_str(&raw)?;
        data.normalize();
        Ok(data)
    }
}

/// Fetch with an optional spinner on stderr.
pub fn fetch_with_progress(
    source: &dyn ContributionSource,
    query: &FetchQuery,
    show_progress: bool,
) -> Result<ContributionsResponse> {
    if !show_progress {
        return source.fetch(query);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching contributions for {}", query.username));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = source.fetch(query);
    spinner.finish_and_clear();
    result
}
