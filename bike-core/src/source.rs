//! Dataset locations and the remote Data Loader.
//!
//! Embedded and file sources are read synchronously and work on every
//! target. Remote sources need the `api` feature, which pulls in
//! `reqwest` and `tokio` and is therefore off for the WASM dashboard.

use crate::error::LoadError;
use crate::loader::{parse_daily, parse_hourly};
use crate::record::{HourlyRecord, RentalRecord};
use std::borrow::Cow;
use std::path::PathBuf;

#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};
#[cfg(feature = "api")]
use std::collections::HashMap;
#[cfg(feature = "api")]
use std::time::Duration;

/// Public copy of the daily dataset.
pub const DEFAULT_DAY_URL: &str =
    "https://raw.githubusercontent.com/ailhama/proyekanalisisdata/main/dashboard/day2.csv";

/// Public copy of the hourly dataset.
pub const DEFAULT_HOUR_URL: &str =
    "https://raw.githubusercontent.com/ailhama/proyekanalisisdata/main/dashboard/hour2.csv";

/// Where a dataset's CSV text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// CSV compiled into the binary
    Embedded(&'static str),
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }

    /// Human-readable location, used in errors and logs.
    pub fn location(&self) -> String {
        match self {
            DataSource::Embedded(_) => "<embedded>".to_string(),
            DataSource::File(path) => path.display().to_string(),
            DataSource::Url(url) => url.clone(),
        }
    }

    /// Read an embedded or file source.
    ///
    /// URL sources cannot be read synchronously and fail with
    /// [`LoadError::Unreachable`].
    pub fn read_local(&self) -> Result<Cow<'static, str>, LoadError> {
        match self {
            DataSource::Embedded(text) => Ok(Cow::Borrowed(*text)),
            DataSource::File(path) => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                }),
            DataSource::Url(url) => Err(LoadError::Unreachable {
                location: url.clone(),
                reason: "remote sources require the loader".to_string(),
            }),
        }
    }

    pub fn load_daily_local(&self) -> Result<Vec<RentalRecord>, LoadError> {
        parse_daily(&self.read_local()?)
    }

    pub fn load_hourly_local(&self) -> Result<Vec<HourlyRecord>, LoadError> {
        parse_hourly(&self.read_local()?)
    }
}

/// Loads datasets from any [`DataSource`], fetching URLs over HTTP.
///
/// Response bodies are memoized per URL for the lifetime of the loader, so
/// repeated loads of the same dataset do not re-fetch.
#[cfg(feature = "api")]
pub struct Loader {
    client: Client,
    cache: HashMap<String, String>,
    max_tries: u32,
    initial_backoff: Duration,
}

#[cfg(feature = "api")]
impl Loader {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            cache: HashMap::new(),
            max_tries: 3,
            initial_backoff: Duration::from_millis(1000),
        }
    }

    pub async fn load_daily(&mut self, source: &DataSource) -> Result<Vec<RentalRecord>, LoadError> {
        let text = self.text(source).await?;
        parse_daily(&text)
    }

    pub async fn load_hourly(&mut self, source: &DataSource) -> Result<Vec<HourlyRecord>, LoadError> {
        let text = self.text(source).await?;
        parse_hourly(&text)
    }

    /// The raw CSV text of a source.
    pub async fn text(&mut self, source: &DataSource) -> Result<String, LoadError> {
        match source {
            DataSource::Url(url) => {
                if let Some(body) = self.cache.get(url) {
                    info!("loader: Using cached body for {}", url);
                    return Ok(body.clone());
                }
                let body = self.fetch(url).await?;
                self.cache.insert(url.clone(), body.clone());
                Ok(body)
            }
            local => local.read_local().map(Cow::into_owned),
        }
    }

    /// GET a URL with retry and exponential backoff.
    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let mut sleep_millis = self.initial_backoff;
        let mut last_reason = String::new();

        for attempt in 1..=self.max_tries {
            match self.client.get(url).send().await {
                Ok(response) => {
                    if response.status() != StatusCode::OK {
                        last_reason = format!("bad response status {}", response.status());
                    } else {
                        match response.text().await {
                            Ok(body) if body.trim().is_empty() => {
                                last_reason = "empty response".to_string();
                            }
                            Ok(body) => {
                                info!("loader: Fetched {} bytes from {}", body.len(), url);
                                return Ok(body);
                            }
                            Err(e) => {
                                last_reason = format!("failed to read response body: {}", e);
                            }
                        }
                    }
                }
                Err(e) => {
                    last_reason = format!("request failed: {}", e);
                }
            }
            warn!(
                "Attempt {}/{}: {} for {}",
                attempt, self.max_tries, last_reason, url
            );

            if attempt < self.max_tries {
                info!(
                    "Sleeping for {} milliseconds before retry for {}",
                    sleep_millis.as_millis(),
                    url
                );
                tokio::time::sleep(sleep_millis).await;
                sleep_millis *= 2;
            }
        }

        warn!("All attempts failed for {}", url);
        Err(LoadError::Unreachable {
            location: url.to_string(),
            reason: last_reason,
        })
    }
}
