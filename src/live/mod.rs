mod fallback;

use async_trait::async_trait;
use chrono::{ DateTime, Utc };
use futures::future::join_all;
use log::{ info, warn };
use once_cell::sync::Lazy;
use reqwest::Client as HttpClient;
use scraper::{ Html, Selector };
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::cli::Args;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const MIN_FRAGMENT_CHARS: usize = 20;

static BLOCK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p, h1, h2, h3, li").expect("static block selector is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveSite {
    Casa,
    GlobalDroneSolutions,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site: LiveSite,
    pub label: String,
    pub url: Url,
    pub fallback: &'static str,
}

impl SiteConfig {
    pub fn casa(url: Url) -> Self {
        Self {
            site: LiveSite::Casa,
            label: "CASA".to_string(),
            url,
            fallback: fallback::CASA,
        }
    }

    pub fn global_drone_solutions(url: Url) -> Self {
        Self {
            site: LiveSite::GlobalDroneSolutions,
            label: "Global Drone Solutions".to_string(),
            url,
            fallback: fallback::GLOBAL_DRONE_SOLUTIONS,
        }
    }
}

/// One fetch per configured site. `content` is never empty: on failure it
/// holds the site's static fallback body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveSourceResult {
    pub site: LiveSite,
    pub source: String,
    pub url: String,
    pub content: String,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveSnapshot {
    pub results: Vec<LiveSourceResult>,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait LiveSource: Send + Sync {
    async fn fetch_all(&self) -> LiveSnapshot;
}

pub struct LiveSourceAdapter {
    http: HttpClient,
    sites: Vec<SiteConfig>,
}

impl LiveSourceAdapter {
    pub fn new(sites: Vec<SiteConfig>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder().timeout(timeout).user_agent(USER_AGENT).build()?;
        Ok(Self { http, sites })
    }

    pub fn from_args(args: &Args) -> Result<Self, reqwest::Error> {
        let sites = vec![
            SiteConfig::casa(args.casa_url.clone()),
            SiteConfig::global_drone_solutions(args.gdrone_url.clone())
        ];
        Self::new(sites, Duration::from_secs(args.live_fetch_timeout))
    }

    pub fn site(&self, site: LiveSite) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.site == site)
    }

    pub async fn fetch_site(&self, config: &SiteConfig) -> LiveSourceResult {
        match self.download(&config.url).await {
            Ok(html) => {
                let content = extract_text(&html);
                info!("Scraped {} ({} chars)", config.label, content.chars().count());
                LiveSourceResult {
                    site: config.site,
                    source: config.label.clone(),
                    url: config.url.to_string(),
                    content,
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Error scraping {}: {}", config.label, e);
                LiveSourceResult {
                    site: config.site,
                    source: config.label.clone(),
                    url: config.url.to_string(),
                    content: config.fallback.to_string(),
                    success: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn download(&self, url: &Url) -> Result<String, reqwest::Error> {
        self.http.get(url.clone()).send().await?.error_for_status()?.text().await
    }
}

#[async_trait]
impl LiveSource for LiveSourceAdapter {
    async fn fetch_all(&self) -> LiveSnapshot {
        let results = join_all(self.sites.iter().map(|site| self.fetch_site(site))).await;
        LiveSnapshot {
            results,
            timestamp: Utc::now(),
        }
    }
}

/// Visible text of paragraphs, headings and list items, one fragment per
/// line. Fragments of 20 characters or fewer are dropped.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&BLOCK_SELECTOR)
        .map(|el| el.text().collect::<String>())
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| text.chars().count() > MIN_FRAGMENT_CHARS)
        .collect::<Vec<_>>()
        .join("\n")
}
