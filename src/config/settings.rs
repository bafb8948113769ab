#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    /// Site origin that relative detail links are resolved against
    pub base_url: String,
    /// Listing root; page `n` lives at `<listing_url>/p.<n>`
    pub listing_url: String,
    /// Safety cap on listing pages; `None` crawls until the first empty page
    pub max_pages: Option<usize>,
    pub detail_concurrency: usize,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 250,
            user_agent: "SqueezeSweepFinder/1.0",
            timeout_secs: 30,
            base_url: "https://pt.betsapi.com".to_string(),
            listing_url: "https://pt.betsapi.com/ce/table-tennis".to_string(),
            max_pages: Some(50),
            detail_concurrency: 4,
        }
    }
}

/// Thresholds of the squeeze-sweep pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSettings {
    /// Points the winner must score in every set
    pub winner_points: u32,
    /// Highest loser score allowed in sets 1, 2 and 3
    pub loser_ceilings: [u32; 3],
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            winner_points: 11,
            loser_ceilings: [4, 4, 8],
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub pattern: PatternSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
            pattern: PatternSettings::default(),
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.scraper.max_pages = max_pages;
        self
    }

    pub fn with_detail_concurrency(mut self, concurrency: usize) -> Self {
        self.scraper.detail_concurrency = concurrency.max(1);
        self
    }

    pub fn with_listing_url(mut self, listing_url: impl Into<String>) -> Self {
        self.scraper.listing_url = listing_url.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.scraper.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_betsapi() {
        let config = AppConfig::new();
        assert_eq!(config.scraper.base_url, "https://pt.betsapi.com");
        assert!(config.scraper.listing_url.starts_with(&config.scraper.base_url));
        assert_eq!(config.scraper.max_pages, Some(50));
        assert_eq!(config.pattern.loser_ceilings, [4, 4, 8]);
    }

    #[test]
    fn test_concurrency_never_zero() {
        let config = AppConfig::new().with_detail_concurrency(0);
        assert_eq!(config.scraper.detail_concurrency, 1);
    }
}
