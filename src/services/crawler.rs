use anyhow::Result;
use chrono::{Datelike, Local};
use futures_util::stream::{self, StreamExt};
use log::{info, warn};

use crate::classifier::SweepClassifier;
use crate::config::AppConfig;
use crate::domain::{CandidateMatch, ClassifiedMatch, CrawlProgress};
use crate::errors::FetchError;
use crate::http::PageSource;
use crate::pagination::{PageIterator, PaginationConfig, build_listing_page_url};
use crate::parsers::{DetailParser, ListingParser};

/// Crawls the listing and returns every squeeze sweep it can find.
///
/// Holds no per-crawl state, so one instance can serve concurrent requests.
pub struct SweepFinder<S> {
    source: S,
    listing_url: String,
    pagination: PaginationConfig,
    detail_concurrency: usize,
    listing_parser: ListingParser,
    detail_parser: DetailParser,
    classifier: SweepClassifier,
}

impl<S: PageSource> SweepFinder<S> {
    pub fn new(source: S, config: &AppConfig) -> Result<Self> {
        let scraper = &config.scraper;

        Ok(Self {
            source,
            listing_url: scraper.listing_url.clone(),
            pagination: PaginationConfig::from(scraper.max_pages),
            detail_concurrency: scraper.detail_concurrency.max(1),
            listing_parser: ListingParser::new(&scraper.base_url)?,
            detail_parser: DetailParser::new()?,
            classifier: SweepClassifier::new(config.pattern.clone()),
        })
    }

    /// Page through the listing until a page yields no candidates (or the cap is hit).
    ///
    /// Never fails: unreachable pages and detail pages only shrink the result.
    pub async fn run(&self) -> Vec<ClassifiedMatch> {
        let year = Local::now().year();
        let mut progress = CrawlProgress::new();
        let mut found = Vec::new();
        let mut reached_empty_page = false;

        for page in PageIterator::new(self.pagination) {
            let candidates = self.fetch_candidates(page, year).await;
            progress.record_page(candidates.len());

            if candidates.is_empty() {
                info!("No more matches found on page {}", page);
                reached_empty_page = true;
                break;
            }

            let page_matches = self.classify_candidates(candidates, &mut progress).await;
            found.extend(page_matches);
        }

        if !reached_empty_page {
            warn!("Stopping after {} pages: page cap reached", progress.pages());
        }

        progress.log_summary();
        log_found(&found);
        found
    }

    // --- Listing Stage ---

    async fn fetch_candidates(&self, page: usize, year: i32) -> Vec<CandidateMatch> {
        let url = build_listing_page_url(&self.listing_url, page);
        info!("Fetching matches from page {}...", page);

        let html = match self.source.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                match e.status() {
                    Some(status) => warn!("Failed to retrieve page {}: {}", page, status),
                    None => warn!("Failed to retrieve page {}: {}", page, e),
                }
                return Vec::new();
            }
        };

        let candidates = self.listing_parser.parse_listing(&html, year);
        info!("  → {} sweep candidates on page {}", candidates.len(), page);
        candidates
    }

    // --- Detail Stage ---

    /// Fetch detail pages with bounded concurrency, keeping discovery order.
    async fn classify_candidates(
        &self,
        candidates: Vec<CandidateMatch>,
        progress: &mut CrawlProgress,
    ) -> Vec<ClassifiedMatch> {
        let linked = candidates.into_iter().filter_map(|candidate| {
            let link = candidate.detail_link.clone()?;
            Some((link, candidate))
        });

        let outcomes: Vec<Result<ClassifiedMatch, FetchError>> = stream::iter(linked)
            .map(|(link, candidate)| self.classify_candidate(link, candidate))
            .buffered(self.detail_concurrency)
            .collect()
            .await;

        let mut matches = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(classified) => {
                    progress.record_detail_fetched();
                    if classified.matched {
                        progress.record_match();
                        log_match(&classified);
                        matches.push(classified);
                    }
                }
                Err(_) => progress.record_detail_failed(),
            }
        }
        matches
    }

    async fn classify_candidate(
        &self,
        link: String,
        candidate: CandidateMatch,
    ) -> Result<ClassifiedMatch, FetchError> {
        let html = self.source.fetch(&link).await.inspect_err(|e| {
            warn!("Failed to retrieve set results from {}: {}", link, e);
        })?;

        let set_scores = self.detail_parser.parse_detail(&html);
        let matched = self.classifier.classify(&set_scores);

        Ok(ClassifiedMatch::new(candidate, set_scores, matched))
    }
}

fn log_match(found: &ClassifiedMatch) {
    info!(
        "Match found that matches the pattern: {} on {}",
        found.candidate.competition,
        found.candidate.display_time()
    );
    info!("Players: {}", found.candidate.players);
}

fn log_found(found: &[ClassifiedMatch]) {
    if found.is_empty() {
        info!("No matches found that meet the criteria.");
        return;
    }

    info!("Matches found that meet the criteria:");
    for classified in found {
        info!(
            "  {} | {} | {} | {}",
            classified.candidate.competition,
            classified.candidate.display_time(),
            classified.candidate.players,
            classified.candidate.final_score
        );
    }
}
