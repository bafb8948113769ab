use log::info;

/// Running totals for one crawl
#[derive(Debug, Default)]
pub struct CrawlProgress {
    pages: usize,
    candidates: usize,
    details_fetched: usize,
    details_failed: usize,
    matched: usize,
}

impl CrawlProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_page(&mut self, candidates: usize) {
        self.pages += 1;
        self.candidates += candidates;
    }

    pub fn record_detail_fetched(&mut self) {
        self.details_fetched += 1;
        self.log_milestone();
    }

    pub fn record_detail_failed(&mut self) {
        self.details_failed += 1;
        self.log_milestone();
    }

    pub fn record_match(&mut self) {
        self.matched += 1;
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn details_attempted(&self) -> usize {
        self.details_fetched + self.details_failed
    }

    pub fn log_summary(&self) {
        info!(
            "Crawl finished: {} pages, {} candidates, {} details ({} failed), {} matched",
            self.pages,
            self.candidates,
            self.details_attempted(),
            self.details_failed,
            self.matched
        );
    }

    fn log_milestone(&self) {
        let attempted = self.details_attempted();
        if is_milestone(attempted) {
            info!(
                "  → Details: {} fetched, {} failed, {} matched so far",
                self.details_fetched, self.details_failed, self.matched
            );
        }
    }
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}
