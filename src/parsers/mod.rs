//! Everything that knows about upstream markup lives here.
//!
//! The rest of the crate only sees [`CandidateMatch`](crate::domain::CandidateMatch)
//! and [`SetScorePair`](crate::domain::SetScorePair).

pub mod detail;
pub mod listing;

pub use detail::DetailParser;
pub use listing::ListingParser;

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Selector};

fn compile_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Failed to compile selector `{}`: {}", css, e))
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
