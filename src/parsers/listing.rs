use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, info};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use super::{cell_text, compile_selector};
use crate::domain::{CandidateMatch, FinalScore};

const MIN_CELLS: usize = 6;
const COMPETITION_CELL: usize = 0;
const DATE_TIME_CELL: usize = 1;
const PLAYERS_CELL: usize = 2;
const SCORE_CELL: usize = 4;

/// Extracts sweep candidates from one page of the results table
pub struct ListingParser {
    base_url: Url,
    table_selector: Selector,
    row_selector: Selector,
    cell_selector: Selector,
    link_selector: Selector,
}

impl ListingParser {
    /// `base_url` is the site origin relative score links are resolved against.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid base url: {}", base_url))?;

        Ok(Self {
            base_url,
            table_selector: compile_selector("table")?,
            row_selector: compile_selector("tr")?,
            cell_selector: compile_selector("td")?,
            link_selector: compile_selector("a")?,
        })
    }

    /// Parse one listing page. Dates carry no year upstream, so `year` is applied.
    pub fn parse_listing(&self, html: &str, year: i32) -> Vec<CandidateMatch> {
        let document = Html::parse_document(html);

        let Some(table) = document.select(&self.table_selector).next() else {
            info!("No results table found on listing page");
            return Vec::new();
        };

        table
            .select(&self.row_selector)
            .filter_map(|row| self.parse_row(row, year))
            .collect()
    }

    // --- Row Extraction ---

    fn parse_row(&self, row: ElementRef<'_>, year: i32) -> Option<CandidateMatch> {
        let cells: Vec<ElementRef<'_>> = row.select(&self.cell_selector).collect();
        if cells.len() < MIN_CELLS {
            return None;
        }

        let competition = cell_text(&cells[COMPETITION_CELL]);
        let date_time = cell_text(&cells[DATE_TIME_CELL]);
        let players = cell_text(&cells[PLAYERS_CELL]);
        let (score_text, detail_link) = self.extract_score(&cells[SCORE_CELL]);

        let final_score = FinalScore::parse(&score_text)?;

        let Some(scheduled_at) = parse_date_time(&date_time, year) else {
            debug!("Dropping {} ({}): unparseable date '{}'", players, score_text, date_time);
            return None;
        };

        Some(CandidateMatch {
            competition,
            scheduled_at,
            players,
            final_score,
            detail_link,
        })
    }

    /// Score text plus the detail link when the score is rendered as one
    fn extract_score(&self, cell: &ElementRef<'_>) -> (String, Option<String>) {
        match cell.select(&self.link_selector).next() {
            Some(link) => {
                let href = link.value().attr("href");
                (cell_text(&link), self.resolve_link(href))
            }
            None => (cell_text(cell), None),
        }
    }

    fn resolve_link(&self, href: Option<&str>) -> Option<String> {
        let href = href?.trim();
        if href.is_empty() {
            return None;
        }
        self.base_url.join(href).ok().map(String::from)
    }
}

/// `DD/MM HH:MM` in the given year. Date and time must be separated by whitespace.
pub fn parse_date_time(text: &str, year: i32) -> Option<NaiveDateTime> {
    let mut parts = text.split_whitespace();
    let (day_month, time) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let date = NaiveDate::parse_from_str(&format!("{}/{}", year, day_month), "%Y/%d/%m").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}
