use anyhow::{Context, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::{cell_text, compile_selector};
use crate::domain::SetScorePair;

/// Extracts per-player set scores from a match detail page
pub struct DetailParser {
    card_selector: Selector,
    row_selector: Selector,
    cell_selector: Selector,
    points_regex: Regex,
}

impl DetailParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            card_selector: compile_selector("div.card")?,
            row_selector: compile_selector("tr")?,
            cell_selector: compile_selector("td")?,
            points_regex: Self::compile_regex()?,
        })
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^[0-9]+$").context("Failed to compile set points regex")
    }

    /// One pair per qualifying row across all cards, in document order.
    /// Cardinality is left to the classifier.
    pub fn parse_detail(&self, html: &str) -> Vec<SetScorePair> {
        let document = Html::parse_document(html);

        document
            .select(&self.card_selector)
            .flat_map(|card| card.select(&self.row_selector))
            .filter_map(|row| self.parse_row(row))
            .collect()
    }

    fn parse_row(&self, row: ElementRef<'_>) -> Option<SetScorePair> {
        let cells: Vec<ElementRef<'_>> = row.select(&self.cell_selector).collect();
        let (name_cell, score_cells) = cells.split_first()?;
        if score_cells.is_empty() {
            return None;
        }

        let points = score_cells
            .iter()
            .filter_map(|cell| self.parse_points(&cell_text(cell)))
            .collect();

        Some(SetScorePair::new(cell_text(name_cell), points))
    }

    /// Pure non-negative integer literals only
    fn parse_points(&self, text: &str) -> Option<u32> {
        if !self.points_regex.is_match(text) {
            return None;
        }
        text.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> DetailParser {
        DetailParser::new().unwrap()
    }

    fn card(rows: &str) -> String {
        format!(r#"<div class="card mb-3"><table>{}</table></div>"#, rows)
    }

    #[test]
    fn test_extracts_both_players() {
        let html = card(
            "<tr><th>Player</th><th>1</th><th>2</th><th>3</th></tr>\
             <tr><td>Ivan Petrov</td><td>11</td><td>11</td><td>11</td></tr>\
             <tr><td>Oleg Sidorov</td><td>4</td><td>2</td><td>8</td></tr>",
        );
        let pairs = parser().parse_detail(&html);

        assert_eq!(
            pairs,
            vec![
                SetScorePair::new("Ivan Petrov", vec![11, 11, 11]),
                SetScorePair::new("Oleg Sidorov", vec![4, 2, 8]),
            ]
        );
    }

    #[test]
    fn test_non_numeric_cells_are_skipped() {
        let html = card(
            "<tr><td>Ivan Petrov</td><td>N/A</td><td> 11 </td><td>-3</td><td>11</td></tr>",
        );
        let pairs = parser().parse_detail(&html);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].points, vec![11, 11]);
    }

    #[test]
    fn test_single_cell_rows_are_ignored() {
        let html = card("<tr><td>Set scores</td></tr><tr><td>A</td><td>7</td></tr>");
        let pairs = parser().parse_detail(&html);

        assert_eq!(pairs, vec![SetScorePair::new("A", vec![7])]);
    }

    #[test]
    fn test_row_with_only_text_cells_keeps_empty_points() {
        let html = card("<tr><td>A</td><td>walkover</td></tr>");
        let pairs = parser().parse_detail(&html);

        assert_eq!(pairs, vec![SetScorePair::new("A", vec![])]);
    }

    #[test]
    fn test_rows_accumulate_across_cards() {
        let html = format!(
            "{}<div class=\"other\"><table><tr><td>X</td><td>1</td></tr></table></div>{}",
            card("<tr><td>A</td><td>11</td></tr>"),
            card("<tr><td>B</td><td>5</td></tr><tr><td>C</td><td>9</td></tr>"),
        );
        let names: Vec<String> = parser()
            .parse_detail(&html)
            .into_iter()
            .map(|pair| pair.player_name)
            .collect();

        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_page_without_cards_is_empty() {
        let html = "<table><tr><td>A</td><td>11</td></tr></table>";
        assert!(parser().parse_detail(html).is_empty());
    }

    #[test]
    fn test_overflowing_number_is_skipped() {
        assert_eq!(parser().parse_points("99999999999"), None);
        assert_eq!(parser().parse_points("007"), Some(7));
        assert_eq!(parser().parse_points("１１"), None);
    }
}
