use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};
use log::info;
use std::sync::Arc;

use super::AppState;
use crate::http::PageSource;

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Squeeze Sweep Finder</title></head>
<body>
<h1>Squeeze Sweep Finder</h1>
<p>Table-tennis 3-0 sweeps where the winner took every set 11-4, 11-4, 11-8 or wider.</p>
<p><a href="/fetch_matches">GET /fetch_matches</a> crawls the live results
and returns the matches as JSON.</p>
</body>
</html>
"#;

pub async fn index() -> impl IntoResponse {
    Html(INDEX_PAGE)
}

pub async fn fetch_matches<S: PageSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
    info!("Match crawl requested");
    let matches = state.finder.run().await;
    Json(matches)
}
