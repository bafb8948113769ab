/// Build the URL of one listing page: `<base>/p.<page>`
pub fn build_listing_page_url(base_url: &str, page: usize) -> String {
    format!("{}/p.{}", trim_trailing_slash(base_url), page)
}

fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
