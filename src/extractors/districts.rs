// src/extractors/districts.rs
use crate::volby::models::DistrictIndex;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

// Shape of a district listing row on the landing page.
const MIN_ROW_CELLS: usize = 2;
const MIN_ROW_LINKS: usize = 3;
const NAME_CELL: usize = 1;
const DISTRICT_LINK: usize = 2;

static TABLE_ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table tr").expect("Failed to compile TABLE_ROW_SELECTOR")
});
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td").expect("Failed to compile CELL_SELECTOR")
});
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a").expect("Failed to compile LINK_SELECTOR")
});

/// Builds the district index from the national landing page.
///
/// Rows that do not look like a district listing (too few cells or links,
/// empty name, link without `href`) are skipped.
pub fn build_district_index(document: &Html, base_url: &Url) -> DistrictIndex {
    let mut districts = DistrictIndex::new();

    for row in document.select(&TABLE_ROW_SELECTOR) {
        let cells: Vec<_> = row.select(&CELL_SELECTOR).collect();
        let links: Vec<_> = row.select(&LINK_SELECTOR).collect();
        if cells.len() < MIN_ROW_CELLS || links.len() < MIN_ROW_LINKS {
            continue;
        }

        let name = cells[NAME_CELL].text().collect::<String>();
        let name = name.trim();
        let Some(href) = links[DISTRICT_LINK].value().attr("href") else {
            continue;
        };
        if name.is_empty() || href.is_empty() {
            continue;
        }

        match base_url.join(href) {
            Ok(url) => {
                districts.insert(name.to_lowercase(), url.to_string());
            }
            Err(e) => tracing::debug!("Skipping district '{}' with bad link '{}': {}", name, href, e),
        }
    }

    tracing::debug!("Found {} districts on the landing page", districts.len());
    districts
}
