// src/extractors/turnout.rs
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Leading numeric cells of the summary table that repeat data already known
/// from the district page (code, name and a duplicate count).
pub const TURNOUT_SKIPPED_CELLS: usize = 3;

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table").expect("Failed to compile TABLE_SELECTOR")
});
// Column labels of the summary table span two header rows.
static HEADER_CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"th[rowspan="2"]"#).expect("Failed to compile HEADER_CELL_SELECTOR")
});
static NUMERIC_CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td.cislo").expect("Failed to compile NUMERIC_CELL_SELECTOR")
});

/// Turnout summary as read from one municipality page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnoutSummary {
    pub labels: Vec<String>,
    pub values: Vec<String>,
}

/// Reads the turnout summary from the first table of a municipality page.
/// Returns `None` when the page has no table at all.
pub fn extract_turnout(document: &Html) -> Option<TurnoutSummary> {
    let table = document.select(&TABLE_SELECTOR).next()?;

    let labels = table
        .select(&HEADER_CELL_SELECTOR)
        .map(|th| th.text().collect::<String>().trim().to_string())
        .collect();
    let values = table
        .select(&NUMERIC_CELL_SELECTOR)
        .skip(TURNOUT_SKIPPED_CELLS)
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect();

    Some(TurnoutSummary { labels, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_PAGE: &str = r#"
        <html><body>
        <table id="ps311_t1">
          <tr>
            <th rowspan="3">Okrsky</th>
            <th rowspan="2">Voliči<br/>v seznamu</th>
            <th rowspan="2">Vydané<br/>obálky</th>
            <th rowspan="2">Volební<br/>účast v %</th>
          </tr>
          <tr><th>celkem</th></tr>
          <tr>
            <td class="cislo">1</td><td class="cislo">1</td><td class="cislo">100,00</td>
            <td class="cislo">205</td><td class="cislo">145</td><td class="cislo">70,73</td>
          </tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extract_turnout() {
        let doc = Html::parse_document(UNIT_PAGE);
        let summary = extract_turnout(&doc).unwrap();

        assert_eq!(summary.labels, vec!["Voličiv seznamu", "Vydanéobálky", "Volebníúčast v %"]);
        assert_eq!(summary.values, vec!["205", "145", "70,73"]);
    }

    #[test]
    fn test_page_without_table() {
        let doc = Html::parse_document("<html><body><p>Stránka nenalezena</p></body></html>");
        assert_eq!(extract_turnout(&doc), None);
    }
}
