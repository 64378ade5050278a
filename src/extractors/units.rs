// src/extractors/units.rs
use crate::volby::models::{DistrictUnit, UnitIndex};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

/// Query parameter carrying the municipality code in unit links.
const UNIT_CODE_PARAM: &str = "xobec";

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("tr").expect("Failed to compile ROW_SELECTOR")
});
static UNIT_NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("td.overflow_name").expect("Failed to compile UNIT_NAME_SELECTOR")
});
static UNIT_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a[href]").expect("Failed to compile UNIT_LINK_SELECTOR")
});

/// Extracts every municipality listed on a district page.
pub fn extract_units(document: &Html, base_url: &Url) -> UnitIndex {
    let mut units = UnitIndex::new();

    for row in document.select(&ROW_SELECTOR) {
        let (Some(name_cell), Some(link)) = (
            row.select(&UNIT_NAME_SELECTOR).next(),
            row.select(&UNIT_LINK_SELECTOR).next(),
        ) else {
            continue;
        };

        let name = name_cell.text().collect::<String>().trim().to_string();
        let href = link.value().attr("href").unwrap_or_default();
        let url = match base_url.join(href) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Skipping unit '{}' with bad link '{}': {}", name, href, e);
                continue;
            }
        };
        let code = unit_code(&url);

        units.insert(DistrictUnit { name, url: url.to_string(), code });
    }

    tracing::debug!("Found {} district units", units.len());
    units
}

fn unit_code(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == UNIT_CODE_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISTRICT_PAGE: &str = r#"
        <html><body>
        <table class="table">
          <tr><th>číslo</th><th>název</th><th>Výběr okrsku</th></tr>
          <tr>
            <td class="cislo"><a href="ps311?xjazyk=CZ&amp;xkraj=12&amp;xobec=589268&amp;xvyber=7103">589268</a></td>
            <td class="overflow_name">Alojzov</td>
            <td class="center">X</td>
          </tr>
          <tr>
            <td class="cislo"><a href="ps311?xjazyk=CZ&amp;xkraj=12&amp;xvyber=7103">-</a></td>
            <td class="overflow_name">  Bedihošť </td>
          </tr>
          <tr><td class="overflow_name">Bez odkazu</td></tr>
          <tr><td><a href="ps311?xobec=1">Bez jména</a></td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extract_units() {
        let doc = Html::parse_document(DISTRICT_PAGE);
        let base = Url::parse("https://www.volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=12&xnumnuts=7103").unwrap();
        let units = extract_units(&doc, &base);

        assert_eq!(units.len(), 2);
        let mut units = units.iter();
        let alojzov = units.next().unwrap();
        assert_eq!(alojzov.name, "Alojzov");
        assert_eq!(
            alojzov.url,
            "https://www.volby.cz/pls/ps2017nss/ps311?xjazyk=CZ&xkraj=12&xobec=589268&xvyber=7103"
        );
        assert_eq!(alojzov.code.as_deref(), Some("589268"));

        let bedihost = units.next().unwrap();
        assert_eq!(bedihost.name, "Bedihošť");
        assert_eq!(bedihost.code, None);
    }
}
